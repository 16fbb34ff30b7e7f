/// Account service implementation
pub mod account_service;
/// Market data service implementation
pub mod market_service;
/// Trading service implementation
pub mod trading_service;

pub use account_service::AccountServiceImpl;
pub use market_service::MarketServiceImpl;
pub use trading_service::TradingServiceImpl;
