/// Account operations: details, portfolio, transactions, reset
pub mod account;
/// Market data operations: price quotes
pub mod market;
/// Trading operations: buy and sell submission
pub mod trading;

pub use account::AccountService;
pub use market::MarketDataService;
pub use trading::TradingService;
