//! # CryptoSim Client Prelude
//!
//! Re-exports the types most callers need, so a single import covers the
//! common path:
//!
//! ```rust
//! use cryptosim_client::prelude::*;
//!
//! let config = Config::new();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::config::{Config, PollingConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Account service trait for account, portfolio and history operations
pub use crate::application::interfaces::AccountService;

/// Market data service trait for price lookups
pub use crate::application::interfaces::MarketDataService;

/// Trading service trait for buy/sell submission
pub use crate::application::interfaces::TradingService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Account service implementation
pub use crate::application::services::AccountServiceImpl;

/// Market data service implementation
pub use crate::application::services::MarketServiceImpl;

/// Trading service implementation
pub use crate::application::services::TradingServiceImpl;

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP client trait
pub use crate::transport::http_client::ApiHttpClient;

/// HTTP client implementation
pub use crate::transport::http_client::ApiHttpClientImpl;

// ============================================================================
// CONTROLLER AND STATE
// ============================================================================

/// The session controller
pub use crate::application::controller::{HttpViewController, ViewController};

/// Explicitly threaded session state
pub use crate::application::state::SessionState;

// ============================================================================
// MODELS
// ============================================================================

/// Wire models of the backend API
pub use crate::application::models::account::Account;
pub use crate::application::models::market::{PriceQuotes, split_pair};
pub use crate::application::models::portfolio::PortfolioEntry;
pub use crate::application::models::trade::{TradeRequest, TradeSide};
pub use crate::application::models::transaction::{Transaction, TransactionType};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Display formatting helpers
pub use crate::presentation::format::{
    Amount, format_crypto_quantity, format_currency, format_timestamp,
};

/// View models consumed by rendering targets
pub use crate::presentation::views::{
    AccountView, BadgeTone, PortfolioRow, PriceRow, SellOption, TableView, TransactionRow,
};

/// Rendering target abstraction and the terminal implementation
pub use crate::presentation::terminal::TerminalViewPort;
pub use crate::presentation::viewport::{Notice, ViewPort};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
