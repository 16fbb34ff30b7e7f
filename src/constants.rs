/// Path prefix every backend endpoint lives under
pub const API_PREFIX: &str = "/api";
/// Base URL used when `CRYPTOSIM_REST_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// User identifier the backend seeds on first start
pub const DEFAULT_USER_IDENTIFIER: &str = "default_user";
/// Seconds between background price polls
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
/// Timeout in seconds for REST requests
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;
/// How long a notification stays visible, in milliseconds.
///
/// Rendering targets that display transient notifications (toasts, banners)
/// should keep them on screen for this long before fading them out.
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 4000;
/// Quote currency assumed when a pair symbol carries no "/QUOTE" part
pub const DEFAULT_QUOTE_CURRENCY: &str = "USD";
/// User agent string identifying this client to the backend
pub const USER_AGENT: &str = "cryptosim-client/0.1.0";

/// Shown in the price table while the first fetch is in flight
pub const LOADING_PRICES: &str = "Loading prices...";
/// Shown in the portfolio table while the first fetch is in flight
pub const LOADING_PORTFOLIO: &str = "Loading portfolio...";
/// Shown in the transaction table while the first fetch is in flight
pub const LOADING_TRANSACTIONS: &str = "Loading transactions...";

/// Price table placeholder when the server answered without a price payload
pub const PRICES_UNAVAILABLE: &str = "Could not load prices.";
/// Price table placeholder when the price fetch failed outright
pub const PRICES_LOAD_FAILED: &str = "Failed to load prices.";
/// Price table placeholder for an empty price map
pub const NO_PRICES_AVAILABLE: &str = "No cryptocurrency prices available currently.";
/// Portfolio table placeholder when the user holds nothing
pub const PORTFOLIO_EMPTY: &str = "Your portfolio is empty.";
/// Portfolio table placeholder when the portfolio fetch failed
pub const PORTFOLIO_LOAD_FAILED: &str = "Failed to load portfolio.";
/// Transaction table placeholder when the history is empty
pub const TRANSACTIONS_EMPTY: &str = "No transactions yet.";
/// Transaction table placeholder when the history fetch failed
pub const TRANSACTIONS_LOAD_FAILED: &str = "Failed to load transaction history.";

/// Warning shown when a buy is submitted without a symbol or valid quantity
pub const BUY_VALIDATION_MESSAGE: &str =
    "Please select a cryptocurrency and enter a valid positive quantity to buy.";
/// Warning shown when a sell is submitted without a symbol or valid quantity
pub const SELL_VALIDATION_MESSAGE: &str =
    "Please select a cryptocurrency from your portfolio and enter a valid positive quantity to sell.";
/// Prompt shown before an account reset is sent to the backend
pub const RESET_CONFIRM_PROMPT: &str =
    "Are you sure you want to reset your account? This will restore your initial balance and clear your portfolio.";
/// Success notification after an account reset
pub const RESET_SUCCESS_MESSAGE: &str = "Account reset successfully!";

/// Neutral first entry of the buy/sell symbol selectors
pub const SYMBOL_SELECT_PLACEHOLDER: &str = "Select Crypto";
/// Marker rendered for the account identifier when the account fetch failed
pub const ACCOUNT_ERROR_MARKER: &str = "error";
/// Text rendered for any value that is missing or not a number
pub const NOT_AVAILABLE: &str = "N/A";
