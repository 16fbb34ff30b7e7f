//! # CryptoSim Client
//!
//! Client library for the CryptoSim paper-trading REST API. It drives the
//! whole browser-equivalent session from Rust:
//!
//! - Fetches prices, the account, the portfolio and the transaction history
//!   over JSON/HTTP and keeps them on screen through a pluggable [`ViewPort`]
//! - Submits buy/sell orders and account resets, with local validation that
//!   never touches the network on bad input
//! - Polls prices in the background and patches the price table in place
//!
//! The controller only depends on the service traits and the [`ViewPort`]
//! trait, so the rendering target (terminal, native UI, web) and the
//! transport are both swappable.
//!
//! ```ignore
//! use cryptosim_client::application::controller::ViewController;
//! use cryptosim_client::config::Config;
//! use cryptosim_client::presentation::terminal::TerminalViewPort;
//!
//! let mut controller = ViewController::with_http_client(Config::new(), TerminalViewPort::new());
//! controller.refresh_all().await;
//! controller.submit_buy("XBT/USD", "0.5").await?;
//! ```
//!
//! [`ViewPort`]: crate::presentation::viewport::ViewPort

/// Application layer: controller, services, models and session state
pub mod application;
/// Client configuration loaded from the environment
pub mod config;
/// Global constants: endpoints, defaults and user-facing messages
pub mod constants;
/// Error types for the whole crate
pub mod error;
/// Commonly used types, re-exported for convenience
pub mod prelude;
/// Presentation layer: formatting, view models and rendering targets
pub mod presentation;
/// HTTP transport to the backend API
pub mod transport;
/// Small shared utilities (env parsing, logging setup)
pub mod utils;

/// Crate version, taken from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
pub fn version() -> &'static str {
    VERSION
}
