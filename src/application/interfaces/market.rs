use crate::application::models::market::PriceQuotes;
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for market data lookups.
///
/// `Ok(None)` means the backend answered successfully but without a JSON
/// payload; callers treat it as "no data" rather than as a failure.
#[async_trait]
pub trait MarketDataService: Send + Sync {
    /// Fetches the latest price for every subscribed trading pair.
    ///
    /// An empty map is a valid answer: it means no pair is currently quoted.
    async fn get_prices(&self) -> Result<Option<PriceQuotes>, AppError>;

    /// Fetches the latest price for a single pair symbol (e.g. "XBT/USD").
    ///
    /// The backend answers 404 for unknown symbols, which surfaces as an
    /// [`AppError::Http`] like any other non-2xx status.
    async fn get_price(&self, symbol: &str) -> Result<Option<f64>, AppError>;
}
