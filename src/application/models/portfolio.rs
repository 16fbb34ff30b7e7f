use crate::presentation::serialization::lenient_amount;
use serde::{Deserialize, Serialize};

/// One holding in a user's portfolio.
///
/// Entries arrive in server order and are rendered as-is; the client does
/// not reorder or deduplicate them. Valuations are computed server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioEntry {
    /// Symbol of the held asset, e.g. "XBT/USD"
    #[serde(rename = "assetSymbol")]
    pub asset_symbol: String,
    /// Quantity held, never negative
    pub quantity: f64,
    /// Volume-weighted purchase price
    #[serde(rename = "averagePurchasePrice", with = "lenient_amount", default)]
    pub average_purchase_price: Option<f64>,
    /// Latest unit price known to the server; the literal string "N/A" on
    /// the wire when no quote is cached
    #[serde(rename = "currentPrice", with = "lenient_amount", default)]
    pub current_price: Option<f64>,
    /// Holding value at the latest price
    #[serde(rename = "currentMarketValue", with = "lenient_amount", default)]
    pub current_market_value: Option<f64>,
}
