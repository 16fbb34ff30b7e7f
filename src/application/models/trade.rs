use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the market a trade submission targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    /// Buy with cash balance
    Buy,
    /// Sell a portfolio holding
    Sell,
}

impl TradeSide {
    /// API path the submission is posted to
    pub fn endpoint(&self) -> &'static str {
        match self {
            TradeSide::Buy => "/trade/buy",
            TradeSide::Sell => "/trade/sell",
        }
    }

    /// Past-tense verb for the success notification
    pub fn past_tense(&self) -> &'static str {
        match self {
            TradeSide::Buy => "bought",
            TradeSide::Sell => "sold",
        }
    }
}

/// A buy or sell order, constructed locally and posted to the backend.
///
/// Never stored; the resulting transaction comes back through the history
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeRequest {
    /// Account the trade is booked against
    #[serde(rename = "userIdentifier")]
    pub user_identifier: String,
    /// Symbol to trade, e.g. "XBT/USD"
    #[serde(rename = "assetSymbol")]
    pub asset_symbol: String,
    /// Strictly positive quantity
    pub quantity: f64,
}

impl TradeRequest {
    /// Creates a new trade request
    pub fn new(
        user_identifier: impl Into<String>,
        asset_symbol: impl Into<String>,
        quantity: f64,
    ) -> Self {
        Self {
            user_identifier: user_identifier.into(),
            asset_symbol: asset_symbol.into(),
            quantity,
        }
    }
}

impl fmt::Display for TradeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}
