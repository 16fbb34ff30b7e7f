use crate::presentation::serialization::lenient_amount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a recorded transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Asset was bought
    Buy,
    /// Asset was sold
    Sell,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Buy => write!(f, "BUY"),
            TransactionType::Sell => write!(f, "SELL"),
        }
    }
}

/// One entry of the transaction history.
///
/// History is append-only from the client's perspective; the full ordered
/// list is re-fetched every time, newest first as the server delivers it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// When the transaction was booked, as the server formats it
    #[serde(rename = "transactionTimestamp")]
    pub transaction_timestamp: String,
    /// BUY or SELL
    #[serde(rename = "transactionType")]
    pub transaction_type: TransactionType,
    /// Symbol of the traded asset
    #[serde(rename = "assetSymbol")]
    pub asset_symbol: String,
    /// Quantity traded
    pub quantity: f64,
    /// Unit price at execution
    #[serde(rename = "pricePerUnit", with = "lenient_amount", default)]
    pub price_per_unit: Option<f64>,
    /// Total value of the transaction
    #[serde(rename = "totalTransactionValue", with = "lenient_amount", default)]
    pub total_transaction_value: Option<f64>,
    /// Profit or loss booked on a SELL; absent for BUY rows
    #[serde(rename = "realizedProfitLoss", with = "lenient_amount", default)]
    pub realized_profit_loss: Option<f64>,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}
