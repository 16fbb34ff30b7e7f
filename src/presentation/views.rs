//! Renderer-agnostic view models.
//!
//! The controller turns raw payloads into these structures; rendering
//! targets only ever consume them. All formatting happens here so every
//! target shows identical text.

use crate::application::models::market::{PriceQuotes, split_pair};
use crate::application::models::portfolio::PortfolioEntry;
use crate::application::models::transaction::{Transaction, TransactionType};
use crate::constants::NOT_AVAILABLE;
use crate::presentation::format::{format_crypto_quantity, format_currency, format_timestamp};

/// Visual weight of a badge-style cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// Positive outcome (profit, buy)
    Success,
    /// Negative outcome (loss, sell)
    Danger,
    /// No signal either way
    Neutral,
}

/// Content of one tabular display region.
///
/// Every table view is either still loading, replaced wholesale by a
/// placeholder message, or a list of fully formatted rows.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView<R> {
    /// Initial state, nothing fetched yet
    Loading(String),
    /// No rows to show; the message explains why
    Placeholder(String),
    /// Formatted rows, in display order
    Rows(Vec<R>),
}

impl<R> TableView<R> {
    /// Whether this view currently displays data rows
    pub fn has_rows(&self) -> bool {
        matches!(self, TableView::Rows(rows) if !rows.is_empty())
    }
}

/// One row of the price table
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    /// Full trading pair symbol, e.g. "XBT/USD"
    pub symbol: String,
    /// Base asset derived from the symbol, e.g. "XBT"
    pub base: String,
    /// Price formatted in the pair's quote currency
    pub price: String,
}

impl PriceRow {
    /// Builds a row from a quoted pair, formatting the price in the pair's
    /// quote currency.
    pub fn from_quote(symbol: &str, price: f64) -> Self {
        let (base, quote) = split_pair(symbol);
        Self {
            symbol: symbol.to_string(),
            base: base.to_string(),
            price: format_currency(price, quote),
        }
    }
}

/// Builds the price table rows in the map's iteration order
pub fn price_rows(quotes: &PriceQuotes) -> Vec<PriceRow> {
    quotes
        .iter()
        .map(|(symbol, price)| PriceRow::from_quote(symbol, *price))
        .collect()
}

/// The account display region
#[derive(Debug, Clone, PartialEq)]
pub struct AccountView {
    /// User identifier, or an error marker when the fetch failed
    pub identifier: String,
    /// Formatted account balance
    pub balance: String,
}

/// One row of the portfolio table
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioRow {
    /// Asset symbol of the holding
    pub asset_symbol: String,
    /// Formatted quantity held
    pub quantity: String,
    /// Formatted average purchase price
    pub average_purchase_price: String,
    /// Formatted current market value
    pub current_market_value: String,
}

impl PortfolioRow {
    /// Formats a portfolio entry for display
    pub fn from_entry(entry: &PortfolioEntry) -> Self {
        Self {
            asset_symbol: entry.asset_symbol.clone(),
            quantity: format_crypto_quantity(entry.quantity),
            average_purchase_price: format_currency(entry.average_purchase_price, "USD"),
            current_market_value: format_currency(entry.current_market_value, "USD"),
        }
    }
}

/// Builds the portfolio table rows
pub fn portfolio_rows(entries: &[PortfolioEntry]) -> Vec<PortfolioRow> {
    entries.iter().map(PortfolioRow::from_entry).collect()
}

/// One selectable entry of the sell-form symbol selector
#[derive(Debug, Clone, PartialEq)]
pub struct SellOption {
    /// Value submitted with the form, the bare symbol
    pub value: String,
    /// Label shown to the user, including the held quantity
    pub label: String,
}

/// Builds the sell selector options from the portfolio.
///
/// The neutral "none selected" entry is the renderer's responsibility and is
/// not included here.
pub fn sell_options(entries: &[PortfolioEntry]) -> Vec<SellOption> {
    entries
        .iter()
        .map(|entry| SellOption {
            value: entry.asset_symbol.clone(),
            label: format!(
                "{} (Qty: {})",
                entry.asset_symbol,
                format_crypto_quantity(entry.quantity)
            ),
        })
        .collect()
}

/// One row of the transaction history table
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    /// Formatted transaction timestamp
    pub timestamp: String,
    /// BUY or SELL
    pub transaction_type: TransactionType,
    /// Tone of the transaction-type badge
    pub type_tone: BadgeTone,
    /// Asset symbol traded
    pub asset_symbol: String,
    /// Formatted quantity
    pub quantity: String,
    /// Formatted price per unit
    pub price_per_unit: String,
    /// Formatted total transaction value
    pub total_value: String,
    /// Formatted realized profit/loss, or "N/A"
    pub profit_loss: String,
    /// Tone of the profit/loss badge
    pub profit_loss_tone: BadgeTone,
}

impl TransactionRow {
    /// Formats a transaction for display, applying the sign-based
    /// profit/loss presentation rule.
    pub fn from_transaction(tx: &Transaction) -> Self {
        let (profit_loss, profit_loss_tone) = profit_loss_badge(tx);
        Self {
            timestamp: format_timestamp(&tx.transaction_timestamp),
            transaction_type: tx.transaction_type,
            type_tone: match tx.transaction_type {
                TransactionType::Buy => BadgeTone::Success,
                TransactionType::Sell => BadgeTone::Danger,
            },
            asset_symbol: tx.asset_symbol.clone(),
            quantity: format_crypto_quantity(tx.quantity),
            price_per_unit: format_currency(tx.price_per_unit, "USD"),
            total_value: format_currency(tx.total_transaction_value, "USD"),
            profit_loss,
            profit_loss_tone,
        }
    }
}

/// Builds the transaction table rows, preserving server order (newest first)
pub fn transaction_rows(transactions: &[Transaction]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(TransactionRow::from_transaction)
        .collect()
}

/// Applies the three-way profit/loss presentation rule.
///
/// Only SELL transactions with a booked P/L carry a value: positive gets a
/// "+" prefix and a success tone, negative keeps its formatted sign with a
/// danger tone, zero renders plainly with a neutral tone. BUY rows and
/// missing P/L render as "N/A".
pub fn profit_loss_badge(tx: &Transaction) -> (String, BadgeTone) {
    if tx.transaction_type != TransactionType::Sell {
        return (NOT_AVAILABLE.to_string(), BadgeTone::Neutral);
    }
    match tx.realized_profit_loss {
        Some(pnl) if pnl > 0.0 => (
            format!("+{}", format_currency(pnl, "USD")),
            BadgeTone::Success,
        ),
        Some(pnl) if pnl < 0.0 => (format_currency(pnl, "USD"), BadgeTone::Danger),
        Some(pnl) => (format_currency(pnl, "USD"), BadgeTone::Neutral),
        None => (NOT_AVAILABLE.to_string(), BadgeTone::Neutral),
    }
}
