//! The rendering-target abstraction.
//!
//! The controller never touches a concrete UI: it renders through this
//! trait, so the same session logic drives a terminal, a native widget tree
//! or a web page. Implementations fully replace a region's content on each
//! render call; only [`ViewPort::update_price_rows`] patches in place.

use crate::application::models::trade::TradeSide;
use crate::constants::DEFAULT_NOTICE_DURATION_MS;
use crate::presentation::views::{
    AccountView, PortfolioRow, PriceRow, SellOption, TableView, TransactionRow,
};
use std::time::Duration;

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Neutral information
    Info,
    /// A completed action
    Success,
    /// A rejected input, nothing was sent
    Warning,
    /// A failed request
    Error,
}

/// A display target for the trading session.
///
/// One method per display region, plus notifications, a confirmation gate
/// and trade-form control. Renderers own their region state: the price
/// renderer in particular must keep a symbol-to-row handle so
/// [`update_price_rows`](ViewPort::update_price_rows) does not rescan the
/// table.
pub trait ViewPort {
    /// Replaces the price table content
    fn render_prices(&mut self, prices: &TableView<PriceRow>);

    /// Rebuilds the buy-form symbol selector.
    ///
    /// Renderers prepend their own neutral "none selected" entry.
    fn render_symbol_choices(&mut self, symbols: &[String]);

    /// Replaces the account region content
    fn render_account(&mut self, account: &AccountView);

    /// Replaces the portfolio table and rebuilds the sell-form selector.
    ///
    /// As with the buy selector, the neutral entry is the renderer's.
    fn render_portfolio(&mut self, portfolio: &TableView<PortfolioRow>, choices: &[SellOption]);

    /// Replaces the transaction history table content
    fn render_transactions(&mut self, transactions: &TableView<TransactionRow>);

    /// Rewrites the price cell of existing rows, matched by symbol.
    ///
    /// Rows for unknown symbols are ignored; the rest of the table is left
    /// untouched. Only meaningful while the table is showing live rows.
    fn update_price_rows(&mut self, rows: &[PriceRow]);

    /// Shows a transient notification
    fn notify(&mut self, notice: Notice, message: &str);

    /// Asks the user to confirm a destructive action, blocking until
    /// answered. Returns `false` to abort.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Clears the symbol and quantity fields of a trade form after a
    /// successful submission. Targets without persistent form state may
    /// ignore this.
    fn reset_trade_form(&mut self, side: TradeSide);

    /// How long a notification should stay visible
    fn notice_duration(&self) -> Duration {
        Duration::from_millis(DEFAULT_NOTICE_DURATION_MS)
    }
}
