//! The session controller.
//!
//! `ViewController` owns all client-side state and mediates between the
//! backend services and a rendering target. It implements the fixed
//! synchronization contract:
//!
//! - full reloads fetch account, prices, portfolio and transactions in that
//!   order, each awaited before the next, so valuations on screen reflect
//!   the prices fetched in the same cycle
//! - trade and reset submissions validate locally first, and a successful
//!   response triggers exactly one full reload
//! - the polling tick refreshes prices (and then the portfolio, whose
//!   market values depend on them) quietly: its failures are logged, never
//!   notified, and never stop later ticks
//!
//! Failed fetches degrade per view: the affected region falls back to a
//! placeholder message while every other region keeps its content.

use crate::application::interfaces::{AccountService, MarketDataService, TradingService};
use crate::application::models::market::PriceQuotes;
use crate::application::models::trade::{TradeRequest, TradeSide};
use crate::application::services::{AccountServiceImpl, MarketServiceImpl, TradingServiceImpl};
use crate::application::state::SessionState;
use crate::config::Config;
use crate::constants::{
    ACCOUNT_ERROR_MARKER, BUY_VALIDATION_MESSAGE, DEFAULT_QUOTE_CURRENCY, LOADING_PORTFOLIO,
    LOADING_PRICES, LOADING_TRANSACTIONS, NO_PRICES_AVAILABLE, PORTFOLIO_EMPTY,
    PORTFOLIO_LOAD_FAILED, PRICES_LOAD_FAILED, PRICES_UNAVAILABLE, RESET_CONFIRM_PROMPT,
    RESET_SUCCESS_MESSAGE, SELL_VALIDATION_MESSAGE, TRANSACTIONS_EMPTY, TRANSACTIONS_LOAD_FAILED,
};
use crate::error::AppError;
use crate::presentation::format::{format_crypto_quantity, format_currency};
use crate::presentation::viewport::{Notice, ViewPort};
use crate::presentation::views::{
    AccountView, TableView, portfolio_rows, price_rows, sell_options, transaction_rows,
};
use crate::transport::http_client::ApiHttpClientImpl;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// A `ViewController` wired to the default HTTP-backed services
pub type HttpViewController<V> = ViewController<
    MarketServiceImpl<ApiHttpClientImpl>,
    AccountServiceImpl<ApiHttpClientImpl>,
    TradingServiceImpl<ApiHttpClientImpl>,
    V,
>;

/// Owns the session: services on one side, a [`ViewPort`] on the other.
///
/// All redraws go through the single viewport held here by `&mut`, so they
/// are serialized by construction; an interleaved poll and user-triggered
/// reload can never produce divergent table structure.
pub struct ViewController<M, A, T, V> {
    config: Arc<Config>,
    market: M,
    account: A,
    trading: T,
    viewport: V,
    state: SessionState,
}

impl<M, A, T, V> ViewController<M, A, T, V>
where
    M: MarketDataService,
    A: AccountService,
    T: TradingService,
    V: ViewPort,
{
    /// Creates a controller over explicit service and viewport instances
    pub fn new(config: Arc<Config>, market: M, account: A, trading: T, viewport: V) -> Self {
        Self {
            config,
            market,
            account,
            trading,
            viewport,
            state: SessionState::new(),
        }
    }

    /// The session state (symbols, price-table liveness)
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The rendering target
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reloads every display region, in the fixed order account, prices,
    /// portfolio, transactions, each awaited before the next.
    ///
    /// The table regions show loading placeholders while the cycle runs.
    /// Individual failures are contained per view; the cycle always
    /// completes.
    pub async fn refresh_all(&mut self) {
        debug!("Refreshing all views");
        self.state.price_table_live = false;
        self.viewport
            .render_prices(&TableView::Loading(LOADING_PRICES.to_string()));
        self.viewport
            .render_portfolio(&TableView::Loading(LOADING_PORTFOLIO.to_string()), &[]);
        self.viewport
            .render_transactions(&TableView::Loading(LOADING_TRANSACTIONS.to_string()));

        let _ = self.refresh_account().await;
        let _ = self.refresh_prices().await;
        let _ = self.refresh_portfolio().await;
        let _ = self.refresh_transactions().await;
    }

    /// Fetches and renders the account region.
    ///
    /// A failed fetch renders a zero balance with an error marker on the
    /// identifier; an empty success falls back to the configured identifier.
    pub async fn refresh_account(&mut self) -> Result<(), AppError> {
        let user = self.config.user_identifier.clone();
        let result = self.account.get_account(&user).await;
        match self.surface(result) {
            Ok(Some(account)) => {
                self.viewport.render_account(&AccountView {
                    identifier: account.user_identifier,
                    balance: format_currency(account.balance, DEFAULT_QUOTE_CURRENCY),
                });
                Ok(())
            }
            Ok(None) => {
                self.viewport.render_account(&AccountView {
                    identifier: user,
                    balance: format_currency(0.0, DEFAULT_QUOTE_CURRENCY),
                });
                Ok(())
            }
            Err(e) => {
                self.viewport.render_account(&AccountView {
                    identifier: ACCOUNT_ERROR_MARKER.to_string(),
                    balance: format_currency(0.0, DEFAULT_QUOTE_CURRENCY),
                });
                Err(e)
            }
        }
    }

    /// Fetches and renders the price table, rebuilding the buy-form symbol
    /// selector from the fetched pairs.
    pub async fn refresh_prices(&mut self) -> Result<(), AppError> {
        let result = self.market.get_prices().await;
        match self.surface(result) {
            Ok(Some(quotes)) => {
                self.apply_price_quotes(&quotes);
                Ok(())
            }
            Ok(None) => {
                self.state.price_table_live = false;
                self.viewport
                    .render_prices(&TableView::Placeholder(PRICES_UNAVAILABLE.to_string()));
                Ok(())
            }
            Err(e) => {
                self.state.price_table_live = false;
                self.viewport
                    .render_prices(&TableView::Placeholder(PRICES_LOAD_FAILED.to_string()));
                Err(e)
            }
        }
    }

    /// Fetches and renders the portfolio, surfacing failures
    pub async fn refresh_portfolio(&mut self) -> Result<(), AppError> {
        let result = self.load_portfolio_view().await;
        self.surface(result)
    }

    /// Fetches and renders the transaction history
    pub async fn refresh_transactions(&mut self) -> Result<(), AppError> {
        let user = self.config.user_identifier.clone();
        let result = self.account.get_transactions(&user).await;
        match self.surface(result) {
            Ok(transactions) => {
                let transactions = transactions.unwrap_or_default();
                if transactions.is_empty() {
                    self.viewport
                        .render_transactions(&TableView::Placeholder(
                            TRANSACTIONS_EMPTY.to_string(),
                        ));
                } else {
                    self.viewport
                        .render_transactions(&TableView::Rows(transaction_rows(&transactions)));
                }
                Ok(())
            }
            Err(e) => {
                self.viewport.render_transactions(&TableView::Placeholder(
                    TRANSACTIONS_LOAD_FAILED.to_string(),
                ));
                Err(e)
            }
        }
    }

    /// Submits a buy order built from raw form input
    pub async fn submit_buy(&mut self, asset_symbol: &str, quantity: &str) -> Result<(), AppError> {
        self.submit_trade(TradeSide::Buy, asset_symbol, quantity)
            .await
    }

    /// Submits a sell order built from raw form input
    pub async fn submit_sell(
        &mut self,
        asset_symbol: &str,
        quantity: &str,
    ) -> Result<(), AppError> {
        self.submit_trade(TradeSide::Sell, asset_symbol, quantity)
            .await
    }

    /// Validates and submits a trade.
    ///
    /// Rejected input (no symbol, or a quantity that is not a strictly
    /// positive number) shows a warning and performs no network call. A
    /// non-null JSON response counts as success: it notifies, clears the
    /// form and triggers one full reload. Transport failures have already
    /// been surfaced by the time this returns them.
    pub async fn submit_trade(
        &mut self,
        side: TradeSide,
        asset_symbol: &str,
        quantity: &str,
    ) -> Result<(), AppError> {
        let message = match side {
            TradeSide::Buy => BUY_VALIDATION_MESSAGE,
            TradeSide::Sell => SELL_VALIDATION_MESSAGE,
        };
        let symbol = asset_symbol.trim();
        let parsed = parse_positive_quantity(quantity);
        let Some(parsed) = parsed.filter(|_| !symbol.is_empty()) else {
            warn!(
                "Rejected {:?} submission: symbol={:?} quantity={:?}",
                side, asset_symbol, quantity
            );
            self.viewport.notify(Notice::Warning, message);
            return Err(AppError::InvalidInput(message.to_string()));
        };

        let request = TradeRequest::new(self.config.user_identifier.clone(), symbol, parsed);
        let result = self.trading.submit(side, &request).await;
        let response = match self.surface(result) {
            Ok(response) => response,
            Err(e) => {
                error!("{:?} operation failed: {e}", side);
                return Err(e);
            }
        };

        if response.is_some() {
            let success = format!(
                "Successfully {} {} {}!",
                side.past_tense(),
                format_crypto_quantity(parsed),
                request.asset_symbol
            );
            self.viewport.notify(Notice::Success, &success);
            self.viewport.reset_trade_form(side);
            self.refresh_all().await;
        }
        Ok(())
    }

    /// Resets the account after an explicit confirmation.
    ///
    /// Declining the prompt is a no-op. A non-null JSON response notifies
    /// success and triggers one full reload.
    pub async fn reset_account(&mut self) -> Result<(), AppError> {
        if !self.viewport.confirm(RESET_CONFIRM_PROMPT) {
            debug!("Account reset cancelled");
            return Ok(());
        }

        let user = self.config.user_identifier.clone();
        let result = self.account.reset_account(&user).await;
        let response = match self.surface(result) {
            Ok(response) => response,
            Err(e) => {
                error!("Reset account failed: {e}");
                return Err(e);
            }
        };

        if response.is_some() {
            self.viewport.notify(Notice::Success, RESET_SUCCESS_MESSAGE);
            self.refresh_all().await;
        }
        Ok(())
    }

    /// One background refresh tick.
    ///
    /// Best-effort by design: any failure is logged and swallowed so the
    /// next tick runs regardless, and nothing is ever notified to the user.
    pub async fn poll_tick(&mut self) {
        if let Err(e) = self.poll_prices().await {
            warn!("Periodic price refresh failed: {e}");
        }
    }

    async fn poll_prices(&mut self) -> Result<(), AppError> {
        let quotes = match self.market.get_prices().await? {
            Some(quotes) => quotes,
            None => return Ok(()),
        };

        if self.state.price_table_live {
            // Patch only the price cells of existing rows; the renderer
            // matches them through its own symbol-to-row map.
            self.state.available_symbols = quotes.symbols();
            self.viewport.update_price_rows(&price_rows(&quotes));
            self.viewport
                .render_symbol_choices(&self.state.available_symbols);
        } else {
            // Table still shows a loading or placeholder message, so a
            // partial patch has nothing to attach to.
            self.apply_price_quotes(&quotes);
        }

        // Portfolio market values depend on the prices fetched above.
        self.load_portfolio_view().await
    }

    /// Full price-table redraw from a fresh snapshot, including the symbol
    /// selector and the session symbol list.
    fn apply_price_quotes(&mut self, quotes: &PriceQuotes) {
        self.state.available_symbols = quotes.symbols();
        if quotes.is_empty() {
            self.state.price_table_live = false;
            self.viewport
                .render_prices(&TableView::Placeholder(NO_PRICES_AVAILABLE.to_string()));
            self.viewport.render_symbol_choices(&[]);
        } else {
            self.viewport
                .render_prices(&TableView::Rows(price_rows(quotes)));
            self.viewport
                .render_symbol_choices(&self.state.available_symbols);
            self.state.price_table_live = true;
        }
    }

    /// Portfolio fetch and render without notification; shared between the
    /// surfaced refresh and the quiet polling path.
    async fn load_portfolio_view(&mut self) -> Result<(), AppError> {
        let user = self.config.user_identifier.clone();
        match self.account.get_portfolio(&user).await {
            Ok(entries) => {
                let entries = entries.unwrap_or_default();
                if entries.is_empty() {
                    self.viewport
                        .render_portfolio(&TableView::Placeholder(PORTFOLIO_EMPTY.to_string()), &[]);
                } else {
                    self.viewport.render_portfolio(
                        &TableView::Rows(portfolio_rows(&entries)),
                        &sell_options(&entries),
                    );
                }
                Ok(())
            }
            Err(e) => {
                self.viewport.render_portfolio(
                    &TableView::Placeholder(PORTFOLIO_LOAD_FAILED.to_string()),
                    &[],
                );
                Err(e)
            }
        }
    }

    /// Notifies transport failures exactly once and hands the result back.
    ///
    /// Callers past this point only contain the error (placeholder
    /// fallbacks, skipped follow-up work); they never notify again.
    fn surface<R>(&mut self, result: Result<R, AppError>) -> Result<R, AppError> {
        if let Err(e) = &result {
            error!("Request failed: {e}");
            self.viewport
                .notify(Notice::Error, &format!("Error fetching data: {e}"));
        }
        result
    }
}

impl<V: ViewPort> HttpViewController<V> {
    /// Creates a controller wired to the real backend over HTTP
    pub fn with_http_client(config: Config, viewport: V) -> Self {
        let config = Arc::new(config);
        let client = Arc::new(ApiHttpClientImpl::new(config.clone()));
        Self::new(
            config.clone(),
            MarketServiceImpl::new(config.clone(), client.clone()),
            AccountServiceImpl::new(config.clone(), client.clone()),
            TradingServiceImpl::new(config, client),
            viewport,
        )
    }
}

/// Parses form input as a strictly positive, finite quantity
fn parse_positive_quantity(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}
