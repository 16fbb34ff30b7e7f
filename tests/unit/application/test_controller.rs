use async_trait::async_trait;
use cryptosim_client::application::controller::ViewController;
use cryptosim_client::application::interfaces::{
    AccountService, MarketDataService, TradingService,
};
use cryptosim_client::application::models::account::Account;
use cryptosim_client::application::models::market::PriceQuotes;
use cryptosim_client::application::models::portfolio::PortfolioEntry;
use cryptosim_client::application::models::trade::{TradeRequest, TradeSide};
use cryptosim_client::application::models::transaction::Transaction;
use cryptosim_client::config::Config;
use cryptosim_client::constants::{
    ACCOUNT_ERROR_MARKER, BUY_VALIDATION_MESSAGE, NO_PRICES_AVAILABLE, PORTFOLIO_EMPTY,
    RESET_SUCCESS_MESSAGE, SELL_VALIDATION_MESSAGE, TRANSACTIONS_EMPTY,
};
use cryptosim_client::error::AppError;
use cryptosim_client::presentation::viewport::{Notice, ViewPort};
use cryptosim_client::presentation::views::{
    AccountView, PortfolioRow, PriceRow, SellOption, TableView, TransactionRow,
};
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

#[derive(Clone)]
enum Stub {
    Json(Value),
    Empty,
    Fail,
}

impl Stub {
    fn result<T: serde::de::DeserializeOwned>(&self) -> Result<Option<T>, AppError> {
        match self {
            Stub::Json(v) => Ok(Some(serde_json::from_value(v.clone()).expect("stub payload"))),
            Stub::Empty => Ok(None),
            Stub::Fail => Err(AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: "boom".to_string(),
            }),
        }
    }
}

/// One stub standing in for all three backend services, recording every
/// call in order.
#[derive(Clone)]
struct StubBackend {
    prices: Stub,
    account: Stub,
    portfolio: Stub,
    transactions: Stub,
    trade: Stub,
    reset: Stub,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubBackend {
    fn new() -> Self {
        Self {
            prices: Stub::Json(json!({"XBT/USD": 50000.0, "ETH/USD": 3000.0})),
            account: Stub::Json(json!({"userIdentifier": "default_user", "balance": 10000.0})),
            portfolio: Stub::Json(json!([{
                "assetSymbol": "XBT/USD",
                "quantity": 1.5,
                "averagePurchasePrice": 48000.0,
                "currentPrice": 50000.0,
                "currentMarketValue": 75000.0
            }])),
            transactions: Stub::Json(json!([])),
            trade: Stub::Json(json!({"transactionId": 1})),
            reset: Stub::Json(json!({"userIdentifier": "default_user", "balance": 10000.0})),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn record(&self, name: &str) {
        self.calls.lock().unwrap().push(name.to_string());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketDataService for StubBackend {
    async fn get_prices(&self) -> Result<Option<PriceQuotes>, AppError> {
        self.record("prices");
        self.prices.result()
    }

    async fn get_price(&self, symbol: &str) -> Result<Option<f64>, AppError> {
        self.record("price");
        let quotes: Option<PriceQuotes> = self.prices.result()?;
        Ok(quotes.and_then(|q| q.get(symbol)))
    }
}

#[async_trait]
impl AccountService for StubBackend {
    async fn get_account(&self, _user: &str) -> Result<Option<Account>, AppError> {
        self.record("account");
        self.account.result()
    }

    async fn get_portfolio(&self, _user: &str) -> Result<Option<Vec<PortfolioEntry>>, AppError> {
        self.record("portfolio");
        self.portfolio.result()
    }

    async fn get_transactions(&self, _user: &str) -> Result<Option<Vec<Transaction>>, AppError> {
        self.record("transactions");
        self.transactions.result()
    }

    async fn reset_account(&self, _user: &str) -> Result<Option<Value>, AppError> {
        self.record("reset");
        self.reset.result()
    }
}

#[async_trait]
impl TradingService for StubBackend {
    async fn submit(
        &self,
        side: TradeSide,
        _request: &TradeRequest,
    ) -> Result<Option<Value>, AppError> {
        self.record(match side {
            TradeSide::Buy => "trade/buy",
            TradeSide::Sell => "trade/sell",
        });
        self.trade.result()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Prices(TableView<PriceRow>),
    SymbolChoices(Vec<String>),
    Account(AccountView),
    Portfolio(TableView<PortfolioRow>, Vec<SellOption>),
    Transactions(TableView<TransactionRow>),
    PatchedPrices(Vec<PriceRow>),
    Notified(Notice, String),
    FormCleared(TradeSide),
}

struct RecordingViewPort {
    events: Arc<Mutex<Vec<Event>>>,
    confirm_answer: bool,
}

impl ViewPort for RecordingViewPort {
    fn render_prices(&mut self, prices: &TableView<PriceRow>) {
        self.events.lock().unwrap().push(Event::Prices(prices.clone()));
    }

    fn render_symbol_choices(&mut self, symbols: &[String]) {
        self.events
            .lock()
            .unwrap()
            .push(Event::SymbolChoices(symbols.to_vec()));
    }

    fn render_account(&mut self, account: &AccountView) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Account(account.clone()));
    }

    fn render_portfolio(&mut self, portfolio: &TableView<PortfolioRow>, choices: &[SellOption]) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Portfolio(portfolio.clone(), choices.to_vec()));
    }

    fn render_transactions(&mut self, transactions: &TableView<TransactionRow>) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Transactions(transactions.clone()));
    }

    fn update_price_rows(&mut self, rows: &[PriceRow]) {
        self.events
            .lock()
            .unwrap()
            .push(Event::PatchedPrices(rows.to_vec()));
    }

    fn notify(&mut self, notice: Notice, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Notified(notice, message.to_string()));
    }

    fn confirm(&mut self, _prompt: &str) -> bool {
        self.confirm_answer
    }

    fn reset_trade_form(&mut self, side: TradeSide) {
        self.events.lock().unwrap().push(Event::FormCleared(side));
    }
}

type StubController = ViewController<StubBackend, StubBackend, StubBackend, RecordingViewPort>;

fn controller_with(backend: &StubBackend, confirm: bool) -> (StubController, Arc<Mutex<Vec<Event>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let viewport = RecordingViewPort {
        events: events.clone(),
        confirm_answer: confirm,
    };
    let config = Arc::new(Config::with_base_url("http://unused.invalid"));
    let controller = ViewController::new(
        config,
        backend.clone(),
        backend.clone(),
        backend.clone(),
        viewport,
    );
    (controller, events)
}

fn notifications(events: &Arc<Mutex<Vec<Event>>>) -> Vec<(Notice, String)> {
    events
        .lock()
        .unwrap()
        .iter()
        .filter_map(|e| match e {
            Event::Notified(notice, message) => Some((*notice, message.clone())),
            _ => None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Trade validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_buy_input_never_reaches_the_network() {
    let backend = StubBackend::new();
    let (mut controller, events) = controller_with(&backend, true);

    let rejected = [("", "1"), ("XBT/USD", "0"), ("XBT/USD", "-2"), ("XBT/USD", "abc"), ("XBT/USD", "")];
    for (symbol, quantity) in rejected {
        let err = controller.submit_buy(symbol, quantity).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)), "{symbol}/{quantity}");
    }

    assert!(backend.calls().is_empty());
    let notes = notifications(&events);
    assert_eq!(notes.len(), rejected.len());
    for (notice, message) in notes {
        assert_eq!(notice, Notice::Warning);
        assert_eq!(message, BUY_VALIDATION_MESSAGE);
    }
}

#[tokio::test]
async fn invalid_sell_input_shows_the_sell_warning() {
    let backend = StubBackend::new();
    let (mut controller, events) = controller_with(&backend, true);

    controller.submit_sell("", "1").await.unwrap_err();

    assert!(backend.calls().is_empty());
    assert_eq!(
        notifications(&events),
        vec![(Notice::Warning, SELL_VALIDATION_MESSAGE.to_string())]
    );
}

// ---------------------------------------------------------------------------
// Trade submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn successful_buy_triggers_exactly_one_ordered_reload() {
    let backend = StubBackend::new();
    let (mut controller, events) = controller_with(&backend, true);

    controller.submit_buy("XBT/USD", "0.5").await.unwrap();

    assert_eq!(
        backend.calls(),
        vec!["trade/buy", "account", "prices", "portfolio", "transactions"]
    );
    let notes = notifications(&events);
    assert_eq!(
        notes,
        vec![(
            Notice::Success,
            "Successfully bought 0.50 XBT/USD!".to_string()
        )]
    );
    assert!(
        events
            .lock()
            .unwrap()
            .contains(&Event::FormCleared(TradeSide::Buy))
    );
}

#[tokio::test]
async fn successful_sell_notifies_with_the_sell_wording() {
    let backend = StubBackend::new();
    let (mut controller, events) = controller_with(&backend, true);

    controller.submit_sell("ETH/USD", "2").await.unwrap();

    assert_eq!(
        backend.calls(),
        vec!["trade/sell", "account", "prices", "portfolio", "transactions"]
    );
    assert_eq!(
        notifications(&events),
        vec![(Notice::Success, "Successfully sold 2.00 ETH/USD!".to_string())]
    );
}

#[tokio::test]
async fn failed_trade_surfaces_once_and_skips_the_reload() {
    let mut backend = StubBackend::new();
    backend.trade = Stub::Fail;
    let (mut controller, events) = controller_with(&backend, true);

    let err = controller.submit_buy("XBT/USD", "0.5").await.unwrap_err();

    assert!(matches!(err, AppError::Http { .. }));
    assert_eq!(backend.calls(), vec!["trade/buy"]);
    let notes = notifications(&events);
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].0, Notice::Error);
    assert!(notes[0].1.contains("boom"));
}

#[tokio::test]
async fn null_trade_response_is_not_a_success() {
    let mut backend = StubBackend::new();
    backend.trade = Stub::Empty;
    let (mut controller, events) = controller_with(&backend, true);

    controller.submit_buy("XBT/USD", "0.5").await.unwrap();

    assert_eq!(backend.calls(), vec!["trade/buy"]);
    assert!(notifications(&events).is_empty());
}

// ---------------------------------------------------------------------------
// Account reset
// ---------------------------------------------------------------------------

#[test]
fn notifications_default_to_a_four_second_duration() {
    let viewport = RecordingViewPort {
        events: Arc::new(Mutex::new(Vec::new())),
        confirm_answer: true,
    };
    assert_eq!(
        viewport.notice_duration(),
        std::time::Duration::from_millis(4000)
    );
}

#[tokio::test]
async fn declined_confirmation_aborts_the_reset() {
    let backend = StubBackend::new();
    let (mut controller, events) = controller_with(&backend, false);

    controller.reset_account().await.unwrap();

    assert!(backend.calls().is_empty());
    assert!(notifications(&events).is_empty());
}

#[tokio::test]
async fn confirmed_reset_reloads_every_view() {
    let backend = StubBackend::new();
    let (mut controller, events) = controller_with(&backend, true);

    controller.reset_account().await.unwrap();

    assert_eq!(
        backend.calls(),
        vec!["reset", "account", "prices", "portfolio", "transactions"]
    );
    assert_eq!(
        notifications(&events),
        vec![(Notice::Success, RESET_SUCCESS_MESSAGE.to_string())]
    );
}

// ---------------------------------------------------------------------------
// View refresh fallbacks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn account_failure_renders_zero_balance_with_error_marker() {
    let mut backend = StubBackend::new();
    backend.account = Stub::Fail;
    let (mut controller, events) = controller_with(&backend, true);

    controller.refresh_account().await.unwrap_err();

    let rendered = events.lock().unwrap().clone();
    assert!(rendered.contains(&Event::Account(AccountView {
        identifier: ACCOUNT_ERROR_MARKER.to_string(),
        balance: "$0.00".to_string(),
    })));
    assert_eq!(notifications(&events).len(), 1);
}

#[tokio::test]
async fn missing_account_payload_falls_back_to_the_configured_user() {
    let mut backend = StubBackend::new();
    backend.account = Stub::Empty;
    let (mut controller, events) = controller_with(&backend, true);

    controller.refresh_account().await.unwrap();

    let rendered = events.lock().unwrap().clone();
    assert!(rendered.contains(&Event::Account(AccountView {
        identifier: "default_user".to_string(),
        balance: "$0.00".to_string(),
    })));
    assert!(notifications(&events).is_empty());
}

#[tokio::test]
async fn empty_price_map_renders_placeholder_and_clears_symbols() {
    let mut backend = StubBackend::new();
    backend.prices = Stub::Json(json!({}));
    let (mut controller, events) = controller_with(&backend, true);

    controller.refresh_prices().await.unwrap();

    let rendered = events.lock().unwrap().clone();
    assert!(rendered.contains(&Event::Prices(TableView::Placeholder(
        NO_PRICES_AVAILABLE.to_string()
    ))));
    assert!(rendered.contains(&Event::SymbolChoices(Vec::new())));
    assert!(controller.state().available_symbols.is_empty());
    assert!(!controller.state().price_table_live);
}

#[tokio::test]
async fn fetched_prices_fill_table_selector_and_state() {
    let backend = StubBackend::new();
    let (mut controller, events) = controller_with(&backend, true);

    controller.refresh_prices().await.unwrap();

    assert_eq!(
        controller.state().available_symbols,
        vec!["ETH/USD", "XBT/USD"]
    );
    assert!(controller.state().price_table_live);
    let rendered = events.lock().unwrap().clone();
    assert!(rendered.contains(&Event::SymbolChoices(vec![
        "ETH/USD".to_string(),
        "XBT/USD".to_string()
    ])));
    assert!(rendered.iter().any(|e| matches!(
        e,
        Event::Prices(TableView::Rows(rows)) if rows.len() == 2
    )));
}

#[tokio::test]
async fn empty_portfolio_renders_placeholder_with_no_sell_choices() {
    let mut backend = StubBackend::new();
    backend.portfolio = Stub::Json(json!([]));
    let (mut controller, events) = controller_with(&backend, true);

    controller.refresh_portfolio().await.unwrap();

    let rendered = events.lock().unwrap().clone();
    assert!(rendered.contains(&Event::Portfolio(
        TableView::Placeholder(PORTFOLIO_EMPTY.to_string()),
        Vec::new()
    )));
}

#[tokio::test]
async fn empty_history_renders_placeholder() {
    let backend = StubBackend::new();
    let (mut controller, events) = controller_with(&backend, true);

    controller.refresh_transactions().await.unwrap();

    let rendered = events.lock().unwrap().clone();
    assert!(rendered.contains(&Event::Transactions(TableView::Placeholder(
        TRANSACTIONS_EMPTY.to_string()
    ))));
}

// ---------------------------------------------------------------------------
// Polling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn poll_failures_are_silent_and_do_not_stop_later_ticks() {
    let mut backend = StubBackend::new();
    backend.prices = Stub::Fail;
    let (mut controller, events) = controller_with(&backend, true);

    controller.poll_tick().await;
    controller.poll_tick().await;

    assert_eq!(backend.calls(), vec!["prices", "prices"]);
    assert!(notifications(&events).is_empty());
}

#[tokio::test]
async fn poll_over_a_live_table_patches_rows_in_place() {
    let backend = StubBackend::new();
    let (mut controller, events) = controller_with(&backend, true);

    controller.refresh_prices().await.unwrap();
    events.lock().unwrap().clear();

    controller.poll_tick().await;

    let rendered = events.lock().unwrap().clone();
    assert!(rendered.iter().any(|e| matches!(
        e,
        Event::PatchedPrices(rows) if rows.len() == 2
    )));
    // In-place update, not a full redraw
    assert!(!rendered.iter().any(|e| matches!(e, Event::Prices(_))));
    // Selector and portfolio still refresh on every tick
    assert!(rendered.iter().any(|e| matches!(e, Event::SymbolChoices(_))));
    assert!(rendered.iter().any(|e| matches!(e, Event::Portfolio(..))));
    assert!(notifications(&events).is_empty());
}

#[tokio::test]
async fn poll_over_a_placeholder_table_redraws_in_full() {
    let backend = StubBackend::new();
    let (mut controller, events) = controller_with(&backend, true);

    controller.poll_tick().await;

    let rendered = events.lock().unwrap().clone();
    assert!(rendered.iter().any(|e| matches!(
        e,
        Event::Prices(TableView::Rows(rows)) if rows.len() == 2
    )));
    assert!(controller.state().price_table_live);
}

#[tokio::test]
async fn poll_portfolio_failure_is_contained_to_a_placeholder() {
    let mut backend = StubBackend::new();
    backend.portfolio = Stub::Fail;
    let (mut controller, events) = controller_with(&backend, true);

    controller.poll_tick().await;

    let rendered = events.lock().unwrap().clone();
    assert!(rendered.iter().any(|e| matches!(
        e,
        Event::Portfolio(TableView::Placeholder(_), _)
    )));
    assert!(notifications(&events).is_empty());
}

// ---------------------------------------------------------------------------
// Full reload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn refresh_all_fetches_in_the_documented_order() {
    let backend = StubBackend::new();
    let (mut controller, events) = controller_with(&backend, true);

    controller.refresh_all().await;

    assert_eq!(
        backend.calls(),
        vec!["account", "prices", "portfolio", "transactions"]
    );
    // Loading placeholders come before any fetch result
    let rendered = events.lock().unwrap().clone();
    assert!(matches!(rendered[0], Event::Prices(TableView::Loading(_))));
}

#[tokio::test]
async fn one_failed_view_leaves_the_others_intact() {
    let mut backend = StubBackend::new();
    backend.transactions = Stub::Fail;
    let (mut controller, events) = controller_with(&backend, true);

    controller.refresh_all().await;

    assert_eq!(
        backend.calls(),
        vec!["account", "prices", "portfolio", "transactions"]
    );
    let rendered = events.lock().unwrap().clone();
    assert!(rendered.iter().any(|e| matches!(
        e,
        Event::Prices(TableView::Rows(_))
    )));
    assert!(rendered.iter().any(|e| matches!(
        e,
        Event::Transactions(TableView::Placeholder(_))
    )));
}
