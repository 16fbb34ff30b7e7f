use cryptosim_client::application::models::market::PriceQuotes;
use cryptosim_client::application::models::portfolio::PortfolioEntry;
use cryptosim_client::application::models::transaction::{Transaction, TransactionType};
use cryptosim_client::presentation::views::{
    BadgeTone, PriceRow, TableView, portfolio_rows, price_rows, profit_loss_badge, sell_options,
    transaction_rows,
};

fn sell_transaction(pnl: Option<f64>) -> Transaction {
    Transaction {
        transaction_timestamp: "2024-01-15T10:30:00".to_string(),
        transaction_type: TransactionType::Sell,
        asset_symbol: "XBT/USD".to_string(),
        quantity: 0.5,
        price_per_unit: Some(50000.0),
        total_transaction_value: Some(25000.0),
        realized_profit_loss: pnl,
    }
}

#[test]
fn positive_profit_gets_plus_prefix_and_success_tone() {
    let (text, tone) = profit_loss_badge(&sell_transaction(Some(150.5)));
    assert_eq!(text, "+$150.50");
    assert_eq!(tone, BadgeTone::Success);
}

#[test]
fn negative_profit_keeps_its_sign_with_danger_tone() {
    let (text, tone) = profit_loss_badge(&sell_transaction(Some(-20.0)));
    assert_eq!(text, "-$20.00");
    assert_eq!(tone, BadgeTone::Danger);
}

#[test]
fn zero_profit_renders_plainly_with_neutral_tone() {
    let (text, tone) = profit_loss_badge(&sell_transaction(Some(0.0)));
    assert_eq!(text, "$0.00");
    assert_eq!(tone, BadgeTone::Neutral);
}

#[test]
fn buy_rows_never_show_a_profit() {
    let mut tx = sell_transaction(Some(150.5));
    tx.transaction_type = TransactionType::Buy;
    let (text, tone) = profit_loss_badge(&tx);
    assert_eq!(text, "N/A");
    assert_eq!(tone, BadgeTone::Neutral);
}

#[test]
fn missing_profit_renders_as_not_available() {
    let (text, tone) = profit_loss_badge(&sell_transaction(None));
    assert_eq!(text, "N/A");
    assert_eq!(tone, BadgeTone::Neutral);
}

#[test]
fn price_rows_derive_base_and_quote_from_the_symbol() {
    let quotes = PriceQuotes::from([("XBT/USD", 50000.0), ("ETH/USD", 3000.0)]);
    let rows = price_rows(&quotes);

    assert_eq!(rows.len(), 2);
    // Sorted symbol order keeps the table stable across polls
    assert_eq!(rows[0].symbol, "ETH/USD");
    assert_eq!(rows[0].base, "ETH");
    assert_eq!(rows[0].price, "$3,000.00");
    assert_eq!(rows[1].symbol, "XBT/USD");
    assert_eq!(rows[1].base, "XBT");
    assert_eq!(rows[1].price, "$50,000.00");
}

#[test]
fn price_row_without_quote_part_falls_back_to_usd() {
    let row = PriceRow::from_quote("DOGE", 0.25);
    assert_eq!(row.base, "DOGE");
    assert_eq!(row.price, "$0.25");
}

fn holding(symbol: &str, quantity: f64) -> PortfolioEntry {
    PortfolioEntry {
        asset_symbol: symbol.to_string(),
        quantity,
        average_purchase_price: Some(48000.0),
        current_price: Some(50000.0),
        current_market_value: Some(quantity * 50000.0),
    }
}

#[test]
fn portfolio_rows_format_every_column() {
    let rows = portfolio_rows(&[holding("XBT/USD", 1.5)]);
    assert_eq!(rows[0].asset_symbol, "XBT/USD");
    assert_eq!(rows[0].quantity, "1.50");
    assert_eq!(rows[0].average_purchase_price, "$48,000.00");
    assert_eq!(rows[0].current_market_value, "$75,000.00");
}

#[test]
fn portfolio_row_without_valuation_shows_not_available() {
    let mut entry = holding("XBT/USD", 1.0);
    entry.current_market_value = None;
    let rows = portfolio_rows(&[entry]);
    assert_eq!(rows[0].current_market_value, "N/A");
}

#[test]
fn sell_options_carry_the_held_quantity_in_the_label() {
    let options = sell_options(&[holding("XBT/USD", 1.5), holding("ETH/USD", 0.25)]);
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].value, "XBT/USD");
    assert_eq!(options[0].label, "XBT/USD (Qty: 1.50)");
    assert_eq!(options[1].label, "ETH/USD (Qty: 0.25)");
}

#[test]
fn transaction_rows_keep_server_order_and_badge_the_type() {
    let transactions = vec![sell_transaction(Some(150.5)), {
        let mut tx = sell_transaction(None);
        tx.transaction_type = TransactionType::Buy;
        tx
    }];
    let rows = transaction_rows(&transactions);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].transaction_type, TransactionType::Sell);
    assert_eq!(rows[0].type_tone, BadgeTone::Danger);
    assert_eq!(rows[0].timestamp, "1/15/2024, 10:30:00 AM");
    assert_eq!(rows[0].total_value, "$25,000.00");
    assert_eq!(rows[1].transaction_type, TransactionType::Buy);
    assert_eq!(rows[1].type_tone, BadgeTone::Success);
    assert_eq!(rows[1].profit_loss, "N/A");
}

#[test]
fn table_view_knows_when_it_has_rows() {
    assert!(TableView::Rows(vec![PriceRow::from_quote("XBT/USD", 1.0)]).has_rows());
    assert!(!TableView::<PriceRow>::Rows(Vec::new()).has_rows());
    assert!(!TableView::<PriceRow>::Placeholder("empty".to_string()).has_rows());
}
