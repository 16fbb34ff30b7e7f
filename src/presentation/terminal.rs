//! Terminal rendering target.
//!
//! Renders each display region as a prettytable table on stdout. The price
//! renderer keeps an explicit symbol-to-row-index map so the polling path
//! can rewrite single price cells without scanning the table.

use crate::application::models::trade::TradeSide;
use crate::constants::SYMBOL_SELECT_PLACEHOLDER;
use crate::presentation::viewport::{Notice, ViewPort};
use crate::presentation::views::{
    AccountView, PortfolioRow, PriceRow, SellOption, TableView, TransactionRow,
};
use prettytable::{Table, row};
use std::collections::HashMap;
use std::io::Write;

/// [`ViewPort`] implementation for an interactive terminal session
pub struct TerminalViewPort {
    price_rows: Vec<PriceRow>,
    price_index: HashMap<String, usize>,
    assume_yes: bool,
}

impl TerminalViewPort {
    /// Creates an interactive terminal viewport
    pub fn new() -> Self {
        Self {
            price_rows: Vec::new(),
            price_index: HashMap::new(),
            assume_yes: false,
        }
    }

    /// Creates a viewport that answers every confirmation prompt with yes.
    /// Useful when stdin is not a TTY.
    pub fn with_assumed_confirmation() -> Self {
        Self {
            assume_yes: true,
            ..Self::new()
        }
    }

    fn print_price_table(&self) {
        let mut table = Table::new();
        table.set_titles(row!["Pair", "Asset", "Price"]);
        for r in &self.price_rows {
            table.add_row(row![r.symbol, r.base, r.price]);
        }
        println!("\nMarket Prices");
        table.printstd();
    }

    fn print_message(region: &str, message: &str) {
        println!("\n{region}\n  {message}");
    }
}

impl Default for TerminalViewPort {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewPort for TerminalViewPort {
    fn render_prices(&mut self, prices: &TableView<PriceRow>) {
        match prices {
            TableView::Loading(message) | TableView::Placeholder(message) => {
                self.price_rows.clear();
                self.price_index.clear();
                Self::print_message("Market Prices", message);
            }
            TableView::Rows(rows) => {
                self.price_rows = rows.clone();
                self.price_index = self
                    .price_rows
                    .iter()
                    .enumerate()
                    .map(|(i, r)| (r.symbol.clone(), i))
                    .collect();
                self.print_price_table();
            }
        }
    }

    fn render_symbol_choices(&mut self, symbols: &[String]) {
        print!("\nBuy symbols: [{SYMBOL_SELECT_PLACEHOLDER}]");
        for symbol in symbols {
            print!(" {symbol}");
        }
        println!();
    }

    fn render_account(&mut self, account: &AccountView) {
        println!("\nAccount {} | balance {}", account.identifier, account.balance);
    }

    fn render_portfolio(&mut self, portfolio: &TableView<PortfolioRow>, choices: &[SellOption]) {
        match portfolio {
            TableView::Loading(message) | TableView::Placeholder(message) => {
                Self::print_message("Portfolio", message);
            }
            TableView::Rows(rows) => {
                let mut table = Table::new();
                table.set_titles(row!["Asset", "Quantity", "Avg. Price", "Market Value"]);
                for r in rows {
                    table.add_row(row![
                        r.asset_symbol,
                        r.quantity,
                        r.average_purchase_price,
                        r.current_market_value
                    ]);
                }
                println!("\nPortfolio");
                table.printstd();
            }
        }
        print!("Sell symbols: [{SYMBOL_SELECT_PLACEHOLDER}]");
        for choice in choices {
            print!(" {}", choice.label);
        }
        println!();
    }

    fn render_transactions(&mut self, transactions: &TableView<TransactionRow>) {
        match transactions {
            TableView::Loading(message) | TableView::Placeholder(message) => {
                Self::print_message("Transaction History", message);
            }
            TableView::Rows(rows) => {
                let mut table = Table::new();
                table.set_titles(row![
                    "Date", "Type", "Asset", "Quantity", "Price", "Total", "P/L"
                ]);
                for r in rows {
                    table.add_row(row![
                        r.timestamp,
                        format!("{}", r.transaction_type),
                        r.asset_symbol,
                        r.quantity,
                        r.price_per_unit,
                        r.total_value,
                        r.profit_loss
                    ]);
                }
                println!("\nTransaction History");
                table.printstd();
            }
        }
    }

    fn update_price_rows(&mut self, rows: &[PriceRow]) {
        let mut changed = false;
        for row in rows {
            if let Some(&i) = self.price_index.get(&row.symbol) {
                if self.price_rows[i].price != row.price {
                    self.price_rows[i].price = row.price.clone();
                    changed = true;
                }
            }
        }
        if changed {
            self.print_price_table();
        }
    }

    fn notify(&mut self, notice: Notice, message: &str) {
        let tag = match notice {
            Notice::Info => "info",
            Notice::Success => "ok",
            Notice::Warning => "warn",
            Notice::Error => "error",
        };
        println!("[{tag}] {message}");
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{prompt} [y/N] ");
        let _ = std::io::stdout().flush();
        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn reset_trade_form(&mut self, _side: TradeSide) {
        // The terminal has no persistent form fields to clear.
    }
}
