use crate::application::models::account::Account;
use crate::application::models::portfolio::PortfolioEntry;
use crate::application::models::transaction::Transaction;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for account-scoped operations
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Fetches account details for a user
    async fn get_account(&self, user_identifier: &str) -> Result<Option<Account>, AppError>;

    /// Fetches the user's holdings, in server order
    async fn get_portfolio(
        &self,
        user_identifier: &str,
    ) -> Result<Option<Vec<PortfolioEntry>>, AppError>;

    /// Fetches the full transaction history, newest first
    async fn get_transactions(
        &self,
        user_identifier: &str,
    ) -> Result<Option<Vec<Transaction>>, AppError>;

    /// Resets the account to its initial balance, clearing the portfolio.
    ///
    /// Any non-null JSON response means the reset went through; the body
    /// content is not interpreted.
    async fn reset_account(&self, user_identifier: &str) -> Result<Option<Value>, AppError>;
}
