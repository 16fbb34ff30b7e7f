use crate::application::interfaces::AccountService;
use crate::application::models::account::Account;
use crate::application::models::portfolio::PortfolioEntry;
use crate::application::models::transaction::Transaction;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::http_client::ApiHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the account service
pub struct AccountServiceImpl<T: ApiHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: ApiHttpClient> AccountServiceImpl<T> {
    /// Creates a new instance of the account service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Sets a new configuration
    pub fn set_config(&mut self, config: Arc<Config>) {
        self.config = config;
    }
}

#[async_trait]
impl<T: ApiHttpClient + 'static> AccountService for AccountServiceImpl<T> {
    async fn get_account(&self, user_identifier: &str) -> Result<Option<Account>, AppError> {
        let path = format!("/account/{user_identifier}");
        debug!("Getting account details for {}", user_identifier);

        let result = self
            .client
            .request::<(), Account>(Method::GET, &path, None)
            .await?;

        debug!("Account details obtained for {}", user_identifier);
        Ok(result)
    }

    async fn get_portfolio(
        &self,
        user_identifier: &str,
    ) -> Result<Option<Vec<PortfolioEntry>>, AppError> {
        let path = format!("/account/{user_identifier}/portfolio");
        debug!("Getting portfolio for {}", user_identifier);

        let result = self
            .client
            .request::<(), Vec<PortfolioEntry>>(Method::GET, &path, None)
            .await?;

        if let Some(entries) = &result {
            debug!("Portfolio obtained: {} holdings", entries.len());
        }
        Ok(result)
    }

    async fn get_transactions(
        &self,
        user_identifier: &str,
    ) -> Result<Option<Vec<Transaction>>, AppError> {
        let path = format!("/account/{user_identifier}/transactions");
        debug!("Getting transaction history for {}", user_identifier);

        let result = self
            .client
            .request::<(), Vec<Transaction>>(Method::GET, &path, None)
            .await?;

        if let Some(transactions) = &result {
            debug!("Transaction history obtained: {} entries", transactions.len());
        }
        Ok(result)
    }

    async fn reset_account(&self, user_identifier: &str) -> Result<Option<Value>, AppError> {
        let path = format!("/account/{user_identifier}/reset");
        info!("Resetting account {}", user_identifier);

        let result = self
            .client
            .request::<(), Value>(Method::POST, &path, None)
            .await?;

        info!("Account {} reset", user_identifier);
        Ok(result)
    }
}
