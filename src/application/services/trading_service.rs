use crate::application::interfaces::TradingService;
use crate::application::models::trade::{TradeRequest, TradeSide};
use crate::config::Config;
use crate::error::AppError;
use crate::transport::http_client::ApiHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Implementation of the trading service
pub struct TradingServiceImpl<T: ApiHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: ApiHttpClient> TradingServiceImpl<T> {
    /// Creates a new instance of the trading service
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
impl<T: ApiHttpClient + 'static> TradingService for TradingServiceImpl<T> {
    async fn submit(
        &self,
        side: TradeSide,
        request: &TradeRequest,
    ) -> Result<Option<Value>, AppError> {
        info!("Submitting {:?} order: {}", side, request);

        let result = self
            .client
            .request::<TradeRequest, Value>(Method::POST, side.endpoint(), Some(request))
            .await?;

        info!("Order accepted for {}", request.asset_symbol);
        Ok(result)
    }
}
