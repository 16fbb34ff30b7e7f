use crate::application::interfaces::MarketDataService;
use crate::application::models::market::PriceQuotes;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::http_client::ApiHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the market data service
pub struct MarketServiceImpl<T: ApiHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: ApiHttpClient> MarketServiceImpl<T> {
    /// Creates a new instance of the market data service
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
impl<T: ApiHttpClient + 'static> MarketDataService for MarketServiceImpl<T> {
    async fn get_prices(&self) -> Result<Option<PriceQuotes>, AppError> {
        debug!("Getting latest prices");

        let result = self
            .client
            .request::<(), PriceQuotes>(Method::GET, "/prices", None)
            .await?;

        if let Some(quotes) = &result {
            debug!("{} pairs quoted", quotes.len());
        }
        Ok(result)
    }

    async fn get_price(&self, symbol: &str) -> Result<Option<f64>, AppError> {
        // Pair symbols contain a slash, which the backend route expects
        // verbatim: /api/prices/XBT/USD.
        let path = format!("/prices/{symbol}");
        debug!("Getting price for {}", symbol);

        let result = self.client.request::<(), f64>(Method::GET, &path, None).await?;

        debug!("Price for {}: {:?}", symbol, result);
        Ok(result)
    }
}
