use crate::application::models::trade::{TradeRequest, TradeSide};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for submitting trades.
///
/// The backend answers with the created transaction as JSON; the client
/// only checks that some JSON came back and never interprets the body.
#[async_trait]
pub trait TradingService: Send + Sync {
    /// Submits a trade on the given side
    async fn submit(
        &self,
        side: TradeSide,
        request: &TradeRequest,
    ) -> Result<Option<Value>, AppError>;

    /// Submits a buy order
    async fn buy(&self, request: &TradeRequest) -> Result<Option<Value>, AppError> {
        self.submit(TradeSide::Buy, request).await
    }

    /// Submits a sell order
    async fn sell(&self, request: &TradeRequest) -> Result<Option<Value>, AppError> {
        self.submit(TradeSide::Sell, request).await
    }
}
