use crate::error::ClientResult;
use jupiter_models::models::instructions::SwapInstructionsResponse;
use jupiter_models::models::quote::{QuoteParams, QuoteResponse};
use jupiter_models::models::swap::{SwapParams, SwapResponse};

/// Quote and swap construction, as served by a swap aggregator.
#[async_trait::async_trait]
pub trait SwapAggregator: Send + Sync {
    async fn quote(&self, params: &QuoteParams) -> ClientResult<QuoteResponse>;

    async fn swap_transaction(&self, params: &SwapParams) -> ClientResult<SwapResponse>;

    async fn swap_instructions(&self, params: &SwapParams)
    -> ClientResult<SwapInstructionsResponse>;
}
