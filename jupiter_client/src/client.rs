use crate::aggregator::SwapAggregator;
use crate::config::ClientConfig;
use crate::decoder::handle_jupiter_response;
use crate::error::{ClientResult, Error};
use crate::transport::Transport;
use error_stack::ResultExt;
use jupiter_models::models::instructions::SwapInstructionsResponse;
use jupiter_models::models::quote::{QuoteParams, QuoteResponse};
use jupiter_models::models::swap::{SwapParams, SwapResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Client of the Jupiter swap API.
///
/// Holds no per-call state, so one instance can serve concurrent calls. Cloning is cheap,
/// clones share the connection pool.
#[derive(Debug, Clone)]
pub struct JupiterClient {
    transport: Transport,
    config: ClientConfig,
}

impl JupiterClient {
    /// Builds its own HTTP client, bounded by `config.timeout`.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .change_context(Error::ConfigError(
                "Failed to build Jupiter HTTP client".to_string(),
            ))?;
        Ok(Self::with_http_client(http_client, config))
    }

    /// Uses `http_client` as is. Its own timeout applies, `config.timeout` does not.
    pub fn with_http_client(http_client: Client, config: ClientConfig) -> Self {
        let transport = Transport::new(http_client, config.api_url.clone(), config.api_key.clone());
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn quote(&self, params: &QuoteParams) -> ClientResult<QuoteResponse> {
        let query = params
            .to_query_pairs(self.config.api_version)
            .change_context(Error::EncodingError)
            .attach_printable("Error encoding Jupiter quote params")?;

        let response = self
            .transport
            .get(&self.config.quote_path, &query)
            .await
            .attach_printable("Jupiter quote request failed")?;

        handle_jupiter_response(response)
            .await
            .attach_printable("Failed to get Jupiter quote")
    }

    /// Base64 encoded, unsigned swap transaction.
    pub async fn swap(&self, params: &SwapParams) -> ClientResult<String> {
        Ok(self.swap_transaction(params).await?.swap_transaction)
    }

    pub async fn swap_transaction(&self, params: &SwapParams) -> ClientResult<SwapResponse> {
        self.post_swap_params(&self.config.swap_path, params, "swap")
            .await
    }

    pub async fn swap_instructions(
        &self,
        params: &SwapParams,
    ) -> ClientResult<SwapInstructionsResponse> {
        self.post_swap_params(&self.config.swap_instructions_path, params, "swap-instructions")
            .await
    }

    async fn post_swap_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &SwapParams,
        operation: &str,
    ) -> ClientResult<T> {
        let body = params
            .to_body(self.config.api_version)
            .change_context(Error::EncodingError)
            .attach_printable_lazy(|| format!("Error encoding Jupiter {operation} params"))?;

        let response = self
            .transport
            .post(path, &body)
            .await
            .attach_printable_lazy(|| format!("Jupiter {operation} request failed"))?;

        handle_jupiter_response(response)
            .await
            .attach_printable_lazy(|| format!("Failed to get Jupiter {operation} response"))
    }
}

#[async_trait::async_trait]
impl SwapAggregator for JupiterClient {
    async fn quote(&self, params: &QuoteParams) -> ClientResult<QuoteResponse> {
        JupiterClient::quote(self, params).await
    }

    async fn swap_transaction(&self, params: &SwapParams) -> ClientResult<SwapResponse> {
        JupiterClient::swap_transaction(self, params).await
    }

    async fn swap_instructions(
        &self,
        params: &SwapParams,
    ) -> ClientResult<SwapInstructionsResponse> {
        JupiterClient::swap_instructions(self, params).await
    }
}
