use crate::error::{ClientResult, Error};
use error_stack::ResultExt;
use jupiter_models::network::http::HttpMethod;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, Url};
use serde_json::Value;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Thin HTTP layer: builds the URL, sets the headers, sends. The response is handed back
/// untouched, the caller consumes it.
#[derive(Debug, Clone)]
pub struct Transport {
    http_client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl Transport {
    pub fn new(http_client: Client, api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http_client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub async fn get(&self, path: &str, query: &[(String, String)]) -> ClientResult<Response> {
        self.send(HttpMethod::GET, path, query, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> ClientResult<Response> {
        self.send(HttpMethod::POST, path, &[], Some(body)).await
    }

    pub fn endpoint_url(&self, path: &str, query: &[(String, String)]) -> ClientResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.api_url, path))
            .change_context(Error::ConfigError("Invalid Jupiter endpoint URL".to_string()))
            .attach_printable_lazy(|| format!("url: {}{}", self.api_url, path))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> ClientResult<Response> {
        let url = self.endpoint_url(path, query)?;

        let request = {
            let mut request = match method {
                HttpMethod::GET => self.http_client.get(url.clone()),
                HttpMethod::POST => self.http_client.post(url.clone()),
            }
            .header(ACCEPT, CONTENT_TYPE_JSON);
            if let Some(body) = body {
                request = request.header(CONTENT_TYPE, CONTENT_TYPE_JSON).json(body);
            }
            if let Some(ref key) = self.api_key {
                request = request.header(API_KEY_HEADER, key.as_str());
            }
            request
                .build()
                .change_context(Error::TransportError)
                .attach_printable("Error building Jupiter request")?
        };

        tracing::debug!("Sending {} request to {}", method.as_str(), url);

        self.http_client
            .execute(request)
            .await
            .change_context(Error::TransportError)
            .attach_printable_lazy(|| format!("Error sending {} request to {url}", method.as_str()))
    }
}
