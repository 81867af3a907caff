//! Supplier Feed Client
//!
//! Fetches full supplier documents over HTTP. One client (and its connection
//! pool) is shared by every request; there is no retry.

use breadboard_utils::{BreadboardError, BreadboardResult, SuppliersConfig};
use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Clone)]
pub struct SupplierClient {
    client: Client,
}

impl SupplierClient {
    pub fn new(config: &SuppliersConfig) -> BreadboardResult<Self> {
        let mut builder = Client::builder()
            .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_seconds));

        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .map_err(|e| BreadboardError::configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// Network errors, non-success statuses, and undecodable bodies are all
    /// returned as errors.
    pub async fn fetch_document<T: DeserializeOwned>(&self, url: &str) -> BreadboardResult<T> {
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        let status = response.status();
        let body = response.bytes().await?;

        let document = serde_json::from_slice(&body)
            .map_err(|e| BreadboardError::decode(url, e.to_string()))?;

        debug!(
            url,
            %status,
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched supplier document"
        );

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breadboard_utils::AppConfig;
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> SupplierClient {
        SupplierClient::new(&AppConfig::default().suppliers).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tti.json"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"parts": []})))
            .expect(1)
            .mount(&server)
            .await;

        let document: Value = client()
            .fetch_document(&format!("{}/tti.json", server.uri()))
            .await
            .unwrap();

        assert_eq!(document, json!({"parts": []}));
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let error = client()
            .fetch_document::<Value>(&format!("{}/myarrow.json", server.uri()))
            .await
            .unwrap_err();

        assert_eq!(error.error_code(), "EXTERNAL_SERVICE_ERROR");
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let error = client()
            .fetch_document::<Value>(&server.uri())
            .await
            .unwrap_err();

        assert_eq!(error.error_code(), "DECODE_ERROR");
    }
}
