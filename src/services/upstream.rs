//! Client for the remote purchase order collection.
//!
//! Wraps a single OData-style collection URL with HTTP basic auth. The
//! gateway never interprets the records it relays; everything stays
//! `serde_json::Value`, and the upstream owns validation, numbering, and
//! consistency.

use crate::config::UpstreamConfig;
use crate::error::GatewayError;
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::ExposeSecret;
use serde_json::Value;

/// Client for the upstream purchase order API.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Item URL for a single purchase order. The identifier is forwarded
    /// as-is; a malformed one is the upstream's problem to reject.
    fn item_url(&self, purchase_order: &str) -> String {
        format!("{}/{}", self.config.base_url, purchase_order)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url).basic_auth(
            &self.config.username,
            Some(self.config.password.expose_secret()),
        )
    }

    /// Fetch the whole collection.
    pub async fn list(&self) -> Result<Value, GatewayError> {
        let response = self.request(Method::GET, self.base_url()).send().await?;
        self.read_json(response).await
    }

    /// Fetch one purchase order by identifier.
    pub async fn get(&self, purchase_order: &str) -> Result<Value, GatewayError> {
        let response = self
            .request(Method::GET, &self.item_url(purchase_order))
            .send()
            .await?;
        self.read_json(response).await
    }

    /// Create a purchase order from an upstream-shaped body.
    pub async fn create(&self, body: &Value) -> Result<Value, GatewayError> {
        let response = self
            .request(Method::POST, self.base_url())
            .json(body)
            .send()
            .await?;
        self.read_json(response).await
    }

    /// Apply a partial update to one purchase order. Always PATCH semantics:
    /// given fields are merged, the rest of the record is untouched.
    pub async fn update(&self, purchase_order: &str, body: &Value) -> Result<Value, GatewayError> {
        let response = self
            .request(Method::PATCH, &self.item_url(purchase_order))
            .json(body)
            .send()
            .await?;
        self.read_json(response).await
    }

    /// Delete one purchase order. The upstream response body is discarded.
    pub async fn delete(&self, purchase_order: &str) -> Result<(), GatewayError> {
        let response = self
            .request(Method::DELETE, &self.item_url(purchase_order))
            .send()
            .await?;
        self.check_status(&response)?;
        Ok(())
    }

    fn check_status(&self, response: &Response) -> Result<(), GatewayError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::debug!(status = %status, url = %response.url(), "upstream call failed");
            Err(GatewayError::Upstream(format!(
                "request failed with status code {}",
                status.as_u16()
            )))
        }
    }

    async fn read_json(&self, response: Response) -> Result<Value, GatewayError> {
        self.check_status(&response)?;
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;
        Ok(body)
    }
}
