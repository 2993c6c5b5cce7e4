use anyhow::Result;
use dotenvy::dotenv;
use secrecy::Secret;
use serde::Deserialize;
use std::env;

const DEFAULT_UPSTREAM_URL: &str = "https://my418696-api.s4hana.cloud.sap/sap/opu/odata4/sap/api_purchaseorder_2/srvd_a2x/sap/purchaseorder/0001/PurchaseOrder";

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Local directory served at the site root for anything the API
    /// routes do not claim.
    pub static_dir: String,
}

/// Fixed credentials and collection URL for the purchase order API.
///
/// Read once at startup and immutable for the process lifetime; every
/// outbound call attaches the same basic-auth pair.
#[derive(Deserialize, Clone, Debug)]
pub struct UpstreamConfig {
    /// Base URL of the purchase order collection. Item operations append
    /// `/<purchase order>` to this.
    pub base_url: String,
    pub username: String,
    pub password: Secret<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("PO_GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PO_GATEWAY_PORT")
            .unwrap_or_else(|_| "5100".to_string())
            .parse()?;
        let static_dir =
            env::var("PO_GATEWAY_STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        let base_url =
            env::var("SAP_API_BASE_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        let username = env::var("SAP_USERNAME").unwrap_or_else(|_| "ProductMaster".to_string());
        let password = env::var("SAP_PASSWORD")
            .unwrap_or_else(|_| "ProductMaster@1234567890".to_string());

        Ok(Self {
            server: ServerConfig {
                host,
                port,
                static_dir,
            },
            upstream: UpstreamConfig {
                base_url,
                username,
                password: Secret::new(password),
            },
        })
    }
}
