use po_gateway::config::{Config, ServerConfig, UpstreamConfig};
use po_gateway::startup::Application;
use secrecy::Secret;

pub const TEST_USERNAME: &str = "testuser";
pub const TEST_PASSWORD: &str = "testpass";
/// `base64("testuser:testpass")`, as sent in the basic-auth header.
pub const TEST_BASIC_AUTH: &str = "Basic dGVzdHVzZXI6dGVzdHBhc3M=";

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the gateway on a random port, pointed at the given upstream
    /// collection URL (normally a wiremock server).
    pub async fn spawn(upstream_base_url: &str) -> Self {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
                static_dir: "public".to_string(),
            },
            upstream: UpstreamConfig {
                base_url: upstream_base_url.to_string(),
                username: TEST_USERNAME.to_string(),
                password: Secret::new(TEST_PASSWORD.to_string()),
            },
        };

        let application = Application::build(config)
            .await
            .expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", application.port());

        tokio::spawn(application.run_until_stopped());

        Self { address }
    }
}
