//! Application startup and lifecycle management.

use axum::{
    routing::{get, put},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;
use crate::services::UpstreamClient;
use crate::AppState;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// Binds the listener here so tests can ask for port 0 and read the
    /// assigned port back before the server starts.
    pub async fn build(config: Config) -> anyhow::Result<Self> {
        let upstream = UpstreamClient::new(config.upstream.clone());
        tracing::info!(base_url = %upstream.base_url(), "Upstream client initialized");

        let state = AppState { upstream };
        let router = build_router(state, &config);

        let address = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        let addr: SocketAddr = self.listener.local_addr()?;
        tracing::info!("Listening on {}", addr);

        axum::serve(self.listener, self.router).await?;

        Ok(())
    }
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    Router::new()
        // Root serves the same listing as the collection route
        .route("/", get(handlers::orders::list_orders))
        .route("/health", get(handlers::health_check))
        .route(
            "/api/purchaseorders",
            get(handlers::orders::list_orders).post(handlers::orders::create_order),
        )
        .route(
            "/api/purchaseorders/:purchase_order",
            put(handlers::orders::update_order)
                .patch(handlers::orders::update_order)
                .delete(handlers::orders::delete_order),
        )
        .route(
            "/api/download-pdf/:purchase_order",
            get(handlers::pdf::download_pdf),
        )
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .with_state(state)
}
