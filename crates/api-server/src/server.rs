//! API server — wires the engine, records, portal, and chat relay into the
//! HTTP surface and starts the listeners.

use crate::rest::{self, AppState};
use crate::{admin_rest, chat_rest, content_rest, loyalty_rest};
use axum::routing::{get, post, put};
use axum::Router;
use peekaboo_core::config::AppConfig;
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Main API server for the play-center site.
pub struct ApiServer {
    config: AppConfig,
    state: AppState,
}

impl ApiServer {
    pub fn new(config: AppConfig, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn router(&self) -> Router {
        Router::new()
            // Loyalty
            .route("/v1/loyalty/balance", get(loyalty_rest::handle_balance))
            .route("/v1/loyalty/tiers", get(loyalty_rest::handle_tiers))
            .route("/v1/loyalty/purchase", post(loyalty_rest::handle_purchase))
            // Content
            .route("/v1/content", get(content_rest::handle_content))
            .route("/v1/content/zones", get(content_rest::handle_zones))
            .route("/v1/content/tickets", get(content_rest::handle_tickets))
            .route("/v1/content/parties", get(content_rest::handle_parties))
            .route("/v1/content/themes", get(content_rest::handle_themes))
            // Party bookings
            .route("/v1/party/book", post(content_rest::handle_party_booking))
            // Chat widget
            .route("/v1/chat", post(chat_rest::handle_chat))
            .route("/v1/chat/greeting", get(chat_rest::handle_greeting))
            // Staff portal
            .route("/v1/admin/login", post(admin_rest::handle_login))
            .route("/v1/admin/logout", post(admin_rest::handle_logout))
            .route("/v1/admin/bookings", get(admin_rest::handle_bookings))
            .route("/v1/admin/stats", get(admin_rest::handle_stats))
            .route("/v1/admin/zones/:id", put(admin_rest::handle_update_zone))
            .route(
                "/v1/admin/tickets/:index",
                put(admin_rest::handle_update_ticket),
            )
            .route(
                "/v1/admin/parties/:index",
                put(admin_rest::handle_update_party),
            )
            .route("/v1/admin/reset", post(admin_rest::handle_reset))
            .route("/v1/admin/reset-stars", post(admin_rest::handle_reset_stars))
            // Operational endpoints
            .route("/health", get(rest::health_check))
            .route("/ready", get(rest::readiness))
            .route("/live", get(rest::liveness))
            // Middleware
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Start the HTTP REST server.
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let app = self.router();
        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Start the Prometheus metrics exporter on a separate port.
    pub async fn start_metrics(&self) -> anyhow::Result<()> {
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        let handle = builder
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install_recorder()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");

        // Keep the handle alive
        std::mem::forget(handle);
        Ok(())
    }
}
