//! Peekaboo — bilingual play-center site platform for Peekaboo Irbid.
//!
//! Main entry point that wires the loyalty engine, session store, staff
//! portal, and chat relay into the API server.

use clap::Parser;
use peekaboo_admin::AdminPortal;
use peekaboo_api::{ApiServer, AppState};
use peekaboo_chat::{ChatClient, GeminiRelay, ScriptedChatClient};
use peekaboo_core::config::AppConfig;
use peekaboo_loyalty::LoyaltyEngine;
use peekaboo_store::{SessionStore, SiteRecords};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "peekaboo")]
#[command(about = "Bilingual play-center site platform (loyalty, content, chat)")]
#[command(version)]
struct Cli {
    /// Node identifier (overrides config)
    #[arg(long, env = "PEEKABOO__NODE_ID")]
    node_id: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "PEEKABOO__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Hosted model API key (overrides config)
    #[arg(long, env = "PEEKABOO__CHAT__API_KEY")]
    chat_api_key: Option<String>,

    /// Answer chat messages with canned replies instead of the hosted model
    #[arg(long, default_value_t = false)]
    scripted_chat: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "peekaboo=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("Peekaboo platform starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(node_id) = cli.node_id {
        config.node_id = node_id;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(api_key) = cli.chat_api_key {
        config.chat.api_key = api_key;
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        metrics_port = config.metrics.port,
        "Configuration loaded"
    );

    // Session store and typed records
    let store = Arc::new(SessionStore::new());
    let records = Arc::new(SiteRecords::new(
        store,
        &config.store,
        config.loyalty.welcome_balance,
    ));

    // Loyalty engine
    let engine = Arc::new(LoyaltyEngine::new(&config.loyalty));

    // Staff portal
    let portal = Arc::new(AdminPortal::new(&config.admin, records.clone()));

    // Chat relay
    let chat: Arc<dyn ChatClient> = if cli.scripted_chat {
        info!("Chat relay running in scripted mode");
        Arc::new(ScriptedChatClient::new(vec![
            peekaboo_chat::prompt::GREETING.to_string(),
        ]))
    } else {
        Arc::new(GeminiRelay::new(&config.chat)?)
    };

    let state = AppState {
        engine,
        records,
        portal,
        chat,
        node_id: config.node_id.clone(),
        start_time: Instant::now(),
    };

    let server = ApiServer::new(config, state);
    server.start_metrics().await?;
    server.start_http().await
}
