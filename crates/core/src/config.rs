use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `PEEKABOO__` and TOML config files.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub loyalty: LoyaltyConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

// ─── Loyalty Config ─────────────────────────────────────────────────────────

/// Rule table for the Peekaboo Stars program. Thresholds are data, not
/// literals scattered through the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct LoyaltyConfig {
    /// Stars earned per 1 JD actually charged.
    #[serde(default = "default_points_per_dinar")]
    pub points_per_dinar: u32,
    /// Stars consumed for a fixed 1 JD discount.
    #[serde(default = "default_redemption_threshold")]
    pub redemption_threshold: u32,
    /// Inclusive minimum balance for the Sprout tier.
    #[serde(default = "default_sprout_threshold")]
    pub sprout_threshold: u32,
    /// Inclusive minimum balance for the Golden Mushroom tier.
    #[serde(default = "default_golden_threshold")]
    pub golden_threshold: u32,
    /// Balance seeded for a session with no persisted stars record.
    #[serde(default = "default_welcome_balance")]
    pub welcome_balance: u32,
}

fn default_points_per_dinar() -> u32 { 10 }
fn default_redemption_threshold() -> u32 { 100 }
fn default_sprout_threshold() -> u32 { 500 }
fn default_golden_threshold() -> u32 { 1000 }
fn default_welcome_balance() -> u32 { 150 }

impl Default for LoyaltyConfig {
    fn default() -> Self {
        Self {
            points_per_dinar: default_points_per_dinar(),
            redemption_threshold: default_redemption_threshold(),
            sprout_threshold: default_sprout_threshold(),
            golden_threshold: default_golden_threshold(),
            welcome_balance: default_welcome_balance(),
        }
    }
}

// ─── Chat Config ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_chat_enabled")]
    pub enabled: bool,
    /// Hosted model API key. Empty means the relay always answers with the
    /// friendly fallback.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_chat_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_chat_model")]
    pub model: String,
    #[serde(default = "default_chat_temperature")]
    pub temperature: f32,
    #[serde(default = "default_chat_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_chat_enabled() -> bool { true }
fn default_chat_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}
fn default_chat_model() -> String { "gemini-3-pro-preview".to_string() }
fn default_chat_temperature() -> f32 { 0.4 }
fn default_chat_timeout_ms() -> u64 { 15_000 }

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: default_chat_enabled(),
            api_key: String::new(),
            endpoint: default_chat_endpoint(),
            model: default_chat_model(),
            temperature: default_chat_temperature(),
            timeout_ms: default_chat_timeout_ms(),
        }
    }
}

// ─── Admin Config ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Staff portal password. Client-grade gate, not cryptographic auth.
    #[serde(default = "default_admin_password")]
    pub password: String,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_lockout_secs")]
    pub lockout_secs: u64,
}

fn default_admin_password() -> String { "peekaboo2025".to_string() }
fn default_max_attempts() -> u32 { 3 }
fn default_lockout_secs() -> u64 { 30 }

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: default_admin_password(),
            max_attempts: default_max_attempts(),
            lockout_secs: default_lockout_secs(),
        }
    }
}

// ─── Store Config ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Recent-activity log keeps only the newest entries.
    #[serde(default = "default_max_bookings")]
    pub max_bookings: usize,
}

fn default_max_bookings() -> usize { 50 }

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_bookings: default_max_bookings(),
        }
    }
}

// Default functions
fn default_node_id() -> String {
    "peekaboo-01".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_metrics_port() -> u16 {
    9091
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            api: ApiConfig::default(),
            metrics: MetricsConfig::default(),
            loyalty: LoyaltyConfig::default(),
            chat: ChatConfig::default(),
            admin: AdminConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("PEEKABOO")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
