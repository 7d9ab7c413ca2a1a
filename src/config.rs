//! Application configuration.
//!
//! Loaded from an optional YAML file and `ORDER_EMAIL__*` environment
//! variables, later sources overriding earlier ones.

use serde::Deserialize;

/// Default configuration file name (without extension).
pub const DEFAULT_CONFIG_FILE: &str = "order_email";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "ORDER_EMAIL_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "ORDER_EMAIL";
/// Event fired after an order's customer email changed.
pub const DEFAULT_EVENT_NAME: &str = "sales_order_customer_email_change";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name of the notification event.
    pub event_name: String,
    /// Serve Prometheus metrics on this port when set.
    pub metrics_port: Option<u16>,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            event_name: DEFAULT_EVENT_NAME.to_string(),
            metrics_port: None,
            log_filter: "info,order_email_reconcile=debug".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// Sources, later overriding earlier:
    /// 1. `order_email.yaml` in the current directory (if present)
    /// 2. File named by `ORDER_EMAIL_CONFIG` (if set)
    /// 3. `ORDER_EMAIL__<FIELD>` environment variables
    pub fn load() -> anyhow::Result<Self> {
        use ::config::{Config, Environment, File, FileFormat};

        let mut builder = Config::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        if app_config.event_name.trim().is_empty() {
            anyhow::bail!("event_name must not be empty");
        }
        Ok(app_config)
    }
}
