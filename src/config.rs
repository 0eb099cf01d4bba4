use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use riviera_inquiry::EmailTheme;
use riviera_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub email: EmailConfig,
    #[serde(default)]
    pub theme: EmailTheme,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum accepted request body, in bytes
    pub body_limit: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy SMTP_* / CONTACT_EMAIL variables
    /// 2. Environment variables (RIVIERA__EMAIL__SMTP_HOST, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.body_limit", 10 * 1024 * 1024)?
            .set_default("email.smtp_host", "smtp.gmail.com")?
            .set_default("email.smtp_port", 587)?
            .set_default("email.smtp_username", "")?
            .set_default("email.smtp_password", "")?
            .set_default("email.from_address", "Riviera Stays <noreply@riviera-stays.com>")?
            .set_default("email.contact_address", "info@riviera-stays.com")?
            .set_default("email.timeout_secs", 10)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("RIVIERA")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("SMTP_HOST", "email.smtp_host"),
            ("SMTP_USER", "email.smtp_username"),
            ("SMTP_PASSWORD", "email.smtp_password"),
            ("SMTP_FROM", "email.from_address"),
            ("CONTACT_EMAIL", "email.contact_address"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.server.body_limit == 0 {
            return Err("Server body_limit must be greater than 0".to_string());
        }
        if self.email.timeout_secs == 0 {
            return Err("Email timeout_secs must be greater than 0".to_string());
        }
        if self.email.contact_address.is_empty() {
            return Err("Email contact_address must be set".to_string());
        }
        if self.email.from_address.is_empty() {
            return Err("Email from_address must be set".to_string());
        }
        Ok(())
    }
}
