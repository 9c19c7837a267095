use arcalab_booking::{DEFAULT_SLOTS, Schedule};
use arcalab_notification::EmailConfig;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use time_tz::timezones;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
        }
    }
}

fn default_site_name() -> String {
    "ARCALAB".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    /// IANA name used to decide what "today" is.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_timezone_label")]
    pub timezone_label: String,
    #[serde(default = "default_slots")]
    pub slots: Vec<String>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            timezone_label: default_timezone_label(),
            slots: default_slots(),
        }
    }
}

impl BookingConfig {
    pub fn schedule(&self) -> Schedule {
        Schedule {
            slots: self.slots.clone(),
            timezone_label: self.timezone_label.clone(),
        }
    }
}

fn default_timezone() -> String {
    "America/New_York".to_string()
}

fn default_timezone_label() -> String {
    "Eastern Time".to_string()
}

fn default_slots() -> Vec<String> {
    DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect()
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
    /// 1. Environment variables (ARCALAB__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("ARCALAB")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.booking.slots.is_empty() {
            return Err("Booking needs at least one time slot".to_string());
        }
        if timezones::get_by_name(&self.booking.timezone).is_none() {
            return Err(format!("Unknown booking timezone: {}", self.booking.timezone));
        }
        if self.email.enabled
            && (self.email.from_address.is_empty() || self.email.contact_address.is_empty())
        {
            return Err("Email is enabled but from_address or contact_address is empty".to_string());
        }
        Ok(())
    }
}
