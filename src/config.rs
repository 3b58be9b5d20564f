use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarConfig {
    /// IANA name used to decide which day is "today"
    pub timezone: String,
    /// Food labels shown per slot in the weekly grid
    pub preview_limit: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALPREP__CALENDAR__TIMEZONE, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("calendar.timezone", "UTC")?
            .set_default(
                "calendar.preview_limit",
                mealprep_mealplan::DEFAULT_PREVIEW_LIMIT as u64,
            )?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.log_format", default_log_format())?;

        let config_file_path = config_path
            .or_else(|| env::var("MEALPREP_CONFIG").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Missing file is fine, defaults and environment still apply
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALPREP")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.calendar.preview_limit == 0 {
            return Err("Calendar preview_limit must be at least 1".to_string());
        }
        if time_tz::timezones::get_by_name(&self.calendar.timezone).is_none() {
            return Err(format!(
                "Unknown calendar timezone: {}",
                self.calendar.timezone
            ));
        }
        if !matches!(self.observability.log_format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Log format must be \"pretty\" or \"json\", got {}",
                self.observability.log_format
            ));
        }
        Ok(())
    }
}
