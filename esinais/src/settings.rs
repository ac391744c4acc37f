use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Default tracing filter; `RUST_LOG` wins when set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    #[serde(default = "default_profile_save_delay_ms")]
    pub profile_save_delay_ms: u64,

    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    #[serde(default = "default_profile_name")]
    pub profile_name: String,

    #[serde(default = "default_profile_email")]
    pub profile_email: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_profile_save_delay_ms() -> u64 {
    1500
}

fn default_max_input_chars() -> usize {
    5000
}

fn default_profile_name() -> String {
    "João Admin".to_string()
}

fn default_profile_email() -> String {
    "admin@esinais.com".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dark_mode: false,
            tick_rate_ms: default_tick_rate_ms(),
            profile_save_delay_ms: default_profile_save_delay_ms(),
            max_input_chars: default_max_input_chars(),
            profile_name: default_profile_name(),
            profile_email: default_profile_email(),
        }
    }
}

impl Settings {
    /// Load from the optional TOML file named by `ESINAIS_CONFIG`
    /// (default `esinais.toml`), then `ESINAIS__*` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("ESINAIS_CONFIG").unwrap_or_else(|_| "esinais.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix("ESINAIS").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.log_level.trim().is_empty() {
            return Err("log_level must not be empty".to_string());
        }
        if self.tick_rate_ms == 0 {
            return Err("tick_rate_ms must be greater than zero".to_string());
        }
        if self.max_input_chars == 0 {
            return Err("max_input_chars must be greater than zero".to_string());
        }
        if self.profile_name.trim().is_empty() {
            return Err("profile_name is required".to_string());
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn profile_save_delay(&self) -> Duration {
        Duration::from_millis(self.profile_save_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.profile_save_delay(), Duration::from_millis(1500));
        assert_eq!(settings.max_input_chars, 5000);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::from_toml(
            r#"
            dark_mode = true
            profile_save_delay_ms = 10
            profile_name = "Dani Intérprete"
            "#,
        )
        .unwrap();

        assert!(settings.dark_mode);
        assert_eq!(settings.profile_save_delay_ms, 10);
        assert_eq!(settings.profile_name, "Dani Intérprete");
        assert_eq!(settings.tick_rate_ms, 100);
    }

    #[test]
    fn test_validate_rejects_zero_tick_rate() {
        let settings = Settings {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(Settings::from_toml("max_input_chars = \"lots\"").is_err());
    }
}
