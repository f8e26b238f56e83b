use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_CACHE_TTL_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Runtime configuration, resolved from `SYNASSIST_*` environment variables.
#[derive(Debug, Clone)]
pub struct SynassistConfig {
    pub log_level: String,
    pub cache_ttl_secs: u64,
}

impl Default for SynassistConfig {
    fn default() -> Self {
        let log_level = env::var("SYNASSIST_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let cache_ttl_secs = env::var("SYNASSIST_CACHE_TTL")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_CACHE_TTL_SECS);

        Self {
            log_level,
            cache_ttl_secs,
        }
    }
}

impl SynassistConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Cache TTL must be at least 1 second".to_string(),
            ));
        }
        if self.cache_ttl_secs > 3600 {
            return Err(ConfigError::ValidationFailed(
                "Cache TTL cannot exceed 1 hour".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl fmt::Display for SynassistConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Synassist Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Cache TTL: {}s", self.cache_ttl_secs)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = [
            EnvGuard::unset("SYNASSIST_LOG_LEVEL"),
            EnvGuard::unset("SYNASSIST_CACHE_TTL"),
        ];

        let config = SynassistConfig::default();

        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.cache_ttl_secs, DEFAULT_CACHE_TTL_SECS);
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = [
            EnvGuard::set("SYNASSIST_LOG_LEVEL", "DEBUG"),
            EnvGuard::set("SYNASSIST_CACHE_TTL", "120"),
        ];

        let config = SynassistConfig::default();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.cache_ttl_secs, 120);
    }

    #[test]
    #[serial]
    fn test_invalid_ttl_falls_back_to_default() {
        let _guard = EnvGuard::set("SYNASSIST_CACHE_TTL", "not-a-number");

        let config = SynassistConfig::default();
        assert_eq!(config.cache_ttl_secs, DEFAULT_CACHE_TTL_SECS);
    }

    #[test]
    fn test_validation_valid() {
        let config = SynassistConfig {
            log_level: "info".to_string(),
            cache_ttl_secs: 60,
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_ttl() {
        let config = SynassistConfig {
            log_level: "info".to_string(),
            cache_ttl_secs: 0,
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("at least 1"));
    }

    #[test]
    fn test_validation_oversized_ttl() {
        let config = SynassistConfig {
            log_level: "info".to_string(),
            cache_ttl_secs: 7200,
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let config = SynassistConfig {
            log_level: "loud".to_string(),
            cache_ttl_secs: 60,
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("loud"));
    }

    #[test]
    fn test_config_display() {
        let config = SynassistConfig {
            log_level: "info".to_string(),
            cache_ttl_secs: 60,
        };
        let display = format!("{}", config);
        assert!(display.contains("Synassist Configuration:"));
        assert!(display.contains("Cache TTL: 60s"));
    }
}
