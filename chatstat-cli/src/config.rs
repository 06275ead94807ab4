use analysis::{ReportOptions, DEFAULT_CHRONO_COUNT, DEFAULT_TOP_LIMIT};
use chatstat_core::{ChatStatError, Result};
use std::env;

/// Analyzer settings, loaded from the environment and overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub top_limit: usize,
    pub chrono_count: usize,
    /// Log file appended to in addition to stderr.
    pub log_file: Option<String>,
}

/// Values given on the command line; `None` falls back to the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub top_limit: Option<usize>,
    pub chrono_count: Option<usize>,
}

impl AnalyzerConfig {
    /// Reads `CHATSTAT_TOP_LIMIT`, `CHATSTAT_CHRONO_COUNT` and `CHATSTAT_LOG_FILE`.
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        let top_limit = match overrides.top_limit {
            Some(v) => v,
            None => env_usize("CHATSTAT_TOP_LIMIT", DEFAULT_TOP_LIMIT)?,
        };
        let chrono_count = match overrides.chrono_count {
            Some(v) => v,
            None => env_usize("CHATSTAT_CHRONO_COUNT", DEFAULT_CHRONO_COUNT)?,
        };
        let log_file = env::var("CHATSTAT_LOG_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Ok(Self {
            top_limit,
            chrono_count,
            log_file,
        })
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            top_limit: self.top_limit,
            chrono_count: self.chrono_count,
        }
    }
}

fn env_usize(key: &str, default: usize) -> Result<usize> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| {
                ChatStatError::Config(format!(
                    "{key} must be a non-negative integer, got {raw:?}"
                ))
            }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("CHATSTAT_TOP_LIMIT");
        env::remove_var("CHATSTAT_CHRONO_COUNT");
        env::remove_var("CHATSTAT_LOG_FILE");
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();

        let config = AnalyzerConfig::load(ConfigOverrides::default()).unwrap();

        assert_eq!(config.top_limit, 7);
        assert_eq!(config.chrono_count, 10);
        assert!(config.log_file.is_none());
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("CHATSTAT_TOP_LIMIT", "3");
        env::set_var("CHATSTAT_CHRONO_COUNT", " 5 ");
        env::set_var("CHATSTAT_LOG_FILE", "logs/chatstat.log");

        let config = AnalyzerConfig::load(ConfigOverrides::default()).unwrap();

        assert_eq!(config.top_limit, 3);
        assert_eq!(config.chrono_count, 5);
        assert_eq!(config.log_file.as_deref(), Some("logs/chatstat.log"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_overrides() {
        clear_env();
        env::set_var("CHATSTAT_TOP_LIMIT", "3");

        let config = AnalyzerConfig::load(ConfigOverrides {
            top_limit: Some(12),
            chrono_count: Some(1),
        })
        .unwrap();

        assert_eq!(config.top_limit, 12);
        assert_eq!(config.chrono_count, 1);
        assert_eq!(
            config.report_options(),
            ReportOptions {
                top_limit: 12,
                chrono_count: 1
            }
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_invalid_number() {
        clear_env();
        env::set_var("CHATSTAT_TOP_LIMIT", "-1");

        let err = AnalyzerConfig::load(ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, ChatStatError::Config(_)));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_log_file_is_ignored() {
        clear_env();
        env::set_var("CHATSTAT_LOG_FILE", "  ");

        let config = AnalyzerConfig::load(ConfigOverrides::default()).unwrap();
        assert!(config.log_file.is_none());

        clear_env();
    }
}
