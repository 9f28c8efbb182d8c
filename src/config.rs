//! App Configuration
//!
//! Build-time settings for the frontend.

use recipe_api::ApiConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub log_level: log::LevelFilter,
}

impl AppConfig {
    /// Read `RECIPE_API_BASE_URL` and `RECIPE_LOG_LEVEL` baked in at compile time
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            log_level: parse_level(option_env!("RECIPE_LOG_LEVEL")),
        }
    }

    /// Level handed to `console_log`; `off` still logs at `info`
    pub fn console_level(&self) -> log::Level {
        self.log_level.to_level().unwrap_or(log::Level::Info)
    }
}

fn parse_level(raw: Option<&str>) -> log::LevelFilter {
    raw.and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), log::LevelFilter::Debug);
        assert_eq!(parse_level(Some("WARN")), log::LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud")), log::LevelFilter::Info);
        assert_eq!(parse_level(None), log::LevelFilter::Info);
    }

    #[test]
    fn test_console_level() {
        let mut config = AppConfig::from_env();
        config.log_level = log::LevelFilter::Debug;
        assert_eq!(config.console_level(), log::Level::Debug);
        config.log_level = log::LevelFilter::Off;
        assert_eq!(config.console_level(), log::Level::Info);
    }
}
