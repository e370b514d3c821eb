// Build-time configuration
//
// The browser has no process environment, so settings are baked in when the
// bundle is compiled: `ROSTER_API_URL=https://crm.example.com trunk build`.

use std::sync::OnceLock;
use tracing::Level;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Backend base address, without a trailing slash.
    pub api_base_url: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("ROSTER_API_URL"), option_env!("ROSTER_LOG"))
    }

    fn resolve(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<Level>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            api_base_url,
            log_level,
        }
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(Config::from_build_env)
}
