//! Application configuration.
//!
//! `AppConfig` is loaded once at startup from `.env` and the process environment
//! and then handed to whatever needs it. Nothing in the workspace reads the
//! environment after that point.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default maximum length (in characters) of a sanitized feedback paragraph.
pub const DEFAULT_MAX_FEEDBACK_CHARS: usize = 1500;

/// Origins allowed to call the API when `ALLOWED_ORIGINS` is not set.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] =
    &["http://localhost:3000", "https://tvp6l8-2222.csb.app"];

/// Errors raised while reading configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Complete application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub server: ServerConfig,
    pub log: LogConfig,
    pub gemini: GeminiConfig,
    pub max_feedback_chars: usize,
    /// Whether 500 responses carry the upstream error text in `details`.
    pub expose_error_details: bool,
}

/// HTTP listener and CORS settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

/// Logging sinks and filter.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub file: String,
    pub to_stdout: bool,
}

/// Settings for the Gemini text-generation client.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    /// Thinking budget sent with every request; 0 disables thinking for faster replies.
    pub thinking_budget: u32,
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("thinking_budget", &self.thinking_budget)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.5-flash".into(),
            base_url: "https://generativelanguage.googleapis.com".into(),
            timeout: Duration::from_secs(30),
            thinking_budget: 0,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from `.env` and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `lookup` returns `None` for unset variables. Tests use this to avoid
    /// touching the real process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let env = var("APP_ENV").unwrap_or_else(|| "development".into());
        let is_production = env.eq_ignore_ascii_case("production");

        let allowed_origins = match var("ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        let defaults = GeminiConfig::default();
        let gemini = GeminiConfig {
            api_key: var("GOOGLE_GENAI_API_KEY")
                .or_else(|| var("GEMINI_API_KEY"))
                .unwrap_or_default(),
            model: var("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: var("GEMINI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout: Duration::from_secs(parse_or(
                "GEMINI_TIMEOUT_SECS",
                var("GEMINI_TIMEOUT_SECS"),
                30u64,
            )?),
            thinking_budget: parse_or(
                "GEMINI_THINKING_BUDGET",
                var("GEMINI_THINKING_BUDGET"),
                0u32,
            )?,
        };

        Ok(Self {
            project_name: var("PROJECT_NAME").unwrap_or_else(|| "literasi-feedback".into()),
            server: ServerConfig {
                host: var("HOST").unwrap_or_else(|| "0.0.0.0".into()),
                port: parse_or("PORT", var("PORT"), 3001u16)?,
                allowed_origins,
            },
            log: LogConfig {
                level: var("LOG_LEVEL").unwrap_or_else(|| "api=info,feedback=info".into()),
                file: var("LOG_FILE").unwrap_or_else(|| "api.log".into()),
                to_stdout: parse_bool("LOG_TO_STDOUT", var("LOG_TO_STDOUT"), true)?,
            },
            gemini,
            max_feedback_chars: parse_or(
                "FEEDBACK_MAX_CHARS",
                var("FEEDBACK_MAX_CHARS"),
                DEFAULT_MAX_FEEDBACK_CHARS,
            )?,
            expose_error_details: parse_bool(
                "EXPOSE_ERROR_DETAILS",
                var("EXPOSE_ERROR_DETAILS"),
                !is_production,
            )?,
            env,
        })
    }

    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_bool(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match raw.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(default),
        Some(v) if matches!(v.as_str(), "true" | "1" | "yes") => Ok(true),
        Some(v) if matches!(v.as_str(), "false" | "0" | "no") => Ok(false),
        Some(v) => Err(ConfigError::Invalid {
            key,
            value: v,
            reason: "expected true or false".into(),
        }),
    }
}
