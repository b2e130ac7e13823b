use std::env;
use std::fmt;
use std::time::Duration;

const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the assessment service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub generative: Option<GenerativeConfig>,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let default_profile = env::var("READINESS_PROFILE")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "auto".to_string());

        let generative = GenerativeConfig::from_env()?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw).ok_or(ConfigError::InvalidLogFormat(raw))?,
            Err(_) => LogFormat::for_environment(environment),
        };

        Ok(Self {
            environment,
            scoring: ScoringConfig { default_profile },
            generative,
            telemetry: TelemetryConfig {
                log_level,
                format: log_format,
            },
        })
    }
}

/// Profile selection defaults applied when a request names none.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Registered profile name, or `auto` to detect the vertical from evidence.
    pub default_profile: String,
}

/// Connection settings for the OpenAI-compatible recommendation backend.
///
/// Absent entirely when no API key is configured, in which case every
/// assessment uses the template recommendations.
#[derive(Clone)]
pub struct GenerativeConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl GenerativeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
        }
    }

    fn from_env() -> Result<Option<Self>, ConfigError> {
        let api_key = env::var("READINESS_LLM_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let Some(api_key) = api_key else {
            return Ok(None);
        };

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("READINESS_LLM_BASE_URL") {
            config.base_url = base_url.trim().to_string();
        }
        if let Ok(model) = env::var("READINESS_LLM_MODEL") {
            config.model = model.trim().to_string();
        }
        if let Ok(raw) = env::var("READINESS_LLM_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout)?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(Some(config))
    }
}

impl fmt::Debug for GenerativeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerativeConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Layout of log lines on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, colored output for local runs.
    Pretty,
    /// Single-line, uncolored output for CI and production log collectors.
    Compact,
}

impl LogFormat {
    pub fn for_environment(environment: AppEnvironment) -> Self {
        match environment {
            AppEnvironment::Development => Self::Pretty,
            AppEnvironment::Test | AppEnvironment::Production => Self::Compact,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Level for this workspace's crates, or a full filter directive list.
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTimeout,
    InvalidLogFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTimeout => {
                write!(f, "READINESS_LLM_TIMEOUT_SECS must be a positive integer")
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT must be `pretty` or `compact`, got `{value}`")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_LOG_FORMAT");
        env::remove_var("READINESS_PROFILE");
        env::remove_var("READINESS_LLM_API_KEY");
        env::remove_var("OPENAI_API_KEY");
        env::remove_var("READINESS_LLM_BASE_URL");
        env::remove_var("READINESS_LLM_MODEL");
        env::remove_var("READINESS_LLM_TIMEOUT_SECS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.scoring.default_profile, "auto");
        assert!(config.generative.is_none());
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.format, LogFormat::Pretty);
    }

    #[test]
    fn log_format_follows_environment_unless_overridden() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.telemetry.format, LogFormat::Compact);

        env::set_var("APP_LOG_FORMAT", "Pretty");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.telemetry.format, LogFormat::Pretty);

        env::set_var("APP_LOG_FORMAT", "json");
        let err = AppConfig::load().expect_err("unknown format rejected");
        assert!(matches!(err, ConfigError::InvalidLogFormat(ref value) if value == "json"));
        reset_env();
    }

    #[test]
    fn api_key_enables_generative_backend() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("READINESS_LLM_TIMEOUT_SECS", "5");
        let config = AppConfig::load().expect("config loads");
        let generative = config.generative.expect("backend configured");
        assert_eq!(generative.api_key, "sk-test");
        assert_eq!(generative.model, DEFAULT_LLM_MODEL);
        assert_eq!(generative.timeout, Duration::from_secs(5));
        assert!(!format!("{generative:?}").contains("sk-test"));
        reset_env();
    }

    #[test]
    fn rejects_zero_timeout() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("READINESS_LLM_API_KEY", "sk-test");
        env::set_var("READINESS_LLM_TIMEOUT_SECS", "0");
        let err = AppConfig::load().expect_err("zero timeout rejected");
        assert!(matches!(err, ConfigError::InvalidTimeout));
        reset_env();
    }
}
