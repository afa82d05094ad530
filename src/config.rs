use std::env;
use std::fs;
use std::time::Duration;

use thiserror::Error;

use crate::domain::Mood;
use crate::pipeline::MoodPolicy;
use crate::reliability::RetryPolicy;

const DEFAULT_HTTP_PORT: u16 = 8000;
const DEFAULT_LLM_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_LLM_MODEL: &str = "llama-3.3-70b-versatile";
const MAX_RECOMMENDATION_COUNT: u8 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {source}")]
    Invalid {
        name: &'static str,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to read {name}: {source}")]
    SecretFile {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Text-generation backend settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Bound on a whole invocation, retries included. The HTTP client has no
    /// separate request timeout.
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub http_port: u16,
    pub llm: LlmSettings,
    pub recommendation_count: u8,
    /// `None` rejects unrecognized moods.
    pub mood_fallback: Option<Mood>,
    /// `["*"]` allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if `GROQ_API_KEY` is missing or any value fails to
    /// parse or validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        let http_port = vars.parse_or("HTTP_PORT", DEFAULT_HTTP_PORT)?;
        let api_key = vars.secret("GROQ_API_KEY")?;
        let base_url = vars.string_or("LLM_BASE_URL", DEFAULT_LLM_BASE_URL);
        let model = vars.string_or("LLM_MODEL", DEFAULT_LLM_MODEL);
        let temperature = vars.parse_or("LLM_TEMPERATURE", 0.0_f32)?;
        let max_tokens = vars.parse_or("LLM_MAX_TOKENS", 1024_u32)?;
        let timeout = Duration::from_secs(vars.parse_or("LLM_TIMEOUT_SECS", 60_u64)?);

        // Retry settings (exponential backoff + jitter); 1 attempt = no retry
        let retry = RetryPolicy {
            max_attempts: vars.parse_or("LLM_MAX_ATTEMPTS", 1_u32)?,
            base_delay: Duration::from_millis(vars.parse_or("LLM_BACKOFF_BASE_MS", 250_u64)?),
            max_delay: Duration::from_millis(vars.parse_or("LLM_BACKOFF_CAP_MS", 4000_u64)?),
            jitter: true,
        };

        let recommendation_count = vars.parse_or("RECOMMENDATION_COUNT", 5_u8)?;
        let mood_fallback = match vars.get("MOOD_FALLBACK") {
            Some(raw) => Some(Mood::parse(&raw).ok_or_else(|| ConfigError::Invalid {
                name: "MOOD_FALLBACK",
                source: anyhow::anyhow!("unknown mood {raw:?}"),
            })?),
            None => None,
        };
        let cors_allowed_origins = vars
            .string_or("CORS_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        let settings = Settings {
            http_port,
            llm: LlmSettings {
                base_url,
                api_key,
                model,
                temperature,
                max_tokens,
                timeout,
                retry,
            },
            recommendation_count,
            mood_fallback,
            cors_allowed_origins,
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_port(self.http_port)?;
        ensure(
            "GROQ_API_KEY",
            !self.llm.api_key.trim().is_empty(),
            "API key cannot be empty",
        )?;
        ensure(
            "LLM_BASE_URL",
            self.llm.base_url.starts_with("http://") || self.llm.base_url.starts_with("https://"),
            "base URL must be http(s)",
        )?;
        ensure(
            "LLM_MODEL",
            !self.llm.model.trim().is_empty(),
            "model cannot be empty",
        )?;
        ensure(
            "LLM_TEMPERATURE",
            (0.0..=2.0).contains(&self.llm.temperature),
            "temperature must be within 0..=2",
        )?;
        ensure(
            "LLM_MAX_TOKENS",
            self.llm.max_tokens > 0,
            "max tokens must be positive",
        )?;
        ensure(
            "LLM_TIMEOUT_SECS",
            !self.llm.timeout.is_zero(),
            "timeout must be positive",
        )?;
        ensure(
            "LLM_MAX_ATTEMPTS",
            self.llm.retry.max_attempts >= 1,
            "at least one attempt is required",
        )?;
        ensure(
            "LLM_BACKOFF_CAP_MS",
            self.llm.retry.max_delay >= self.llm.retry.base_delay,
            "backoff cap must not be below the base delay",
        )?;
        ensure(
            "RECOMMENDATION_COUNT",
            (1..=MAX_RECOMMENDATION_COUNT).contains(&self.recommendation_count),
            "recommendation count must be within 1..=10",
        )?;
        ensure(
            "CORS_ALLOWED_ORIGINS",
            !self.cors_allowed_origins.is_empty(),
            "at least one origin is required",
        )?;
        Ok(())
    }

    #[must_use]
    pub fn mood_policy(&self) -> MoodPolicy {
        self.mood_fallback.map_or(MoodPolicy::Reject, MoodPolicy::ClampTo)
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), ConfigError> {
    ensure("HTTP_PORT", port != 0, "Port cannot be 0")
}

fn ensure(name: &'static str, ok: bool, reason: &'static str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            name,
            source: anyhow::anyhow!(reason),
        })
    }
}

struct Vars<'a, F>(&'a F);

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.0)(name).filter(|v| !v.trim().is_empty())
    }

    fn string_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    fn parse_or<T>(&self, name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match self.get(name) {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
                name,
                source: anyhow::Error::new(e),
            }),
            None => Ok(default),
        }
    }

    /// Read a value from environment variable, with support for _FILE suffix (Docker Secrets)
    fn secret(&self, name: &'static str) -> Result<String, ConfigError> {
        let file_var = format!("{name}_FILE");
        if let Some(path) = self.get(&file_var) {
            return fs::read_to_string(&path)
                .map(|content| content.trim().to_string())
                .map_err(|source| ConfigError::SecretFile {
                    name: file_var,
                    source,
                });
        }
        self.get(name).ok_or(ConfigError::Missing(name))
    }
}
