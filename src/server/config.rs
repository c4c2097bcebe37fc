use std::{str::FromStr, time::Duration};

use crate::server::error::config::ConfigError;

pub static DEFAULT_SCORING_API_URL: &str = "https://api.deepseek.com/chat/completions";
pub static DEFAULT_SCORING_MODEL: &str = "deepseek-chat";

pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub session_ttl_hours: i64,
    pub db_max_connections: u32,
    pub db_idle_timeout: Duration,
    pub scoring_api_url: String,
    /// Oracle is disabled when no key is configured
    pub scoring_api_key: Option<String>,
    pub scoring_model: String,
    pub scoring_timeout: Duration,
    pub seed_demo_accounts: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            server_port: parsed("SERVER_PORT", 8080)?,
            session_ttl_hours: parsed("SESSION_TTL_HOURS", 24)?,
            db_max_connections: parsed("DB_MAX_CONNECTIONS", 10)?,
            db_idle_timeout: Duration::from_secs(parsed("DB_IDLE_TIMEOUT_SECS", 300)?),
            scoring_api_url: optional("SCORING_API_URL")
                .unwrap_or_else(|| DEFAULT_SCORING_API_URL.to_string()),
            scoring_api_key: optional("SCORING_API_KEY"),
            scoring_model: optional("SCORING_MODEL")
                .unwrap_or_else(|| DEFAULT_SCORING_MODEL.to_string()),
            scoring_timeout: Duration::from_secs(parsed("SCORING_TIMEOUT_SECS", 10)?),
            seed_demo_accounts: parsed("SEED_DEMO_ACCOUNTS", false)?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

/// Non-empty value of `var`
fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

fn parsed<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect the default when the variable is unset
    #[test]
    fn test_parsed_uses_default_when_unset() {
        let value: u16 = parsed("TRAINHUB_TEST_UNSET_PORT", 8080).unwrap();

        assert_eq!(value, 8080);
    }

    /// Expect InvalidEnvValue naming the variable when parsing fails
    #[test]
    fn test_parsed_rejects_garbage() {
        std::env::set_var("TRAINHUB_TEST_BAD_PORT", "eighty");

        let result: Result<u16, ConfigError> = parsed("TRAINHUB_TEST_BAD_PORT", 8080);

        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvValue { .. }));
        assert_eq!(err.var(), "TRAINHUB_TEST_BAD_PORT");
    }

    /// Expect MissingEnvVar for an absent required variable
    #[test]
    fn test_required_missing() {
        let result = required("TRAINHUB_TEST_MISSING_URL");

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }
}
