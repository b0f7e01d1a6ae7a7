use crate::app_config::{AppConfig, Environment};
use crate::posts::{Period, MAX_POSTS_RANGE};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// config. Tests drive this with a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("BUZZMETER_ENV", "development"));
    let log_level = or_default("BUZZMETER_LOG_LEVEL", "info");

    let max_posts = parse_usize("BUZZMETER_MAX_POSTS", "50")?;
    if !MAX_POSTS_RANGE.contains(&max_posts) {
        return Err(ConfigError::InvalidEnvVar {
            var: "BUZZMETER_MAX_POSTS".to_string(),
            reason: format!(
                "{max_posts} is outside {}..={}",
                MAX_POSTS_RANGE.start(),
                MAX_POSTS_RANGE.end()
            ),
        });
    }

    let sample_size = parse_usize("BUZZMETER_SAMPLE_SIZE", "5")?;

    let period = or_default("BUZZMETER_PERIOD", "7d")
        .parse::<Period>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "BUZZMETER_PERIOD".to_string(),
            reason: e.to_string(),
        })?;

    Ok(AppConfig {
        env,
        log_level,
        max_posts,
        sample_size,
        period,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
