pub mod app_config;
pub mod config;
pub mod posts;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use posts::{Period, RawPost, MAX_POSTS_RANGE};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid period \"{0}\": expected one of 24h, 3d, 7d")]
    InvalidPeriod(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
