//! Shared configuration and HTTP plumbing for the `kraddr` address clients.

pub mod app_config;
pub mod config;
pub mod http;

pub use app_config::{
    AppConfig, DEFAULT_JUSO_ENDPOINT, DEFAULT_USER_AGENT, DEFAULT_VWORLD_ENDPOINT,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use http::{build_http_client, TypedResponse};

use thiserror::Error;

/// Errors raised while resolving [`AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
