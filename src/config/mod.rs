//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuthSettings, JwtSettings, LogFormat, LoggingConfig, ServerConfig,
    StorageBackend, StorageConfig, UserCredentialConfig, DEFAULT_EXPIRY_MINUTES,
};
