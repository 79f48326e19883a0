//! Student Roster
//!
//! Student records behind token-protected HTTP endpoints:
//! - CRUD over a student repository (in-memory or PostgreSQL)
//! - Business-rule validation ahead of every write
//! - Bearer tokens issued from a fixed credential set

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{
    auth::{JwtConfig, TokenIssuer},
    credentials::StaticCredentialStore,
    student::{create_student_repository, StudentService},
};
use tracing::info;

/// Create the application state with all services initialized
///
/// Fails when the signing secret is too short or storage cannot be reached.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let credentials = StaticCredentialStore::from_config(&config.auth.users);
    info!(count = credentials.len(), "Loaded login credentials");

    let token_issuer = TokenIssuer::new(JwtConfig::from(&config.jwt), Arc::new(credentials))?;
    info!(
        issuer = %config.jwt.issuer,
        expiry_minutes = token_issuer.expiry_minutes(),
        "Token issuer ready"
    );

    let repository = create_student_repository(&config.storage).await?;
    let student_service = StudentService::new(repository);

    Ok(AppState::new(
        student_service,
        Arc::new(token_issuer),
        config.auth.write_roles.clone(),
    ))
}
