//! Repository factory for runtime storage selection

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::domain::student::StudentRepository;
use crate::domain::DomainError;

use super::in_memory::InMemoryStudentRepository;
use super::postgres_repository::PostgresStudentRepository;

/// Build the student repository selected by the storage settings
pub async fn create_student_repository(
    config: &StorageConfig,
) -> Result<Arc<dyn StudentRepository>, DomainError> {
    match config.backend {
        StorageBackend::InMemory => {
            info!("Using in-memory student storage");
            Ok(Arc::new(InMemoryStudentRepository::new()))
        }
        StorageBackend::Postgres => {
            info!(table = %config.table, "Using PostgreSQL student storage");
            let repository = PostgresStudentRepository::connect(config).await?;
            Ok(Arc::new(repository))
        }
    }
}
