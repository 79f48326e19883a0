//! PostgreSQL student repository implementation
//!
//! Students are stored as JSONB documents keyed by id in a single table.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::Row;
use std::time::Duration;
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::domain::student::{Student, StudentId, StudentRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of StudentRepository
#[derive(Debug, Clone)]
pub struct PostgresStudentRepository {
    pool: PgPool,
    table: String,
}

impl PostgresStudentRepository {
    /// Create a repository over an existing pool
    pub fn new(pool: PgPool, table: impl Into<String>) -> Result<Self, DomainError> {
        let table = table.into();
        validate_table_name(&table)?;

        Ok(Self { pool, table })
    }

    /// Connect a pool from storage settings and make sure the table exists
    pub async fn connect(config: &StorageConfig) -> Result<Self, DomainError> {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| DomainError::configuration("storage.url is required for postgres"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .connect(url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        let repository = Self::new(pool, &config.table)?;
        repository.ensure_table().await?;

        Ok(repository)
    }

    /// Create the document table if missing
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        let query = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id VARCHAR(64) PRIMARY KEY,
                data JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            self.table
        );

        sqlx::query(&query)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create table: {}", e)))?;

        Ok(())
    }
}

/// Table names are interpolated into SQL, so only plain identifiers pass
fn validate_table_name(table: &str) -> Result<(), DomainError> {
    let mut chars = table.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

    if !valid_start || !valid_rest || table.len() > 63 {
        return Err(DomainError::configuration(format!(
            "Invalid storage table name '{}'",
            table
        )));
    }

    Ok(())
}

/// Documents are stored without their id; the id lives in its own column
fn to_document(mut student: Student) -> Json<Student> {
    student.clear_id();
    Json(student)
}

fn row_to_student(row: &PgRow) -> Result<Student, DomainError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| DomainError::storage(format!("Failed to read student id: {}", e)))?;
    let Json(mut student): Json<Student> = row
        .try_get("data")
        .map_err(|e| DomainError::storage(format!("Failed to decode student '{}': {}", id, e)))?;

    student.assign_id(StudentId::new(id));
    Ok(student)
}

#[async_trait]
impl StudentRepository for PostgresStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, DomainError> {
        let query = format!("SELECT id, data FROM {} ORDER BY created_at, id", self.table);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list students: {}", e)))?;

        rows.iter().map(row_to_student).collect()
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DomainError> {
        let query = format!("SELECT id, data FROM {} WHERE id = $1", self.table);

        let row = sqlx::query(&query)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get student: {}", e)))?;

        row.as_ref().map(row_to_student).transpose()
    }

    async fn insert(&self, student: Student) -> Result<Student, DomainError> {
        let id = StudentId::new(Uuid::new_v4().simple().to_string());
        let query = format!("INSERT INTO {} (id, data) VALUES ($1, $2)", self.table);

        sqlx::query(&query)
            .bind(id.as_str())
            .bind(to_document(student.clone()))
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to insert student: {}", e)))?;

        Ok(student.with_id(id))
    }

    async fn replace(&self, id: &StudentId, student: Student) -> Result<(), DomainError> {
        let query = format!(
            "UPDATE {} SET data = $2, updated_at = NOW() WHERE id = $1",
            self.table
        );

        sqlx::query(&query)
            .bind(id.as_str())
            .bind(to_document(student))
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to replace student: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, id: &StudentId) -> Result<(), DomainError> {
        let query = format!("DELETE FROM {} WHERE id = $1", self.table);

        sqlx::query(&query)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete student: {}", e)))?;

        Ok(())
    }
}
