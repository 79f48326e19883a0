//! Student repository trait

use async_trait::async_trait;

use super::entity::{Student, StudentId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Capability set over the student collection.
///
/// Implementations hold no business logic. Backend failures are returned
/// as-is and callers must not retry them.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// List every stored student
    async fn find_all(&self) -> Result<Vec<Student>, DomainError>;

    /// Get a student by ID
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DomainError>;

    /// Store a new student, assigning its ID, and return the stored record
    async fn insert(&self, student: Student) -> Result<Student, DomainError>;

    /// Overwrite every field of the student stored under `id`
    async fn replace(&self, id: &StudentId, student: Student) -> Result<(), DomainError>;

    /// Remove the student stored under `id`
    async fn delete(&self, id: &StudentId) -> Result<(), DomainError>;
}
