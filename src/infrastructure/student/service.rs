//! Student service: business rules in front of the student repository

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::student::{
    validate_student, validate_student_id, Student, StudentId, StudentRepository,
    StudentValidationError,
};
use crate::domain::DomainError;

/// Student service for roster management.
///
/// Every mutation is validated before the repository is touched. Repository
/// failures are returned unchanged and never retried.
///
/// `update` and `remove` look the record up and then mutate it in a separate
/// repository call. Two callers racing on the same id can interleave between
/// those calls; nothing here closes that window.
#[derive(Clone)]
pub struct StudentService {
    repository: Arc<dyn StudentRepository>,
}

impl std::fmt::Debug for StudentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudentService").finish_non_exhaustive()
    }
}

impl StudentService {
    /// Create a new student service
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    /// List all students
    pub async fn get_all(&self) -> Result<Vec<Student>, DomainError> {
        let students = self.repository.find_all().await?;
        info!(count = students.len(), "Fetched all students");
        Ok(students)
    }

    /// Get a student by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Student, DomainError> {
        let id = parse_id(id)?;

        let student = self.find_existing(&id).await?;
        info!(id = %id, "Student found");

        Ok(student)
    }

    /// Create a new student and return it with its assigned ID
    pub async fn create(&self, student: Option<Student>) -> Result<Student, DomainError> {
        let student = student.ok_or_else(|| {
            warn!("Create rejected: student is missing");
            DomainError::from(StudentValidationError::MissingStudent)
        })?;

        check_rules(&student, "Create")?;

        let created = self.repository.insert(student).await?;
        info!(id = ?created.id().map(StudentId::as_str), "Student created");

        Ok(created)
    }

    /// Replace every field of an existing student
    pub async fn update(&self, id: &str, student: Option<Student>) -> Result<(), DomainError> {
        let id = parse_id(id)?;

        // Only existence matters; the stored values are not merged
        self.find_existing(&id).await?;

        let student = student.ok_or_else(|| {
            warn!(id = %id, "Update rejected: student is missing");
            DomainError::from(StudentValidationError::MissingStudent)
        })?;

        check_rules(&student, "Update")?;

        self.repository.replace(&id, student).await?;
        info!(id = %id, "Student updated");

        Ok(())
    }

    /// Delete a student
    pub async fn remove(&self, id: &str) -> Result<(), DomainError> {
        let id = parse_id(id)?;

        self.find_existing(&id).await?;

        self.repository.delete(&id).await?;
        info!(id = %id, "Student deleted");

        Ok(())
    }

    async fn find_existing(&self, id: &StudentId) -> Result<Student, DomainError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!(id = %id, "Student not found");
            DomainError::not_found(format!("Student with Id={} not found.", id))
        })
    }
}

fn parse_id(id: &str) -> Result<StudentId, DomainError> {
    validate_student_id(id).map_err(|e| {
        warn!("Rejected request without a student id");
        DomainError::from(e)
    })?;

    Ok(StudentId::new(id))
}

/// Apply the business rules, and flag records that pass them while still
/// breaking the stricter record schema
fn check_rules(student: &Student, operation: &str) -> Result<(), DomainError> {
    validate_student(Some(student)).map_err(|e| {
        warn!(operation, reason = %e, "Student rejected");
        DomainError::from(e)
    })?;

    let violations = student.model_violations();
    if !violations.is_empty() {
        warn!(
            operation,
            fields = ?violations,
            "Student accepted by business rules but outside the record schema"
        );
    }

    Ok(())
}
