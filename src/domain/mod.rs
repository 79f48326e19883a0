//! Domain layer - Core business rules and entities

pub mod credentials;
pub mod error;
pub mod student;

pub use credentials::{Credential, CredentialStore};
pub use error::DomainError;
pub use student::{
    validate_student, validate_student_id, Student, StudentId, StudentRepository,
    StudentValidationError,
};
