//! Student domain
//!
//! Entity, business-rule validation and the repository capability for the
//! student roster.

mod entity;
mod repository;
mod validation;

pub use entity::{Student, StudentId};
pub use repository::StudentRepository;
pub use validation::{
    validate_student, validate_student_id, StudentValidationError, MAX_AGE, MAX_COURSES, MIN_AGE,
};

#[cfg(test)]
pub use repository::MockStudentRepository;
