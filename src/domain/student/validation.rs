//! Business rules applied to every student create and update

use thiserror::Error;

use super::entity::Student;
use crate::domain::DomainError;

/// Errors that can occur during student validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StudentValidationError {
    #[error("Student cannot be null.")]
    MissingStudent,

    #[error("Student Id is required.")]
    EmptyId,

    #[error("Student name is required.")]
    EmptyName,

    #[error("Age must be between 0 and 120.")]
    AgeOutOfRange(i32),

    #[error("Gender must be Male, Female, or Other.")]
    InvalidGender(String),

    #[error("A student cannot enroll in more than 5 courses.")]
    TooManyCourses(usize),
}

pub const MIN_AGE: i32 = 0;
pub const MAX_AGE: i32 = 120;
pub const MAX_COURSES: usize = 5;

/// Lowercase gender values accepted by the business rules
const ALLOWED_GENDERS: [&str; 3] = ["male", "female", "other"];

impl From<StudentValidationError> for DomainError {
    fn from(err: StudentValidationError) -> Self {
        match err {
            StudentValidationError::MissingStudent => DomainError::null_input(err.to_string()),
            _ => DomainError::invalid_argument(err.to_string()),
        }
    }
}

/// Validate a caller-supplied student id
///
/// Rules:
/// - Cannot be empty or whitespace only
pub fn validate_student_id(id: &str) -> Result<(), StudentValidationError> {
    if is_blank(id) {
        return Err(StudentValidationError::EmptyId);
    }

    Ok(())
}

/// Validate a student record against the business rules.
///
/// Checks run in order and stop at the first failure:
/// 1. the student must be present
/// 2. name must not be blank
/// 3. age must be within [0, 120]
/// 4. a non-blank gender must be male, female or other, ignoring case
/// 5. at most 5 courses when courses are present
pub fn validate_student(student: Option<&Student>) -> Result<(), StudentValidationError> {
    let student = student.ok_or(StudentValidationError::MissingStudent)?;

    if is_blank(student.name()) {
        return Err(StudentValidationError::EmptyName);
    }

    if !(MIN_AGE..=MAX_AGE).contains(&student.age()) {
        return Err(StudentValidationError::AgeOutOfRange(student.age()));
    }

    let gender = student.gender();
    if !is_blank(gender) && !ALLOWED_GENDERS.contains(&gender.to_lowercase().as_str()) {
        return Err(StudentValidationError::InvalidGender(gender.to_string()));
    }

    if let Some(courses) = student.courses() {
        if courses.len() > MAX_COURSES {
            return Err(StudentValidationError::TooManyCourses(courses.len()));
        }
    }

    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_student() -> Student {
        Student::new("Grace Hopper", 25, "Female")
    }

    #[test]
    fn test_valid_student() {
        assert!(validate_student(Some(&valid_student())).is_ok());
    }

    #[test]
    fn test_missing_student() {
        assert_eq!(
            validate_student(None),
            Err(StudentValidationError::MissingStudent)
        );
    }

    #[test]
    fn test_blank_names() {
        for name in ["", " ", "\t\n  "] {
            let student = Student::new(name, 25, "Female");
            assert_eq!(
                validate_student(Some(&student)),
                Err(StudentValidationError::EmptyName)
            );
        }
    }

    #[test]
    fn test_age_boundaries() {
        for age in [0, 1, 60, 119, 120] {
            let student = Student::new("Grace", age, "Female");
            assert!(validate_student(Some(&student)).is_ok(), "age {age}");
        }

        for age in [-1, 121, i32::MIN, i32::MAX] {
            let student = Student::new("Grace", age, "Female");
            assert_eq!(
                validate_student(Some(&student)),
                Err(StudentValidationError::AgeOutOfRange(age))
            );
        }
    }

    #[test]
    fn test_gender_case_insensitive() {
        for gender in ["Male", "male", "MALE", "Female", "fEmAlE", "Other", "OTHER"] {
            let student = Student::new("Grace", 25, gender);
            assert!(validate_student(Some(&student)).is_ok(), "gender {gender}");
        }
    }

    #[test]
    fn test_gender_rejected() {
        for gender in ["Unknown", "m", "males", " male"] {
            let student = Student::new("Grace", 25, gender);
            assert_eq!(
                validate_student(Some(&student)),
                Err(StudentValidationError::InvalidGender(gender.to_string()))
            );
        }
    }

    #[test]
    fn test_blank_gender_accepted() {
        for gender in ["", "   "] {
            let student = Student::new("Grace", 25, gender);
            assert!(validate_student(Some(&student)).is_ok());
        }
    }

    #[test]
    fn test_course_limit() {
        let six = Student::new("Grace", 25, "Female")
            .with_courses(["C1", "C2", "C3", "C4", "C5", "C6"]);
        assert_eq!(
            validate_student(Some(&six)),
            Err(StudentValidationError::TooManyCourses(6))
        );

        let five = Student::new("Grace", 25, "Female").with_courses(["C1", "C2", "C3", "C4", "C5"]);
        assert!(validate_student(Some(&five)).is_ok());

        let empty = Student::new("Grace", 25, "Female").with_courses(Vec::<String>::new());
        assert!(validate_student(Some(&empty)).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        let student = Student::new(" ", 500, "robot").with_courses(["a"; 9]);
        assert_eq!(
            validate_student(Some(&student)),
            Err(StudentValidationError::EmptyName)
        );
    }

    #[test]
    fn test_validate_student_id() {
        assert!(validate_student_id("99").is_ok());
        assert_eq!(validate_student_id(""), Err(StudentValidationError::EmptyId));
        assert_eq!(validate_student_id("   "), Err(StudentValidationError::EmptyId));
    }

    #[test]
    fn test_domain_error_mapping() {
        assert!(matches!(
            DomainError::from(StudentValidationError::MissingStudent),
            DomainError::NullInput { .. }
        ));
        assert!(matches!(
            DomainError::from(StudentValidationError::AgeOutOfRange(121)),
            DomainError::InvalidArgument { .. }
        ));
        assert_eq!(
            DomainError::from(StudentValidationError::AgeOutOfRange(121)).message(),
            "Age must be between 0 and 120."
        );
    }
}
