//! Student entity and related types

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Exact, case-sensitive gender values accepted by the record schema
static GENDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(Male|Female|Other)$").expect("gender pattern is valid"));

/// Opaque student identifier assigned by the persistence layer.
///
/// The core never parses or interprets the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<StudentId> for String {
    fn from(id: StudentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student record.
///
/// The `validate` attributes describe the record schema (name length, age
/// in [1, 120], case-sensitive gender). They are reported through
/// [`Student::model_violations`] but do not decide acceptance; the business
/// rules in `validation` do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Student {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<StudentId>,

    #[validate(length(min = 2, max = 50))]
    name: String,

    #[validate(range(min = 1, max = 120))]
    age: i32,

    #[serde(default)]
    #[validate(regex(path = *GENDER_PATTERN))]
    gender: String,

    #[serde(default)]
    graduated: bool,

    /// Absent and empty are distinct
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5))]
    courses: Option<Vec<String>>,
}

impl Student {
    /// Create a new, not yet persisted student
    pub fn new(name: impl Into<String>, age: i32, gender: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            gender: gender.into(),
            graduated: false,
            courses: None,
        }
    }

    pub fn with_graduated(mut self, graduated: bool) -> Self {
        self.graduated = graduated;
        self
    }

    pub fn with_courses<I, S>(mut self, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.courses = Some(courses.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_id(mut self, id: StudentId) -> Self {
        self.id = Some(id);
        self
    }

    // Getters

    pub fn id(&self) -> Option<&StudentId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn graduated(&self) -> bool {
        self.graduated
    }

    pub fn courses(&self) -> Option<&[String]> {
        self.courses.as_deref()
    }

    // Mutators

    /// Set the identifier; used by repositories on insert and replace
    pub fn assign_id(&mut self, id: StudentId) {
        self.id = Some(id);
    }

    /// Drop the identifier, e.g. before storing the body as a document
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Names of the fields that break the record schema, sorted.
    ///
    /// Empty when the record satisfies every schema constraint.
    pub fn model_violations(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let mut fields: Vec<String> = errors
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect();
                fields.sort();
                fields
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_student() -> Student {
        Student::new("Ada Lovelace", 20, "Female").with_courses(["Math", "Physics"])
    }

    #[test]
    fn test_student_creation() {
        let student = create_test_student();

        assert!(student.id().is_none());
        assert_eq!(student.name(), "Ada Lovelace");
        assert_eq!(student.age(), 20);
        assert_eq!(student.gender(), "Female");
        assert!(!student.graduated());
        assert_eq!(student.courses().unwrap().len(), 2);
    }

    #[test]
    fn test_assign_and_clear_id() {
        let mut student = create_test_student();

        student.assign_id(StudentId::new("abc123"));
        assert_eq!(student.id().unwrap().as_str(), "abc123");

        student.clear_id();
        assert!(student.id().is_none());
    }

    #[test]
    fn test_serialization_omits_missing_id_and_courses() {
        let student = Student::new("Bob", 30, "Male");
        let json = serde_json::to_value(&student).unwrap();

        assert!(json.get("id").is_none());
        assert!(json.get("courses").is_none());
        assert_eq!(json["name"], "Bob");
        assert_eq!(json["graduated"], false);
    }

    #[test]
    fn test_deserialization_distinguishes_empty_courses() {
        let absent: Student =
            serde_json::from_str(r#"{"name":"Bob","age":30,"gender":"Male"}"#).unwrap();
        let empty: Student =
            serde_json::from_str(r#"{"name":"Bob","age":30,"gender":"Male","courses":[]}"#)
                .unwrap();

        assert!(absent.courses().is_none());
        assert_eq!(empty.courses(), Some(&[][..]));
    }

    #[test]
    fn test_id_is_transparent_string() {
        let student = create_test_student().with_id(StudentId::new("507f1f77bcf86cd799439011"));
        let json = serde_json::to_value(&student).unwrap();

        assert_eq!(json["id"], "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_model_violations_clean_record() {
        assert!(create_test_student().model_violations().is_empty());
    }

    #[test]
    fn test_model_violations_are_stricter_than_business_rules() {
        // Age 0 and lowercase gender pass the business rules but not the schema
        let student = Student::new("Al", 0, "male");
        assert_eq!(student.model_violations(), vec!["age", "gender"]);
    }

    #[test]
    fn test_model_violations_name_length() {
        assert_eq!(Student::new("A", 20, "Other").model_violations(), vec!["name"]);
        assert_eq!(
            Student::new("a".repeat(51), 20, "Other").model_violations(),
            vec!["name"]
        );
        assert!(Student::new("a".repeat(50), 20, "Other")
            .model_violations()
            .is_empty());
    }

    #[test]
    fn test_model_violations_blank_gender_and_courses() {
        let student = Student::new("Carol", 40, "")
            .with_courses(["C1", "C2", "C3", "C4", "C5", "C6"]);

        assert_eq!(student.model_violations(), vec!["courses", "gender"]);
    }
}
