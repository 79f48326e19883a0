//! In-memory student repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::student::{Student, StudentId, StudentRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Inner {
    students: HashMap<String, Student>,
    /// Insertion order, so listings are stable
    order: Vec<String>,
}

/// In-memory implementation of StudentRepository
///
/// Each operation is atomic for its own id; nothing spans operations.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStudentRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStudentRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

fn generate_id() -> StudentId {
    StudentId::new(Uuid::new_v4().simple().to_string())
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, DomainError> {
        let inner = self.inner.read().await;

        Ok(inner
            .order
            .iter()
            .filter_map(|key| inner.students.get(key).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.students.get(id.as_str()).cloned())
    }

    async fn insert(&self, mut student: Student) -> Result<Student, DomainError> {
        let id = generate_id();
        student.assign_id(id.clone());

        let mut inner = self.inner.write().await;
        let key = id.as_str().to_string();
        inner.students.insert(key.clone(), student.clone());
        inner.order.push(key);

        Ok(student)
    }

    async fn replace(&self, id: &StudentId, mut student: Student) -> Result<(), DomainError> {
        student.assign_id(id.clone());

        let mut inner = self.inner.write().await;

        // Replacing a missing id is a no-op, like a document store's replace-one
        if let Some(existing) = inner.students.get_mut(id.as_str()) {
            *existing = student;
        }

        Ok(())
    }

    async fn delete(&self, id: &StudentId) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;

        if inner.students.remove(id.as_str()).is_some() {
            inner.order.retain(|key| key != id.as_str());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_student(name: &str) -> Student {
        Student::new(name, 21, "Other").with_courses(["Biology"])
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let repo = InMemoryStudentRepository::new();

        let stored = repo.insert(create_test_student("Ann")).await.unwrap();
        let id = stored.id().unwrap().clone();

        assert!(!id.as_str().is_empty());
        assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_insert_ignores_caller_id() {
        let repo = InMemoryStudentRepository::new();
        let student = create_test_student("Ann").with_id(StudentId::new("chosen"));

        let stored = repo.insert(student).await.unwrap();
        assert_ne!(stored.id().unwrap().as_str(), "chosen");
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryStudentRepository::new();

        for name in ["Ann", "Ben", "Cat"] {
            repo.insert(create_test_student(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["Ann", "Ben", "Cat"]);
    }

    #[tokio::test]
    async fn test_replace_overwrites_all_fields() {
        let repo = InMemoryStudentRepository::new();
        let stored = repo.insert(create_test_student("Ann")).await.unwrap();
        let id = stored.id().unwrap().clone();

        let replacement = Student::new("Annie", 22, "Female").with_graduated(true);
        repo.replace(&id, replacement).await.unwrap();

        let found = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.name(), "Annie");
        assert_eq!(found.age(), 22);
        assert!(found.graduated());
        assert!(found.courses().is_none());
        assert_eq!(found.id(), Some(&id));
    }

    #[tokio::test]
    async fn test_replace_missing_is_noop() {
        let repo = InMemoryStudentRepository::new();

        repo.replace(&StudentId::new("missing"), create_test_student("Ann"))
            .await
            .unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryStudentRepository::new();
        let stored = repo.insert(create_test_student("Ann")).await.unwrap();
        let id = stored.id().unwrap().clone();

        repo.delete(&id).await.unwrap();

        assert!(repo.find_by_id(&id).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
