//! Application state shared by the HTTP handlers

use std::sync::Arc;

use crate::infrastructure::auth::TokenIssuer;
use crate::infrastructure::student::StudentService;

/// Roles allowed to mutate the roster when none are configured
pub const DEFAULT_WRITE_ROLES: [&str; 2] = ["Admin", "Moderator"];

/// Application state containing shared services
#[derive(Clone, Debug)]
pub struct AppState {
    pub student_service: StudentService,
    pub token_issuer: Arc<TokenIssuer>,
    write_roles: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(
        student_service: StudentService,
        token_issuer: Arc<TokenIssuer>,
        write_roles: Vec<String>,
    ) -> Self {
        let write_roles = if write_roles.is_empty() {
            DEFAULT_WRITE_ROLES.iter().map(|r| r.to_string()).collect()
        } else {
            write_roles
        };

        Self {
            student_service,
            token_issuer,
            write_roles: Arc::new(write_roles),
        }
    }

    /// Whether the role may create, update or delete students
    pub fn can_write(&self, role: &str) -> bool {
        self.write_roles.iter().any(|r| r == role)
    }
}
