use serde::Deserialize;

/// A login identity: username, password and the role granted on success.
///
/// Credentials live outside the student collection and are never persisted
/// by the roster.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credential {
    username: String,
    password: String,
    role: String,
}

impl Credential {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: role.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// Exact, case-sensitive match on both username and password
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .field("role", &self.role)
            .finish()
    }
}
