//! Fixed, in-memory credential store

use crate::config::UserCredentialConfig;
use crate::domain::{Credential, CredentialStore};

/// Credential store backed by an immutable list supplied at startup
#[derive(Debug, Clone)]
pub struct StaticCredentialStore {
    credentials: Vec<Credential>,
}

impl StaticCredentialStore {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    /// The three demo identities shipped with the roster
    pub fn demo() -> Self {
        Self::new(vec![
            Credential::new("User1", "password1", "Admin"),
            Credential::new("User2", "password2", "Moderator"),
            Credential::new("User3", "password3", "ReadOnly"),
        ])
    }

    /// Build from configuration, falling back to the demo identities when
    /// none are configured
    pub fn from_config(users: &[UserCredentialConfig]) -> Self {
        if users.is_empty() {
            tracing::warn!("No login credentials configured, using demo credentials");
            return Self::demo();
        }

        Self::new(
            users
                .iter()
                .map(|u| Credential::new(&u.username, &u.password, &u.role))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl CredentialStore for StaticCredentialStore {
    fn authenticate(&self, username: &str, password: &str) -> Option<Credential> {
        self.credentials
            .iter()
            .find(|c| c.matches(username, password))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_credentials() {
        let store = StaticCredentialStore::demo();

        assert_eq!(store.len(), 3);
        assert_eq!(
            store.authenticate("User1", "password1").unwrap().role(),
            "Admin"
        );
        assert_eq!(
            store.authenticate("User3", "password3").unwrap().role(),
            "ReadOnly"
        );
    }

    #[test]
    fn test_wrong_password_and_unknown_user_look_the_same() {
        let store = StaticCredentialStore::demo();

        assert!(store.authenticate("User1", "wrongpass").is_none());
        assert!(store.authenticate("Nobody", "password1").is_none());
    }

    #[test]
    fn test_password_of_another_user_rejected() {
        let store = StaticCredentialStore::demo();
        assert!(store.authenticate("User1", "password2").is_none());
    }

    #[test]
    fn test_from_config() {
        let users = vec![UserCredentialConfig {
            username: "registrar".to_string(),
            password: "s3cret".to_string(),
            role: "Admin".to_string(),
        }];
        let store = StaticCredentialStore::from_config(&users);

        assert_eq!(store.len(), 1);
        assert!(store.authenticate("registrar", "s3cret").is_some());
        assert!(store.authenticate("User1", "password1").is_none());
    }

    #[test]
    fn test_from_empty_config_uses_demo() {
        let store = StaticCredentialStore::from_config(&[]);
        assert_eq!(store.len(), 3);
    }
}
