use std::fmt::Debug;

use super::Credential;

#[cfg(test)]
use mockall::automock;

/// Read-only lookup over the configured login identities.
///
/// Built once at startup and never mutated afterwards, so a shared reference
/// is safe to use from any number of concurrent requests.
#[cfg_attr(test, automock)]
pub trait CredentialStore: Send + Sync + Debug {
    /// Find the credential matching both username and password exactly
    fn authenticate(&self, username: &str, password: &str) -> Option<Credential>;
}
