//! Credential infrastructure module

mod static_store;

pub use static_store::StaticCredentialStore;
