//! Infrastructure layer - External service implementations

pub mod auth;
pub mod credentials;
pub mod logging;
pub mod student;
