//! Authentication infrastructure module
//!
//! Token issuance for the fixed credential set and validation of bearer
//! tokens presented to the API.

mod jwt;

pub use jwt::{AccessClaims, IssuedToken, JwtConfig, TokenIssuer, MIN_SECRET_BYTES};
