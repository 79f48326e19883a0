//! Access token issuance and validation

use std::fmt::Debug;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::JwtSettings;
use crate::domain::{Credential, CredentialStore, DomainError};

/// Minimum signing secret length, in UTF-8 bytes, for HMAC-SHA-256
pub const MIN_SECRET_BYTES: usize = 32;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (username)
    pub sub: String,
    /// Role granted to the subject
    pub role: String,
    /// Issuer identity
    pub iss: String,
    /// Audience identity
    pub aud: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl AccessClaims {
    /// Create claims for an authenticated credential
    pub fn new(
        credential: &Credential,
        config: &JwtConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let exp = config
            .lifetime()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| DomainError::internal("Token expiry is out of range"))?;

        Ok(Self {
            sub: credential.username().to_string(),
            role: credential.role().to_string(),
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        })
    }

    pub fn username(&self) -> &str {
        &self.sub
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

/// Configuration for the token issuer
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiry_minutes: i64,
}

impl JwtConfig {
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expiry_minutes: i64,
    ) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            expiry_minutes,
        }
    }

    /// Token lifetime, `None` when the minutes do not fit a duration
    fn lifetime(&self) -> Option<TimeDelta> {
        TimeDelta::try_minutes(self.expiry_minutes)
    }

    /// Fail unless the secret is at least 32 bytes of UTF-8 and the token
    /// lifetime is a positive, representable number of minutes
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.secret.trim().is_empty() || self.secret.len() < MIN_SECRET_BYTES {
            return Err(DomainError::configuration(format!(
                "JWT secret key must be at least {} bytes long",
                MIN_SECRET_BYTES
            )));
        }

        if self.expiry_minutes <= 0 || self.lifetime().is_none() {
            return Err(DomainError::configuration(format!(
                "JWT expiry must be a positive number of minutes, got {}",
                self.expiry_minutes
            )));
        }

        Ok(())
    }
}

impl From<&JwtSettings> for JwtConfig {
    fn from(settings: &JwtSettings) -> Self {
        Self::new(
            &settings.secret_key,
            &settings.issuer,
            &settings.audience,
            settings.expiry_minutes(),
        )
    }
}

impl Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[hidden]")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiry_minutes", &self.expiry_minutes)
            .finish()
    }
}

/// Result of a successful login
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub username: String,
    pub role: String,
    pub expires_at: DateTime<Utc>,
}

/// Authenticates credential pairs and mints HS256-signed access tokens.
///
/// Holds only immutable state, so one instance is shared across requests.
#[derive(Clone)]
pub struct TokenIssuer {
    config: JwtConfig,
    credentials: Arc<dyn CredentialStore>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl TokenIssuer {
    /// Create an issuer; a secret shorter than 32 bytes is a fatal
    /// configuration error
    pub fn new(
        config: JwtConfig,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self, DomainError> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Ok(Self {
            config,
            credentials,
            encoding_key,
            decoding_key,
        })
    }

    /// Authenticate a username and password and issue a token
    pub fn login(&self, username: &str, password: &str) -> Result<IssuedToken, DomainError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            warn!("Login rejected: username or password missing");
            return Err(DomainError::bad_request(
                "Username and password are required.",
            ));
        }

        let credential = self
            .credentials
            .authenticate(username, password)
            .ok_or_else(|| {
                warn!(username = %username, "Login rejected: invalid credentials");
                DomainError::unauthorized("Invalid username or password.")
            })?;

        let issued = self.issue(&credential, Utc::now())?;
        info!(username = %issued.username, role = %issued.role, "Access token issued");

        Ok(issued)
    }

    /// Sign a token for an already authenticated credential
    pub fn issue(
        &self,
        credential: &Credential,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, DomainError> {
        let claims = AccessClaims::new(credential, &self.config, now)?;

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to generate JWT: {}", e)))?;

        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| DomainError::internal("Token expiry is out of range"))?;

        Ok(IssuedToken {
            token,
            username: claims.sub,
            role: claims.role,
            expires_at,
        })
    }

    /// Verify signature, issuer, audience and expiry and return the claims
    pub fn validate(&self, token: &str) -> Result<AccessClaims, DomainError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| DomainError::unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }

    pub fn expiry_minutes(&self) -> i64 {
        self.config.expiry_minutes
    }
}
