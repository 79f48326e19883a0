use serde::Deserialize;

/// Token lifetime used when `jwt.expiry_minutes` is missing or not an integer
pub const DEFAULT_EXPIRY_MINUTES: i64 = 60;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub jwt: JwtSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Which store backs the student collection
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    #[serde(alias = "memory", alias = "in-memory", alias = "in_memory")]
    InMemory,
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Connection URL, required for the postgres backend
    pub url: Option<String>,
    /// Collection (table) holding student documents
    pub table: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

/// Token signing settings
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct JwtSettings {
    /// HMAC signing secret; must be at least 32 bytes of UTF-8
    pub secret_key: String,
    pub issuer: String,
    pub audience: String,
    /// Kept as text so a malformed value falls back to the default
    pub expiry_minutes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// Login identities; the demo set is used when empty
    pub users: Vec<UserCredentialConfig>,
    /// Roles allowed to create, update and delete students
    pub write_roles: Vec<String>,
}

#[derive(Clone, Deserialize)]
pub struct UserCredentialConfig {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            url: None,
            table: "studentcourses".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            write_roles: vec!["Admin".to_string(), "Moderator".to_string()],
        }
    }
}

impl JwtSettings {
    /// Token lifetime in minutes, defaulting to 60 when absent or unparseable
    pub fn expiry_minutes(&self) -> i64 {
        self.expiry_minutes
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_EXPIRY_MINUTES)
    }
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret_key", &"[hidden]")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiry_minutes", &self.expiry_minutes)
            .finish()
    }
}

impl std::fmt::Debug for UserCredentialConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentialConfig")
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .field("role", &self.role)
            .finish()
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
