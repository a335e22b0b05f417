/**
 * Server Configuration
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by the binary first, if present).
 *
 * | Variable         | Default                 | Notes                         |
 * |------------------|-------------------------|-------------------------------|
 * | `SERVER_PORT`    | `8080`                  |                               |
 * | `DATABASE_URL`   | unset                   | unset → in-memory stores      |
 * | `JWT_SECRET`     | required                | at least 32 bytes             |
 * | `TOKEN_TTL_SECS` | `86400`                 | 1..=31536000 (one year)       |
 * | `BCRYPT_COST`    | `bcrypt::DEFAULT_COST`  | 4..=31                        |
 *
 * A missing or invalid signing secret is fatal at startup; it is never
 * replaced by a built-in default.
 */

use chrono::Duration;
use sqlx::PgPool;
use thiserror::Error;

use crate::backend::auth::sessions::{MAX_TOKEN_TTL_SECS, MIN_SECRET_BYTES};

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Default token lifetime (24 hours)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("signing secret must be at least {min} bytes")]
    WeakSecret { min: usize },

    #[error("failed to initialise password hasher: {0}")]
    Hasher(#[from] crate::backend::auth::password::HashError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,
    /// Postgres connection string; `None` selects the in-memory stores
    pub database_url: Option<String>,
    /// HMAC secret for session tokens
    pub jwt_secret: String,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match get("SERVER_PORT") {
            Some(raw) => parse_number::<u16>("SERVER_PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        if jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::WeakSecret {
                min: MIN_SECRET_BYTES,
            });
        }

        let ttl_secs = match get("TOKEN_TTL_SECS") {
            Some(raw) => parse_number::<i64>("TOKEN_TTL_SECS", &raw)?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };
        let token_ttl = Some(ttl_secs)
            .filter(|secs| (1..=MAX_TOKEN_TTL_SECS).contains(secs))
            .and_then(Duration::try_seconds)
            .ok_or_else(|| ConfigError::InvalidValue {
                name: "TOKEN_TTL_SECS",
                reason: format!("must be between 1 and {}", MAX_TOKEN_TTL_SECS),
            })?;

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(raw) => parse_number::<u32>("BCRYPT_COST", &raw)?,
            None => bcrypt::DEFAULT_COST,
        };
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                reason: format!("{} is outside 4..=31", bcrypt_cost),
            });
        }

        Ok(Self {
            port,
            database_url: get("DATABASE_URL"),
            jwt_secret,
            token_ttl,
            bcrypt_cost,
        })
    }
}

fn parse_number<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        name,
        reason: e.to_string(),
    })
}

/// Connect to Postgres and run migrations
///
/// Unlike a missing `DATABASE_URL`, a configured database that cannot be
/// reached or migrated is a startup error.
pub async fn load_database(database_url: &str) -> Result<PgPool, ConfigError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
