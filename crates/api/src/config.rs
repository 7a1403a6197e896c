use axum::http::HeaderValue;

/// Configuration problems detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Upper bound on pooled connections (default: `20`).
    pub database_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default    |
    /// |----------------------------|------------|
    /// | `HOST`                     | `0.0.0.0`  |
    /// | `PORT`                     | `8080`     |
    /// | `DATABASE_URL`             | (required) |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`       |
    /// | `CORS_ORIGINS`             | `*`        |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(&lookup, "PORT", 8080u16)?;

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let database_max_connections = parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 20u32)?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                reason: "must be at least 1".into(),
            });
        }

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in cors_origins.iter().filter(|o| o.as_str() != "*") {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                reason: format!("'{origin}': {e}"),
            })?;
        }

        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            cors_origins,
            request_timeout_secs,
        })
    }

    /// Whether CORS should accept requests from any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: format!("'{raw}': {e}"),
        }),
    }
}
