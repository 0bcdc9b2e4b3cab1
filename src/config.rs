//! Environment-driven server configuration resolved once at startup.

use std::env;

/// MongoDB URI used when `MONGO_URI` is not set.
const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017";
/// Database name used when `MONGO_DB` is not set.
const DEFAULT_DATABASE: &str = "multimedia_db";
/// Listen port used when neither `PORT` nor `SERVER_PORT` is set.
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct ServerConfig {
    /// MongoDB connection string.
    pub mongo_uri: String,
    /// Name of the database holding the asset and score collections.
    pub database: String,
    /// TCP port the HTTP server binds to.
    pub port: u16,
}

impl ServerConfig {
    /// Resolve the configuration from environment variables, falling back to
    /// built-in defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mongo_uri = env::var("MONGO_URI").unwrap_or_else(|_| DEFAULT_MONGO_URI.into());
        let database = env::var("MONGO_DB").unwrap_or_else(|_| DEFAULT_DATABASE.into());
        let port = resolve_port(
            env::var("PORT").ok().as_deref(),
            env::var("SERVER_PORT").ok().as_deref(),
        );

        Self {
            mongo_uri,
            database,
            port,
        }
    }
}

/// Pick the listen port from `PORT`, then `SERVER_PORT`, then the default.
fn resolve_port(port: Option<&str>, server_port: Option<&str>) -> u16 {
    port.or(server_port)
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(resolve_port(None, None), DEFAULT_PORT);
    }

    #[test]
    fn port_prefers_port_over_server_port() {
        assert_eq!(resolve_port(Some("9000"), Some("9001")), 9000);
    }

    #[test]
    fn port_falls_back_to_server_port() {
        assert_eq!(resolve_port(None, Some("9001")), 9001);
    }

    #[test]
    fn unparsable_port_uses_default() {
        assert_eq!(resolve_port(Some("not-a-port"), None), DEFAULT_PORT);
    }
}
