//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Secret used when `JWT_SECRET` is not set. Only suitable for local development.
pub const DEVELOPMENT_SECRET: &str = "palindrome-messages-development-secret";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Environment tag stamped into every issued token
    pub app_env: String,
    /// HMAC secret used to sign and verify tokens
    pub jwt_secret: String,
    /// Lifespan of an issued token in seconds
    pub token_lifespan: u64,
    /// bcrypt cost factor
    pub salt_rounds: u32,
    /// Lifespan of a server-side session in seconds
    pub session_ttl: u64,
    /// Whether palindrome verdicts are cached
    pub cache_enabled: bool,
    /// TTL in seconds of a cached palindrome verdict
    pub cache_ttl: u64,
    /// Maximum number of cached verdicts
    pub cache_max_entries: usize,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Super-admin account seeded at startup, if both parts are present
    pub super_admin_email: Option<String>,
    pub super_admin_password: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `APP_ENV` - Environment tag (default: development)
    /// - `JWT_SECRET` - Token signing secret (default: development secret)
    /// - `TOKEN_LIFESPAN` - Token lifespan in seconds (default: 86400)
    /// - `SALT_ROUNDS` - bcrypt cost (default: 10)
    /// - `SESSION_TTL` - Session lifespan in seconds (default: 86400)
    /// - `CACHE_ENABLED` - Cache palindrome verdicts (default: true)
    /// - `PALINDROME_CACHE_TTL` - Verdict TTL in seconds (default: 3600)
    /// - `CACHE_MAX_ENTRIES` - Maximum cached verdicts (default: 10000)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60)
    /// - `SUPERADMIN_EMAIL` / `SUPERADMIN_PASSWORD` - Optional seeded account
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            app_env: env::var("APP_ENV").unwrap_or(defaults.app_env),
            jwt_secret: env::var("JWT_SECRET")
                .ok()
                .filter(|secret| !secret.is_empty())
                .unwrap_or(defaults.jwt_secret),
            token_lifespan: parse_var("TOKEN_LIFESPAN").unwrap_or(defaults.token_lifespan),
            salt_rounds: parse_var("SALT_ROUNDS").unwrap_or(defaults.salt_rounds),
            session_ttl: parse_var("SESSION_TTL").unwrap_or(defaults.session_ttl),
            cache_enabled: parse_var("CACHE_ENABLED").unwrap_or(defaults.cache_enabled),
            cache_ttl: parse_var("PALINDROME_CACHE_TTL").unwrap_or(defaults.cache_ttl),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES")
                .unwrap_or(defaults.cache_max_entries),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            super_admin_email: env::var("SUPERADMIN_EMAIL").ok(),
            super_admin_password: env::var("SUPERADMIN_PASSWORD").ok(),
        }
    }

    /// True when the signing secret is the built-in development value.
    pub fn uses_development_secret(&self) -> bool {
        self.jwt_secret == DEVELOPMENT_SECRET
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            app_env: "development".to_string(),
            jwt_secret: DEVELOPMENT_SECRET.to_string(),
            token_lifespan: 86_400,
            salt_rounds: 10,
            session_ttl: 86_400,
            cache_enabled: true,
            cache_ttl: 3600,
            cache_max_entries: 10_000,
            cleanup_interval: 60,
            super_admin_email: None,
            super_admin_password: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_ttl, 3600);
        assert_eq!(config.salt_rounds, 10);
        assert!(config.cache_enabled);
        assert!(config.uses_development_secret());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("JWT_SECRET");
        env::remove_var("PALINDROME_CACHE_TTL");
        env::remove_var("CACHE_ENABLED");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cache_ttl, 3600);
        assert!(config.cache_enabled);
        assert!(config.uses_development_secret());
    }
}
