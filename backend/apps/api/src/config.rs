//! Server Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).
//! Any invalid value aborts startup.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::PasswordCost;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000";
const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Where the database lives
pub enum DatabaseConfig {
    /// `DATABASE_URL`
    Url(String),
    /// `DB_USER`, `DB_PASS`, `DB_NAME`, `DB_SSL`, `DB_HOST`, `DB_PORT`
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        name: String,
        ssl_mode: String,
    },
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        match self {
            DatabaseConfig::Url(url) => {
                PgConnectOptions::from_str(url).context("DATABASE_URL is not a valid Postgres URL")
            }
            DatabaseConfig::Parts {
                host,
                port,
                user,
                password,
                name,
                ssl_mode,
            } => {
                let ssl_mode = PgSslMode::from_str(ssl_mode)
                    .with_context(|| format!("DB_SSL has unknown mode {ssl_mode:?}"))?;

                Ok(PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .password(password)
                    .database(name)
                    .ssl_mode(ssl_mode))
            }
        }
    }
}

/// Everything `main` needs to start serving
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub database: DatabaseConfig,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:8000")?;

        let database = match get("DATABASE_URL") {
            Some(url) => DatabaseConfig::Url(url),
            None => DatabaseConfig::Parts {
                host: get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: env_or(&get, "DB_PORT", 5432)?,
                user: get("DB_USER").context("DB_USER must be set when DATABASE_URL is not")?,
                password: get("DB_PASS").context("DB_PASS must be set when DATABASE_URL is not")?,
                name: get("DB_NAME").context("DB_NAME must be set when DATABASE_URL is not")?,
                ssl_mode: get("DB_SSL").unwrap_or_else(|| "prefer".to_string()),
            },
        };

        let frontend_origins = get("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let auth = auth_config(&get)?;

        Ok(Self {
            bind_addr,
            database,
            frontend_origins,
            auth,
        })
    }
}

fn auth_config<G>(get: &G) -> anyhow::Result<AuthConfig>
where
    G: Fn(&str) -> Option<String>,
{
    let defaults = PasswordCost::default();
    let password_cost = PasswordCost {
        memory_kib: env_or(get, "PASSWORD_HASH_MEMORY_KIB", defaults.memory_kib)?,
        iterations: env_or(get, "PASSWORD_HASH_ITERATIONS", defaults.iterations)?,
        parallelism: env_or(get, "PASSWORD_HASH_PARALLELISM", defaults.parallelism)?,
    };

    let token_ttl_secs: u64 = env_or(get, "AUTH_TOKEN_TTL_SECS", 3600)?;
    if !(1..=MAX_TOKEN_TTL_SECS).contains(&token_ttl_secs) {
        bail!("AUTH_TOKEN_TTL_SECS must be between 1 and {MAX_TOKEN_TTL_SECS}");
    }
    let token_ttl = Duration::from_secs(token_ttl_secs);

    let token_secret = match get("AUTH_TOKEN_SECRET") {
        Some(secret_b64) => {
            let secret = platform::crypto::from_base64(&secret_b64)
                .context("AUTH_TOKEN_SECRET must be base64")?;
            if secret.is_empty() {
                bail!("AUTH_TOKEN_SECRET decodes to an empty key");
            }
            secret
        }
        None if cfg!(debug_assertions) => {
            tracing::warn!(
                "AUTH_TOKEN_SECRET not set, using a random key; tokens will not survive a restart"
            );
            AuthConfig::with_random_secret().token_secret
        }
        None => bail!("AUTH_TOKEN_SECRET must be set in production"),
    };

    Ok(AuthConfig {
        token_secret,
        token_ttl,
        password_cost,
        password_pepper: get("AUTH_PASSWORD_PEPPER").map(String::into_bytes),
    })
}

/// Parse `key` if set, otherwise fall back to `default`
fn env_or<G, T>(get: &G, key: &str, default: T) -> anyhow::Result<T>
where
    G: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has invalid value {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    const SECRET: (&str, &str) = ("AUTH_TOKEN_SECRET", "c2VjcmV0LWtleQ==");
    const URL: (&str, &str) = ("DATABASE_URL", "postgres://u:p@localhost/blog");

    #[test]
    fn test_defaults() {
        let config = load(&[URL, SECRET]).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.frontend_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.auth.token_secret, b"secret-key");
        assert_eq!(config.auth.token_ttl, Duration::from_secs(3600));
        assert_eq!(config.auth.password_cost, PasswordCost::default());
        assert!(config.auth.password_pepper.is_none());
        assert!(matches!(config.database, DatabaseConfig::Url(_)));
    }

    #[test]
    fn test_database_parts() {
        let config = load(&[
            SECRET,
            ("DB_USER", "blog"),
            ("DB_PASS", "pw"),
            ("DB_NAME", "blog"),
            ("DB_SSL", "disable"),
        ])
        .unwrap();

        match &config.database {
            DatabaseConfig::Parts { host, port, ssl_mode, .. } => {
                assert_eq!(host, "localhost");
                assert_eq!(*port, 5432);
                assert_eq!(ssl_mode, "disable");
            }
            DatabaseConfig::Url(_) => panic!("expected parts"),
        }
        assert!(config.database.connect_options().is_ok());
    }

    #[test]
    fn test_missing_database_settings() {
        let err = load(&[SECRET, ("DB_USER", "blog")]).err().unwrap();
        assert!(err.to_string().contains("DB_PASS"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(load(&[URL, SECRET, ("BIND_ADDR", "nope")]).is_err());
        assert!(load(&[URL, SECRET, ("AUTH_TOKEN_TTL_SECS", "-1")]).is_err());
        assert!(load(&[URL, ("AUTH_TOKEN_SECRET", "%%%")]).is_err());

        let config = load(&[
            SECRET,
            ("DB_USER", "u"),
            ("DB_PASS", "p"),
            ("DB_NAME", "n"),
            ("DB_SSL", "sometimes"),
        ])
        .unwrap();
        assert!(config.database.connect_options().is_err());
    }

    #[test]
    fn test_token_ttl_bounds() {
        assert!(load(&[URL, SECRET, ("AUTH_TOKEN_TTL_SECS", "0")]).is_err());
        assert!(load(&[URL, SECRET, ("AUTH_TOKEN_TTL_SECS", "10000000000000")]).is_err());

        let config = load(&[URL, SECRET, ("AUTH_TOKEN_TTL_SECS", "2592000")]).unwrap();
        assert_eq!(config.auth.token_ttl_secs(), 2_592_000);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            URL,
            SECRET,
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("FRONTEND_ORIGINS", "http://a.test, http://b.test,"),
            ("AUTH_TOKEN_TTL_SECS", "60"),
            ("AUTH_PASSWORD_PEPPER", "pepper"),
            ("PASSWORD_HASH_ITERATIONS", "3"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.frontend_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.auth.token_ttl_secs(), 60);
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
        assert_eq!(config.auth.password_cost.iterations, 3);
    }

    #[test]
    fn test_missing_secret_in_debug_builds_is_random() {
        if cfg!(debug_assertions) {
            let config = load(&[URL]).unwrap();
            assert_eq!(config.auth.token_secret.len(), 32);
        } else {
            assert!(load(&[URL]).is_err());
        }
    }
}
