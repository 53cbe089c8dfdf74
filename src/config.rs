use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub backend_url: String,
    pub http_timeout: Duration,
    pub max_workers: usize,
    pub catalog_ttl: Duration,
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            bind_addr: try_load("BIND_ADDR", "127.0.0.1:3000"),
            backend_url: try_load::<String>("BACKEND_URL", "http://localhost:5000")
                .trim_end_matches('/')
                .to_string(),
            http_timeout: Duration::from_secs(try_load("HTTP_TIMEOUT_SECS", "15")),
            max_workers: try_load("MAX_WORKERS", "8"),
            catalog_ttl: Duration::from_secs(try_load("CATALOG_TTL_SECS", "60")),
            admin_email: try_load("ADMIN_EMAIL", "admin@example.com"),
            admin_password: try_load("ADMIN_PASSWORD", "admin123"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            backend_url: "http://localhost:5000".to_string(),
            http_timeout: Duration::from_secs(15),
            max_workers: 8,
            catalog_ttl: Duration::from_secs(60),
            admin_email: "admin@example.com".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Reads `key` from the environment, falling back to `default` when the
/// variable is missing or does not parse.
fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            parse_default(key, default)
        }
    }
}

fn parse_default<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    match default.parse() {
        Ok(value) => value,
        // Defaults are literals above; a failure here is a programming error.
        Err(e) => panic!("default for {key} does not parse: {e}"),
    }
}
