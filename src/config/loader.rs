//! Load `ServerConfig` from the process environment.
//!
//! | Env var            | Default                           |
//! |--------------------|-----------------------------------|
//! | `RENTAL_VARIANT`   | `rents`                           |
//! | `DATABASE_URL`     | per variant (`sqlite://data3.db`) |
//! | `BIND_ADDR`        | `127.0.0.1:5000`                  |
//! | `MAX_CONNECTIONS`  | `5`                               |
//! | `BODY_LIMIT_BYTES` | `65536`                           |

use crate::config::{ServerConfig, Variant};
use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let variant = match get("RENTAL_VARIANT") {
            Some(v) => v.parse()?,
            None => Variant::Rents,
        };
        let database_url = get("DATABASE_URL").unwrap_or_else(|| variant.default_database_url().into());
        let bind_addr = parse_or("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR.parse().ok())?;
        let max_connections = parse_or("MAX_CONNECTIONS", get("MAX_CONNECTIONS"), Some(DEFAULT_MAX_CONNECTIONS))?;
        let body_limit = parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), Some(DEFAULT_BODY_LIMIT))?;

        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "MAX_CONNECTIONS",
                value: "0".into(),
            });
        }

        Ok(ServerConfig {
            variant,
            database_url,
            bind_addr,
            max_connections,
            body_limit,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: Option<T>) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue { key, value }),
        None => default.ok_or(ConfigError::InvalidValue {
            key,
            value: String::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let c = config(&[]).unwrap();
        assert_eq!(c.variant, Variant::Rents);
        assert_eq!(c.database_url, "sqlite://data3.db");
        assert_eq!(c.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(c.max_connections, 5);
        assert_eq!(c.body_limit, 65536);
    }

    #[test]
    fn variant_picks_its_own_database() {
        let c = config(&[("RENTAL_VARIANT", "movies")]).unwrap();
        assert_eq!(c.variant, Variant::Movies);
        assert_eq!(c.database_url, "sqlite://data.db");

        let c = config(&[("RENTAL_VARIANT", "2")]).unwrap();
        assert_eq!(c.variant, Variant::Clients);
        assert_eq!(c.database_url, "sqlite://data2.db");
    }

    #[test]
    fn explicit_database_url_wins() {
        let c = config(&[("RENTAL_VARIANT", "Movies"), ("DATABASE_URL", "sqlite::memory:")]).unwrap();
        assert_eq!(c.variant, Variant::Movies);
        assert_eq!(c.database_url, "sqlite::memory:");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config(&[("RENTAL_VARIANT", "books")]),
            Err(ConfigError::UnknownVariant(v)) if v == "books"
        ));
        assert!(matches!(
            config(&[("BIND_ADDR", "nowhere")]),
            Err(ConfigError::InvalidValue { key: "BIND_ADDR", .. })
        ));
        assert!(matches!(
            config(&[("MAX_CONNECTIONS", "0")]),
            Err(ConfigError::InvalidValue { key: "MAX_CONNECTIONS", .. })
        ));
    }

    #[test]
    fn variant_capabilities() {
        assert!(!Variant::Movies.has_clients());
        assert!(Variant::Clients.has_clients() && !Variant::Clients.has_rents());
        assert!(Variant::Rents.has_rents() && Variant::Rents.strict_schema());
        assert_eq!(Variant::Clients.to_string(), "clients");
    }
}
