//! Configuration loading and representation.
//!
//! All settings come from the environment:
//!
//! | Variable              | Default         |
//! |-----------------------|-----------------|
//! | `CATALOG_DB_PATH`     | `./database.db` |
//! | `CATALOG_BIND_ADDR`   | `0.0.0.0:8080`  |
//! | `CATALOG_RECREATE_DB` | `false`         |

use std::path::PathBuf;

use anyhow::{Context, bail};

pub const DB_PATH_VAR: &str = "CATALOG_DB_PATH";
pub const BIND_ADDR_VAR: &str = "CATALOG_BIND_ADDR";
pub const RECREATE_DB_VAR: &str = "CATALOG_RECREATE_DB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// SQLite database file backing the catalog store.
    pub db_path: PathBuf,
    /// Address the HTTP server listens on.
    pub bind_addr: String,
    /// Delete and re-seed the database on startup.
    pub recreate_db: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./database.db"),
            bind_addr: "0.0.0.0:8080".to_string(),
            recreate_db: false,
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or empty values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let recreate_db = match get(RECREATE_DB_VAR) {
            Some(v) => parse_bool(&v).with_context(|| format!("invalid {RECREATE_DB_VAR}"))?,
            None => defaults.recreate_db,
        };

        Ok(Self {
            db_path: get(DB_PATH_VAR).map(PathBuf::from).unwrap_or(defaults.db_path),
            bind_addr: get(BIND_ADDR_VAR).unwrap_or(defaults.bind_addr),
            recreate_db,
        })
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = CatalogConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, CatalogConfig::default());
    }

    #[test]
    fn values_are_read_from_environment() {
        let cfg = CatalogConfig::from_lookup(lookup(&[
            (DB_PATH_VAR, "/tmp/shop.db"),
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (RECREATE_DB_VAR, "TRUE"),
        ]))
        .unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/shop.db"));
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000");
        assert!(cfg.recreate_db);
    }

    #[test]
    fn bad_boolean_is_an_error() {
        let err = CatalogConfig::from_lookup(lookup(&[(RECREATE_DB_VAR, "maybe")])).unwrap_err();
        assert!(err.to_string().contains(RECREATE_DB_VAR));
    }
}
