//! Configuration loading and representation.
//!
//! Values come from environment variables, read once at startup:
//!
//! | Variable                   | Default | Meaning                                        |
//! |----------------------------|---------|------------------------------------------------|
//! | `CATALOG_FIRST_PRODUCT_ID` | `1`     | first id issued by the in-memory repository    |
//! | `CATALOG_STORE_LATENCY_MS` | `0`     | simulated write latency of the in-memory store |

use std::time::Duration;

use thiserror::Error;

use catalog_core::{DomainError, ProductId};

pub const FIRST_PRODUCT_ID_VAR: &str = "CATALOG_FIRST_PRODUCT_ID";
pub const STORE_LATENCY_MS_VAR: &str = "CATALOG_STORE_LATENCY_MS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: {source}")]
    Invalid {
        key: &'static str,
        #[source]
        source: DomainError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub first_product_id: ProductId,
    pub store_write_latency: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            first_product_id: ProductId::new(1),
            store_write_latency: Duration::ZERO,
        }
    }
}

impl CatalogConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup (unset keys fall back to defaults).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(FIRST_PRODUCT_ID_VAR) {
            let id = raw
                .parse::<ProductId>()
                .map_err(|source| ConfigError::Invalid {
                    key: FIRST_PRODUCT_ID_VAR,
                    source,
                })?;
            if id.get() < 1 {
                return Err(ConfigError::Invalid {
                    key: FIRST_PRODUCT_ID_VAR,
                    source: DomainError::validation(format!("must be positive, got {id}")),
                });
            }
            config.first_product_id = id;
        }

        if let Some(raw) = lookup(STORE_LATENCY_MS_VAR) {
            let millis = raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: STORE_LATENCY_MS_VAR,
                source: DomainError::validation(format!("expected milliseconds: {e}")),
            })?;
            config.store_write_latency = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_variables_use_defaults() {
        let config = CatalogConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn reads_both_variables() {
        let config = CatalogConfig::from_lookup(lookup(&[
            (FIRST_PRODUCT_ID_VAR, "1000"),
            (STORE_LATENCY_MS_VAR, "25"),
        ]))
        .unwrap();

        assert_eq!(config.first_product_id, ProductId::new(1000));
        assert_eq!(config.store_write_latency, Duration::from_millis(25));
    }

    #[test]
    fn rejects_non_positive_first_id() {
        let err = CatalogConfig::from_lookup(lookup(&[(FIRST_PRODUCT_ID_VAR, "0")])).unwrap_err();
        let ConfigError::Invalid { key, source } = err;
        assert_eq!(key, FIRST_PRODUCT_ID_VAR);
        assert!(matches!(source, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_latency() {
        let err = CatalogConfig::from_lookup(lookup(&[(STORE_LATENCY_MS_VAR, "soon")])).unwrap_err();
        assert!(err.to_string().starts_with("CATALOG_STORE_LATENCY_MS:"));
    }
}
