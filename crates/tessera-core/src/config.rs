//! Pool configuration, read from the environment.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ENV_MAX_RETAINED: &str = "TESSERA_POOL_MAX_RETAINED";
pub const ENV_MAX_CAPACITY: &str = "TESSERA_POOL_MAX_CAPACITY";

/// Limits applied when a buffer is handed back to a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Upper bound on idle buffers kept by one pool.
    pub max_retained: usize,
    /// Returned buffers with a larger capacity (in bytes) are dropped.
    pub max_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_retained: 64,
            max_capacity: 64 * 1024,
        }
    }
}

impl PoolConfig {
    /// Read overrides from `TESSERA_POOL_MAX_RETAINED` and
    /// `TESSERA_POOL_MAX_CAPACITY`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`PoolConfig::from_env`] with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_RETAINED) {
            config.max_retained = parse_usize(ENV_MAX_RETAINED, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_CAPACITY) {
            config.max_capacity = parse_usize(ENV_MAX_CAPACITY, &raw)?;
        }

        Ok(config)
    }
}

fn parse_usize(key: &str, raw: &str) -> Result<usize, CoreError> {
    raw.trim().parse().map_err(|_| {
        CoreError::InvalidConfig(format!("{key} must be a non-negative integer, got '{raw}'"))
    })
}
