// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/pools.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the ordered list of configured pools, located in the
// pool subdirectory. It loads pool lists from JSON documents, drops entries
// whose address does not parse and tells callers whether a reload changed
// anything.
//
// Tree Location:
// - src/pool/pools.rs (pool list)
// - Depends on: serde_json, log, crate::pool::config, crate::error

use crate::error::ConfigError;
use crate::pool::config::{Capabilities, Pool};
use log::{info, warn};
use serde_json::Value;
use std::fs;
use std::path::Path;

const LOG_TARGET: &str = "pool_endpoint::pool::pools";

/// Ordered list of valid pool configurations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pools {
    data: Vec<Pool>,
}

impl Pools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a pool list file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&text)?;
        Self::from_json(&value)
    }

    /// Accepts either an array of pools or an object holding a `pools` array
    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let entries = match value {
            Value::Array(entries) => entries,
            Value::Object(obj) => match obj.get("pools") {
                Some(Value::Array(entries)) => entries,
                _ => return Err(ConfigError::InvalidShape),
            },
            _ => return Err(ConfigError::InvalidShape),
        };

        let mut pools = Self::new();
        for (index, entry) in entries.iter().enumerate() {
            if !pools.add(Pool::from_json(entry)) {
                warn!(target: LOG_TARGET, "Skipping pool #{}: invalid url", index + 1);
            }
        }

        Ok(pools)
    }

    /// Append a pool; invalid pools are rejected
    pub fn add(&mut self, pool: Pool) -> bool {
        if !pool.is_valid() {
            return false;
        }
        self.data.push(pool);
        true
    }

    pub fn pools(&self) -> &[Pool] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pools usable by the running build
    pub fn active(&self) -> impl Iterator<Item = &Pool> {
        self.active_with(Capabilities::build())
    }

    pub fn active_with(&self, capabilities: Capabilities) -> impl Iterator<Item = &Pool> {
        self.data
            .iter()
            .filter(move |pool| pool.is_enabled_with(capabilities))
    }

    /// True when a freshly loaded list differs from this one and clients
    /// need to reconnect
    pub fn is_changed(&self, other: &Pools) -> bool {
        self != other
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.data.iter().map(Pool::to_json).collect())
    }

    pub fn print(&self) {
        for (index, pool) in self.data.iter().enumerate() {
            info!(target: LOG_TARGET, "POOL #{:<7}{}", index + 1, pool.printable_name());
            pool.print();
        }
    }
}

// Changelog:
// - v1.0.1 (2025-07-04): Filtered active pools through build capabilities.
// - v1.0.0 (2025-06-30): Initial pool list.
//   - Loads arrays of pools or {"pools": [...]} documents from disk.
//   - Invalid entries are skipped with a warning instead of failing the load.
