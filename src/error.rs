// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/error.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the error types of the library, located at the root of the
// source tree. Invalid pool entries are not errors; these cover reading pool
// lists from disk and opening client connections.
//
// Tree Location:
// - src/error.rs (library error types)
// - Depends on: thiserror, serde_json, std

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read a pool list
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected an array of pools or an object with a \"pools\" array")]
    InvalidShape,
}

/// Failure to reach a pool endpoint
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("client {0} has no valid pool")]
    InvalidPool(usize),

    #[error("failed to resolve {address}: {source}")]
    Resolve {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("no addresses found for {0}")]
    NoAddress(String),

    #[error("failed to connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: io::Error,
    },
}

// Changelog:
// - v1.0.0 (2025-06-30): Initial error types.
//   - ConfigError for pool list files, ClientError for stratum connections.
