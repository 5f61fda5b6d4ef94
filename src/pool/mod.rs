// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/mod.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for pool configuration, located in the
// pool subdirectory. It declares submodules and re-exports key types for use
// throughout the project.
//
// Tree Location:
// - src/pool/mod.rs (pool module entry point)
// - Submodules: config, pools, url

pub mod config;
pub mod pools;
pub mod url;

// Re-export key types for convenience
pub use config::{Capabilities, Mode, Pool, PoolFlags};
pub use pools::Pools;
pub use url::{PoolUrl, Scheme};

// Changelog:
// - v1.1.0 (2025-06-30): Replaced the TCP helper with pool configuration.
//   - Declares config, pools and url submodules; clients moved to src/client.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
