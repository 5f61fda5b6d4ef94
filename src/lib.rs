// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for pool-endpoint, located
// at the root of the source tree. It exports the pool configuration, the
// client factory and the shared utilities.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: client, core, error, pool, utils

pub mod client;
pub mod core;
pub mod error;
pub mod pool;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::client::{Client, ClientHandle, ClientListener, StratumClient};
pub use crate::error::{ClientError, ConfigError};
pub use crate::pool::{Capabilities, Mode, Pool, PoolUrl, Pools};

#[cfg(feature = "http")]
pub use crate::client::{DaemonClient, SelfSelectClient};


// Changelog:
// - v1.1.0 (2025-06-30): Repurposed as the pool configuration library.
//   - Exports pool, client and error modules; mining, benchmark and help
//     modules removed.
// - v1.0.0 (2025-06-14): Initial modular breakout from monolithic main.rs.
