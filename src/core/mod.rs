// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the core types of the tool, located
// in the core subdirectory.

pub mod types;

pub use types::Args;

// Changelog:
// - v1.1.0 (2025-06-30): Reduced to command-line argument types.
// - v1.0.1 (2025-06-16): Added simple SHA-256 support.
