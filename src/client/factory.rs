// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/client/factory.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file builds the client matching a pool's mode, located in the client
// subdirectory. Daemon and self-select clients exist only in builds with the
// "http" feature.
//
// Tree Location:
// - src/client/factory.rs (Pool::create_client)
// - Depends on: log, crate::client, crate::pool, crate::utils

use super::{Client, ClientHandle, ClientListener, StratumClient};
use crate::pool::{Mode, Pool};
use crate::utils::user_agent;
use log::debug;
use std::sync::Arc;

#[cfg(feature = "http")]
use super::{DaemonClient, SelfSelectClient};

const LOG_TARGET: &str = "pool_endpoint::client::factory";

impl Pool {
    /// Create a fresh client for this pool, already bound to it.
    ///
    /// Callers filter pools through `is_enabled()` first; asking for a client
    /// of an invalid pool, or of a mode this build cannot serve, panics.
    pub fn create_client(&self, id: usize, listener: Arc<dyn ClientListener>) -> ClientHandle {
        assert!(self.is_valid(), "create_client called for invalid pool {:?}", self.url().as_str());

        let mut client = match self.mode() {
            Mode::Pool => ClientHandle::Pool(StratumClient::new(id, user_agent(), listener)),
            #[cfg(feature = "http")]
            Mode::Daemon => ClientHandle::Daemon(DaemonClient::new(id, listener)),
            #[cfg(feature = "http")]
            Mode::SelfSelect => ClientHandle::SelfSelect(SelfSelectClient::new(id, user_agent(), listener)),
            #[cfg(not(feature = "http"))]
            mode => unreachable!("{:?} pools require the \"http\" feature", mode),
        };

        client.set_pool(self.clone());
        debug!(target: LOG_TARGET, "Created {:?} client #{} for {}", self.mode(), id, self.url());

        client
    }
}

// Changelog:
// - v1.0.0 (2025-07-01): Initial client factory.
//   - Maps pool, daemon and self-select modes to their clients and binds each
//     new client to a copy of the pool.
