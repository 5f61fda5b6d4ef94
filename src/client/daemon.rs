// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/client/daemon.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the daemon client, located in the client subdirectory.
// The client polls a node's JSON-RPC interface for block templates; the HTTP
// transport lives outside this crate, so only the endpoint and the polling
// period are derived here.
//
// Tree Location:
// - src/client/daemon.rs (daemon RPC client)
// - Depends on: crate::pool

use super::{Client, ClientListener};
use crate::pool::Pool;
use std::sync::Arc;
use std::time::Duration;

/// Client for a node RPC endpoint
pub struct DaemonClient {
    id: usize,
    listener: Arc<dyn ClientListener>,
    pool: Pool,
}

impl DaemonClient {
    pub fn new(id: usize, listener: Arc<dyn ClientListener>) -> Self {
        Self {
            id,
            listener,
            pool: Pool::default(),
        }
    }

    /// JSON-RPC endpoint of the bound daemon
    pub fn rpc_url(&self) -> String {
        let scheme = if self.pool.is_tls() { "https" } else { "http" };
        format!("{}://{}/json_rpc", scheme, self.pool.url().authority())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.pool.poll_interval())
    }

    /// Receiver of this client's job and close events
    pub fn listener(&self) -> &Arc<dyn ClientListener> {
        &self.listener
    }
}

impl Client for DaemonClient {
    fn id(&self) -> usize {
        self.id
    }

    fn pool(&self) -> &Pool {
        &self.pool
    }

    fn set_pool(&mut self, pool: Pool) {
        if pool.is_valid() {
            self.pool = pool;
        }
    }
}

// Changelog:
// - v1.0.0 (2025-07-01): Initial daemon client.
//   - Derives the JSON-RPC endpoint and polling period from the bound pool.
