// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/client/self_select.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the self-select client, located in the client
// subdirectory. Shares are submitted through a stratum client bound to the
// pool while jobs are taken from a daemon client bound to the nested daemon
// configuration.
//
// Tree Location:
// - src/client/self_select.rs (hybrid client)
// - Depends on: log, crate::client::{stratum, daemon}, crate::pool

use super::{Client, ClientListener, DaemonClient, StratumClient};
use crate::pool::{Mode, Pool};
use log::debug;
use std::sync::Arc;

const LOG_TARGET: &str = "pool_endpoint::client::self_select";

/// Submits to a pool, fetches jobs from a daemon
pub struct SelfSelectClient {
    submitter: StratumClient,
    job_source: DaemonClient,
}

impl SelfSelectClient {
    pub fn new(id: usize, agent: String, listener: Arc<dyn ClientListener>) -> Self {
        Self {
            submitter: StratumClient::new(id, agent, Arc::clone(&listener)),
            job_source: DaemonClient::new(id, listener),
        }
    }

    /// Stratum side, used for login and share submission
    pub fn submitter(&self) -> &StratumClient {
        &self.submitter
    }

    /// Daemon side, bound to the pool's nested daemon
    pub fn job_source(&self) -> &DaemonClient {
        &self.job_source
    }
}

impl Client for SelfSelectClient {
    fn id(&self) -> usize {
        self.submitter.id()
    }

    fn pool(&self) -> &Pool {
        self.submitter.pool()
    }

    /// Rebinds both halves, or neither: only valid self-select pools are taken.
    fn set_pool(&mut self, pool: Pool) {
        let daemon = match pool.daemon() {
            Some(daemon) if pool.mode() == Mode::SelfSelect && pool.is_valid() && daemon.is_valid() => daemon.clone(),
            _ => {
                debug!(
                    target: LOG_TARGET,
                    "Client #{} ignored {:?} pool {:?} without a usable job source",
                    self.id(),
                    pool.mode(),
                    pool.url().as_str()
                );
                return;
            }
        };

        self.job_source.set_pool(daemon);
        self.submitter.set_pool(pool);
    }
}

// Changelog:
// - v1.0.1 (2025-07-08): set_pool rejects pools without a nested daemon.
//   - Submitter and job source can no longer point at unrelated endpoints.
// - v1.0.0 (2025-07-01): Initial self-select client.
