// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/client/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the network clients, located in the
// client subdirectory. It defines the interface shared by every client, the
// listener clients report to and the closed set of client variants produced
// by Pool::create_client.
//
// Tree Location:
// - src/client/mod.rs (client module entry point)
// - Submodules: factory, stratum, daemon (http), self_select (http)

mod factory;
pub mod stratum;

#[cfg(feature = "http")]
pub mod daemon;
#[cfg(feature = "http")]
pub mod self_select;

use crate::pool::{Mode, Pool};
use serde_json::{Map, Value};

pub use stratum::StratumClient;

#[cfg(feature = "http")]
pub use daemon::DaemonClient;
#[cfg(feature = "http")]
pub use self_select::SelfSelectClient;

/// Receives connection, job and result events from clients
pub trait ClientListener: Send + Sync {
    /// Called while a login request is built; may add extra params
    fn on_login(&self, _client_id: usize, _params: &mut Map<String, Value>) {}

    fn on_job_received(&self, client_id: usize, job: &Value);

    fn on_result_accepted(&self, client_id: usize, accepted: bool, error: Option<&str>);

    /// Connection lost or never established
    fn on_close(&self, client_id: usize, failures: u32);
}

/// Interface shared by all clients
pub trait Client {
    fn id(&self) -> usize;

    /// Configuration the client is bound to
    fn pool(&self) -> &Pool;

    /// Bind a configuration. Invalid pools are ignored.
    fn set_pool(&mut self, pool: Pool);

    fn mode(&self) -> Mode {
        self.pool().mode()
    }
}

/// A client built for one pool
pub enum ClientHandle {
    Pool(StratumClient),
    #[cfg(feature = "http")]
    Daemon(DaemonClient),
    #[cfg(feature = "http")]
    SelfSelect(SelfSelectClient),
}

impl Client for ClientHandle {
    fn id(&self) -> usize {
        match self {
            Self::Pool(client) => client.id(),
            #[cfg(feature = "http")]
            Self::Daemon(client) => client.id(),
            #[cfg(feature = "http")]
            Self::SelfSelect(client) => client.id(),
        }
    }

    fn pool(&self) -> &Pool {
        match self {
            Self::Pool(client) => client.pool(),
            #[cfg(feature = "http")]
            Self::Daemon(client) => client.pool(),
            #[cfg(feature = "http")]
            Self::SelfSelect(client) => client.pool(),
        }
    }

    fn set_pool(&mut self, pool: Pool) {
        match self {
            Self::Pool(client) => client.set_pool(pool),
            #[cfg(feature = "http")]
            Self::Daemon(client) => client.set_pool(pool),
            #[cfg(feature = "http")]
            Self::SelfSelect(client) => client.set_pool(pool),
        }
    }
}

// Changelog:
// - v1.0.0 (2025-07-01): Initial client interface.
//   - Client trait, ClientListener trait and the ClientHandle sum type.
//   - Daemon and self-select variants are compiled with the "http" feature.
