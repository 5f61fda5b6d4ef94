// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/client/stratum.rs
// Version: 1.2.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the stratum pool client, located in the client
// subdirectory. It opens the TCP connection to a pool and builds the login
// request from the bound configuration. TLS is layered over the returned
// stream by the TLS connector.
//
// Tree Location:
// - src/client/stratum.rs (stratum client)
// - Depends on: tokio, serde_json, log, crate::pool

use super::{Client, ClientListener};
use crate::error::ClientError;
use crate::pool::Pool;
use log::{debug, info, warn};
use serde_json::{Map, Value, json};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpStream, lookup_host};

const LOG_TARGET: &str = "pool_endpoint::client::stratum";

/// Client for a stratum pool
pub struct StratumClient {
    id: usize,
    agent: String,
    listener: Arc<dyn ClientListener>,
    pool: Pool,
    failures: u32,
}

impl StratumClient {
    pub fn new(id: usize, agent: String, listener: Arc<dyn ClientListener>) -> Self {
        Self {
            id,
            agent,
            listener,
            pool: Pool::default(),
            failures: 0,
        }
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// Consecutive failed connection attempts
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Idle timeout, `None` when keep-alive is disabled
    pub fn keep_alive(&self) -> Option<Duration> {
        u64::try_from(self.pool.keep_alive())
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Create the stratum login request for the bound pool
    pub fn login_request(&self) -> Value {
        let mut params = Map::new();
        params.insert("login".into(), json!(self.pool.user()));
        params.insert("pass".into(), json!(self.pool.password()));
        params.insert("agent".into(), json!(self.agent));

        if !self.pool.rig_id().is_empty() {
            params.insert("rigid".into(), json!(self.pool.rig_id()));
        }

        self.listener.on_login(self.id, &mut params);

        json!({
            "id": 1,
            "jsonrpc": "2.0",
            "method": "login",
            "params": params
        })
    }

    /// Resolve pool address from either IP:port or domain:port format
    async fn resolve_pool_address(host: &str, port: u16) -> Result<SocketAddr, ClientError> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, port));
        }

        let address = format!("{}:{}", host, port);
        let mut addrs = lookup_host((host, port))
            .await
            .map_err(|source| ClientError::Resolve {
                address: address.clone(),
                source,
            })?;
        addrs.next().ok_or(ClientError::NoAddress(address))
    }

    /// Open a TCP connection to the bound pool. Failures are counted and
    /// reported to the listener before being returned.
    pub async fn connect(&mut self) -> Result<TcpStream, ClientError> {
        if !self.pool.is_valid() {
            return Err(ClientError::InvalidPool(self.id));
        }

        match self.try_connect().await {
            Ok(stream) => {
                self.failures = 0;
                info!(target: LOG_TARGET, "Client #{} connected to {}", self.id, self.pool.url());
                Ok(stream)
            }
            Err(err) => {
                self.failures += 1;
                warn!(target: LOG_TARGET, "Client #{}: {}", self.id, err);
                self.listener.on_close(self.id, self.failures);
                Err(err)
            }
        }
    }

    async fn try_connect(&self) -> Result<TcpStream, ClientError> {
        let addr = Self::resolve_pool_address(self.pool.host(), self.pool.port()).await?;
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|source| ClientError::Connect {
                address: addr.to_string(),
                source,
            })?;
        stream.set_nodelay(true).map_err(|source| ClientError::Connect {
            address: addr.to_string(),
            source,
        })?; // Disable Nagle's algorithm for low latency
        Ok(stream)
    }
}

impl Client for StratumClient {
    fn id(&self) -> usize {
        self.id
    }

    fn pool(&self) -> &Pool {
        &self.pool
    }

    fn set_pool(&mut self, pool: Pool) {
        if !pool.is_valid() {
            debug!(target: LOG_TARGET, "Client #{} ignored invalid pool {:?}", self.id, pool.url().as_str());
            return;
        }
        self.pool = pool;
    }
}

// Changelog:
// - v1.2.0 (2025-07-01): Bound the client to a pool configuration.
//   - connect() takes host and port from the bound Pool and reports failures
//     to the ClientListener.
//   - Login request moved here from the protocol helper and now carries the
//     rig id and the process user agent.
// - v1.1.0 (2025-06-23): Added DNS resolution support
//   - Added resolve_pool_address method for handling both IP addresses and domain names
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
