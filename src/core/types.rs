// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.2.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the command-line arguments of the pool-endpoint tool,
// located in the core subdirectory. A pool is given either as a JSON pool list
// file or as discrete flags, which are converted into the same JSON shape the
// configuration files use.
//
// Tree Location:
// - src/core/types.rs (command-line arguments)
// - Depends on: clap, serde_json, crate::pool

use crate::pool::Pool;
use clap::Parser;
use serde_json::{Map, Value, json};
use std::path::PathBuf;

/// Command-line arguments for the pool-endpoint tool
#[derive(Parser, Debug)]
#[command(
    name = "pool-endpoint",
    version,
    about = "Validate pool endpoint configurations and build their clients",
    long_about = "Reads pool definitions from a JSON pool list or from the command line,\n\
                  normalizes them and reports which ones this build can use.\n\n\
                  Examples:\n\
                    pool-endpoint --config pools.json --dump\n\
                    pool-endpoint -o stratum+ssl://pool.example:443 -u WALLET --keepalive\n\
                    pool-endpoint -o pool.example:3333 --self-select node.example:18081 --connect"
)]
pub struct Args {
    /// JSON file holding an array of pools or an object with a "pools" array
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pool address (host:port, stratum+tcp://, stratum+ssl://, daemon+http://, daemon+https://)
    #[arg(short = 'o', long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Pool user, usually a wallet address
    #[arg(short = 'u', long = "user", value_name = "USER", default_value = Pool::DEFAULT_USER)]
    pub user: String,

    /// Pool password
    #[arg(short = 'p', long = "pass", value_name = "PASSWORD", default_value = Pool::DEFAULT_PASSWORD)]
    pub password: String,

    /// Rig identifier reported to the pool
    #[arg(long = "rig-id", value_name = "ID")]
    pub rig_id: Option<String>,

    /// Request TLS even when the URL scheme does not imply it
    #[arg(long, default_value = "false")]
    pub tls: bool,

    /// Pinned TLS certificate fingerprint
    #[arg(long = "tls-fingerprint", value_name = "HASH")]
    pub fingerprint: Option<String>,

    /// Keep-alive in seconds; without a value the default timeout is used
    #[arg(
        short = 'k',
        long = "keepalive",
        value_name = "SECONDS",
        num_args = 0..=1,
        // Pool::KEEP_ALIVE_TIMEOUT
        default_missing_value = "60"
    )]
    pub keepalive: Option<i32>,

    /// Treat the URL as a daemon RPC endpoint
    #[arg(long, default_value = "false")]
    pub daemon: bool,

    /// Daemon polling period in milliseconds
    #[arg(long = "daemon-poll-interval", value_name = "MS")]
    pub daemon_poll_interval: Option<u64>,

    /// Daemon used as the job source while shares go to --url
    #[arg(long = "self-select", value_name = "URL")]
    pub self_select: Option<String>,

    /// Print the normalized pool list as JSON
    #[arg(long, default_value = "false")]
    pub dump: bool,

    /// Try to open a TCP connection to each active stratum pool
    #[arg(long, default_value = "false")]
    pub connect: bool,

    /// Enable debug logging
    #[arg(short = 'v', long, default_value = "false")]
    pub verbose: bool,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        match (&self.config, &self.url) {
            (Some(_), Some(_)) => {
                return Err("--config and --url cannot be used together".to_string());
            }
            (None, None) => {
                return Err("A pool is required. Use --config FILE or --url URL".to_string());
            }
            _ => {}
        }

        if self.daemon && self.self_select.is_some() {
            return Err("--daemon and --self-select cannot be combined".to_string());
        }

        if self.daemon_poll_interval == Some(0) {
            return Err("Daemon poll interval must be greater than 0 ms".to_string());
        }

        Ok(())
    }

    /// The pool given on the command line, in configuration file form
    pub fn to_pool_json(&self) -> Option<Value> {
        let url = self.url.as_ref()?;

        let mut obj = Map::new();
        obj.insert("url".into(), json!(url));
        obj.insert("user".into(), json!(self.user));
        obj.insert("pass".into(), json!(self.password));
        obj.insert("tls".into(), json!(self.tls));
        obj.insert("daemon".into(), json!(self.daemon));

        if let Some(rig_id) = &self.rig_id {
            obj.insert("rig-id".into(), json!(rig_id));
        }
        if let Some(fingerprint) = &self.fingerprint {
            obj.insert("tls-fingerprint".into(), json!(fingerprint));
        }
        if let Some(keepalive) = self.keepalive {
            obj.insert("keepalive".into(), json!(keepalive));
        }
        if let Some(interval) = self.daemon_poll_interval {
            obj.insert("daemon-poll-interval".into(), json!(interval));
        }
        if let Some(daemon) = &self.self_select {
            obj.insert("self-select".into(), json!(daemon));
        }

        Some(Value::Object(obj))
    }
}


// Changelog:
// - v1.2.1 (2025-07-08): Tied the bare --keepalive value to the pool default
//   timeout in tests.
// - v1.2.0 (2025-06-30): Reworked arguments around pool definitions.
//   - Replaced mining, benchmark and dashboard flags with pool fields that
//     mirror the configuration file keys.
//   - Added to_pool_json so command-line pools share the JSON decoding path.
// - v1.1.1-web (2025-06-22): Added web dashboard support.
// - v1.0.5 (2025-06-17): Fixed type mismatch for benchmark difficulty.
