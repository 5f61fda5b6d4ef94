// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 2.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the entry point of the pool-endpoint tool, located at the root
// of the source tree. It loads pool definitions, reports them and builds a
// client for every pool the running build can serve.
//
// Tree Location:
// - src/main.rs (binary entry point)
// - Depends on: anyhow, clap, log, log4rs, tokio, pool_endpoint

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, error, info, warn};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use pool_endpoint::{Client, ClientHandle, ClientListener, Pool, Pools, core::Args};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Listener that only logs what clients report
struct LogListener;

impl ClientListener for LogListener {
    fn on_login(&self, client_id: usize, params: &mut Map<String, Value>) {
        info!("🔐 Client #{} logging in as {}", client_id, params.get("login").unwrap_or(&Value::Null));
    }

    fn on_job_received(&self, client_id: usize, job: &Value) {
        info!("📋 Client #{} received job {}", client_id, job);
    }

    fn on_result_accepted(&self, client_id: usize, accepted: bool, error: Option<&str>) {
        if accepted {
            info!("✅ Client #{} share accepted", client_id);
        } else {
            warn!("❌ Client #{} share rejected: {}", client_id, error.unwrap_or("unknown"));
        }
    }

    fn on_close(&self, client_id: usize, failures: u32) {
        warn!("🔌 Client #{} closed after {} failure(s)", client_id, failures);
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn load_pools(args: &Args) -> Result<Pools> {
    if let Some(path) = &args.config {
        return Pools::load(path).with_context(|| format!("loading {}", path.display()));
    }

    let mut pools = Pools::new();
    if let Some(value) = args.to_pool_json() {
        let pool = Pool::from_json(&value);
        if !pools.add(pool) {
            anyhow::bail!("invalid pool url: {}", args.url.as_deref().unwrap_or_default());
        }
    }
    Ok(pools)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    init_logging(args.verbose)?;

    let pools = load_pools(&args)?;
    pools.print();

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&pools.to_json())?);
    }

    let listener: Arc<dyn ClientListener> = Arc::new(LogListener);
    let mut clients: Vec<ClientHandle> = pools
        .active()
        .enumerate()
        .map(|(id, pool)| pool.create_client(id, Arc::clone(&listener)))
        .collect();

    if clients.is_empty() {
        warn!("⚠️ No usable pools for this build");
        return Ok(());
    }

    for client in &clients {
        info!("🔧 Client #{} ready ({:?}) for {}", client.id(), client.mode(), client.pool().url());
    }

    if args.connect {
        for client in clients.iter_mut() {
            if let ClientHandle::Pool(stratum) = client {
                match stratum.connect().await {
                    Ok(_) => info!("📤 Login request: {}", stratum.login_request()),
                    Err(err) => error!("❌ {}", err),
                }
            }
        }
    }

    Ok(())
}

// Changelog:
// - v2.1.0 (2025-06-30): Replaced mining entry points with pool reporting.
//   - Loads a pool list or a single command-line pool, prints it, optionally
//     dumps normalized JSON and builds clients through Pool::create_client.
//   - Logging goes through log4rs instead of tracing_subscriber.
// - v2.0.0-feature-based: Feature-based mining: --features cpu, gpu, hybrid.
