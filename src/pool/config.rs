// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/config.rs
// Version: 1.2.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines the configuration of a single pool endpoint, located in the
// pool subdirectory. It covers construction from a URL, a JSON object or
// discrete fields, mode derivation, enablement checks and the JSON codec used
// by configuration files.
//
// Tree Location:
// - src/pool/config.rs (pool endpoint configuration)
// - Depends on: serde_json, log, crate::pool::url, crate::utils::format

use crate::error::ConfigError;
use crate::pool::url::PoolUrl;
use crate::utils::format::FormatUtils;
use log::{debug, info};
use serde_json::{Map, Value};

const LOG_TARGET: &str = "pool_endpoint::pool::config";

const K_DAEMON: &str = "daemon";
const K_DAEMON_POLL_INTERVAL: &str = "daemon-poll-interval";
const K_ENABLED: &str = "enabled";
const K_FINGERPRINT: &str = "tls-fingerprint";
const K_KEEPALIVE: &str = "keepalive";
const K_PASS: &str = "pass";
const K_RIG_ID: &str = "rig-id";
const K_SELF_SELECT: &str = "self-select";
const K_TLS: &str = "tls";
const K_URL: &str = "url";
const K_USER: &str = "user";

/// Where a pool gets its jobs from. Always derived from the other fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Plain stratum connection
    #[default]
    Pool,
    /// Node RPC polled for block templates
    Daemon,
    /// Shares go to the pool, jobs come from a nested daemon
    SelfSelect,
}

/// Independent on/off switches of a pool entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolFlags {
    pub enabled: bool,
    pub tls: bool,
}

impl Default for PoolFlags {
    fn default() -> Self {
        Self {
            enabled: true,
            tls: false,
        }
    }
}

/// Transports compiled into the running build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub tls: bool,
    pub http: bool,
}

impl Capabilities {
    /// Capabilities selected by cargo features
    pub const fn build() -> Self {
        Self {
            tls: cfg!(feature = "tls"),
            http: cfg!(feature = "http"),
        }
    }

    pub const fn all() -> Self {
        Self { tls: true, http: true }
    }

    pub const fn none() -> Self {
        Self {
            tls: false,
            http: false,
        }
    }
}

/// Connection settings for one pool endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    url: PoolUrl,
    user: String,
    password: String,
    rig_id: String,
    fingerprint: String,
    mode: Mode,
    flags: PoolFlags,
    keep_alive: i32,
    poll_interval: u64,
    /// `self-select` address as configured, usable or not
    self_select: PoolUrl,
    daemon: Option<Box<Pool>>,
}

impl Default for Pool {
    fn default() -> Self {
        Self {
            url: PoolUrl::default(),
            user: String::new(),
            password: String::new(),
            rig_id: String::new(),
            fingerprint: String::new(),
            mode: Mode::Pool,
            flags: PoolFlags::default(),
            keep_alive: 0,
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
            self_select: PoolUrl::default(),
            daemon: None,
        }
    }
}

impl Pool {
    pub const DEFAULT_USER: &'static str = "x";
    pub const DEFAULT_PASSWORD: &'static str = "x";
    /// Daemon polling period in milliseconds
    pub const DEFAULT_POLL_INTERVAL: u64 = 1000;
    /// Keep-alive value meaning "use the default timeout"
    pub const KEEP_ALIVE_TIMEOUT: i32 = 60;

    /// Pool defined by its address alone
    pub fn from_url(url: &str) -> Self {
        Self {
            url: PoolUrl::parse(url),
            ..Default::default()
        }
    }

    /// Pool defined by discrete fields. The mode is always `Mode::Pool`.
    pub fn new(host: &str, port: u16, user: &str, password: &str, keep_alive: i32, tls: bool) -> Self {
        Self {
            url: PoolUrl::from_parts(host, port, tls),
            user: user.to_string(),
            password: password.to_string(),
            keep_alive,
            flags: PoolFlags { enabled: true, tls },
            ..Default::default()
        }
    }

    /// Pool read from a configuration object. Nothing beyond `url` is read
    /// when the address is missing or does not parse.
    pub fn from_json(object: &Value) -> Self {
        let mut pool = Self::from_url(get_str(object, K_URL));
        if !pool.url.is_valid() {
            return pool;
        }

        pool.user = get_str(object, K_USER).to_string();
        pool.password = get_str(object, K_PASS).to_string();
        pool.rig_id = get_str(object, K_RIG_ID).to_string();
        pool.fingerprint = get_str(object, K_FINGERPRINT).to_string();
        pool.poll_interval = object
            .get(K_DAEMON_POLL_INTERVAL)
            .and_then(Value::as_u64)
            .unwrap_or(Self::DEFAULT_POLL_INTERVAL);

        pool.flags.enabled = get_bool(object, K_ENABLED, true);
        pool.flags.tls = get_bool(object, K_TLS, false) || pool.url.is_tls();

        pool.self_select = PoolUrl::parse(get_str(object, K_SELF_SELECT));
        if pool.self_select.is_valid() {
            pool.mode = Mode::SelfSelect;
            pool.daemon = Some(Box::new(Self::from_url(pool.self_select.as_str())));
        } else if get_bool(object, K_DAEMON, false) {
            pool.mode = Mode::Daemon;
        }

        match object.get(K_KEEPALIVE) {
            Some(Value::Bool(enable)) => {
                pool.set_keep_alive(if *enable { Self::KEEP_ALIVE_TIMEOUT } else { 0 });
            }
            Some(Value::Number(number)) => {
                if let Some(seconds) = number.as_i64().and_then(|n| i32::try_from(n).ok()) {
                    pool.set_keep_alive(seconds);
                }
            }
            _ => {}
        }

        pool
    }

    /// Parse JSON text and read a pool from it
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_json(&value))
    }

    /// Negative values disable keep-alive
    pub fn set_keep_alive(&mut self, keep_alive: i32) {
        self.keep_alive = keep_alive.max(0);
    }

    pub fn is_valid(&self) -> bool {
        self.url.is_valid()
    }

    /// Enabled, valid and supported by the running build
    pub fn is_enabled(&self) -> bool {
        self.is_enabled_with(Capabilities::build())
    }

    /// Same as `is_enabled` against an explicit capability set
    pub fn is_enabled_with(&self, capabilities: Capabilities) -> bool {
        if !capabilities.tls && self.is_tls() {
            return false;
        }

        if !capabilities.http && matches!(self.mode, Mode::Daemon | Mode::SelfSelect) {
            return false;
        }

        self.flags.enabled && self.is_valid()
    }

    pub fn is_tls(&self) -> bool {
        self.flags.tls || self.url.is_tls()
    }

    pub fn url(&self) -> &PoolUrl {
        &self.url
    }

    pub fn host(&self) -> &str {
        self.url.host()
    }

    pub fn port(&self) -> u16 {
        self.url.port()
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn rig_id(&self) -> &str {
        &self.rig_id
    }

    /// Pinned certificate fingerprint, empty when none is configured
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn flags(&self) -> PoolFlags {
        self.flags
    }

    pub fn keep_alive(&self) -> i32 {
        self.keep_alive
    }

    /// Milliseconds between daemon polls
    pub fn poll_interval(&self) -> u64 {
        self.poll_interval
    }

    /// Job source of a self-select pool
    pub fn daemon(&self) -> Option<&Pool> {
        self.daemon.as_deref()
    }

    /// Configuration object in the same shape `from_json` reads
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();

        obj.insert(K_URL.into(), self.url.to_json());
        obj.insert(K_USER.into(), string_or_null(&self.user));

        if self.mode != Mode::Daemon {
            obj.insert(K_PASS.into(), string_or_null(&self.password));
            obj.insert(K_RIG_ID.into(), string_or_null(&self.rig_id));

            let keep_alive = if self.keep_alive == 0 || self.keep_alive == Self::KEEP_ALIVE_TIMEOUT {
                Value::Bool(self.keep_alive > 0)
            } else {
                Value::from(self.keep_alive)
            };
            obj.insert(K_KEEPALIVE.into(), keep_alive);
        }

        obj.insert(K_ENABLED.into(), Value::Bool(self.flags.enabled));
        obj.insert(K_TLS.into(), Value::Bool(self.is_tls()));
        obj.insert(K_FINGERPRINT.into(), string_or_null(&self.fingerprint));
        obj.insert(K_DAEMON.into(), Value::Bool(self.mode == Mode::Daemon));

        if self.mode == Mode::Daemon {
            obj.insert(K_DAEMON_POLL_INTERVAL.into(), Value::from(self.poll_interval));
        } else if !self.self_select.as_str().is_empty() {
            obj.insert(K_SELF_SELECT.into(), self.self_select.to_json());
        }

        Value::Object(obj)
    }

    /// Coloured label for console output
    pub fn printable_name(&self) -> String {
        let color = FormatUtils::pool_color(self.is_enabled(), self.is_tls());
        let mut out = FormatUtils::bold_color(color, self.url.as_str());

        if let (Mode::SelfSelect, Some(daemon)) = (self.mode, self.daemon()) {
            let color = FormatUtils::pool_color(true, daemon.is_tls());
            out.push_str(" self-select ");
            out.push_str(&FormatUtils::bold_color(color, daemon.url.as_str()));
        }

        out
    }

    /// Dump the connection fields to the log
    pub fn print(&self) {
        info!(target: LOG_TARGET, "url:       {}", self.url);
        debug!(target: LOG_TARGET, "host:      {}", self.host());
        debug!(target: LOG_TARGET, "port:      {}", self.port());
        debug!(target: LOG_TARGET, "user:      {}", self.user);
        debug!(target: LOG_TARGET, "pass:      {}", self.password);
        debug!(target: LOG_TARGET, "rig-id:    {}", self.rig_id);
        debug!(target: LOG_TARGET, "keepAlive: {}", FormatUtils::format_keep_alive(self.keep_alive));
    }
}

fn get_str<'a>(object: &'a Value, key: &str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn get_bool(object: &Value, key: &str, default: bool) -> bool {
    object.get(key).and_then(Value::as_bool).unwrap_or(default)
}

fn string_or_null(value: &str) -> Value {
    if value.is_empty() {
        Value::Null
    } else {
        Value::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_negative_keep_alive_is_disabled() {
        let mut pool = Pool::from_url("pool.example:3333");
        pool.set_keep_alive(-5);
        assert_eq!(pool.keep_alive(), 0);
    }

    #[test]
    fn test_wrongly_typed_fields_use_defaults() {
        let pool = Pool::from_json(&json!({
            "url": "pool.example:3333",
            "user": 42,
            "enabled": "yes",
            "daemon-poll-interval": -1,
            "keepalive": "60"
        }));
        assert!(pool.is_valid());
        assert_eq!(pool.user(), "");
        assert!(pool.flags().enabled);
        assert_eq!(pool.poll_interval(), Pool::DEFAULT_POLL_INTERVAL);
        assert_eq!(pool.keep_alive(), 0);
    }

    #[test]
    fn test_float_keep_alive_is_ignored() {
        let pool = Pool::from_json(&json!({"url": "pool.example:3333", "keepalive": 12.5}));
        assert_eq!(pool.keep_alive(), 0);
    }

    #[test]
    fn test_invalid_self_select_falls_back_to_daemon_flag() {
        let pool = Pool::from_json(&json!({
            "url": "node.example:18081",
            "self-select": "ftp://nowhere",
            "daemon": true
        }));
        assert_eq!(pool.mode(), Mode::Daemon);
        assert!(pool.daemon().is_none());
    }

    #[test]
    fn test_unusable_self_select_still_counts_for_equality() {
        let plain = Pool::from_json(&json!({"url": "pool.example:3333"}));
        let broken = Pool::from_json(&json!({"url": "pool.example:3333", "self-select": "garbage://x"}));
        assert_eq!(broken.mode(), Mode::Pool);
        assert!(broken.daemon().is_none());
        assert_ne!(plain, broken, "editing a broken self-select entry is a change");

        let encoded = broken.to_json();
        assert_eq!(encoded["self-select"], json!("garbage://x"));
        assert_eq!(Pool::from_json(&encoded), broken);
    }

    #[test]
    fn test_capabilities_gate_enablement() {
        let tls = Pool::from_url("stratum+ssl://pool.example:443");
        assert!(tls.is_enabled_with(Capabilities::all()));
        assert!(!tls.is_enabled_with(Capabilities { tls: false, http: true }));

        let daemon = Pool::from_json(&json!({"url": "node.example:18081", "daemon": true}));
        assert!(daemon.is_enabled_with(Capabilities::all()));
        assert!(!daemon.is_enabled_with(Capabilities { tls: true, http: false }));

        let plain = Pool::from_url("pool.example:3333");
        assert!(plain.is_enabled_with(Capabilities::none()));
    }
}

// Changelog:
// - v1.2.1 (2025-07-08): The configured self-select address is kept verbatim.
//   - Pools differing only in an unusable self-select entry compare unequal.
//   - Non-daemon pools write the address back even when it does not parse.
// - v1.2.0 (2025-07-04): Added capability-aware enablement.
//   - is_enabled_with takes an explicit Capabilities set; is_enabled uses the
//     cargo features compiled into the build.
// - v1.1.0 (2025-07-01): Added self-select pools.
//   - A valid "self-select" address nests a daemon pool and wins over "daemon".
//   - printable_name appends the daemon label for self-select pools.
// - v1.0.0 (2025-06-28): Initial pool configuration.
//   - Purpose: Holds everything needed to connect to one pool endpoint.
//   - Features: URL, JSON and discrete-field constructors, JSON encoding with
//     boolean/integer keep-alive, equality for reload detection.
