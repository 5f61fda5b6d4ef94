// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/url.rs
// Version: 1.1.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements parsing and formatting of pool endpoint addresses,
// located in the pool subdirectory. It accepts bare host:port pairs as well as
// stratum+tcp, stratum+ssl, daemon+http and daemon+https URLs.
//
// Tree Location:
// - src/pool/url.rs (endpoint address parsing)
// - Depends on: url, serde_json

use serde_json::Value;
use std::fmt;
use url::Url;

/// Port used when an address carries no explicit port
pub const DEFAULT_PORT: u16 = 3333;

const STRATUM_TCP: &str = "stratum+tcp";
const STRATUM_SSL: &str = "stratum+ssl";
const DAEMON_HTTP: &str = "daemon+http";
const DAEMON_HTTPS: &str = "daemon+https";
const HOST_SCHEME: &str = "http";

/// Transport family named by the URL scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// Bare `host:port`, treated as plain stratum
    #[default]
    Unspecified,
    Stratum,
    Daemon,
}

/// A parsed pool address. The original text is kept verbatim so that it can be
/// written back to configuration files unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolUrl {
    raw: String,
    host: String,
    port: u16,
    scheme: Scheme,
    tls: bool,
}

impl PoolUrl {
    /// Parse an address. Failure is not an error: the result simply reports
    /// `is_valid() == false`.
    pub fn parse(input: &str) -> Self {
        let mut url = Self {
            raw: input.to_string(),
            ..Default::default()
        };

        if let Some((scheme, tls, host, port)) = Self::split(input) {
            url.scheme = scheme;
            url.tls = tls;
            url.host = host;
            url.port = port;
        }

        url
    }

    /// Build a stratum address from its parts
    pub fn from_parts(host: &str, port: u16, tls: bool) -> Self {
        let scheme = if tls { STRATUM_SSL } else { STRATUM_TCP };
        Self::parse(&format!("{}://{}", scheme, authority(host, port)))
    }

    fn split(input: &str) -> Option<(Scheme, bool, String, u16)> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let (scheme, tls, rest) = match input.split_once("://") {
            Some((prefix, rest)) => {
                let (scheme, tls) = match prefix.to_ascii_lowercase().as_str() {
                    STRATUM_TCP => (Scheme::Stratum, false),
                    STRATUM_SSL => (Scheme::Stratum, true),
                    DAEMON_HTTP => (Scheme::Daemon, false),
                    DAEMON_HTTPS => (Scheme::Daemon, true),
                    _ => return None,
                };
                (scheme, tls, rest)
            }
            None => (Scheme::Unspecified, false, input),
        };

        // Only special schemes get IDNA host processing, and those hide their
        // own default port, so the port is read through the opaque scheme.
        let named = Url::parse(&format!("{}://{}", HOST_SCHEME, rest)).ok()?;
        let host = named
            .host_str()?
            .trim_start_matches('[')
            .trim_end_matches(']')
            .to_string();
        let port = Url::parse(&format!("{}://{}", STRATUM_TCP, rest))
            .ok()?
            .port()
            .unwrap_or(DEFAULT_PORT);

        if host.is_empty() || port == 0 {
            return None;
        }

        Some((scheme, tls, host, port))
    }

    pub fn is_valid(&self) -> bool {
        !self.host.is_empty() && self.port > 0
    }

    /// True for the `stratum+ssl` and `daemon+https` schemes
    pub fn is_tls(&self) -> bool {
        self.tls
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// `host:port`, with IPv6 hosts bracketed
    pub fn authority(&self) -> String {
        authority(&self.host, self.port)
    }

    /// The address exactly as it was supplied
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn to_json(&self) -> Value {
        if self.raw.is_empty() {
            Value::Null
        } else {
            Value::String(self.raw.clone())
        }
    }
}

impl fmt::Display for PoolUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn authority(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}


// Changelog:
// - v1.1.1 (2025-07-08): Hosts are now IDNA-normalized.
//   - Non-ASCII hosts become punycode instead of percent-encoded text.
//   - Explicit ports 80 and 443 are kept.
// - v1.1.0 (2025-07-02): Delegated authority parsing to the url crate.
//   - IPv6 literals and out-of-range ports are now handled by the url parser.
//   - Unknown schemes are rejected instead of being treated as bare hosts.
// - v1.0.0 (2025-06-28): Initial endpoint address parser.
//   - Supports host:port, default port 3333 and the four pool schemes.
