// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/pool_config_test.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file contains tests for the pool configuration, located in the tests
// directory. It verifies construction, mode derivation, TLS derivation, the
// JSON codec and equality.
//
// Tree Location:
// - tests/pool_config_test.rs (pool configuration tests)
// - Depends on: pool-endpoint, serde_json

#[cfg(test)]
mod tests {
    use pool_endpoint::pool::{Capabilities, Mode, Pool};
    use serde_json::{Value, json};

    #[test]
    fn test_from_url_defaults() {
        for url in ["pool.example:3333", "stratum+tcp://pool.example:5555", "[::1]:3333", "10.0.0.2"] {
            let pool = Pool::from_url(url);
            assert!(pool.is_valid(), "{} should be valid", url);
            assert_eq!(pool.mode(), Mode::Pool, "{} should be a plain pool", url);
            assert!(pool.flags().enabled, "{} should be enabled", url);
            assert_eq!(pool.url().as_str(), url, "URL should be stored verbatim");
            assert_eq!(pool.poll_interval(), Pool::DEFAULT_POLL_INTERVAL);
            assert_eq!(pool.user(), "");
            assert_eq!(pool.password(), "");
            assert_eq!(pool.keep_alive(), 0);
            assert!(pool.daemon().is_none());
        }
    }

    #[test]
    fn test_missing_or_bad_url_short_circuits() {
        let inputs = [
            json!({"user": "wallet", "pass": "secret", "daemon": true, "keepalive": 30, "enabled": false}),
            json!({"url": "", "user": "wallet", "tls": true, "tls-fingerprint": "ab12cd34"}),
            json!({"url": "gopher://pool.example:70", "rig-id": "rig", "self-select": "node.example:18081"}),
            json!({"url": 3333, "user": "wallet", "daemon": true, "daemon-poll-interval": 250}),
            json!(["pool.example:3333"]),
        ];

        for input in inputs {
            let pool = Pool::from_json(&input);
            assert!(!pool.is_valid(), "{} should be invalid", input);
            assert!(!pool.is_enabled_with(Capabilities::all()));
            assert_eq!(pool.user(), "");
            assert_eq!(pool.password(), "");
            assert_eq!(pool.rig_id(), "");
            assert_eq!(pool.fingerprint(), "");
            assert_eq!(pool.keep_alive(), 0);
            assert_eq!(pool.poll_interval(), Pool::DEFAULT_POLL_INTERVAL);
            assert_eq!(pool.mode(), Mode::Pool);
            assert!(pool.flags().enabled, "enabled flag should keep its default");
            assert!(!pool.flags().tls, "tls flag should keep its default");
            assert!(pool.daemon().is_none());
        }
    }

    #[test]
    fn test_full_object_is_read() {
        let pool = Pool::from_json(&json!({
            "url": "pool.example:3333",
            "user": "wallet",
            "pass": "worker1",
            "rig-id": "rig-01",
            "tls-fingerprint": "ab12cd34",
            "keepalive": 45,
            "enabled": false
        }));

        assert!(pool.is_valid());
        assert_eq!(pool.user(), "wallet");
        assert_eq!(pool.password(), "worker1");
        assert_eq!(pool.rig_id(), "rig-01");
        assert_eq!(pool.fingerprint(), "ab12cd34");
        assert_eq!(pool.keep_alive(), 45);
        assert!(!pool.flags().enabled);
        assert!(!pool.is_enabled(), "disabled pools are never enabled");
    }

    #[test]
    fn test_self_select_mode() {
        let pool = Pool::from_json(&json!({
            "url": "pool.example:3333",
            "self-select": "daemon.example:18081"
        }));

        assert_eq!(pool.mode(), Mode::SelfSelect);
        let daemon = pool.daemon().expect("self-select pool should nest a daemon");
        assert_eq!(daemon.url().as_str(), "daemon.example:18081");
        assert_eq!(daemon.port(), 18081);
    }

    #[test]
    fn test_self_select_wins_over_daemon_flag() {
        let pool = Pool::from_json(&json!({
            "url": "pool.example:3333",
            "daemon": true,
            "self-select": "daemon.example:18081"
        }));
        assert_eq!(pool.mode(), Mode::SelfSelect);
    }

    #[test]
    fn test_daemon_mode() {
        let pool = Pool::from_json(&json!({"url": "pool.example:3333", "daemon": true}));
        assert_eq!(pool.mode(), Mode::Daemon);
        assert!(pool.daemon().is_none());

        let pool = Pool::from_json(&json!({"url": "pool.example:3333", "daemon": false}));
        assert_eq!(pool.mode(), Mode::Pool);
    }

    #[test]
    fn test_tls_from_scheme() {
        let pool = Pool::from_json(&json!({"url": "stratum+ssl://pool.example:443"}));
        assert!(pool.is_tls(), "stratum+ssl should imply TLS");
        assert!(pool.flags().tls);

        let pool = Pool::from_json(&json!({"url": "stratum+ssl://pool.example:443", "tls": false}));
        assert!(pool.is_tls(), "an explicit false cannot turn TLS off for an ssl URL");

        let pool = Pool::from_json(&json!({"url": "pool.example:3333", "tls": true}));
        assert!(pool.is_tls(), "explicit TLS request should be honoured");

        let pool = Pool::from_url("stratum+ssl://pool.example:443");
        assert!(pool.is_tls(), "URL-only construction should still report TLS");
    }

    #[test]
    fn test_discrete_fields() {
        let pool = Pool::new("pool.example", 443, "wallet", "x", 30, true);
        assert!(pool.is_valid());
        assert!(pool.is_tls());
        assert_eq!(pool.host(), "pool.example");
        assert_eq!(pool.port(), 443);
        assert_eq!(pool.user(), "wallet");
        assert_eq!(pool.password(), "x");
        assert_eq!(pool.keep_alive(), 30);
        assert_eq!(pool.mode(), Mode::Pool);
        assert_eq!(pool.url().as_str(), "stratum+ssl://pool.example:443");
    }

    #[test]
    fn test_keep_alive_integer_round_trip() {
        for k in [1, 15, 59, 61, 300] {
            let inputs = [
                json!({"url": "pool.example:3333", "keepalive": k}),
                json!({"url": "pool.example:3333", "self-select": "node.example:18081", "keepalive": k}),
            ];

            for input in inputs {
                let pool = Pool::from_json(&input);
                let encoded = pool.to_json();
                assert_eq!(encoded["keepalive"], json!(k), "non-special keep-alive should stay an integer in {}", input);

                let decoded = Pool::from_json(&encoded);
                assert_eq!(decoded.keep_alive(), k);
                assert_eq!(decoded.mode(), pool.mode(), "mode should survive the round-trip of {}", input);
                assert_eq!(decoded, pool);
            }
        }
    }

    #[test]
    fn test_keep_alive_boolean_round_trip() {
        let mut pool = Pool::from_url("pool.example:3333");

        pool.set_keep_alive(0);
        let encoded = pool.to_json();
        assert_eq!(encoded["keepalive"], Value::Bool(false));
        assert_eq!(Pool::from_json(&encoded).keep_alive(), 0);

        pool.set_keep_alive(Pool::KEEP_ALIVE_TIMEOUT);
        let encoded = pool.to_json();
        assert_eq!(encoded["keepalive"], Value::Bool(true));
        assert_eq!(Pool::from_json(&encoded).keep_alive(), Pool::KEEP_ALIVE_TIMEOUT);
    }

    #[test]
    fn test_keep_alive_of_other_shapes_is_ignored() {
        for keepalive in [json!("30"), json!(null), json!([30]), json!({"seconds": 30}), json!(1.5)] {
            let pool = Pool::from_json(&json!({"url": "pool.example:3333", "keepalive": keepalive}));
            assert!(pool.is_valid());
            assert_eq!(pool.keep_alive(), 0, "{} should be ignored", keepalive);
        }
    }

    #[test]
    fn test_equality_of_independent_decodes() {
        let input = json!({
            "url": "pool.example:3333",
            "user": "wallet",
            "pass": "x",
            "rig-id": "rig-01",
            "keepalive": true,
            "self-select": "daemon.example:18081"
        });

        let a = Pool::from_json(&input);
        let b = Pool::from_json(&input);
        assert_eq!(a, b, "identical input should decode to equal pools");

        let changed = Pool::from_json(&json!({
            "url": "pool.example:3333",
            "user": "wallet",
            "pass": "x",
            "rig-id": "rig-01",
            "keepalive": true,
            "self-select": "daemon.example:18082"
        }));
        assert_ne!(a, changed, "a different nested daemon should compare unequal");

        let mut keep_alive_changed = a.clone();
        keep_alive_changed.set_keep_alive(10);
        assert_ne!(a, keep_alive_changed);
    }

    #[test]
    fn test_daemon_encoding_suppresses_pool_fields() {
        let pool = Pool::from_json(&json!({
            "url": "daemon+http://node.example:18081",
            "user": "wallet",
            "pass": "secret",
            "rig-id": "rig-01",
            "keepalive": 30,
            "daemon": true,
            "daemon-poll-interval": 500
        }));
        let encoded = pool.to_json();
        let obj = encoded.as_object().unwrap();

        assert!(!obj.contains_key("pass"));
        assert!(!obj.contains_key("rig-id"));
        assert!(!obj.contains_key("keepalive"));
        assert!(!obj.contains_key("self-select"));
        assert_eq!(obj["daemon-poll-interval"], json!(500));
        assert_eq!(obj["daemon"], json!(true));
        assert_eq!(obj["user"], json!("wallet"));
    }

    #[test]
    fn test_pool_encoding() {
        let pool = Pool::from_json(&json!({
            "url": "pool.example:3333",
            "user": "wallet",
            "pass": "x",
            "daemon-poll-interval": 500
        }));
        let encoded = pool.to_json();
        let obj = encoded.as_object().unwrap();

        assert_eq!(obj["url"], json!("pool.example:3333"));
        assert_eq!(obj["user"], json!("wallet"));
        assert_eq!(obj["pass"], json!("x"));
        assert_eq!(obj["rig-id"], Value::Null);
        assert_eq!(obj["keepalive"], json!(false));
        assert_eq!(obj["enabled"], json!(true));
        assert_eq!(obj["tls"], json!(false));
        assert_eq!(obj["tls-fingerprint"], Value::Null);
        assert_eq!(obj["daemon"], json!(false));
        assert!(!obj.contains_key("daemon-poll-interval"));
        assert!(!obj.contains_key("self-select"));
    }

    #[test]
    fn test_self_select_encoding() {
        let pool = Pool::from_json(&json!({
            "url": "pool.example:3333",
            "self-select": "daemon.example:18081",
            "daemon-poll-interval": 500
        }));
        let encoded = pool.to_json();

        assert_eq!(encoded["self-select"], json!("daemon.example:18081"));
        assert_eq!(encoded["daemon"], json!(false));
        assert!(encoded.get("daemon-poll-interval").is_none(), "poll interval is never emitted with self-select");
        assert!(encoded.get("pass").is_some());
    }

    #[test]
    fn test_encode_decode_encode_is_stable() {
        let inputs = [
            json!({"url": "pool.example:3333", "user": "w", "pass": "p", "rig-id": "r", "keepalive": 25}),
            json!({"url": "stratum+ssl://pool.example:443", "user": "w", "tls-fingerprint": "ff00", "keepalive": true}),
            json!({"url": "node.example:18081", "user": "w", "daemon": true, "daemon-poll-interval": 250}),
            json!({"url": "pool.example:3333", "user": "w", "self-select": "daemon+https://node.example:18089", "enabled": false}),
        ];

        for input in inputs {
            let first = Pool::from_json(&input).to_json();
            let second = Pool::from_json(&first).to_json();
            assert_eq!(first, second, "re-encoding {} should be stable", input);
            assert_eq!(Pool::from_json(&first), Pool::from_json(&input));
        }
    }

    #[test]
    fn test_from_json_str() {
        let pool = Pool::from_json_str(r#"{"url": "pool.example:3333", "user": "wallet"}"#).unwrap();
        assert_eq!(pool.user(), "wallet");

        assert!(Pool::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_printable_name() {
        let pool = Pool::from_url("pool.example:3333");
        assert_eq!(pool.printable_name(), "\x1B[1;36mpool.example:3333\x1B[0m");

        let disabled = Pool::from_json(&json!({"url": "pool.example:3333", "enabled": false}));
        assert_eq!(disabled.printable_name(), "\x1B[1;31mpool.example:3333\x1B[0m");

        let tls = Pool::from_url("stratum+ssl://pool.example:443");
        let expected_color = if cfg!(feature = "tls") { 32 } else { 31 };
        assert_eq!(
            tls.printable_name(),
            format!("\x1B[1;{}mstratum+ssl://pool.example:443\x1B[0m", expected_color)
        );
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_printable_name_self_select() {
        let pool = Pool::from_json(&json!({
            "url": "pool.example:3333",
            "self-select": "daemon+https://node.example:18089"
        }));
        assert_eq!(
            pool.printable_name(),
            "\x1B[1;36mpool.example:3333\x1B[0m self-select \x1B[1;32mdaemon+https://node.example:18089\x1B[0m"
        );
    }
}

// Changelog:
// - v1.0.1 (2025-07-08): Widened keep-alive and short-circuit coverage.
//   - Integer keep-alive round-trip also runs on self-select pools.
//   - Short-circuit inputs carry tls-fingerprint and daemon-poll-interval.
// - v1.0.0 (2025-06-30): Initial pool configuration tests.
//   - Covers URL, JSON and discrete-field constructors, mode and TLS
//     derivation, keep-alive encoding, field suppression and equality.
