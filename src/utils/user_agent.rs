// Pool Endpoint - Free and Open Source Software Statement
//
// File: src/utils/user_agent.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>

/// Agent string announced by stratum clients at login
pub fn user_agent() -> String {
    format!(
        "pool-endpoint/{} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}
