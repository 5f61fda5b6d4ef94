// Pool Endpoint - Free and Open Source Software Statement
//
// This project, pool-endpoint, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides utility functions for formatting pool information for
// terminal output, located in the utils subdirectory. It wraps labels in ANSI
// colour sequences and renders keep-alive settings for logs.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

/// Control sequence introducer
pub const CSI: &str = "\x1B[";
/// Resets all attributes
pub const CLEAR: &str = "\x1B[0m";

pub const RED: u8 = 31;
pub const GREEN: u8 = 32;
pub const CYAN: u8 = 36;

/// Utility functions for formatting pool output
pub struct FormatUtils;

impl FormatUtils {
    /// Wrap text in a bold ANSI colour
    pub fn bold_color(code: u8, text: &str) -> String {
        format!("{}1;{}m{}{}", CSI, code, text, CLEAR)
    }

    /// Colour for a pool label: red when disabled, green for TLS, cyan otherwise
    pub fn pool_color(enabled: bool, tls: bool) -> u8 {
        match (enabled, tls) {
            (false, _) => RED,
            (true, true) => GREEN,
            (true, false) => CYAN,
        }
    }

    /// Format a keep-alive value for human-readable output
    pub fn format_keep_alive(keep_alive: i32) -> String {
        if keep_alive <= 0 {
            "disabled".to_string()
        } else {
            format!("{}s", keep_alive)
        }
    }
}


// Changelog:
// - v1.1.0 (2025-06-28): Switched from hashrate formatting to pool labels.
//   - Added ANSI colour helpers used by Pool::printable_name.
//   - Added keep-alive rendering for the pool debug dump.
// - v1.0.0 (2025-06-14): Extracted from monolithic main.rs.
