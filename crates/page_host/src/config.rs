//! Configuration settings for the page host.
//!
//! Controls the simulated load lifecycle (how many parse ticks the document
//! loader consumes before it finishes, or whether it stalls forever), the
//! drive-loop cadence, and telemetry. Configuration can be loaded from
//! environment variables or constructed programmatically.

use core::time::Duration;
use std::env;

/// Parse-tick count meaning "the loader never completes".
const STALL_SENTINEL: &str = "stall";

/// Runtime configuration for the page host.
#[derive(Clone, Debug)]
pub struct HostConfig {
    /// Parse ticks the document loader consumes before finishing.
    /// `None` means the loader stalls and the document never becomes ready.
    pub parse_ticks: Option<u32>,
    /// Drive-loop tick interval in milliseconds.
    pub tick_interval_ms: u64,
    /// Ceiling on drive-loop ticks before the binary gives up waiting.
    pub max_ticks: u32,
    /// Whether to emit a lifecycle snapshot line per tick.
    pub telemetry_enabled: bool,
}

impl HostConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `BEACON_PARSE_TICKS`: parse ticks before the loader finishes
    ///   (default: 4); the literal `stall` yields a loader that never
    ///   finishes
    /// - `BEACON_TICK_INTERVAL_MS`: drive-loop tick interval in milliseconds
    ///   (default: 16, minimum: 1)
    /// - `BEACON_MAX_TICKS`: drive-loop tick ceiling (default: 240)
    /// - `BEACON_TELEMETRY`: set to "1" to emit a snapshot line per tick
    ///   (default: disabled)
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        let parse_ticks = match env::var("BEACON_PARSE_TICKS").ok() {
            Some(raw) if raw == STALL_SENTINEL => None,
            Some(raw) => Some(raw.parse::<u32>().ok().unwrap_or(4)),
            None => Some(4),
        };
        let tick_interval_ms = env::var("BEACON_TICK_INTERVAL_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(16)
            .max(1);
        let max_ticks = env::var("BEACON_MAX_TICKS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(240);
        let telemetry_enabled = env::var("BEACON_TELEMETRY").ok().as_deref() == Some("1");
        Self {
            parse_ticks,
            tick_interval_ms,
            max_ticks,
            telemetry_enabled,
        }
    }

    /// Get the drive-loop tick interval as a `Duration`.
    #[inline]
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for HostConfig {
    /// Defaults matching `from_env` with no variables set.
    fn default() -> Self {
        Self {
            parse_ticks: Some(4),
            tick_interval_ms: 16,
            max_ticks: 240,
            telemetry_enabled: false,
        }
    }
}
