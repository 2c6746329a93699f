#![cfg(feature = "std")]

//! Stderr `log` backend for the binaries. Stdout stays free for game
//! output and the `sim` JSON report.

use log::{LevelFilter, Metadata, Record};
use std::env;

/// Environment variable that overrides the log level (`error` .. `trace`).
pub const LOG_ENV_VAR: &str = "NAVAL_BATTLE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Resolve the level: a valid `NAVAL_BATTLE_LOG` wins over `default`.
pub fn level_from_env(default: LevelFilter) -> LevelFilter {
    env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(default)
}

/// Install the stderr logger. Calling it again keeps the first logger but
/// still updates the level.
pub fn init_logging(default: LevelFilter) {
    let level = level_from_env(default);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
