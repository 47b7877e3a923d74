#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Writes to stderr so log lines never mix with prompts on stdout.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `BROADSIDE_LOG`, or `warn` if unset or invalid.
pub fn log_level_from_env() -> LevelFilter {
    env::var("BROADSIDE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Initialize logging with a level taken from the `BROADSIDE_LOG` environment variable.
/// Calling it more than once is harmless.
pub fn init_logging() {
    let level = log_level_from_env();
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
