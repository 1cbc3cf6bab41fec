#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Writes to stderr so the board drawn on stdout stays readable.
struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Level named by the `VIR_LOG` environment variable, if set and valid.
pub fn env_level() -> Option<LevelFilter> {
    env::var("VIR_LOG").ok().and_then(|lvl| lvl.parse().ok())
}

/// Initialize logging at a fixed level. Later calls are ignored.
pub fn init_logging_with(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
