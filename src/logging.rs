#![cfg(feature = "std")]

use log::{LevelFilter, Metadata, Record};
use std::env;
use std::io::Write;

/// Writes records to stderr so they never mix with the board on stdout.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr(),
                "{} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level used when `SEABATTLE_LOG` is unset or unparsable.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Parse a level name such as `debug` or `off`.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Initialize logging with a level taken from the `SEABATTLE_LOG` environment variable.
pub fn init_logging() {
    let level = parse_level(env::var("SEABATTLE_LOG").ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
