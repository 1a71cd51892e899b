use crate::models::error::ResizeError;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// `log` backend that writes to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Call once, early in `main`.
pub fn init(level: LevelFilter) -> Result<(), ResizeError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
