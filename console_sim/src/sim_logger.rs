use std::collections::VecDeque;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept for the log panel
const CAPACITY: usize = 8;

/// Logger which keeps the last lines in memory, printing would tear the TUI
struct SimLogger {
    lines: Mutex<VecDeque<String>>,
}

static LOGGER: SimLogger = SimLogger {
    lines: Mutex::new(VecDeque::new()),
};

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Oldest first
pub fn lines() -> Vec<String> {
    match LOGGER.lines.lock() {
        Ok(lines) => lines.iter().cloned().collect(),
        Err(_) => vec![],
    }
}

impl Log for SimLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut lines) = self.lines.lock() {
            lines.push_back(format!("{:<5} {}", record.level(), record.args()));
            while lines.len() > CAPACITY {
                lines.pop_front();
            }
        }
    }

    fn flush(&self) {}
}
