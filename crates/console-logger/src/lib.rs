//! Console Logger
//!
//! `tracing` subscriber for the browser build. Formatted lines go to the
//! devtools console (stderr on native targets) and into a bounded in-memory
//! buffer so swallowed errors stay inspectable from the running page.

use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock};

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

/// Lines kept by the global buffer
pub const DEFAULT_CAPACITY: usize = 500;

static BUFFER: OnceLock<RollingBuffer> = OnceLock::new();

/// Logger setup errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    AlreadyInitialized,
    InvalidLevel(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::AlreadyInitialized => write!(f, "logger already initialized"),
            LoggerError::InvalidLevel(level) => write!(f, "invalid log level: {}", level),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Fixed-capacity FIFO of formatted log lines
#[derive(Debug)]
pub struct RollingBuffer {
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot, oldest first
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(guard) => guard.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

fn buffer() -> &'static RollingBuffer {
    BUFFER.get_or_init(|| RollingBuffer::new(DEFAULT_CAPACITY))
}

/// Recent log lines captured since startup (oldest first)
pub fn recent_lines() -> Vec<String> {
    buffer().lines()
}

/// Parse a level name ("trace" .. "error", "off")
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    LevelFilter::from_str(level.trim()).map_err(|_| LoggerError::InvalidLevel(level.to_string()))
}

/// Install the global subscriber.
///
/// Fails with `AlreadyInitialized` when a global subscriber is already set.
pub fn init_logger(app_name: &str, level: &str) -> Result<(), LoggerError> {
    let filter = parse_level(level)?;
    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_timer(ClockTime)
        .with_writer(ConsoleMakeWriter)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing::info!(app = app_name, %filter, "logger initialized");
    Ok(())
}

/// Wall-clock prefix; `SystemTime` is unavailable on wasm32 so chrono (wasmbind) is used
struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Collects one formatted event, emits it on drop
struct ConsoleWriter {
    level: Level,
    bytes: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, bytes: Vec::new() }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.bytes).trim_end().to_string();
        if line.is_empty() {
            return;
        }
        emit(self.level, &line);
        buffer().push(line);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_evicts_oldest() {
        let buffer = RollingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_buffer_clear() {
        let buffer = RollingBuffer::new(2);
        buffer.push("a".to_string());
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN ").unwrap(), LevelFilter::WARN);
        assert_eq!(
            parse_level("loud"),
            Err(LoggerError::InvalidLevel("loud".to_string()))
        );
    }

    #[test]
    fn test_init_captures_lines_and_rejects_second_init() {
        init_logger("test", "debug").expect("first init");
        tracing::warn!(lead_id = 7, "listing status update failed");

        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.contains("listing status update failed")));
        assert!(lines.iter().any(|l| l.contains("WARN")));

        assert_eq!(init_logger("test", "info"), Err(LoggerError::AlreadyInitialized));
    }
}
