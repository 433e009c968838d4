//! Structured logging to the browser console
//!
//! Installs a `tracing_subscriber::fmt` subscriber whose writer forwards each
//! formatted event to `console.log`, `console.warn` or `console.error`
//! depending on the event level. Timestamps are omitted: the console adds
//! its own and `SystemTime` is unavailable on `wasm32-unknown-unknown`.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

use crate::error::{BehaviorError, Result};

/// Console method a log line is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    /// `console.log`
    Log,
    /// `console.warn`
    Warn,
    /// `console.error`
    Error,
}

impl ConsoleLevel {
    /// Maps a `tracing` level to a console method
    #[must_use]
    pub fn for_level(level: &Level) -> Self {
        if *level == Level::ERROR {
            Self::Error
        } else if *level == Level::WARN {
            Self::Warn
        } else {
            Self::Log
        }
    }

    fn emit(self, line: &str) {
        let value = JsValue::from_str(line);
        match self {
            Self::Log => web_sys::console::log_1(&value),
            Self::Warn => web_sys::console::warn_1(&value),
            Self::Error => web_sys::console::error_1(&value),
        }
    }
}

/// Buffers one formatted event and flushes it to the console on drop
#[derive(Debug)]
pub struct ConsoleWriter {
    level: ConsoleLevel,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: ConsoleLevel) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = buffered_line(&self.buffer) {
            self.level.emit(&line);
        }
    }
}

/// Decodes a buffered event, dropping the trailing newline
fn buffered_line(buffer: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buffer);
    let line = text.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

/// `MakeWriter` producing console-backed writers
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleLevel::for_level(meta.level()))
    }
}

/// Installs the global console subscriber
///
/// # Errors
///
/// Returns `BehaviorError::Logging` if `directive` is not a valid filter or a
/// global subscriber is already installed.
pub fn init(directive: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(directive).map_err(|e| BehaviorError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init()
        .map_err(|e| BehaviorError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_routing() {
        assert_eq!(ConsoleLevel::for_level(&Level::ERROR), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::for_level(&Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::for_level(&Level::INFO), ConsoleLevel::Log);
        assert_eq!(ConsoleLevel::for_level(&Level::DEBUG), ConsoleLevel::Log);
        assert_eq!(ConsoleLevel::for_level(&Level::TRACE), ConsoleLevel::Log);
    }

    #[test]
    fn test_buffered_line_strips_newline() {
        assert_eq!(
            buffered_line(b" INFO pathway_ui: attached\n"),
            Some(" INFO pathway_ui: attached".to_string())
        );
        assert_eq!(buffered_line(b"line\r\n"), Some("line".to_string()));
    }

    #[test]
    fn test_buffered_line_empty() {
        assert_eq!(buffered_line(b""), None);
        assert_eq!(buffered_line(b"\n"), None);
    }
}
