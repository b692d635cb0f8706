//! Logging bootstrap.
//!
//! Events are formatted by `tracing-subscriber` and forwarded line by line to
//! the browser console, picking the console method from the event level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::error::StorefrontError;

/// Install the global subscriber with the given filter directive.
pub fn init(filter: &str) -> Result<(), StorefrontError> {
    let filter = EnvFilter::try_new(filter)?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Browser console method an event is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Log,
    Warn,
    Error,
}

impl ConsoleStream {
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleStream::Error,
            Level::WARN => ConsoleStream::Warn,
            _ => ConsoleStream::Log,
        }
    }

    fn write(self, line: &str) {
        match self {
            ConsoleStream::Log => leptos::logging::log!("{line}"),
            ConsoleStream::Warn => leptos::logging::warn!("{line}"),
            ConsoleStream::Error => leptos::logging::error!("{line}"),
        }
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleStream::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleStream::for_level(meta.level()))
    }
}

/// Buffers one formatted event and emits it when dropped.
pub struct ConsoleWriter {
    stream: ConsoleStream,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(stream: ConsoleStream) -> Self {
        Self {
            stream,
            buf: Vec::new(),
        }
    }

    fn take_line(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        self.buf.clear();
        Some(line)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            self.stream.write(&line);
        }
    }
}
