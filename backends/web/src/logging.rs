//! Tracing output to the browser console.

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Mutex, Once, OnceLock};

use tracing::{Level, Metadata};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::{self, writer::MakeWriter};
use tracing_subscriber::prelude::*;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static TRACING_INSTALLED: Once = Once::new();
static LOG_LEVEL: OnceLock<Mutex<LevelFilter>> = OnceLock::new();

fn current_level() -> LevelFilter {
    LOG_LEVEL
        .get_or_init(|| Mutex::new(DEFAULT_LOG_LEVEL))
        .lock()
        .map_or(DEFAULT_LOG_LEVEL, |guard| *guard)
}

/// Updates the console log filter. Unknown names fall back to `info`.
pub fn set_log_level(level: &str) {
    let parsed = LevelFilter::from_str(level).unwrap_or(DEFAULT_LOG_LEVEL);
    if let Ok(mut guard) = LOG_LEVEL.get_or_init(|| Mutex::new(DEFAULT_LOG_LEVEL)).lock() {
        *guard = parsed;
    }
}

/// Installs the console subscriber and panic hook (idempotent).
pub fn install() {
    TRACING_INSTALLED.call_once(|| {
        console_error_panic_hook::set_once();

        let console = fmt::layer()
            .without_time()
            .with_ansi(false)
            .with_writer(ConsoleWriter)
            .with_filter(filter_fn(|meta| level_allows(current_level(), *meta.level())));

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            web_sys::console::warn_1(&"carousel: a tracing subscriber is already installed".into());
        }
    });
}

const fn level_allows(filter: LevelFilter, level: Level) -> bool {
    match filter {
        LevelFilter::OFF => false,
        LevelFilter::ERROR => matches!(level, Level::ERROR),
        LevelFilter::WARN => matches!(level, Level::ERROR | Level::WARN),
        LevelFilter::INFO => matches!(level, Level::ERROR | Level::WARN | Level::INFO),
        LevelFilter::DEBUG => matches!(
            level,
            Level::ERROR | Level::WARN | Level::INFO | Level::DEBUG
        ),
        LevelFilter::TRACE => true,
    }
}

#[derive(Clone, Copy, Default)]
struct ConsoleWriter;

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(*meta.level())
    }
}

/// Buffers one formatted event and hands it to `console.*` on drop.
struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleLine {
    const fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    /// Takes the buffered text without its trailing newline, if any.
    fn take_line(&mut self) -> Option<String> {
        let buf = std::mem::take(&mut self.buf);
        let text = String::from_utf8_lossy(&buf);
        let text = text.trim_end();
        (!text.is_empty()).then(|| text.to_string())
    }
}

impl Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let Some(text) = self.take_line() else {
            return;
        };
        let value = text.into();
        match self.level {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            Level::INFO => web_sys::console::info_1(&value),
            _ => web_sys::console::log_1(&value),
        }
    }
}
