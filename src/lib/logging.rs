//! Console logging for the WASM bundle. `tracing` events are formatted by
//! `tracing-subscriber` without timestamps (the clock is unavailable on
//! `wasm32-unknown-unknown`) and written to the browser console.

use std::io;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, fmt::MakeWriter};

/// Builds the filter for the configured level, falling back to `info` on
/// unparsable input.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .parse_lossy(level)
}

/// Installs the global subscriber. When one is already installed the new one
/// is dropped and a console warning is written.
pub fn init(level: &str) {
    let subscriber = fmt()
        .with_env_filter(build_filter(level))
        .with_writer(ConsoleWriter)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        emit_warning(&format!("Logging already initialized: {err}"));
    }
}

/// `MakeWriter` that hands out one buffered console line per event.
#[derive(Clone, Copy, Default)]
pub struct ConsoleWriter;

pub struct ConsoleLine {
    buffer: Vec<u8>,
}

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine { buffer: Vec::new() }
    }
}

impl io::Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if !line.is_empty() {
            emit(line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&line.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    eprintln!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn emit_warning(line: &str) {
    web_sys::console::warn_1(&line.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn emit_warning(line: &str) {
    eprintln!("{line}");
}
