//! Structured logging for the browser. Events go through `tracing` and a
//! `tracing-subscriber` fmt layer whose writer forwards each formatted line to
//! the developer console at the matching console level. Timestamps are
//! omitted because `SystemTime` is unavailable on `wasm32-unknown-unknown`.
//! Never log form values, passwords or OTP codes.

use super::errors::AppError;
use std::str::FromStr;
use tracing::Level;

/// Parses a configured level name, falling back to `INFO`.
pub fn parse_level(value: &str) -> Level {
    Level::from_str(value.trim()).unwrap_or(Level::INFO)
}

/// Installs the global subscriber.
///
/// # Errors
/// Returns `AppError::Config` when a subscriber was already installed.
#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) -> Result<(), AppError> {
    use tracing_subscriber::{filter::LevelFilter, fmt, layer::SubscriberExt, Registry};

    let fmt_layer = fmt::layer()
        .with_writer(console::MakeConsoleWriter)
        .without_time()
        .with_ansi(false)
        .with_target(false);

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(LevelFilter::from_level(level));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| AppError::Config(format!("Logging already initialized: {err}")))
}

/// Host builds only run tests; events stay unsubscribed there.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(_level: Level) -> Result<(), AppError> {
    Ok(())
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;

    pub(super) struct MakeConsoleWriter;

    /// Buffers one formatted event and emits it on drop.
    pub(super) struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
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
            let line = String::from_utf8_lossy(&self.buffer);
            let message = wasm_bindgen::JsValue::from_str(line.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&message),
                Level::WARN => web_sys::console::warn_1(&message),
                Level::INFO => web_sys::console::info_1(&message),
                _ => web_sys::console::debug_1(&message),
            }
        }
    }

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{init, parse_level};
    use tracing::Level;

    #[test]
    fn parse_level_accepts_names_in_any_case() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("trace"), Level::TRACE);
    }

    #[test]
    fn parse_level_falls_back_to_info() {
        assert_eq!(parse_level(""), Level::INFO);
        assert_eq!(parse_level("chatty"), Level::INFO);
    }

    #[test]
    fn host_init_is_a_no_op() {
        assert!(init(Level::DEBUG).is_ok());
    }
}
