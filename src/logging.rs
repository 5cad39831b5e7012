//! Diagnostic logging setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// Initialises the global tracing subscriber.
///
/// Logs go to stderr so they never mix with the report on stdout.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use crate::loader::load_sequence;

    /// Collects formatted log lines in memory.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_filter_hides_load_diagnostics() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = fmt()
            .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let loaded = tracing::subscriber::with_default(subscriber, || {
            load_sequence(dir.path().join("missing.txt"), &mut out).unwrap()
        });

        // Only the user-facing line, nothing on the log stream
        assert!(loaded.is_none());
        assert_eq!(String::from_utf8(out).unwrap(), "File not found.\n");
        assert!(captured.0.lock().unwrap().is_empty());
    }
}
