//! Line-oriented output for diagnostic dumps.
//!
//! Dumps never write to a global logger directly; callers hand in a
//! [`LineSink`] so output can be routed to `tracing` in production and
//! captured verbatim in tests.

use tracing::info;

/// A destination for rendered text lines.
pub trait LineSink {
    /// Accept one complete line (without trailing newline).
    fn emit(&mut self, line: &str);
}

/// Emits each line as an INFO event on the `binblob::dump` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LineSink for TracingSink {
    fn emit(&mut self, line: &str) {
        info!(target: "binblob::dump", "{}", line);
    }
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn vec_sink_collects_lines() {
        let mut lines: Vec<String> = Vec::new();
        lines.emit("first");
        lines.emit("second");
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn mut_ref_forwards() {
        let mut lines: Vec<String> = Vec::new();
        {
            let mut by_ref = &mut lines;
            by_ref.emit("x");
        }
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn tracing_sink_emits_info_events() {
        let buf = Captured::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingSink.emit("00000000  41 A");
        });

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("INFO"));
        assert!(out.contains("binblob::dump"));
        assert!(out.contains("00000000  41 A"));
    }
}
