//! # Status Sinks
//!
//! Output seam for every drone operation.
//!
//! Drones publish one human-readable line per step and never decide where
//! it goes. The binary hands them a [`WriterSink`] over stdout; tests and
//! JSON rendering use a [`Recorder`].

use crate::DroneError;
use std::io::Write;

/// Destination for status lines.
pub trait StatusSink {
    /// Publish a single line.
    fn emit(&mut self, line: &str) -> Result<(), DroneError>;
}

// =============================================================================
// RECORDER
// =============================================================================

/// In-memory sink that keeps every line in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    lines: Vec<String>,
}

impl Recorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines recorded so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the recorder, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Forget every recorded line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl StatusSink for Recorder {
    fn emit(&mut self, line: &str) -> Result<(), DroneError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

// =============================================================================
// WRITER SINK
// =============================================================================

/// Sink writing newline-terminated lines to any `io::Write`.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush buffered lines to the inner writer.
    pub fn flush(&mut self) -> Result<(), DroneError> {
        self.writer
            .flush()
            .map_err(|e| DroneError::Sink(e.to_string()))
    }

    /// Flush and return the inner writer.
    pub fn into_inner(mut self) -> Result<W, DroneError> {
        self.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> StatusSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> Result<(), DroneError> {
        writeln!(self.writer, "{}", line).map_err(|e| DroneError::Sink(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_order() {
        let mut recorder = Recorder::new();
        recorder.emit("first").expect("emit");
        recorder.emit("second").expect("emit");

        assert_eq!(recorder.lines(), ["first", "second"]);
        assert_eq!(recorder.len(), 2);

        recorder.clear();
        assert!(recorder.is_empty());
    }

    #[test]
    fn writer_sink_terminates_lines() {
        let mut sink = WriterSink::new(Vec::new());
        sink.emit("a").expect("emit");
        sink.emit("b").expect("emit");

        let bytes = sink.into_inner().expect("flush");
        assert_eq!(String::from_utf8_lossy(&bytes), "a\nb\n");
    }

    #[test]
    fn flush_reaches_inner_writer() {
        #[derive(Default)]
        struct Tracked {
            flushes: usize,
        }

        impl Write for Tracked {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                self.flushes += 1;
                Ok(())
            }
        }

        let mut sink = WriterSink::new(Tracked::default());
        sink.emit("line").expect("emit");
        sink.flush().expect("flush");

        let inner = sink.into_inner().expect("into_inner");
        assert_eq!(inner.flushes, 2);
    }

    #[test]
    fn writer_sink_maps_io_failure() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sink = WriterSink::new(Closed);
        let result = sink.emit("lost");
        assert!(matches!(result, Err(DroneError::Sink(_))));
    }
}
