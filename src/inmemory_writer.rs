// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Writer
//!
//! This module provides an in-memory sink for testing and debugging. The
//! `InMemoryWriter` captures bytes in memory instead of sending them to
//! stdout or stderr, making it useful for:
//!
//! - Unit testing code that logs through this crate
//! - Capturing decorated output for programmatic inspection
//! - Redirecting the default loggers in tests
//!
//! Clones share one buffer, so a clone can be handed to a
//! [`Logger`](crate::Logger) while the original is kept around to read the
//! captured output back.

use std::io;
use std::sync::{Arc, Mutex};

/// An in-memory sink accumulating everything written to it.
///
/// # Thread Safety
///
/// The buffer is mutex-guarded; clones may be written to and read from
/// concurrently.
///
/// # Example
///
/// ```rust
/// use klio_logger::{InMemoryWriter, Logger};
///
/// let buffer = InMemoryWriter::new();
/// let logger = Logger::new(buffer.clone());
///
/// logger.print("captured");
///
/// let output = buffer.drain();
/// assert!(output.contains("captured"));
///
/// // The buffer is now empty.
/// assert_eq!(buffer.drain(), "");
/// ```
///
/// # Redirecting a default logger
///
/// ```rust
/// use klio_logger::{standard_logger, InMemoryWriter};
///
/// let buffer = InMemoryWriter::new();
/// standard_logger().set_output(buffer.clone());
///
/// klio_logger::info("goes to the buffer");
/// assert!(buffer.drain().contains("goes to the buffer"));
///
/// // Put stdout back for the rest of the process.
/// standard_logger().set_output(std::io::stdout());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

// Boilerplate decisions for InMemoryWriter:
//
// - Clone: implemented - clones share the buffer, which is the point
// - Default: derived - an empty buffer is the obvious zero value
// - PartialEq/Eq/Hash: not implemented - identity vs content is ambiguous
// - Display: not implemented - use drain()/contents() to inspect

impl InMemoryWriter {
    /// Creates a writer with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.buffer.lock().unwrap().clone()
    }

    /// Returns everything written so far as a string and clears the buffer.
    ///
    /// Invalid UTF-8 is replaced lossily.
    pub fn drain(&self) -> String {
        let mut buffer = self.buffer.lock().unwrap();
        let result = String::from_utf8_lossy(&buffer).into_owned();
        buffer.clear();
        result
    }
}

impl io::Write for InMemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn clones_share_the_buffer() {
        let writer = InMemoryWriter::new();
        let mut clone = writer.clone();

        clone.write_all(b"hello").unwrap();

        assert_eq!(writer.contents(), b"hello");
    }

    #[test]
    fn drain_clears_the_buffer() {
        let mut writer = InMemoryWriter::new();
        writer.write_all(b"first").unwrap();

        assert_eq!(writer.drain(), "first");
        assert_eq!(writer.drain(), "");
        assert!(writer.contents().is_empty());
    }
}
