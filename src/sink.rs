// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared byte-sink handle.

use std::io::Write;
use std::sync::{Arc, Mutex};

/// A cloneable handle to the byte destination a [`Logger`](crate::Logger)
/// writes to.
///
/// Several loggers may hold the same handle; each record written through any
/// of them is a single write under the handle's lock. The handle does not
/// open, close, or flush the destination on its own — lifecycle stays with
/// the caller.
#[derive(Clone)]
pub struct Sink(Arc<Mutex<Box<dyn Write + Send>>>);

impl Sink {
    /// Wraps a writer in a shared handle.
    pub fn new(writer: impl Write + Send + 'static) -> Sink {
        Sink(Arc::new(Mutex::new(Box::new(writer))))
    }

    /// Returns true when both handles point at the same destination.
    pub fn ptr_eq(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// One atomic write of a fully assembled record.
    pub(crate) fn write_record(&self, record: &[u8]) -> std::io::Result<()> {
        self.0.lock().unwrap().write_all(record)
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.lock().unwrap().flush()
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Sink").field(&Arc::as_ptr(&self.0)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryWriter;

    #[test]
    fn clones_share_the_destination() {
        let buffer = InMemoryWriter::new();
        let sink = Sink::new(buffer.clone());
        let mut clone = sink.clone();

        clone.write_all(b"via clone").unwrap();

        assert!(sink.ptr_eq(&clone));
        assert_eq!(buffer.drain(), "via clone");
    }

    #[test]
    fn records_are_written_whole() {
        let buffer = InMemoryWriter::new();
        let sink = Sink::new(buffer.clone());

        sink.write_record(b"one record").unwrap();

        assert_eq!(buffer.drain(), "one record");
    }

    #[test]
    fn independent_sinks_are_not_equal() {
        let a = Sink::new(InMemoryWriter::new());
        let b = Sink::new(InMemoryWriter::new());
        assert!(!a.ptr_eq(&b));
    }
}
