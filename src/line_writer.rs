// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-splitting writer adapter.
//!
//! A [`Logger`] can stand in anywhere an [`io::Write`] is expected, so
//! unstructured output (say, a subprocess's stdout) can be piped through it.
//! Each buffer is split into lines and every line becomes one decorated
//! record.
//!
//! Buffers are split independently: no partial line is carried over between
//! `write` calls, so a line arriving in two chunks produces two records.
//! Callers needing one record per logical line must hand over whole lines.

use crate::Logger;
use std::io;

impl io::Write for &Logger {
    /// Prints the buffer line by line.
    ///
    /// Lines are separated by `\n`; a trailing `\r` is dropped from each
    /// line, and a final line without a newline is printed as well. Line
    /// bytes are forwarded verbatim, UTF-8 or not. Always reports the whole
    /// buffer as consumed.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut lines = buf.split(|&b| b == b'\n').peekable();
        while let Some(line) = lines.next() {
            if lines.peek().is_none() && line.is_empty() {
                // no final record after a trailing newline (or for empty input)
                break;
            }
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            self.print_bytes(line);
        }
        Ok(buf.len())
    }

    /// No-op. The logger does not manage its sink's lifecycle.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Write for Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        (&*self).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        (&*self).flush()
    }
}
