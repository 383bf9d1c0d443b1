// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::encode;
use crate::level::Level;
use crate::sink::Sink;
use std::fmt::Display;
use std::io::Write;
use std::sync::RwLock;

/**
A logger writing Klio-decorated lines to a sink.

Configuration is immutable: [`with_level`](Logger::with_level) and
[`with_tags`](Logger::with_tags) return a new logger and leave the receiver
untouched. The one mutable escape hatch is [`set_output`](Logger::set_output),
which swaps the byte destination without touching level or tags.

The header for the configured `(level, tags)` pair is computed when the
logger is constructed or reconfigured, never at print time.

```
use klio_logger::{InMemoryWriter, Level, Logger};

let buffer = InMemoryWriter::new();
let logger = Logger::new(buffer.clone())
    .with_tags(&["api"])
    .with_level(Level::VERBOSE);
logger.print("hello world");
assert!(buffer.drain().contains("hello world"));
```
*/
#[derive(Debug)]
pub struct Logger {
    output: RwLock<Sink>,
    tags: Vec<String>,
    level: Level,
    line_prefix: String,
}

impl Logger {
    /// Creates a logger writing to `output`, with the default level and no
    /// tags.
    pub fn new(output: impl Write + Send + 'static) -> Logger {
        Logger::from_sink(Sink::new(output))
    }

    /// Creates a logger sharing an existing sink handle.
    pub fn from_sink(output: Sink) -> Logger {
        let tags = Vec::new();
        let level = Level::DEFAULT;
        let line_prefix = encode::line_prefix(&level, &tags);
        Logger {
            output: RwLock::new(output),
            tags,
            level,
            line_prefix,
        }
    }

    /// Returns the tags prepended to each line, as a copy.
    ///
    /// Mutating the returned vector does not affect the logger.
    pub fn tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    /// Returns the level lines are logged at.
    pub fn level(&self) -> Level {
        self.level.clone()
    }

    /// Returns the sink handle lines are currently written to.
    pub fn output(&self) -> Sink {
        self.output.read().unwrap().clone()
    }

    /// Redirects log output.
    ///
    /// In contrast to the other configuration methods this modifies the
    /// logger in place, and it only affects this logger: loggers derived
    /// earlier keep the destination they were created with, while views
    /// derived afterwards (including the transient views behind the
    /// crate-level convenience functions) pick up the new one.
    pub fn set_output(&self, output: impl Write + Send + 'static) {
        *self.output.write().unwrap() = Sink::new(output);
    }

    /// Returns a new logger logging at `level`. The receiver is unchanged.
    ///
    /// The new logger writes to the receiver's current destination.
    pub fn with_level(&self, level: Level) -> Logger {
        let line_prefix = encode::line_prefix(&level, &self.tags);
        Logger {
            output: RwLock::new(self.output()),
            tags: self.tags.clone(),
            level,
            line_prefix,
        }
    }

    /// Returns a new logger with the given tags. The receiver is unchanged.
    ///
    /// The new logger writes to the receiver's current destination.
    pub fn with_tags(&self, tags: &[&str]) -> Logger {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        let line_prefix = encode::line_prefix(&self.level, &tags);
        Logger {
            output: RwLock::new(self.output()),
            tags,
            level: self.level.clone(),
            line_prefix,
        }
    }

    /// Writes one log line.
    ///
    /// The message is placed verbatim between the cached header and the
    /// reset trailer, and the assembled record goes to the sink as a single
    /// write. Write errors are discarded: logging must not redirect control
    /// flow of the hosting command. Returns the receiver for chaining.
    pub fn print(&self, message: impl Display) -> &Logger {
        self.print_bytes(message.to_string().as_bytes());
        self
    }

    /// Writes one log line from preformatted arguments, in the manner of
    /// [`format_args!`].
    ///
    /// ```
    /// use klio_logger::{InMemoryWriter, Logger};
    ///
    /// let buffer = InMemoryWriter::new();
    /// Logger::new(buffer.clone()).printf(format_args!("hello {}", "world"));
    /// assert!(buffer.drain().contains("hello world"));
    /// ```
    pub fn printf(&self, args: std::fmt::Arguments<'_>) -> &Logger {
        self.print(args)
    }

    /// Record assembly shared by `print` and the line writer adapter.
    ///
    /// Takes raw bytes so message content needs no UTF-8 validity; the
    /// protocol forwards it untouched.
    pub(crate) fn print_bytes(&self, message: &[u8]) {
        let mut record = Vec::with_capacity(
            self.line_prefix.len() + message.len() + encode::RESET_SUFFIX.len(),
        );
        record.extend_from_slice(self.line_prefix.as_bytes());
        record.extend_from_slice(message);
        record.extend_from_slice(encode::RESET_SUFFIX.as_bytes());
        let _ = self.output.read().unwrap().write_record(&record);
    }
}

impl Clone for Logger {
    /// Snapshots the receiver, including its current destination. Clone and
    /// original share the destination until either side calls
    /// [`set_output`](Logger::set_output).
    fn clone(&self) -> Logger {
        Logger {
            output: RwLock::new(self.output()),
            tags: self.tags.clone(),
            level: self.level.clone(),
            line_prefix: self.line_prefix.clone(),
        }
    }
}

/*
Boilerplate notes for Logger:

IMPLEMENTED:
- Debug: Derived - diagnostics
- Clone: Implemented manually - configuration is copy-on-write, so cloning is
  the normal mode of operation; the clone snapshots the current sink handle,
  tags are copied

NOT IMPLEMENTED:
- PartialEq/Eq/Hash: unclear whether two loggers sharing a sink but differing
  in provenance should compare equal; avoided
- Default: a logger is meaningless without a sink
- Display: not a value with a textual form
- Ord: no meaningful ordering

AUTOMATIC:
- Send/Sync: the sink slot is RwLock<Sink> around Arc<Mutex<..>>, everything
  else is owned
*/
