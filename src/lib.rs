// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# klio-logger

A logging library for building commands hosted by the Klio orchestrator.
Klio runs a command, captures its stdout and stderr, and re-renders lines
that carry an out-of-band control-sequence header. This crate produces that
framing; it does not filter or modify messages beyond it.

# The wire format

Every log line is one record of the form

```text
ESC _klio_log_level "info" ESC \ ESC _klio_tags ["api"] ESC \ message ESC _klio_reset ESC \
```

followed by a newline, where `ESC` is the byte `0x1B`. The header names a
severity level and a list of tags; both are JSON-encoded so their content
can never break the framing. The message itself passes through byte for
byte.

# Usage

Log through the default loggers bound to stdout and stderr:

```
klio_logger::info("all good");
klio_logger::errorf!("exit code {}", 3);
```

Or configure your own:

```
use klio_logger::{Level, Logger};

let logger = Logger::new(std::io::stdout())
    .with_tags(&["db"])
    .with_level(Level::VERBOSE);
logger.print("connection established");
```

[`Logger::with_level`] and [`Logger::with_tags`] return a new logger and
never touch the receiver, so a shared logger can be specialized freely. The
only in-place mutation is [`Logger::set_output`], which redirects the byte
destination (used mostly in tests, together with [`InMemoryWriter`]).

A logger also implements [`std::io::Write`], turning each line written
through it into one decorated record. This is handy for piping a
subprocess's output through a tagged logger. Note that each `write` call is
split independently; partial lines are not buffered across calls.

# Levels

Seven levels are defined: `fatal`, `error`, `warn`, `info`, `verbose`,
`debug` and `spam`. They are opaque labels for Klio to interpret; this crate
assigns them no ordering and never suppresses a message based on one.
[`Level::parse`] converts user-supplied names (say, from a `--log-level`
flag) case-insensitively, falling back to the default level.

# Concurrency

Every operation is synchronous and runs on the calling thread. A record
reaches the sink as a single write under the sink's lock, so records from
concurrent writers never interleave mid-line; their relative order across
threads is unspecified.
*/

mod encode;
mod global_logger;
mod inmemory_writer;
mod level;
mod line_writer;
mod logger;
mod macros;
mod sink;

pub use global_logger::{
    debug, error, error_logger, fatal, info, spam, standard_logger, verbose, warn,
};
pub use inmemory_writer::InMemoryWriter;
pub use level::Level;
pub use logger::Logger;
pub use sink::Sink;
