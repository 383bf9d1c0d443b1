// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide default loggers.
//!
//! Klio reads decorated output only from a command's stdout and stderr, so
//! this module keeps one shared [`Logger`] bound to each. Both are created
//! on first use and live for the process lifetime. Their level and tags are
//! fixed; their sinks can be redirected through
//! [`Logger::set_output`](crate::Logger::set_output), which is primarily
//! useful in tests (see [`InMemoryWriter`](crate::InMemoryWriter)).
//!
//! The per-level convenience functions ([`info`], [`error`], ...) log
//! through a transient [`with_level`](crate::Logger::with_level) view of the
//! standard logger; they never change the shared instance's own level.
//!
//! # Examples
//!
//! ```
//! let logger = klio_logger::standard_logger().with_tags(&["setup"]);
//! logger.print("ready");
//! ```

use crate::level::Level;
use crate::logger::Logger;
use std::fmt::Display;
use std::io;
use std::sync::OnceLock;

static STANDARD_LOGGER: OnceLock<Logger> = OnceLock::new();
static ERROR_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the shared logger bound to stdout. It writes at the "info" level
/// and carries no tags.
pub fn standard_logger() -> &'static Logger {
    STANDARD_LOGGER.get_or_init(|| Logger::new(io::stdout()))
}

/// Returns the shared logger bound to stderr. It writes at the "error" level
/// and carries no tags.
pub fn error_logger() -> &'static Logger {
    ERROR_LOGGER.get_or_init(|| Logger::new(io::stderr()).with_level(Level::ERROR))
}

/// Writes a message at the "spam" level on the standard logger.
pub fn spam(message: impl Display) {
    standard_logger().with_level(Level::SPAM).print(message);
}

/// Writes a message at the "debug" level on the standard logger.
pub fn debug(message: impl Display) {
    standard_logger().with_level(Level::DEBUG).print(message);
}

/// Writes a message at the "verbose" level on the standard logger.
pub fn verbose(message: impl Display) {
    standard_logger().with_level(Level::VERBOSE).print(message);
}

/// Writes a message at the "info" level on the standard logger.
pub fn info(message: impl Display) {
    standard_logger().with_level(Level::INFO).print(message);
}

/// Writes a message at the "warn" level on the standard logger.
pub fn warn(message: impl Display) {
    standard_logger().with_level(Level::WARN).print(message);
}

/// Writes a message at the "error" level on the standard logger.
pub fn error(message: impl Display) {
    standard_logger().with_level(Level::ERROR).print(message);
}

/// Writes a message at the "fatal" level on the standard logger.
pub fn fatal(message: impl Display) {
    standard_logger().with_level(Level::FATAL).print(message);
}
