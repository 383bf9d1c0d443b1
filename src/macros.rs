// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatted logging on the standard logger.
//!
//! Each macro formats its arguments in the manner of [`format!`] and writes
//! one line at a fixed level, through a transient view of the standard
//! logger.
//!
//! ```
//! klio_logger::infof!("listening on port {}", 8080);
//! ```

/// Writes a formatted message at the "spam" level on the standard logger.
#[macro_export]
macro_rules! spamf {
    ($($arg:tt)*) => {{
        $crate::standard_logger()
            .with_level($crate::Level::SPAM)
            .printf(::core::format_args!($($arg)*));
    }};
}

/// Writes a formatted message at the "debug" level on the standard logger.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)*) => {{
        $crate::standard_logger()
            .with_level($crate::Level::DEBUG)
            .printf(::core::format_args!($($arg)*));
    }};
}

/// Writes a formatted message at the "verbose" level on the standard logger.
#[macro_export]
macro_rules! verbosef {
    ($($arg:tt)*) => {{
        $crate::standard_logger()
            .with_level($crate::Level::VERBOSE)
            .printf(::core::format_args!($($arg)*));
    }};
}

/// Writes a formatted message at the "info" level on the standard logger.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)*) => {{
        $crate::standard_logger()
            .with_level($crate::Level::INFO)
            .printf(::core::format_args!($($arg)*));
    }};
}

/// Writes a formatted message at the "warn" level on the standard logger.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)*) => {{
        $crate::standard_logger()
            .with_level($crate::Level::WARN)
            .printf(::core::format_args!($($arg)*));
    }};
}

/// Writes a formatted message at the "error" level on the standard logger.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {{
        $crate::standard_logger()
            .with_level($crate::Level::ERROR)
            .printf(::core::format_args!($($arg)*));
    }};
}

/// Writes a formatted message at the "fatal" level on the standard logger.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)*) => {{
        $crate::standard_logger()
            .with_level($crate::Level::FATAL)
            .printf(::core::format_args!($($arg)*));
    }};
}
