// SPDX-License-Identifier: MIT OR Apache-2.0
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Severity label attached to every log line.
///
/// Levels are opaque strings interpreted by Klio; this crate assigns them no
/// ordering and never drops a message based on one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(Cow<'static, str>);

impl Level {
    /// Errors causing a command to exit immediately.
    pub const FATAL: Level = Level(Cow::Borrowed("fatal"));
    /// Errors which cause a command to fail, but not immediately.
    pub const ERROR: Level = Level(Cow::Borrowed("error"));
    /// Information about unexpected situations and minor errors (not causing a command to fail).
    pub const WARN: Level = Level(Cow::Borrowed("warn"));
    /// Generally useful information (things happen).
    pub const INFO: Level = Level(Cow::Borrowed("info"));
    /// More granular but still useful information.
    pub const VERBOSE: Level = Level(Cow::Borrowed("verbose"));
    /// Information helpful for command developers.
    pub const DEBUG: Level = Level(Cow::Borrowed("debug"));
    /// Give me EVERYTHING.
    pub const SPAM: Level = Level(Cow::Borrowed("spam"));
    /// Alias for the "info" level.
    pub const DEFAULT: Level = Level::INFO;

    const KNOWN: [Level; 7] = [
        Level::FATAL,
        Level::ERROR,
        Level::WARN,
        Level::INFO,
        Level::VERBOSE,
        Level::DEBUG,
        Level::SPAM,
    ];

    /// Creates a level with an arbitrary name.
    ///
    /// Klio only interprets the seven known names, but the wire protocol
    /// carries any string safely.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Level {
        Level(name.into())
    }

    /// Converts a level name to a `Level`.
    ///
    /// Matching is case-insensitive and exact (no trimming). Returns
    /// [`Level::DEFAULT`] and `false` when the name is not one of the seven
    /// known levels.
    ///
    /// ```
    /// use klio_logger::Level;
    ///
    /// assert_eq!(Level::parse("SpAm"), (Level::SPAM, true));
    /// assert_eq!(Level::parse("unknown"), (Level::DEFAULT, false));
    /// ```
    pub fn parse(name: &str) -> (Level, bool) {
        match Level::KNOWN
            .iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(name))
        {
            Some(level) => (level.clone(), true),
            None => (Level::DEFAULT, false),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_levels() {
        for name in ["fatal", "error", "warn", "info", "verbose", "debug", "spam"] {
            let (level, ok) = Level::parse(name);
            assert!(ok, "{name} should parse");
            assert_eq!(level.as_str(), name);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Level::parse("SpAm"), (Level::SPAM, true));
        assert_eq!(Level::parse("ERROR"), (Level::ERROR, true));
        assert_eq!(Level::parse("Info"), (Level::INFO, true));
    }

    #[test]
    fn parse_falls_back_to_default() {
        assert_eq!(Level::parse("unknown"), (Level::DEFAULT, false));
        assert_eq!(Level::parse(""), (Level::DEFAULT, false));
        // exact match after case folding, no trimming
        assert_eq!(Level::parse("  spam"), (Level::DEFAULT, false));
        assert_eq!(Level::parse("spam "), (Level::DEFAULT, false));
    }

    #[test]
    fn default_is_info() {
        assert_eq!(Level::DEFAULT, Level::INFO);
        assert_eq!(Level::DEFAULT.as_str(), "info");
    }

    #[test]
    fn serializes_as_a_plain_string() {
        assert_eq!(serde_json::to_string(&Level::WARN).unwrap(), "\"warn\"");
        let level: Level = serde_json::from_str("\"spam\"").unwrap();
        assert_eq!(level, Level::SPAM);
    }
}
