// SPDX-License-Identifier: MIT OR Apache-2.0

//! Control-sequence encoding for the Klio output protocol.
//!
//! Every log line is wrapped between a header identifying the level and the
//! tags, and a fixed reset trailer:
//!
//! ```text
//! ESC _klio_log_level "info" ESC \ ESC _klio_tags ["api"] ESC \ message ESC _klio_reset ESC \
//! ```
//!
//! The header payloads are JSON, so the terminator byte (`\`) and the escape
//! character can never appear raw inside them. Klio can always find the
//! sequence boundary, whatever the level and tag strings contain. Message
//! text is passed through verbatim.

use crate::Level;

/// Trailer terminating every log line.
pub(crate) const RESET_SUFFIX: &str = "\x1b_klio_reset\x1b\\\n";

/// Renders the header for a `(level, tags)` pair.
///
/// Never fails: a field that cannot be serialized is replaced with a safe
/// default (the quoted default level, an empty tag array).
pub(crate) fn line_prefix(level: &Level, tags: &[String]) -> String {
    let level = serde_json::to_string(level)
        .unwrap_or_else(|_| format!("\"{}\"", Level::DEFAULT.as_str()));
    let tags = serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string());
    format!("\x1b_klio_log_level {level}\x1b\\\x1b_klio_tags {tags}\x1b\\")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_prefix() {
        assert_eq!(
            line_prefix(&Level::DEFAULT, &[]),
            "\x1b_klio_log_level \"info\"\x1b\\\x1b_klio_tags []\x1b\\"
        );
    }

    #[test]
    fn prefix_with_level_and_tags() {
        let tags = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(
            line_prefix(&Level::SPAM, &tags),
            "\x1b_klio_log_level \"spam\"\x1b\\\x1b_klio_tags [\"a\",\"b\",\"c\"]\x1b\\"
        );
    }

    #[test]
    fn escapes_special_characters() {
        let tags = vec!["\x1b\\".to_string()];
        assert_eq!(
            line_prefix(&Level::new("\""), &tags),
            "\x1b_klio_log_level \"\\\"\"\x1b\\\x1b_klio_tags [\"\\u001b\\\\\"]\x1b\\"
        );
    }

    proptest! {
        // Framing invariant: the JSON payloads contain no raw ESC byte, the
        // first `ESC \` after each payload is its real terminator, and both
        // payloads round-trip.
        #[test]
        fn header_stays_parseable(
            level in ".*",
            tags in proptest::collection::vec(".*", 0..4),
        ) {
            let prefix = line_prefix(&Level::new(level.clone()), &tags);

            let rest = prefix.strip_prefix("\x1b_klio_log_level ").unwrap();
            let (level_json, rest) = rest.split_once("\x1b\\").unwrap();
            let rest = rest.strip_prefix("\x1b_klio_tags ").unwrap();
            let (tags_json, rest) = rest.split_once("\x1b\\").unwrap();

            prop_assert!(rest.is_empty());
            prop_assert!(!level_json.contains('\x1b'));
            prop_assert!(!tags_json.contains('\x1b'));

            let parsed_level: String = serde_json::from_str(level_json).unwrap();
            let parsed_tags: Vec<String> = serde_json::from_str(tags_json).unwrap();
            prop_assert_eq!(parsed_level, level);
            prop_assert_eq!(parsed_tags, tags);
        }
    }
}
