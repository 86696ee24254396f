//! Lenient parsing of field text.
//!
//! Text fields pass through states that are not numbers while the user types
//! (an empty field, a lone minus sign). Those states are read as zero instead
//! of being rejected.

use std::num::IntErrorKind;

/// Returns true if `text` is an acceptable state for a numeric field: empty,
/// a bare `-`, or an integer. Use this to reject keystrokes such as `12a`.
pub fn accepts_keystroke(text: &str) -> bool {
    matches!(text, "" | "-") || text.parse::<i64>().is_ok()
}

/// Parse the text of a numeric field.
///
/// Empty text and a bare `-` are zero. Integers too large for `i64` saturate
/// (they are out of range for every field anyway and get clamped later).
/// Anything else is malformed and also reads as zero.
pub fn parse_lenient(text: &str) -> i64 {
    let text = text.trim();

    if matches!(text, "" | "-") {
        return 0;
    }

    match text.parse::<i64>() {
        Ok(value) => value,
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => {
                tracing::debug!(text, "malformed field, reading as 0");
                0
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intermediate_states_are_zero() {
        assert_eq!(parse_lenient(""), 0);
        assert_eq!(parse_lenient("-"), 0);
        assert_eq!(parse_lenient("  "), 0);
    }

    #[test]
    fn integers() {
        assert_eq!(parse_lenient("42"), 42);
        assert_eq!(parse_lenient("-128"), -128);
        assert_eq!(parse_lenient("+7"), 7);
        assert_eq!(parse_lenient(" 12 "), 12);
    }

    #[test]
    fn malformed_is_zero() {
        assert_eq!(parse_lenient("12a"), 0);
        assert_eq!(parse_lenient("1.5"), 0);
        assert_eq!(parse_lenient("--"), 0);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(parse_lenient("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_lenient("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn keystrokes() {
        assert!(accepts_keystroke(""));
        assert!(accepts_keystroke("-"));
        assert!(accepts_keystroke("-12"));
        assert!(accepts_keystroke("255"));
        assert!(!accepts_keystroke("12a"));
        assert!(!accepts_keystroke("1.5"));
        assert!(!accepts_keystroke("--"));
    }
}
