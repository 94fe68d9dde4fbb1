// ============================================================================
// String Padding
// Fixed-width justification for record fields
// ============================================================================

use crate::errors::{UtilityError, UtilityResult};
use std::fmt;
use std::str::FromStr;

/// Which side the text sits on within the padded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Justification {
    /// Text first, padding appended
    Left,
    /// Padding first, text last
    Right,
}

impl FromStr for Justification {
    type Err = UtilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Justification::Left),
            "right" => Ok(Justification::Right),
            _ => Err(UtilityError::InvalidJustification),
        }
    }
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Justification::Left => write!(f, "left"),
            Justification::Right => write!(f, "right"),
        }
    }
}

/// Pad `s` to `total_length` characters with `pad_char`.
///
/// # Example
/// ```
/// use ach_utility::text::{pad, Justification};
///
/// assert_eq!(pad("abc", 10, Justification::Right, '0')?, "0000000abc");
/// assert_eq!(pad("abc", 10, Justification::Left, ' ')?, "abc       ");
/// # Ok::<(), ach_utility::UtilityError>(())
/// ```
///
/// # Errors
/// Returns `InputTooLong` if `s` is longer than `total_length`.
pub fn pad(
    s: &str,
    total_length: usize,
    justification: Justification,
    pad_char: char,
) -> UtilityResult<String> {
    let len = s.chars().count();
    if len > total_length {
        tracing::debug!(len, total_length, "string does not fit padded width");
        return Err(UtilityError::InputTooLong);
    }

    let padding = std::iter::repeat(pad_char).take(total_length - len);
    let mut padded = String::with_capacity(s.len() + (total_length - len) * pad_char.len_utf8());

    match justification {
        Justification::Right => {
            padded.extend(padding);
            padded.push_str(s);
        },
        Justification::Left => {
            padded.push_str(s);
            padded.extend(padding);
        },
    }

    Ok(padded)
}

/// Pad `s` with justification and pad character given as strings.
///
/// Checks run in order: length, pad character, justification.
///
/// # Errors
/// - `InputTooLong` if `s` is longer than `total_length`
/// - `InvalidPadCharacter` if `pad_char` is not exactly one character
/// - `InvalidJustification` if `justification` is not `"left"` or `"right"`
pub fn pad_str(
    s: &str,
    total_length: usize,
    justification: &str,
    pad_char: &str,
) -> UtilityResult<String> {
    if s.chars().count() > total_length {
        return Err(UtilityError::InputTooLong);
    }

    let mut chars = pad_char.chars();
    let pad_char = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(UtilityError::InvalidPadCharacter),
    };

    pad(s, total_length, justification.parse()?, pad_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_long() {
        let result = pad_str("abc", 1, "right", " ");
        assert_eq!(result, Err(UtilityError::InputTooLong));
        assert_eq!(result.unwrap_err().to_string(), "string is too long");
    }

    #[test]
    fn test_invalid_justification() {
        let result = pad_str("abc", 10, "hello", " ");
        assert_eq!(result, Err(UtilityError::InvalidJustification));
    }

    #[test]
    fn test_pad_char_too_long() {
        let result = pad_str("abc", 10, "right", "12");
        assert_eq!(result, Err(UtilityError::InvalidPadCharacter));
    }

    #[test]
    fn test_pad_char_empty() {
        let result = pad_str("abc", 10, "right", "");
        assert_eq!(result, Err(UtilityError::InvalidPadCharacter));
    }

    #[test]
    fn test_length_checked_before_other_arguments() {
        let result = pad_str("abcdef", 3, "middle", "xy");
        assert_eq!(result, Err(UtilityError::InputTooLong));
    }

    #[test]
    fn test_left_justified() {
        assert_eq!(pad_str("abc", 10, "left", " ").unwrap(), "abc       ");
    }

    #[test]
    fn test_right_justified() {
        assert_eq!(pad_str("abc", 10, "right", " ").unwrap(), "       abc");
    }

    #[test]
    fn test_right_justified_zero_fill() {
        let padded = pad("abc", 10, Justification::Right, '0').unwrap();
        assert_eq!(padded, "0000000abc");
        assert_ne!(padded, "       abc");
    }

    #[test]
    fn test_exact_width_is_unchanged() {
        assert_eq!(pad("abc", 3, Justification::Left, '*').unwrap(), "abc");
        assert_eq!(pad("", 0, Justification::Right, '*').unwrap(), "");
    }

    #[test]
    fn test_multibyte_pad_char() {
        assert_eq!(pad("ab", 4, Justification::Right, 'é').unwrap(), "ééab");
        assert_eq!(pad_str("ab", 3, "left", "é").unwrap(), "abé");
    }

    #[test]
    fn test_justification_round_trip() {
        assert_eq!("left".parse::<Justification>(), Ok(Justification::Left));
        assert_eq!("right".parse::<Justification>(), Ok(Justification::Right));
        assert_eq!(Justification::Right.to_string(), "right");
        assert_eq!(
            "Right".parse::<Justification>(),
            Err(UtilityError::InvalidJustification)
        );
    }
}
