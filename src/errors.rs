// ============================================================================
// Utility Errors
// Error types shared by every helper in the crate
// ============================================================================

use std::fmt;
use std::io;

/// Errors returned by the utility functions.
///
/// Nothing in this crate panics or terminates the process on failure; every
/// error surfaces here and the caller decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtilityError {
    /// String to pad is longer than the requested width
    InputTooLong,
    /// Padding character is not exactly one character
    InvalidPadCharacter,
    /// Justification is neither "left" nor "right"
    InvalidJustification,
    /// Host has no non-loopback IPv4 address
    NoAddressFound,
    /// Index search found no matching element
    NotFound,
    /// Listing the host's network interfaces failed
    InterfaceEnumeration(io::ErrorKind),
    /// Date arithmetic left the supported calendar range
    DateOutOfRange,
    /// Holiday string could not be parsed as a date
    InvalidDate(String),
    /// Decimal rounding scale too large, or the scaled value overflowed
    PrecisionOutOfRange,
    /// Holiday calendar configuration could not be decoded
    InvalidConfig(String),
}

impl fmt::Display for UtilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilityError::InputTooLong => write!(f, "string is too long"),
            UtilityError::InvalidPadCharacter => {
                write!(f, "padding must be only one character")
            },
            UtilityError::InvalidJustification => {
                write!(f, "justification must be either right or left")
            },
            UtilityError::NoAddressFound => write!(f, "no ip address found"),
            UtilityError::NotFound => write!(f, "not found in slice"),
            UtilityError::InterfaceEnumeration(kind) => {
                write!(f, "could not list network interfaces: {}", kind)
            },
            UtilityError::DateOutOfRange => {
                write!(f, "date out of range: calendar arithmetic overflowed")
            },
            UtilityError::InvalidDate(input) => write!(f, "invalid date: {:?}", input),
            UtilityError::PrecisionOutOfRange => write!(
                f,
                "precision out of range: scale too large or value overflowed"
            ),
            UtilityError::InvalidConfig(reason) => {
                write!(f, "invalid holiday calendar configuration: {}", reason)
            },
        }
    }
}

impl std::error::Error for UtilityError {}

impl From<io::Error> for UtilityError {
    fn from(err: io::Error) -> Self {
        UtilityError::InterfaceEnumeration(err.kind())
    }
}

/// Result type alias for utility operations
pub type UtilityResult<T> = Result<T, UtilityError>;
