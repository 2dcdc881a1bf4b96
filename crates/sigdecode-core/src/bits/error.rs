use thiserror::Error;

/// Errors returned by the bit helpers.
///
/// # Examples
/// ```
/// use sigdecode_core::bits::{BitsError, binary_str_to_int};
///
/// let err = binary_str_to_int("10x1").unwrap_err();
/// assert_eq!(err, BitsError::InvalidDigit { digit: 'x', position: 2 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitsError {
    #[error("empty binary string")]
    Empty,
    #[error("invalid binary digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
    #[error("invalid bit value {value} at position {position}")]
    InvalidBit { value: u8, position: usize },
    #[error("value does not fit in 64 bits: {width} bits")]
    Overflow { width: usize },
}
