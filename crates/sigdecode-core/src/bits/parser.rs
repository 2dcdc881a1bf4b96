use super::error::BitsError;

/// Decode a packed BCD byte (high nibble = tens, low nibble = units).
///
/// Nibbles above 9 are not rejected; they contribute per the formula, so
/// `0x1A` yields 20.
pub fn bcd_to_int(byte: u8) -> u32 {
    u32::from(byte & 0x0f) + u32::from(byte >> 4) * 10
}

/// Parse an MSB-first string of `'0'`/`'1'` characters.
pub fn binary_str_to_int(digits: &str) -> Result<u64, BitsError> {
    if digits.is_empty() {
        return Err(BitsError::Empty);
    }

    let mut value = 0u64;
    for (position, digit) in digits.chars().enumerate() {
        let bit = match digit {
            '0' => 0,
            '1' => 1,
            _ => return Err(BitsError::InvalidDigit { digit, position }),
        };
        value = value
            .checked_mul(2)
            .and_then(|shifted| shifted.checked_add(bit))
            .ok_or(BitsError::Overflow {
                width: digits.chars().count(),
            })?;
    }
    Ok(value)
}
