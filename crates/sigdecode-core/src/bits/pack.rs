use super::error::BitsError;

/// Pack an LSB-first bit sequence into an integer (`bits[0]` is bit 0).
///
/// Zero padding beyond 64 positions is accepted; a set bit there is an
/// [`BitsError::Overflow`].
pub fn bit_pack(bits: &[u8]) -> Result<u64, BitsError> {
    bits.iter()
        .enumerate()
        .try_fold(0u64, |packed, (position, &bit)| match bit {
            0 => Ok(packed),
            1 if position < u64::BITS as usize => Ok(packed | (1 << position)),
            1 => Err(BitsError::Overflow {
                width: position + 1,
            }),
            value => Err(BitsError::InvalidBit { value, position }),
        })
}

/// Expand `num` into LSB-first bits, zero-padded to at least `min_bits`.
///
/// # Examples
/// ```
/// use sigdecode_core::bits::bit_unpack;
///
/// assert_eq!(bit_unpack(6, 0), vec![0, 1, 1]);
/// assert_eq!(bit_unpack(6, 5), vec![0, 1, 1, 0, 0]);
/// assert!(bit_unpack(0, 0).is_empty());
/// ```
pub fn bit_unpack(num: u64, min_bits: usize) -> Vec<u8> {
    let width = (u64::BITS - num.leading_zeros()) as usize;
    (0..width.max(min_bits))
        .map(|position| {
            if position < u64::BITS as usize {
                ((num >> position) & 1) as u8
            } else {
                0
            }
        })
        .collect()
}
