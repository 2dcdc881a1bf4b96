use tracing::warn;

use crate::error::DecodeError;

/// Samplerate if one was delivered and is non-zero.
pub(crate) fn require_samplerate(
    samplerate: Option<u64>,
    decoder: &'static str,
) -> Result<u64, DecodeError> {
    match samplerate {
        Some(rate) if rate > 0 => Ok(rate),
        _ => {
            warn!(decoder, "event received before samplerate");
            Err(DecodeError::MissingSamplerate { decoder })
        }
    }
}

pub(crate) fn is_high(level: u8) -> bool {
    level != 0
}
