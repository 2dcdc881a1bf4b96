//! Melexis MLX90614 infrared thermometer, decoded from I2C traffic.
//!
//! A temperature read is a repeated start, the device address, then the
//! 16-bit RAM word (low byte first) followed by a PEC byte. The decoder
//! tracks this with a small state machine and ignores everything else, so
//! interleaved bus traffic does not disturb it.

pub mod decoder;
pub mod layout;

pub use decoder::{Mlx90614Decoder, ThermometerState};
pub use layout::ThermometerClass;
