//! Bitrate / baudrate estimation from a single logic line.
//!
//! The shortest interval between two transitions approximates one bit
//! period. A new estimate is emitted only when a shorter interval shows up,
//! so the output converges instead of repeating.

pub mod decoder;
pub mod layout;

pub use decoder::GuessBitrateDecoder;
pub use layout::BitrateClass;
