//! RGB LED strings clocked over SPI: every three MOSI bytes are one
//! red/green/blue value.

pub mod decoder;
pub mod layout;

pub use decoder::RgbLedSpiDecoder;
pub use layout::RgbClass;
