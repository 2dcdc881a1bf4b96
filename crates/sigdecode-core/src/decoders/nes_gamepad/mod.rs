//! NES gamepad button states, decoded from the controller's SPI-like shift
//! register output.
//!
//! Each `DATA` word's MISO byte holds one bit per button, active low. All
//! ones means nothing is pressed; all zeros means the pad is unplugged (the
//! line is pulled down).

pub mod decoder;
pub mod layout;

pub use decoder::NesGamepadDecoder;
pub use layout::GamepadClass;
