//! Bit and byte helpers shared by decoders.
//!
//! `parser` turns textual or BCD encodings into integers, `pack` converts
//! between integers and LSB-first bit sequences. Malformed input is reported
//! through [`BitsError`] instead of producing silently wrong numbers.

pub mod error;
pub mod pack;
pub mod parser;

pub use error::BitsError;
pub use pack::{bit_pack, bit_unpack};
pub use parser::{bcd_to_int, binary_str_to_int};
