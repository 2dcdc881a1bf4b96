//! Stream decoding contract shared by every protocol decoder.
//!
//! A decoder owns its state exclusively and is advanced one event at a time
//! by the caller's loop. Each call appends zero or more annotations to the
//! caller's buffer, in input order. Out-of-band metadata (the samplerate)
//! arrives through [`StreamDecoder::metadata`] before streaming starts.

use std::fmt;

use crate::annotation::{Annotation, AnnotationClass};
use crate::error::DecodeError;

/// Out-of-band values delivered by the acquisition side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metadata {
    /// Samples per second; zero is treated as unset.
    Samplerate(u64),
}

/// Shape of the events a decoder consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Spi,
    I2c,
    Logic,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::Spi => "spi",
            InputKind::I2c => "i2c",
            InputKind::Logic => "logic",
        };
        f.write_str(name)
    }
}

/// Logic channel consumed by a decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
}

/// Display row grouping annotation classes by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationRow {
    pub id: &'static str,
    pub description: &'static str,
    pub classes: &'static [usize],
}

/// Static decoder description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub longname: &'static str,
    pub desc: &'static str,
    pub license: &'static str,
    pub input: InputKind,
    pub outputs: &'static [&'static str],
    pub channels: &'static [ChannelInfo],
    pub rows: &'static [AnnotationRow],
}

/// Incremental protocol decoder.
pub trait StreamDecoder: Send {
    type Input;
    type Class: AnnotationClass;

    fn info(&self) -> &'static DecoderInfo;

    /// Whether [`Metadata::Samplerate`] must be supplied before decoding.
    fn requires_samplerate(&self) -> bool {
        false
    }

    fn metadata(&mut self, _metadata: Metadata) {}

    /// Consume one event, appending any resulting annotations to `out`.
    fn decode(
        &mut self,
        input: &Self::Input,
        out: &mut Vec<Annotation<Self::Class>>,
    ) -> Result<(), DecodeError>;

    /// Restore the initial decoding state, keeping options and metadata.
    fn reset(&mut self);

    /// Feed a whole event sequence and collect its annotations.
    fn decode_all<'a, I>(&mut self, inputs: I) -> Result<Vec<Annotation<Self::Class>>, DecodeError>
    where
        I: IntoIterator<Item = &'a Self::Input>,
        Self::Input: 'a,
    {
        let mut out = Vec::new();
        for input in inputs {
            self.decode(input, &mut out)?;
        }
        Ok(out)
    }
}

/// Class table of a decoder as `(id, description)` pairs, in index order.
pub fn class_table<C: AnnotationClass>() -> Vec<(&'static str, &'static str)> {
    C::ALL
        .iter()
        .map(|class| (class.id(), class.description()))
        .collect()
}
