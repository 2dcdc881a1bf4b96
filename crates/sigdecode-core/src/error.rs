use thiserror::Error;

use crate::engine::InputKind;

/// Fatal errors raised while feeding events to a decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{decoder}: cannot decode without samplerate")]
    MissingSamplerate { decoder: &'static str },
    #[error("{decoder}: expected {expected} input, got {actual}")]
    InputMismatch {
        decoder: &'static str,
        expected: InputKind,
        actual: InputKind,
    },
    #[error("{decoder}: expected {expected} logic channels, got {actual}")]
    ChannelCount {
        decoder: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Invalid decoder options, reported before any event is processed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid steps per mm: {value} (must be finite and > 0)")]
    InvalidStepsPerMm { value: f64 },
}
