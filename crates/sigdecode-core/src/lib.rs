//! Protocol decoders for captured digital-signal traces.
//!
//! Upstream acquisition (or a lower-level SPI/I2C decoder) produces a stream
//! of timestamped events; each decoder in this crate consumes that stream
//! incrementally and emits annotations bounded by the samples of the events
//! that produced them. Decoders are independent state machines behind the
//! common [`StreamDecoder`] contract:
//! - `nes_gamepad`: NES controller button states (SPI)
//! - `guess_bitrate`: bitrate estimate from one logic line
//! - `mlx90614`: infrared thermometer readings (I2C)
//! - `rgb_led_spi`: RGB LED colors (SPI)
//! - `stepper_motor`: position and speed from step/dir lines
//!
//! Decoding is synchronous and side-effect free; the only I/O lives in
//! [`trace`], which loads recorded event streams for fixtures and tooling.
//!
//! Invariants:
//! - Annotations are emitted in input order with `start <= end`.
//! - A decoder's state is only changed by `decode` and `reset`.
//! - Decoders that derive timing fail with
//!   [`DecodeError::MissingSamplerate`] until a samplerate is supplied.
//!
//! # Examples
//! ```
//! use sigdecode_core::decoders::stepper_motor::StepperMotorDecoder;
//! use sigdecode_core::{LogicSample, Metadata, StepperOptions, StreamDecoder};
//!
//! let mut decoder = StepperMotorDecoder::new(StepperOptions::default())?;
//! decoder.metadata(Metadata::Samplerate(1_000));
//!
//! let samples = [
//!     LogicSample::new(0, (0, 1)),
//!     LogicSample::new(100, (1, 1)),
//!     LogicSample::new(150, (0, 1)),
//!     LogicSample::new(200, (1, 1)),
//! ];
//! let annotations = decoder.decode_all(&samples)?;
//! assert_eq!(annotations[0].text(), "10 steps/s");
//! assert_eq!(annotations[1].text(), "1 steps");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod annotation;
pub mod bits;
pub mod config;
pub mod decoders;
pub mod engine;
pub mod error;
pub mod event;
pub mod trace;

pub use annotation::{Annotation, AnnotationClass, RawAnnotation, SampleIndex};
pub use config::{
    DEFAULT_STEPS_PER_MM, DecoderConfig, GamepadOptions, GamepadVariant, StepperOptions,
    StepperUnit,
};
pub use decoders::AnyDecoder;
pub use engine::{
    AnnotationRow, ChannelInfo, DecoderInfo, InputKind, Metadata, StreamDecoder, class_table,
};
pub use error::{ConfigError, DecodeError};
pub use event::{
    AnyEvent, BusEvent, DataLineSample, I2cCommand, I2cPacket, LogicSample, SpiPacket,
    SpiPacketKind, StepDirSample,
};
pub use trace::{Trace, TraceError, decode_trace, decode_trace_file, load_trace};
