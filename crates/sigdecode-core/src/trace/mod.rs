//! JSON trace files: a decoder configuration, the out-of-band samplerate
//! and the recorded event stream.
//!
//! Traces stand in for the acquisition side in fixtures and tooling. They
//! are decoded front to back through an [`AnyDecoder`].

pub mod error;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotation::RawAnnotation;
use crate::config::DecoderConfig;
use crate::decoders::AnyDecoder;
use crate::engine::Metadata;
use crate::event::AnyEvent;

pub use error::TraceError;

/// Recorded decoder input.
///
/// # Examples
/// ```
/// use sigdecode_core::{Trace, decode_trace};
///
/// let trace: Trace = serde_json::from_str(
///     r#"{
///         "config": { "decoder": "rgb_led_spi" },
///         "events": [
///             { "spi": { "start": 0, "end": 7, "payload": { "kind": "DATA", "mosi": 18 } } },
///             { "spi": { "start": 8, "end": 15, "payload": { "kind": "DATA", "mosi": 52 } } },
///             { "spi": { "start": 16, "end": 23, "payload": { "kind": "DATA", "mosi": 86 } } }
///         ]
///     }"#,
/// )?;
/// let annotations = decode_trace(&trace)?;
/// assert_eq!(annotations[0].texts, vec!["#123456".to_string()]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    pub config: DecoderConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samplerate: Option<u64>,
    pub events: Vec<AnyEvent>,
}

pub fn load_trace(path: &Path) -> Result<Trace, TraceError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Run every event of `trace` through a fresh decoder.
pub fn decode_trace(trace: &Trace) -> Result<Vec<RawAnnotation>, TraceError> {
    let mut decoder = AnyDecoder::from_config(&trace.config)?;
    if let Some(rate) = trace.samplerate {
        decoder.metadata(Metadata::Samplerate(rate));
    }

    let mut annotations = Vec::new();
    for event in &trace.events {
        decoder.decode(event, &mut annotations)?;
    }
    debug!(
        decoder = decoder.info().id,
        events = trace.events.len(),
        annotations = annotations.len(),
        "trace decoded"
    );
    Ok(annotations)
}

pub fn decode_trace_file(path: &Path) -> Result<Vec<RawAnnotation>, TraceError> {
    let trace = load_trace(path)?;
    decode_trace(&trace)
}

#[cfg(test)]
mod tests {
    use super::{Trace, TraceError, decode_trace};
    use crate::error::DecodeError;
    use serde_json::json;

    #[test]
    fn missing_samplerate_surfaces_as_decode_error() {
        let trace: Trace = serde_json::from_value(json!({
            "config": { "decoder": "guess_bitrate" },
            "events": [ { "logic": { "sample": 0, "pins": [1] } } ]
        }))
        .unwrap();
        let err = decode_trace(&trace).unwrap_err();
        assert!(matches!(
            err,
            TraceError::Decode(DecodeError::MissingSamplerate { .. })
        ));
        assert!(err.to_string().contains("cannot decode without samplerate"));
    }

    #[test]
    fn invalid_options_surface_as_config_error() {
        let trace: Trace = serde_json::from_value(json!({
            "config": { "decoder": "stepper_motor", "unit": "mm", "steps_per_mm": 0.0 },
            "samplerate": 1000,
            "events": []
        }))
        .unwrap();
        assert!(matches!(decode_trace(&trace), Err(TraceError::Config(_))));
    }

    #[test]
    fn empty_event_stream_decodes_to_nothing() {
        let trace: Trace = serde_json::from_value(json!({
            "config": { "decoder": "stepper_motor" },
            "events": []
        }))
        .unwrap();
        assert!(decode_trace(&trace).unwrap().is_empty());
    }
}
