use tracing::trace;

use super::layout::{self, BitrateClass};
use crate::annotation::{Annotation, SampleIndex};
use crate::decoders::common::{is_high, require_samplerate};
use crate::engine::{DecoderInfo, Metadata, StreamDecoder};
use crate::error::DecodeError;
use crate::event::DataLineSample;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EdgeState {
    /// Level of the previous sample; `None` before the first sample.
    level: Option<bool>,
    /// Sample of the last transition; `None` until the first one.
    edge: Option<SampleIndex>,
    /// Shortest transition distance seen so far.
    bit_width: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct GuessBitrateDecoder {
    samplerate: Option<u64>,
    state: EdgeState,
}

impl GuessBitrateDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortest transition distance measured so far, in samples.
    pub fn bit_width(&self) -> Option<u64> {
        self.state.bit_width
    }
}

impl StreamDecoder for GuessBitrateDecoder {
    type Input = DataLineSample;
    type Class = BitrateClass;

    fn info(&self) -> &'static DecoderInfo {
        &layout::INFO
    }

    fn requires_samplerate(&self) -> bool {
        true
    }

    fn metadata(&mut self, metadata: Metadata) {
        match metadata {
            Metadata::Samplerate(rate) => self.samplerate = Some(rate),
        }
    }

    fn decode(
        &mut self,
        input: &Self::Input,
        out: &mut Vec<Annotation<BitrateClass>>,
    ) -> Result<(), DecodeError> {
        let samplerate = require_samplerate(self.samplerate, layout::INFO.id)?;
        let (data,) = input.pins;
        let level = is_high(data);

        let Some(previous) = self.state.level.replace(level) else {
            return Ok(());
        };
        if previous == level {
            return Ok(());
        }

        let sample = input.sample;
        let Some(edge) = self.state.edge.replace(sample) else {
            trace!(sample, "first transition");
            return Ok(());
        };

        let width = sample.saturating_sub(edge);
        if width == 0 || self.state.bit_width.is_some_and(|min| width >= min) {
            return Ok(());
        }
        self.state.bit_width = Some(width);

        let bitrate = (samplerate as f64 / width as f64).round() as u64;
        trace!(edge, sample, width, bitrate, "new shortest bit width");
        out.push(Annotation::new(
            edge,
            sample,
            BitrateClass::Bitrate,
            vec![format!("Bitrate: {bitrate}"), bitrate.to_string()],
        ));
        Ok(())
    }

    fn reset(&mut self) {
        self.state = EdgeState::default();
    }
}
