use tracing::trace;

use super::layout::{self, StepperClass};
use crate::annotation::{Annotation, SampleIndex};
use crate::config::StepperOptions;
use crate::decoders::common::{is_high, require_samplerate};
use crate::engine::{DecoderInfo, Metadata, StreamDecoder};
use crate::error::{ConfigError, DecodeError};
use crate::event::StepDirSample;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct MotorState {
    old_step: Option<bool>,
    prev_edge: Option<SampleIndex>,
    position: i64,
}

#[derive(Debug, Clone, Default)]
pub struct StepperMotorDecoder {
    options: StepperOptions,
    samplerate: Option<u64>,
    state: MotorState,
}

impl StepperMotorDecoder {
    pub fn new(options: StepperOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            options,
            samplerate: None,
            state: MotorState::default(),
        })
    }

    /// Net steps taken so far (positive in the dir-high direction).
    pub fn position(&self) -> i64 {
        self.state.position
    }

    fn format(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.options.unit.precision())
    }

    fn step(
        &mut self,
        sample: SampleIndex,
        forward: bool,
        samplerate: u64,
        out: &mut Vec<Annotation<StepperClass>>,
    ) {
        if let Some(prev) = self.state.prev_edge {
            let delta = sample.saturating_sub(prev);
            if delta > 0 {
                let scale = self.options.scale();
                let unit = self.options.unit.label();
                let speed = self.format(samplerate as f64 / delta as f64 / scale);
                let position = self.format(self.state.position as f64 / scale);
                out.push(Annotation::new(
                    prev,
                    sample,
                    StepperClass::Speed,
                    vec![format!("{speed} {unit}/s"), speed],
                ));
                out.push(Annotation::new(
                    prev,
                    sample,
                    StepperClass::Position,
                    vec![format!("{position} {unit}"), position],
                ));
            }
        }

        self.state.position += if forward { 1 } else { -1 };
        self.state.prev_edge = Some(sample);
        trace!(sample, position = self.state.position, "step");
    }
}

impl StreamDecoder for StepperMotorDecoder {
    type Input = StepDirSample;
    type Class = StepperClass;

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
        out: &mut Vec<Annotation<StepperClass>>,
    ) -> Result<(), DecodeError> {
        let samplerate = require_samplerate(self.samplerate, layout::INFO.id)?;
        let (step, dir) = input.pins;
        let step = is_high(step);

        if step && self.state.old_step == Some(false) {
            self.step(input.sample, is_high(dir), samplerate, out);
        }
        self.state.old_step = Some(step);
        Ok(())
    }

    fn reset(&mut self) {
        self.state = MotorState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::StepperMotorDecoder;
    use crate::annotation::AnnotationClass;
    use crate::config::{StepperOptions, StepperUnit};
    use crate::engine::{Metadata, StreamDecoder};
    use crate::error::{ConfigError, DecodeError};
    use crate::event::{LogicSample, StepDirSample};

    /// Low at sample 0, then one-sample step pulses at `edges`.
    fn pulses(edges: &[u64], dir: u8) -> Vec<StepDirSample> {
        let mut samples = vec![LogicSample::new(0, (0, dir))];
        for &edge in edges {
            samples.push(LogicSample::new(edge, (1, dir)));
            samples.push(LogicSample::new(edge + 1, (0, dir)));
        }
        samples
    }

    fn decoder(options: StepperOptions) -> StepperMotorDecoder {
        let mut decoder = StepperMotorDecoder::new(options).unwrap();
        decoder.metadata(Metadata::Samplerate(1_000));
        decoder
    }

    #[test]
    fn missing_samplerate_is_fatal() {
        let mut decoder = StepperMotorDecoder::default();
        let err = decoder.decode_all(&pulses(&[100], 1)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingSamplerate {
                decoder: "stepper_motor"
            }
        );
    }

    #[test]
    fn first_edge_only_sets_reference() {
        let mut decoder = decoder(StepperOptions::default());
        assert!(decoder.decode_all(&pulses(&[100], 1)).unwrap().is_empty());
        assert_eq!(decoder.position(), 1);
    }

    #[test]
    fn speed_and_position_in_steps() {
        let mut decoder = decoder(StepperOptions::default());
        let anns = decoder.decode_all(&pulses(&[100, 200, 350], 1)).unwrap();
        assert_eq!(anns.len(), 4);

        assert_eq!(anns[0].class.index(), 0);
        assert_eq!((anns[0].start, anns[0].end), (100, 200));
        assert_eq!(anns[0].texts, vec!["10 steps/s".to_string(), "10".to_string()]);
        assert_eq!(anns[1].class.index(), 1);
        assert_eq!(anns[1].texts, vec!["1 steps".to_string(), "1".to_string()]);

        // 1000 / 150 = 6.67 steps/s, rendered without decimals
        assert_eq!((anns[2].start, anns[2].end), (200, 350));
        assert_eq!(anns[2].texts[1], "7");
        assert_eq!(anns[3].texts[1], "2");
        assert_eq!(decoder.position(), 3);
    }

    #[test]
    fn mm_unit_scales_and_uses_two_decimals() {
        let mut decoder = decoder(StepperOptions {
            unit: StepperUnit::Mm,
            steps_per_mm: 100.0,
        });
        let anns = decoder.decode_all(&pulses(&[100, 200, 350], 1)).unwrap();
        assert_eq!(anns[0].texts, vec!["0.10 mm/s".to_string(), "0.10".to_string()]);
        assert_eq!(anns[1].text(), "0.01 mm");
        assert_eq!(anns[2].texts[1], "0.07");
        assert_eq!(anns[3].texts[1], "0.02");
    }

    #[test]
    fn low_dir_counts_backwards() {
        let mut decoder = decoder(StepperOptions::default());
        let anns = decoder.decode_all(&pulses(&[10, 20, 30], 0)).unwrap();
        assert_eq!(anns[1].texts[1], "-1");
        assert_eq!(anns[3].texts[1], "-2");
        assert_eq!(decoder.position(), -3);
    }

    #[test]
    fn held_high_step_is_one_edge() {
        let mut decoder = decoder(StepperOptions::default());
        let samples = [
            LogicSample::new(0, (1, 1)),
            LogicSample::new(5, (1, 1)),
            LogicSample::new(10, (0, 1)),
            LogicSample::new(20, (1, 1)),
            LogicSample::new(25, (1, 1)),
        ];
        decoder.decode_all(&samples).unwrap();
        assert_eq!(decoder.position(), 1);
    }

    #[test]
    fn invalid_scale_is_rejected() {
        let err = StepperMotorDecoder::new(StepperOptions {
            unit: StepperUnit::Mm,
            steps_per_mm: -1.0,
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::InvalidStepsPerMm { value: -1.0 });
    }

    #[test]
    fn reset_clears_position() {
        let mut decoder = decoder(StepperOptions::default());
        decoder.decode_all(&pulses(&[10, 20], 1)).unwrap();
        decoder.reset();
        assert_eq!(decoder.position(), 0);
        assert!(decoder.decode_all(&pulses(&[10], 1)).unwrap().is_empty());
    }
}
