//! Protocol decoders.
//!
//! Each decoder follows the same layout:
//! - `layout`: constants, annotation class table and static [`DecoderInfo`]
//! - `decoder`: the state machine implementing [`StreamDecoder`]
//!
//! [`AnyDecoder`] wraps one decoder of any kind behind the erased event and
//! annotation types, for hosts that pick the decoder at runtime.

use crate::annotation::{Annotation, RawAnnotation};
use crate::config::DecoderConfig;
use crate::engine::{DecoderInfo, InputKind, Metadata, StreamDecoder};
use crate::error::{ConfigError, DecodeError};
use crate::event::{AnyEvent, LogicSample};

pub(crate) mod common;
pub mod guess_bitrate;
pub mod mlx90614;
pub mod nes_gamepad;
pub mod rgb_led_spi;
pub mod stepper_motor;

use guess_bitrate::GuessBitrateDecoder;
use mlx90614::Mlx90614Decoder;
use nes_gamepad::NesGamepadDecoder;
use rgb_led_spi::RgbLedSpiDecoder;
use stepper_motor::StepperMotorDecoder;

/// One decoder instance of any supported protocol.
#[derive(Debug, Clone)]
pub enum AnyDecoder {
    NesGamepad(NesGamepadDecoder),
    GuessBitrate(GuessBitrateDecoder),
    Mlx90614(Mlx90614Decoder),
    RgbLedSpi(RgbLedSpiDecoder),
    StepperMotor(StepperMotorDecoder),
}

impl AnyDecoder {
    pub fn from_config(config: &DecoderConfig) -> Result<Self, ConfigError> {
        let decoder = match config {
            DecoderConfig::NesGamepad(options) => {
                AnyDecoder::NesGamepad(NesGamepadDecoder::new(options.clone()))
            }
            DecoderConfig::GuessBitrate => AnyDecoder::GuessBitrate(GuessBitrateDecoder::new()),
            DecoderConfig::Mlx90614 => AnyDecoder::Mlx90614(Mlx90614Decoder::new()),
            DecoderConfig::RgbLedSpi => AnyDecoder::RgbLedSpi(RgbLedSpiDecoder::new()),
            DecoderConfig::StepperMotor(options) => {
                AnyDecoder::StepperMotor(StepperMotorDecoder::new(options.clone())?)
            }
        };
        Ok(decoder)
    }

    pub fn info(&self) -> &'static DecoderInfo {
        match self {
            AnyDecoder::NesGamepad(decoder) => decoder.info(),
            AnyDecoder::GuessBitrate(decoder) => decoder.info(),
            AnyDecoder::Mlx90614(decoder) => decoder.info(),
            AnyDecoder::RgbLedSpi(decoder) => decoder.info(),
            AnyDecoder::StepperMotor(decoder) => decoder.info(),
        }
    }

    pub fn requires_samplerate(&self) -> bool {
        match self {
            AnyDecoder::NesGamepad(decoder) => decoder.requires_samplerate(),
            AnyDecoder::GuessBitrate(decoder) => decoder.requires_samplerate(),
            AnyDecoder::Mlx90614(decoder) => decoder.requires_samplerate(),
            AnyDecoder::RgbLedSpi(decoder) => decoder.requires_samplerate(),
            AnyDecoder::StepperMotor(decoder) => decoder.requires_samplerate(),
        }
    }

    pub fn metadata(&mut self, metadata: Metadata) {
        match self {
            AnyDecoder::NesGamepad(decoder) => decoder.metadata(metadata),
            AnyDecoder::GuessBitrate(decoder) => decoder.metadata(metadata),
            AnyDecoder::Mlx90614(decoder) => decoder.metadata(metadata),
            AnyDecoder::RgbLedSpi(decoder) => decoder.metadata(metadata),
            AnyDecoder::StepperMotor(decoder) => decoder.metadata(metadata),
        }
    }

    pub fn reset(&mut self) {
        match self {
            AnyDecoder::NesGamepad(decoder) => decoder.reset(),
            AnyDecoder::GuessBitrate(decoder) => decoder.reset(),
            AnyDecoder::Mlx90614(decoder) => decoder.reset(),
            AnyDecoder::RgbLedSpi(decoder) => decoder.reset(),
            AnyDecoder::StepperMotor(decoder) => decoder.reset(),
        }
    }

    /// Consume one event; its kind must match the decoder's input.
    pub fn decode(
        &mut self,
        event: &AnyEvent,
        out: &mut Vec<RawAnnotation>,
    ) -> Result<(), DecodeError> {
        let info = self.info();
        match (self, event) {
            (AnyDecoder::NesGamepad(decoder), AnyEvent::Spi(bus)) => {
                decode_erased(decoder, bus, out)
            }
            (AnyDecoder::RgbLedSpi(decoder), AnyEvent::Spi(bus)) => {
                decode_erased(decoder, bus, out)
            }
            (AnyDecoder::Mlx90614(decoder), AnyEvent::I2c(bus)) => {
                decode_erased(decoder, bus, out)
            }
            (AnyDecoder::GuessBitrate(decoder), AnyEvent::Logic(sample)) => {
                let sample = match sample.pins.as_slice() {
                    &[data] => LogicSample::new(sample.sample, (data,)),
                    pins => return Err(channel_count(info, pins.len())),
                };
                decode_erased(decoder, &sample, out)
            }
            (AnyDecoder::StepperMotor(decoder), AnyEvent::Logic(sample)) => {
                let sample = match sample.pins.as_slice() {
                    &[step, dir] => LogicSample::new(sample.sample, (step, dir)),
                    pins => return Err(channel_count(info, pins.len())),
                };
                decode_erased(decoder, &sample, out)
            }
            (_, event) => Err(DecodeError::InputMismatch {
                decoder: info.id,
                expected: info.input,
                actual: event.kind(),
            }),
        }
    }
}

fn decode_erased<D: StreamDecoder>(
    decoder: &mut D,
    input: &D::Input,
    out: &mut Vec<RawAnnotation>,
) -> Result<(), DecodeError> {
    let mut typed = Vec::new();
    decoder.decode(input, &mut typed)?;
    out.extend(typed.into_iter().map(Annotation::into_raw));
    Ok(())
}

fn channel_count(info: &DecoderInfo, actual: usize) -> DecodeError {
    DecodeError::ChannelCount {
        decoder: info.id,
        expected: info.channels.len(),
        actual,
    }
}

#[cfg(test)]
mod tests {
    use super::AnyDecoder;
    use crate::annotation::RawAnnotation;
    use crate::config::{DecoderConfig, GamepadOptions, StepperOptions, StepperUnit};
    use crate::engine::{InputKind, Metadata, class_table};
    use crate::error::{ConfigError, DecodeError};
    use crate::event::{AnyEvent, BusEvent, LogicSample, SpiPacket};

    use super::nes_gamepad::GamepadClass;

    fn all_configs() -> Vec<DecoderConfig> {
        vec![
            DecoderConfig::NesGamepad(GamepadOptions::default()),
            DecoderConfig::GuessBitrate,
            DecoderConfig::Mlx90614,
            DecoderConfig::RgbLedSpi,
            DecoderConfig::StepperMotor(StepperOptions::default()),
        ]
    }

    #[test]
    fn info_ids_match_config_tags() {
        for config in all_configs() {
            let decoder = AnyDecoder::from_config(&config).unwrap();
            let tag = serde_json::to_value(&config).unwrap()["decoder"].clone();
            assert_eq!(tag, decoder.info().id);
        }
    }

    #[test]
    fn only_time_based_decoders_need_samplerate() {
        let needs: Vec<_> = all_configs()
            .iter()
            .map(|config| {
                let decoder = AnyDecoder::from_config(config).unwrap();
                (decoder.info().id, decoder.requires_samplerate())
            })
            .collect();
        assert_eq!(
            needs,
            vec![
                ("nes_gamepad", false),
                ("guess_bitrate", true),
                ("mlx90614", false),
                ("rgb_led_spi", false),
                ("stepper_motor", true),
            ]
        );
    }

    #[test]
    fn rows_reference_known_classes() {
        let decoder = AnyDecoder::from_config(&all_configs()[0]).unwrap();
        let classes = class_table::<GamepadClass>();
        assert_eq!(
            classes,
            vec![
                ("button", "Button state"),
                ("no-press", "No button press"),
                ("not-connected", "Gamepad unconnected"),
            ]
        );
        for row in decoder.info().rows {
            assert!(row.classes.iter().all(|&class| class < classes.len()));
        }
    }

    #[test]
    fn erased_decode_reports_class_index() {
        let mut decoder = AnyDecoder::from_config(&all_configs()[0]).unwrap();
        let mut out = Vec::new();
        decoder
            .decode(
                &AnyEvent::Spi(BusEvent::new(4, 12, SpiPacket::data(0, 0x00))),
                &mut out,
            )
            .unwrap();
        assert_eq!(
            out,
            vec![RawAnnotation {
                start: 4,
                end: 12,
                class: 2,
                texts: vec!["Gamepad is not connected".to_string()],
            }]
        );
    }

    #[test]
    fn wrong_input_kind_is_rejected() {
        let mut decoder = AnyDecoder::from_config(&DecoderConfig::Mlx90614).unwrap();
        let err = decoder
            .decode(
                &AnyEvent::Logic(LogicSample::new(0, vec![1])),
                &mut Vec::new(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::InputMismatch {
                decoder: "mlx90614",
                expected: InputKind::I2c,
                actual: InputKind::Logic,
            }
        );
    }

    #[test]
    fn wrong_channel_count_is_rejected() {
        let mut decoder =
            AnyDecoder::from_config(&DecoderConfig::StepperMotor(StepperOptions::default()))
                .unwrap();
        decoder.metadata(Metadata::Samplerate(1_000));
        let err = decoder
            .decode(
                &AnyEvent::Logic(LogicSample::new(0, vec![1])),
                &mut Vec::new(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            DecodeError::ChannelCount {
                decoder: "stepper_motor",
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn invalid_options_fail_construction() {
        let config = DecoderConfig::StepperMotor(StepperOptions {
            unit: StepperUnit::Mm,
            steps_per_mm: f64::NAN,
        });
        assert!(matches!(
            AnyDecoder::from_config(&config),
            Err(ConfigError::InvalidStepsPerMm { .. })
        ));
    }
}
