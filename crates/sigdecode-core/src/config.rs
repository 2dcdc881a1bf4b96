//! Decoder options, fixed before the first event is processed.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default steps-per-mm scale for the stepper decoder.
pub const DEFAULT_STEPS_PER_MM: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamepadVariant {
    /// Standard eight-button controller.
    #[default]
    Standard,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamepadOptions {
    pub variant: GamepadVariant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepperUnit {
    #[default]
    Steps,
    Mm,
}

impl StepperUnit {
    pub fn label(self) -> &'static str {
        match self {
            StepperUnit::Steps => "steps",
            StepperUnit::Mm => "mm",
        }
    }

    /// Decimal places used when rendering values in this unit.
    pub fn precision(self) -> usize {
        match self {
            StepperUnit::Steps => 0,
            StepperUnit::Mm => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperOptions {
    pub unit: StepperUnit,
    /// Only used when `unit` is [`StepperUnit::Mm`].
    pub steps_per_mm: f64,
}

impl Default for StepperOptions {
    fn default() -> Self {
        Self {
            unit: StepperUnit::Steps,
            steps_per_mm: DEFAULT_STEPS_PER_MM,
        }
    }
}

impl StepperOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = self.steps_per_mm.is_finite() && self.steps_per_mm > 0.0;
        if self.unit == StepperUnit::Mm && !valid {
            return Err(ConfigError::InvalidStepsPerMm {
                value: self.steps_per_mm,
            });
        }
        Ok(())
    }

    /// Divisor turning steps into the configured unit.
    pub fn scale(&self) -> f64 {
        match self.unit {
            StepperUnit::Steps => 1.0,
            StepperUnit::Mm => self.steps_per_mm,
        }
    }
}

/// Decoder selection plus its options, tagged by decoder id.
///
/// # Examples
/// ```
/// use sigdecode_core::{DecoderConfig, StepperUnit};
///
/// let config: DecoderConfig =
///     serde_json::from_str(r#"{"decoder": "stepper_motor", "unit": "mm"}"#)?;
/// match config {
///     DecoderConfig::StepperMotor(options) => {
///         assert_eq!(options.unit, StepperUnit::Mm);
///         assert_eq!(options.steps_per_mm, 100.0);
///     }
///     other => panic!("unexpected config {other:?}"),
/// }
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decoder", rename_all = "snake_case")]
pub enum DecoderConfig {
    NesGamepad(GamepadOptions),
    GuessBitrate,
    Mlx90614,
    RgbLedSpi,
    StepperMotor(StepperOptions),
}
