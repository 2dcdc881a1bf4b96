use crate::annotation::AnnotationClass;
use crate::engine::{AnnotationRow, DecoderInfo, InputKind};

/// Kelvin per LSB of the temperature RAM word.
pub const KELVIN_PER_LSB: f64 = 0.02;
pub const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;
/// Temperature bytes per read (low, high); the PEC byte follows them.
pub const TEMPERATURE_BYTES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermometerClass {
    Celsius,
    Kelvin,
}

impl AnnotationClass for ThermometerClass {
    const ALL: &'static [Self] = &[ThermometerClass::Celsius, ThermometerClass::Kelvin];

    fn index(self) -> usize {
        match self {
            ThermometerClass::Celsius => 0,
            ThermometerClass::Kelvin => 1,
        }
    }

    fn id(self) -> &'static str {
        match self {
            ThermometerClass::Celsius => "celsius",
            ThermometerClass::Kelvin => "kelvin",
        }
    }

    fn description(self) -> &'static str {
        match self {
            ThermometerClass::Celsius => "Temperature in degrees Celsius",
            ThermometerClass::Kelvin => "Temperature in Kelvin",
        }
    }
}

pub static INFO: DecoderInfo = DecoderInfo {
    id: "mlx90614",
    name: "MLX90614",
    longname: "Melexis MLX90614",
    desc: "Infrared Thermometer protocol.",
    license: "gplv2+",
    input: InputKind::I2c,
    outputs: &["mlx90614"],
    channels: &[],
    rows: &[
        AnnotationRow {
            id: "celsius",
            description: "Temperature in degrees Celsius",
            classes: &[0],
        },
        AnnotationRow {
            id: "kelvin",
            description: "Temperature in Kelvin",
            classes: &[1],
        },
    ],
};
