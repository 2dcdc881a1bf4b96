use crate::annotation::AnnotationClass;
use crate::engine::{DecoderInfo, InputKind};

pub const BYTES_PER_COLOR: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbClass {
    Rgb,
}

impl AnnotationClass for RgbClass {
    const ALL: &'static [Self] = &[RgbClass::Rgb];

    fn index(self) -> usize {
        0
    }

    fn id(self) -> &'static str {
        "rgb"
    }

    fn description(self) -> &'static str {
        "RGB values"
    }
}

pub static INFO: DecoderInfo = DecoderInfo {
    id: "rgb_led_spi",
    name: "RGB LED (SPI)",
    longname: "RGB LED string decoder (SPI)",
    desc: "RGB LED string protocol (RGB values clocked over SPI).",
    license: "gplv2+",
    input: InputKind::Spi,
    outputs: &["rgb_led_spi"],
    channels: &[],
    rows: &[],
};
