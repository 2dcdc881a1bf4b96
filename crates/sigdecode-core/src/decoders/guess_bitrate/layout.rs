use crate::annotation::AnnotationClass;
use crate::engine::{AnnotationRow, ChannelInfo, DecoderInfo, InputKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitrateClass {
    Bitrate,
}

impl AnnotationClass for BitrateClass {
    const ALL: &'static [Self] = &[BitrateClass::Bitrate];

    fn index(self) -> usize {
        0
    }

    fn id(self) -> &'static str {
        "bitrate"
    }

    fn description(self) -> &'static str {
        "Bitrate / baudrate"
    }
}

pub static INFO: DecoderInfo = DecoderInfo {
    id: "guess_bitrate",
    name: "Guess bitrate",
    longname: "Guess bitrate/baudrate",
    desc: "Guess the bitrate/baudrate of a UART (or other) protocol.",
    license: "gplv2+",
    input: InputKind::Logic,
    outputs: &["guess_bitrate"],
    channels: &[ChannelInfo {
        id: "data",
        name: "Data",
        desc: "Data line",
    }],
    rows: &[AnnotationRow {
        id: "bitrate",
        description: "Bitrate / baudrate",
        classes: &[0],
    }],
};
