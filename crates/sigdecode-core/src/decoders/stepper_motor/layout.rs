use crate::annotation::AnnotationClass;
use crate::engine::{AnnotationRow, ChannelInfo, DecoderInfo, InputKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepperClass {
    Speed,
    Position,
}

impl AnnotationClass for StepperClass {
    const ALL: &'static [Self] = &[StepperClass::Speed, StepperClass::Position];

    fn index(self) -> usize {
        match self {
            StepperClass::Speed => 0,
            StepperClass::Position => 1,
        }
    }

    fn id(self) -> &'static str {
        match self {
            StepperClass::Speed => "speed",
            StepperClass::Position => "position",
        }
    }

    fn description(self) -> &'static str {
        match self {
            StepperClass::Speed => "Speed",
            StepperClass::Position => "Position",
        }
    }
}

pub static INFO: DecoderInfo = DecoderInfo {
    id: "stepper_motor",
    name: "Stepper motor",
    longname: "Stepper motor position / speed",
    desc: "Absolute position and movement speed from step/dir.",
    license: "gplv2+",
    input: InputKind::Logic,
    outputs: &["stepper_motor"],
    channels: &[
        ChannelInfo {
            id: "step",
            name: "Step",
            desc: "Step pulse",
        },
        ChannelInfo {
            id: "dir",
            name: "Direction",
            desc: "Direction select",
        },
    ],
    rows: &[
        AnnotationRow {
            id: "speed",
            description: "Speed",
            classes: &[0],
        },
        AnnotationRow {
            id: "position",
            description: "Position",
            classes: &[1],
        },
    ],
};
