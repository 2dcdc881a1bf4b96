use crate::annotation::AnnotationClass;
use crate::engine::{AnnotationRow, DecoderInfo, InputKind};

pub const NO_BUTTON_PRESSED: u8 = 0xff;
pub const NOT_CONNECTED: u8 = 0x00;

/// Button names indexed by bit position (bit 0 first).
pub const BUTTONS: [&str; 8] = [
    "A", "B", "Select", "Start", "North", "South", "West", "East",
];
pub const BUTTON_SEPARATOR: &str = " + ";

pub const NO_PRESS_TEXT: &str = "No button is pressed";
pub const NOT_CONNECTED_TEXT: &str = "Gamepad is not connected";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamepadClass {
    Button,
    NoPress,
    NotConnected,
}

impl AnnotationClass for GamepadClass {
    const ALL: &'static [Self] = &[
        GamepadClass::Button,
        GamepadClass::NoPress,
        GamepadClass::NotConnected,
    ];

    fn index(self) -> usize {
        match self {
            GamepadClass::Button => 0,
            GamepadClass::NoPress => 1,
            GamepadClass::NotConnected => 2,
        }
    }

    fn id(self) -> &'static str {
        match self {
            GamepadClass::Button => "button",
            GamepadClass::NoPress => "no-press",
            GamepadClass::NotConnected => "not-connected",
        }
    }

    fn description(self) -> &'static str {
        match self {
            GamepadClass::Button => "Button state",
            GamepadClass::NoPress => "No button press",
            GamepadClass::NotConnected => "Gamepad unconnected",
        }
    }
}

pub static INFO: DecoderInfo = DecoderInfo {
    id: "nes_gamepad",
    name: "NES gamepad",
    longname: "Nintendo Entertainment System gamepad",
    desc: "NES gamepad button states.",
    license: "gplv2+",
    input: InputKind::Spi,
    outputs: &[],
    channels: &[],
    rows: &[
        AnnotationRow {
            id: "buttons",
            description: "Button states",
            classes: &[0],
        },
        AnnotationRow {
            id: "no-presses",
            description: "No button presses",
            classes: &[1],
        },
        AnnotationRow {
            id: "not-connected-vals",
            description: "Gamepad unconnected",
            classes: &[2],
        },
    ],
};
