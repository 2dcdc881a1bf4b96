use tracing::debug;

use super::layout::{
    self, BUTTON_SEPARATOR, BUTTONS, GamepadClass, NO_BUTTON_PRESSED, NO_PRESS_TEXT,
    NOT_CONNECTED, NOT_CONNECTED_TEXT,
};
use crate::annotation::Annotation;
use crate::bits::bit_unpack;
use crate::config::{GamepadOptions, GamepadVariant};
use crate::engine::{DecoderInfo, StreamDecoder};
use crate::error::DecodeError;
use crate::event::{BusEvent, SpiPacket, SpiPacketKind};

/// Stateless apart from its options; every `DATA` word is decoded on its own.
#[derive(Debug, Clone, Default)]
pub struct NesGamepadDecoder {
    options: GamepadOptions,
}

impl NesGamepadDecoder {
    pub fn new(options: GamepadOptions) -> Self {
        Self { options }
    }

    pub fn variant(&self) -> GamepadVariant {
        self.options.variant
    }
}

impl StreamDecoder for NesGamepadDecoder {
    type Input = BusEvent<SpiPacket>;
    type Class = GamepadClass;

    fn info(&self) -> &'static DecoderInfo {
        &layout::INFO
    }

    fn decode(
        &mut self,
        input: &Self::Input,
        out: &mut Vec<Annotation<GamepadClass>>,
    ) -> Result<(), DecodeError> {
        if input.payload.kind != SpiPacketKind::Data {
            return Ok(());
        }
        let Some(value) = input.payload.miso else {
            debug!(start = input.start, "DATA packet without MISO byte");
            return Ok(());
        };

        let (class, text) = button_state(value);
        out.push(Annotation::new(input.start, input.end, class, vec![text]));
        Ok(())
    }

    fn reset(&mut self) {}
}

fn button_state(value: u8) -> (GamepadClass, String) {
    match value {
        NO_BUTTON_PRESSED => (GamepadClass::NoPress, NO_PRESS_TEXT.to_string()),
        NOT_CONNECTED => (GamepadClass::NotConnected, NOT_CONNECTED_TEXT.to_string()),
        _ => (GamepadClass::Button, pressed_buttons(value)),
    }
}

/// Active-low bits to `"A + Start"` style text, in bit order.
fn pressed_buttons(value: u8) -> String {
    let pressed: Vec<&str> = bit_unpack(u64::from(value), BUTTONS.len())
        .into_iter()
        .zip(BUTTONS)
        .filter(|(bit, _)| *bit == 0)
        .map(|(_, name)| name)
        .collect();
    // Only 0xff has no clear bit, and it is handled before this point.
    debug_assert!(!pressed.is_empty(), "no pressed button in {value:#04x}");
    pressed.join(BUTTON_SEPARATOR)
}
