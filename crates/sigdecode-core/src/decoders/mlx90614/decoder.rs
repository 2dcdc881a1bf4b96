use tracing::debug;

use super::layout::{
    self, KELVIN_PER_LSB, TEMPERATURE_BYTES, ThermometerClass, ZERO_CELSIUS_IN_KELVIN,
};
use crate::annotation::{Annotation, SampleIndex};
use crate::engine::{DecoderInfo, StreamDecoder};
use crate::error::DecodeError;
use crate::event::{BusEvent, I2cCommand, I2cPacket};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThermometerState {
    #[default]
    IgnoreStartRepeat,
    IgnoreAddressWrite,
    GetTemperature,
}

impl ThermometerState {
    /// Command that moves the machine out of this state.
    fn expected(self) -> I2cCommand {
        match self {
            ThermometerState::IgnoreStartRepeat => I2cCommand::StartRepeat,
            ThermometerState::IgnoreAddressWrite => I2cCommand::AddressWrite,
            ThermometerState::GetTemperature => I2cCommand::DataWrite,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Mlx90614Decoder {
    state: ThermometerState,
    data: Vec<u8>,
    start: SampleIndex,
    end: SampleIndex,
}

impl Mlx90614Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ThermometerState {
        self.state
    }

    fn transition(&mut self, next: ThermometerState) {
        debug!(from = ?self.state, to = ?next, "thermometer state change");
        self.state = next;
    }

    fn read_temperature(
        &mut self,
        event: &BusEvent<I2cPacket>,
        out: &mut Vec<Annotation<ThermometerClass>>,
    ) {
        if self.data.len() < TEMPERATURE_BYTES {
            let Some(byte) = event.payload.data else {
                debug!(start = event.start, "DATA WRITE without a byte");
                return;
            };
            if self.data.is_empty() {
                self.start = event.start;
            } else {
                self.end = event.end;
            }
            self.data.push(byte);
            return;
        }

        let raw = u16::from_le_bytes([self.data[0], self.data[1]]);
        let kelvin = f64::from(raw) * KELVIN_PER_LSB;
        let celsius = kelvin - ZERO_CELSIUS_IN_KELVIN;
        out.push(Annotation::new(
            self.start,
            self.end,
            ThermometerClass::Celsius,
            vec![
                format!("Temperature: {celsius:.2} °C"),
                format!("{celsius:.2} °C"),
            ],
        ));
        out.push(Annotation::new(
            self.start,
            self.end,
            ThermometerClass::Kelvin,
            vec![
                format!("Temperature: {kelvin:.2} K"),
                format!("{kelvin:.2} K"),
            ],
        ));

        self.data.clear();
        self.transition(ThermometerState::IgnoreStartRepeat);
    }
}

impl StreamDecoder for Mlx90614Decoder {
    type Input = BusEvent<I2cPacket>;
    type Class = ThermometerClass;

    fn info(&self) -> &'static DecoderInfo {
        &layout::INFO
    }

    fn decode(
        &mut self,
        input: &Self::Input,
        out: &mut Vec<Annotation<ThermometerClass>>,
    ) -> Result<(), DecodeError> {
        if input.payload.command != self.state.expected() {
            return Ok(());
        }

        match self.state {
            ThermometerState::IgnoreStartRepeat => {
                self.transition(ThermometerState::IgnoreAddressWrite)
            }
            ThermometerState::IgnoreAddressWrite => {
                self.transition(ThermometerState::GetTemperature)
            }
            ThermometerState::GetTemperature => self.read_temperature(input, out),
        }
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
