//! Input events produced by the upstream acquisition and bus decoders.
//!
//! SPI and I2C traffic arrives as [`BusEvent`]s spanning the samples of one
//! transfer; raw logic input arrives as one [`LogicSample`] per sample of
//! interest. Packet kinds serialize with the upstream names (`"DATA"`,
//! `"START REPEAT"`, ...).

use serde::{Deserialize, Serialize};

use crate::annotation::SampleIndex;
use crate::engine::InputKind;

/// Bus transaction spanning `[start, end]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusEvent<P> {
    pub start: SampleIndex,
    pub end: SampleIndex,
    pub payload: P,
}

impl<P> BusEvent<P> {
    pub fn new(start: SampleIndex, end: SampleIndex, payload: P) -> Self {
        Self {
            start,
            end,
            payload,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpiPacketKind {
    #[serde(rename = "DATA")]
    Data,
    #[serde(rename = "BITS")]
    Bits,
    #[serde(rename = "CS-CHANGE")]
    CsChange,
    #[serde(rename = "TRANSFER")]
    Transfer,
}

/// One SPI word with the bytes seen on each data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiPacket {
    pub kind: SpiPacketKind,
    #[serde(default)]
    pub mosi: Option<u8>,
    #[serde(default)]
    pub miso: Option<u8>,
}

impl SpiPacket {
    pub fn data(mosi: u8, miso: u8) -> Self {
        Self {
            kind: SpiPacketKind::Data,
            mosi: Some(mosi),
            miso: Some(miso),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum I2cCommand {
    #[serde(rename = "START")]
    Start,
    #[serde(rename = "START REPEAT")]
    StartRepeat,
    #[serde(rename = "STOP")]
    Stop,
    #[serde(rename = "ACK")]
    Ack,
    #[serde(rename = "NACK")]
    Nack,
    #[serde(rename = "BITS")]
    Bits,
    #[serde(rename = "ADDRESS READ")]
    AddressRead,
    #[serde(rename = "ADDRESS WRITE")]
    AddressWrite,
    #[serde(rename = "DATA READ")]
    DataRead,
    #[serde(rename = "DATA WRITE")]
    DataWrite,
}

/// One I2C protocol phase; `data` carries the address or data byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct I2cPacket {
    pub command: I2cCommand,
    #[serde(default)]
    pub data: Option<u8>,
}

impl I2cPacket {
    pub fn new(command: I2cCommand, data: Option<u8>) -> Self {
        Self { command, data }
    }
}

/// Logic levels of a decoder's channels at `sample`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicSample<P> {
    pub sample: SampleIndex,
    pub pins: P,
}

impl<P> LogicSample<P> {
    pub fn new(sample: SampleIndex, pins: P) -> Self {
        Self { sample, pins }
    }
}

/// Single data line.
pub type DataLineSample = LogicSample<(u8,)>;
/// Step and direction lines, in that order.
pub type StepDirSample = LogicSample<(u8, u8)>;

/// Any input event, as stored in trace files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnyEvent {
    Spi(BusEvent<SpiPacket>),
    I2c(BusEvent<I2cPacket>),
    Logic(LogicSample<Vec<u8>>),
}

impl AnyEvent {
    pub fn kind(&self) -> InputKind {
        match self {
            AnyEvent::Spi(_) => InputKind::Spi,
            AnyEvent::I2c(_) => InputKind::I2c,
            AnyEvent::Logic(_) => InputKind::Logic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnyEvent, BusEvent, I2cCommand, I2cPacket, LogicSample, SpiPacket};
    use serde_json::json;

    #[test]
    fn packet_kinds_use_upstream_names() {
        let event = AnyEvent::I2c(BusEvent::new(
            3,
            7,
            I2cPacket::new(I2cCommand::StartRepeat, None),
        ));
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["i2c"]["payload"]["command"], "START REPEAT");
    }

    #[test]
    fn missing_bytes_default_to_none() {
        let value = json!({
            "spi": { "start": 0, "end": 8, "payload": { "kind": "CS-CHANGE" } }
        });
        let event: AnyEvent = serde_json::from_value(value).unwrap();
        match event {
            AnyEvent::Spi(bus) => {
                assert_eq!(bus.payload.mosi, None);
                assert_eq!(bus.payload.miso, None);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn logic_pins_are_arrays() {
        let value = json!({ "logic": { "sample": 42, "pins": [1, 0] } });
        let event: AnyEvent = serde_json::from_value(value).unwrap();
        assert_eq!(event, AnyEvent::Logic(LogicSample::new(42, vec![1, 0])));

        let spi = serde_json::to_value(BusEvent::new(0, 1, SpiPacket::data(0x12, 0xff))).unwrap();
        assert_eq!(spi["payload"]["kind"], "DATA");
        assert_eq!(spi["payload"]["miso"], 255);
    }
}
