use tracing::debug;

use super::layout::{self, BYTES_PER_COLOR, RgbClass};
use crate::annotation::{Annotation, SampleIndex};
use crate::engine::{DecoderInfo, StreamDecoder};
use crate::error::DecodeError;
use crate::event::{BusEvent, SpiPacket, SpiPacketKind};

#[derive(Debug, Clone, Default)]
pub struct RgbLedSpiDecoder {
    mosi_bytes: Vec<u8>,
    command_start: SampleIndex,
}

impl RgbLedSpiDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes of the color currently being accumulated.
    pub fn pending(&self) -> &[u8] {
        &self.mosi_bytes
    }
}

impl StreamDecoder for RgbLedSpiDecoder {
    type Input = BusEvent<SpiPacket>;
    type Class = RgbClass;

    fn info(&self) -> &'static DecoderInfo {
        &layout::INFO
    }

    fn decode(
        &mut self,
        input: &Self::Input,
        out: &mut Vec<Annotation<RgbClass>>,
    ) -> Result<(), DecodeError> {
        if input.payload.kind != SpiPacketKind::Data {
            return Ok(());
        }
        let Some(mosi) = input.payload.mosi else {
            debug!(start = input.start, "DATA packet without MOSI byte");
            return Ok(());
        };

        if self.mosi_bytes.is_empty() {
            self.command_start = input.start;
        }
        self.mosi_bytes.push(mosi);
        if self.mosi_bytes.len() != BYTES_PER_COLOR {
            return Ok(());
        }

        let rgb = match *self.mosi_bytes.as_slice() {
            [red, green, blue] => u32::from(red) << 16 | u32::from(green) << 8 | u32::from(blue),
            _ => return Ok(()),
        };
        self.mosi_bytes.clear();

        out.push(Annotation::new(
            self.command_start,
            input.end,
            RgbClass::Rgb,
            vec![format!("#{rgb:06x}")],
        ));
        Ok(())
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::RgbLedSpiDecoder;
    use crate::engine::StreamDecoder;
    use crate::event::{BusEvent, SpiPacket, SpiPacketKind};

    fn byte(start: u64, mosi: u8) -> BusEvent<SpiPacket> {
        BusEvent::new(start, start + 7, SpiPacket::data(mosi, 0x00))
    }

    #[test]
    fn three_bytes_make_one_color() {
        let mut decoder = RgbLedSpiDecoder::new();
        let anns = decoder
            .decode_all(&[byte(0, 0x12), byte(8, 0x34), byte(16, 0x56)])
            .unwrap();
        assert_eq!(anns.len(), 1);
        assert_eq!((anns[0].start, anns[0].end), (0, 23));
        assert_eq!(anns[0].text(), "#123456");
        assert!(decoder.pending().is_empty());
    }

    #[test]
    fn fourth_byte_starts_a_new_color() {
        let mut decoder = RgbLedSpiDecoder::new();
        let events: Vec<_> = [0xffu8, 0x00, 0x0a, 0x01, 0x02]
            .into_iter()
            .enumerate()
            .map(|(i, mosi)| byte(i as u64 * 8, mosi))
            .collect();
        let anns = decoder.decode_all(&events).unwrap();
        assert_eq!(anns.len(), 1);
        assert_eq!(anns[0].text(), "#ff000a");
        assert_eq!(decoder.pending(), &[0x01, 0x02]);

        let anns = decoder.decode_all(&[byte(40, 0x03)]).unwrap();
        assert_eq!((anns[0].start, anns[0].end), (24, 47));
        assert_eq!(anns[0].text(), "#010203");
    }

    #[test]
    fn non_data_packets_do_not_count() {
        let mut decoder = RgbLedSpiDecoder::new();
        let cs = BusEvent::new(
            0,
            0,
            SpiPacket {
                kind: SpiPacketKind::CsChange,
                mosi: Some(0x11),
                miso: None,
            },
        );
        let anns = decoder
            .decode_all(&[cs.clone(), byte(1, 0x01), cs, byte(9, 0x02)])
            .unwrap();
        assert!(anns.is_empty());
        assert_eq!(decoder.pending(), &[0x01, 0x02]);
    }
}
