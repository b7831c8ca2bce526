use super::unknown_tag;
use crate::{
    message::SYSEX_END,
    prelude::*,
    reader::{ReadResult, Reader},
    writer::Writer,
};
use alloc::vec::Vec;

/// Size of an event record without its extra bytes
pub const EVENT_RECORD_LEN: usize = 16;

/// `kind_tag` of a meta event record
pub const META_TAG: u8 = 0xFF;
/// `kind_tag` of an `F0` sysex record
pub const SYSEX_TAG: u8 = 0xF0;
/// `kind_tag` of an `F7` sysex continuation record
pub const SYSEX_CONTINUATION_TAG: u8 = SYSEX_END;

/// One event, as laid out in a record stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    delta_time: u32,
    track_index: u32,
    kind_tag: u8,
    channel: u8,
    data1: u8,
    data2: u8,
    extra: Vec<u8>,
}

impl EventRecord {
    /// Flatten an event of the given track.
    pub fn from_event(track_index: u32, event: &TimedEvent) -> Self {
        let mut record = Self {
            delta_time: event.delta_time(),
            track_index,
            kind_tag: 0,
            channel: 0,
            data1: 0,
            data2: 0,
            extra: Vec::new(),
        };
        match event.event() {
            EventPayload::Channel(channel) => {
                let [data1, data2] = channel.data();
                record.kind_tag = channel.kind().into();
                record.channel = channel.channel().number();
                record.data1 = data1;
                record.data2 = data2;
            }
            EventPayload::Meta(meta) => {
                record.kind_tag = META_TAG;
                record.data1 = meta.meta_type();
                record.extra = meta.data().to_vec();
            }
            EventPayload::SysEx(sysex) => {
                record.kind_tag = if sysex.continuation() {
                    SYSEX_CONTINUATION_TAG
                } else {
                    SYSEX_TAG
                };
                record.data1 = u8::from(sysex.terminated());
                record.extra = sysex.data().to_vec();
            }
        }
        record
    }

    /// The track this record belongs to
    pub const fn track_index(&self) -> u32 {
        self.track_index
    }

    /// The event discriminator
    pub const fn kind_tag(&self) -> u8 {
        self.kind_tag
    }

    /// Rebuild the event this record describes.
    pub fn into_event(self) -> ConvertResult<TimedEvent> {
        if self.delta_time > VLQ_MAX {
            return Err(RangeError::Vlq(u64::from(self.delta_time)).into());
        }
        let event: EventPayload = match self.kind_tag {
            META_TAG => {
                self.unused()?;
                MetaEvent::new(self.data1, self.extra).into()
            }
            SYSEX_TAG | SYSEX_CONTINUATION_TAG => {
                self.unused()?;
                let terminated = match self.data1 {
                    0 => false,
                    1 => true,
                    other => return Err(RangeError::Flag(other).into()),
                };
                SysExEvent::from_parts(
                    self.extra,
                    terminated,
                    self.kind_tag == SYSEX_CONTINUATION_TAG,
                )?
                .into()
            }
            tag => {
                let kind = ChannelKind::try_from(tag).map_err(|_| unknown_tag(tag))?;
                if !self.extra.is_empty() {
                    return Err(RangeError::ExtraBytes(self.extra.len() as u64).into());
                }
                let channel = Channel::new(self.channel)?;
                ChannelEvent::from_parts(kind, channel, self.data1, self.data2)?.into()
            }
        };
        Ok(TimedEvent::new(self.delta_time, event))
    }

    /// Meta and sysex records leave `channel` and `data2` at zero.
    fn unused(&self) -> Result<(), RangeError> {
        for (field, value) in [("channel", self.channel), ("data2", self.data2)] {
            if value != 0 {
                return Err(RangeError::UnusedByte { field, value });
            }
        }
        Ok(())
    }

    pub(crate) fn write(&self, out: &mut Writer) -> Result<(), RangeError> {
        let extra_len = u32::try_from(self.extra.len())
            .map_err(|_| RangeError::ChunkLength(self.extra.len() as u64))?;
        out.write_u32(self.delta_time);
        out.write_u32(self.track_index);
        out.write_u8(self.kind_tag);
        out.write_u8(self.channel);
        out.write_u8(self.data1);
        out.write_u8(self.data2);
        out.write_u32(extra_len);
        out.write_bytes(&self.extra);
        Ok(())
    }

    pub(crate) fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let delta_time = reader.read_u32()?;
        let track_index = reader.read_u32()?;
        let [kind_tag, channel, data1, data2] = reader.read_exact_size()?;
        let extra_len = reader.read_u32()?;
        let extra = reader.read_bytes(extra_len as usize)?.to_vec();
        Ok(Self {
            delta_time,
            track_index,
            kind_tag,
            channel,
            data1,
            data2,
            extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(record: &EventRecord) -> Vec<u8> {
        let mut out = Writer::new();
        record.write(&mut out).unwrap();
        out.into_inner()
    }

    #[test]
    fn channel_record_layout() {
        let event = TimedEvent::new(
            480,
            ChannelEvent::from_parts(ChannelKind::NoteOff, Channel::new(3).unwrap(), 60, 64)
                .unwrap(),
        );
        let bytes = write(&EventRecord::from_event(1, &event));
        assert_eq!(bytes.len(), EVENT_RECORD_LEN);
        assert_eq!(
            bytes,
            [0, 0, 0x01, 0xE0, 0, 0, 0, 1, 0x80, 3, 60, 64, 0, 0, 0, 0]
        );
    }

    #[test]
    fn meta_record_layout() {
        let event = TimedEvent::new(0, MetaEvent::set_tempo(500_000));
        let record = EventRecord::from_event(0, &event);
        assert_eq!(record.kind_tag(), META_TAG);
        let bytes = write(&record);
        assert_eq!(&bytes[8..], [0xFF, 0, 0x51, 0, 0, 0, 0, 3, 0x07, 0xA1, 0x20]);
    }

    #[test]
    fn unknown_kind_tag() {
        let bytes = [0, 0, 0, 0, 0, 0, 0, 0, 0x30, 0, 0, 0, 0, 0, 0, 0];
        let record = EventRecord::read(&mut Reader::from_byte_slice(&bytes)).unwrap();
        let err = record.into_event().unwrap_err();
        assert!(matches!(err, ConvertError::UnknownEventTag(ref tag) if tag == "0x30"));
    }

    fn decode(bytes: &[u8]) -> ConvertResult<TimedEvent> {
        EventRecord::read(&mut Reader::from_byte_slice(bytes))
            .unwrap()
            .into_event()
    }

    #[test]
    fn meta_records_leave_channel_and_data2_zero() {
        let bytes = [0, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0, 0x2F, 7, 0, 0, 0, 0];
        assert!(matches!(
            decode(&bytes),
            Err(ConvertError::Range(RangeError::UnusedByte {
                field: "data2",
                value: 7
            }))
        ));
        let bytes = [0, 0, 0, 0, 0, 0, 0, 0, 0xF7, 2, 1, 0, 0, 0, 0, 0];
        assert!(matches!(
            decode(&bytes),
            Err(ConvertError::Range(RangeError::UnusedByte {
                field: "channel",
                value: 2
            }))
        ));
    }

    #[test]
    fn sysex_flag_must_be_boolean() {
        let bytes = [0, 0, 0, 0, 0, 0, 0, 0, 0xF0, 0, 2, 0, 0, 0, 0, 0];
        let record = EventRecord::read(&mut Reader::from_byte_slice(&bytes)).unwrap();
        assert!(matches!(
            record.into_event(),
            Err(ConvertError::Range(RangeError::Flag(2)))
        ));
    }
}
