#![doc = r#"
Contains all Channel Message types

A channel event always stores its explicit kind and channel, whether or not the
file it came from used running status.
"#]

mod voice;
pub use voice::*;

use crate::prelude::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The kind of a channel voice message, valued as its status byte's high nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ChannelKind {
    /// `0x8n`
    NoteOff = 0x80,
    /// `0x9n`
    NoteOn = 0x90,
    /// `0xAn`, polyphonic key pressure
    PolyPressure = 0xA0,
    /// `0xBn`
    ControlChange = 0xB0,
    /// `0xCn`
    ProgramChange = 0xC0,
    /// `0xDn`, channel aftertouch
    ChannelPressure = 0xD0,
    /// `0xEn`
    PitchBend = 0xE0,
}

impl ChannelKind {
    /// Look up the kind from any status byte in `0x80..=0xEF`.
    pub fn from_status(status: u8) -> Option<Self> {
        Self::try_from(status & 0xF0).ok()
    }

    /// The number of data bytes following the status byte.
    pub const fn data_len(&self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }
}

#[doc = r#"
A channel voice message addressed to one of sixteen channels
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelEvent {
    channel: Channel,
    event: VoiceEvent,
}

impl ChannelEvent {
    /// Create a new channel event
    pub const fn new(channel: Channel, event: VoiceEvent) -> Self {
        Self { channel, event }
    }

    /// Rebuild an event from its kind and raw data bytes.
    ///
    /// For one-byte kinds `data2` must be 0.
    pub fn from_parts(
        kind: ChannelKind,
        channel: Channel,
        data1: u8,
        data2: u8,
    ) -> Result<Self, RangeError> {
        let d1 = DataByte::new(data1)?;
        let d2 = match kind.data_len() {
            2 => DataByte::new(data2)?,
            _ if data2 == 0 => DataByte::default(),
            _ => {
                return Err(RangeError::UnusedByte {
                    field: "data2",
                    value: data2,
                });
            }
        };
        let event = match kind {
            ChannelKind::NoteOff => VoiceEvent::NoteOff {
                note: d1,
                velocity: d2,
            },
            ChannelKind::NoteOn => VoiceEvent::NoteOn {
                note: d1,
                velocity: d2,
            },
            ChannelKind::PolyPressure => VoiceEvent::PolyPressure {
                note: d1,
                pressure: d2,
            },
            ChannelKind::ControlChange => VoiceEvent::ControlChange {
                controller: d1,
                value: d2,
            },
            ChannelKind::ProgramChange => VoiceEvent::ProgramChange { program: d1 },
            ChannelKind::ChannelPressure => VoiceEvent::ChannelPressure { pressure: d1 },
            ChannelKind::PitchBend => VoiceEvent::PitchBend(PitchBend::from_bytes(d1, d2)),
        };
        Ok(Self::new(channel, event))
    }

    /// Returns the channel
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Returns the voice event
    pub const fn event(&self) -> &VoiceEvent {
        &self.event
    }

    /// Returns the kind of message
    pub const fn kind(&self) -> ChannelKind {
        self.event.kind()
    }

    /// The full status byte, kind and channel combined.
    pub fn status(&self) -> u8 {
        u8::from(self.kind()) | self.channel.number()
    }

    /// The data bytes in wire order. One-byte kinds report zero as the second byte.
    pub const fn data(&self) -> [u8; 2] {
        self.event.data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_combines_kind_and_channel() {
        let event = ChannelEvent::from_parts(ChannelKind::NoteOn, Channel::new(9).unwrap(), 60, 100)
            .unwrap();
        assert_eq!(event.status(), 0x99);
        assert_eq!(event.data(), [60, 100]);
    }

    #[test]
    fn one_byte_kinds_need_a_zero_second_byte() {
        let event =
            ChannelEvent::from_parts(ChannelKind::ProgramChange, Channel::default(), 5, 0).unwrap();
        assert_eq!(*event.event(), VoiceEvent::ProgramChange { program: DataByte(5) });
        assert_eq!(ChannelKind::ProgramChange.data_len(), 1);

        assert_eq!(
            ChannelEvent::from_parts(ChannelKind::ProgramChange, Channel::default(), 5, 0xFF),
            Err(RangeError::UnusedByte {
                field: "data2",
                value: 0xFF
            })
        );
    }

    #[test]
    fn kind_lookup() {
        assert_eq!(ChannelKind::from_status(0xE3), Some(ChannelKind::PitchBend));
        assert_eq!(ChannelKind::from_status(0xF0), None);
        assert_eq!(ChannelKind::from_status(0x7F), None);
    }

    #[test]
    fn data_bytes_are_range_checked() {
        assert_eq!(
            ChannelEvent::from_parts(ChannelKind::NoteOff, Channel::default(), 0x80, 0),
            Err(RangeError::DataByte(0x80))
        );
    }
}
