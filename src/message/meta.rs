use alloc::vec::Vec;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Well-known meta event types.
///
/// A [`MetaEvent`] may carry any type byte; this enum only names the ones the
/// Standard MIDI File specification defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum MetaKind {
    /// `FF 00 02 ssss`
    SequenceNumber = 0x00,
    /// `FF 01 len text`
    Text = 0x01,
    /// `FF 02 len text`
    Copyright = 0x02,
    /// `FF 03 len text`
    TrackName = 0x03,
    /// `FF 04 len text`
    InstrumentName = 0x04,
    /// `FF 05 len text`
    Lyric = 0x05,
    /// `FF 06 len text`
    Marker = 0x06,
    /// `FF 07 len text`
    CuePoint = 0x07,
    /// `FF 20 01 cc`
    ChannelPrefix = 0x20,
    /// `FF 21 01 pp`
    Port = 0x21,
    /// `FF 2F 00`
    EndOfTrack = 0x2F,
    /// `FF 51 03 tttttt`, microseconds per quarter note
    SetTempo = 0x51,
    /// `FF 54 05 hr mn se fr ff`
    SmpteOffset = 0x54,
    /// `FF 58 04 nn dd cc bb`
    TimeSignature = 0x58,
    /// `FF 59 02 sf mi`
    KeySignature = 0x59,
    /// `FF 7F len data`
    SequencerSpecific = 0x7F,
}

impl MetaKind {
    /// A snake_case name, used as a label in the text document.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SequenceNumber => "sequence_number",
            Self::Text => "text",
            Self::Copyright => "copyright",
            Self::TrackName => "track_name",
            Self::InstrumentName => "instrument_name",
            Self::Lyric => "lyric",
            Self::Marker => "marker",
            Self::CuePoint => "cue_point",
            Self::ChannelPrefix => "channel_prefix",
            Self::Port => "port",
            Self::EndOfTrack => "end_of_track",
            Self::SetTempo => "set_tempo",
            Self::SmpteOffset => "smpte_offset",
            Self::TimeSignature => "time_signature",
            Self::KeySignature => "key_signature",
            Self::SequencerSpecific => "sequencer_specific",
        }
    }
}

#[doc = r#"
A meta event. The payload is kept as raw bytes and never interpreted on the
conversion path.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaEvent {
    meta_type: u8,
    data: Vec<u8>,
}

impl MetaEvent {
    /// Create a meta event of any type
    pub fn new(meta_type: u8, data: impl Into<Vec<u8>>) -> Self {
        Self {
            meta_type,
            data: data.into(),
        }
    }

    /// The end-of-track marker (`FF 2F 00`)
    pub fn end_of_track() -> Self {
        Self::new(MetaKind::EndOfTrack.into(), Vec::new())
    }

    /// A tempo change, in microseconds per quarter note.
    ///
    /// Only the low 24 bits are kept.
    pub fn set_tempo(micros_per_quarter: u32) -> Self {
        let [_, a, b, c] = micros_per_quarter.to_be_bytes();
        Self::new(MetaKind::SetTempo.into(), [a, b, c])
    }

    /// The raw type byte
    pub const fn meta_type(&self) -> u8 {
        self.meta_type
    }

    /// The well-known kind, if the type byte names one
    pub fn kind(&self) -> Option<MetaKind> {
        MetaKind::try_from(self.meta_type).ok()
    }

    /// The raw payload
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// True for `FF 2F`
    pub fn is_end_of_track(&self) -> bool {
        self.meta_type == u8::from(MetaKind::EndOfTrack)
    }

    /// Microseconds per quarter note, if this is a well-formed tempo event.
    pub fn tempo(&self) -> Option<u32> {
        match (self.kind(), self.data.as_slice()) {
            (Some(MetaKind::SetTempo), &[a, b, c]) => Some(u32::from_be_bytes([0, a, b, c])),
            _ => None,
        }
    }
}
