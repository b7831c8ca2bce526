use super::ChannelKind;
use crate::prelude::*;

#[doc = r#"
The payload of a channel voice message
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceEvent {
    /// Release a key
    NoteOff {
        /// Key number
        note: DataByte,
        /// Release velocity
        velocity: DataByte,
    },
    /// Press a key. A velocity of zero is conventionally a release, but is kept as-is.
    NoteOn {
        /// Key number
        note: DataByte,
        /// Strike velocity
        velocity: DataByte,
    },
    /// Aftertouch on a single key
    PolyPressure {
        /// Key number
        note: DataByte,
        /// Pressure amount
        pressure: DataByte,
    },
    /// Set a controller
    ControlChange {
        /// Controller number
        controller: DataByte,
        /// New value
        value: DataByte,
    },
    /// Select a program (patch)
    ProgramChange {
        /// Program number
        program: DataByte,
    },
    /// Aftertouch across the whole channel
    ChannelPressure {
        /// Pressure amount
        pressure: DataByte,
    },
    /// Bend the pitch of the channel
    PitchBend(PitchBend),
}

impl VoiceEvent {
    /// Returns the kind of this event
    pub const fn kind(&self) -> ChannelKind {
        match self {
            Self::NoteOff { .. } => ChannelKind::NoteOff,
            Self::NoteOn { .. } => ChannelKind::NoteOn,
            Self::PolyPressure { .. } => ChannelKind::PolyPressure,
            Self::ControlChange { .. } => ChannelKind::ControlChange,
            Self::ProgramChange { .. } => ChannelKind::ProgramChange,
            Self::ChannelPressure { .. } => ChannelKind::ChannelPressure,
            Self::PitchBend(_) => ChannelKind::PitchBend,
        }
    }

    pub(crate) const fn data(&self) -> [u8; 2] {
        match self {
            Self::NoteOff { note, velocity } | Self::NoteOn { note, velocity } => {
                [note.0, velocity.0]
            }
            Self::PolyPressure { note, pressure } => [note.0, pressure.0],
            Self::ControlChange { controller, value } => [controller.0, value.0],
            Self::ProgramChange { program } => [program.0, 0],
            Self::ChannelPressure { pressure } => [pressure.0, 0],
            Self::PitchBend(bend) => [bend.lsb(), bend.msb()],
        }
    }
}

/// A 14 bit pitch bend amount. 8192 is the centre (no bend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchBend(u16);

impl PitchBend {
    /// No bend.
    pub const CENTER: Self = Self(0x2000);
    /// Largest representable bend.
    pub const MAX: u16 = 0x3FFF;

    /// Create a bend from its 14 bit value.
    pub fn new(value: u64) -> Result<Self, RangeError> {
        if value > u64::from(Self::MAX) {
            return Err(RangeError::PitchBend(value));
        }
        Ok(Self(value as u16))
    }

    /// Combine the two seven bit halves as they appear on the wire.
    pub const fn from_bytes(lsb: DataByte, msb: DataByte) -> Self {
        Self(((msb.0 as u16) << 7) | lsb.0 as u16)
    }

    /// The 14 bit value
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Low seven bits
    pub const fn lsb(&self) -> u8 {
        (self.0 & 0x7F) as u8
    }

    /// High seven bits
    pub const fn msb(&self) -> u8 {
        (self.0 >> 7) as u8
    }
}
