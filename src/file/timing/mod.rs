mod smpte;
pub use smpte::*;

use crate::prelude::*;

/// The header timing type.
///
/// This is either the number of ticks per quarter note or
/// the alternative SMPTE format, distinguished by the top bit of the
/// 16 bit division word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    /// The midi file's delta times are defined using a tick rate per quarter note
    TicksPerQuarterNote(TicksPerQuarterNote),

    /// The midi file's delta times are defined using an SMPTE and MIDI Time Code
    Smpte(SmpteHeader),
}

impl Timing {
    /// The tickrate per quarter note defines what a "quarter note" means.
    ///
    /// Only 1-32767 are valid, the top bit is reserved for SMPTE timing.
    pub fn new_ticks_per_quarter_note(tpqn: u64) -> Result<Self, RangeError> {
        match u16::try_from(tpqn) {
            Ok(v @ 1..=0x7FFF) => Ok(Self::TicksPerQuarterNote(TicksPerQuarterNote(v))),
            _ => Err(RangeError::TicksPerQuarterNote(tpqn)),
        }
    }

    /// Define the timing in terms of fps and ticks per frame
    pub const fn new_smpte(fps: SmpteFps, ticks_per_frame: u8) -> Self {
        Self::Smpte(SmpteHeader {
            fps,
            ticks_per_frame,
        })
    }

    /// Decode the 16 bit division word of a header chunk.
    pub fn from_division(division: u16) -> Result<Self, RangeError> {
        let [hi, lo] = division.to_be_bytes();
        match hi >> 7 {
            0 if division == 0 => Err(RangeError::TicksPerQuarterNote(0)),
            0 => Ok(Self::TicksPerQuarterNote(TicksPerQuarterNote(division))),
            _ => {
                // bits 14 thru 8 hold -24, -25, -29 or -30 in two's complement
                let fps = SmpteFps::from_negative(hi as i8)?;
                Ok(Self::new_smpte(fps, lo))
            }
        }
    }

    /// The 16 bit division word as written to a header chunk.
    pub const fn division(&self) -> u16 {
        match self {
            Self::TicksPerQuarterNote(t) => t.0,
            Self::Smpte(s) => {
                let hi = (-(s.fps.header_rate() as i8)) as u8;
                u16::from_be_bytes([hi, s.ticks_per_frame])
            }
        }
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(t.ticks_per_quarter_note()),
            _ => None,
        }
    }
}

/// A representation of the `tpqn` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub struct TicksPerQuarterNote(u16);

impl TicksPerQuarterNote {
    /// Returns the ticks per quarter note for the file.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        self.0
    }
}

/// A representation of the `smpte` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub struct SmpteHeader {
    pub(crate) fps: SmpteFps,
    pub(crate) ticks_per_frame: u8,
}

impl SmpteHeader {
    /// Returns the frames per second
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }

    /// Returns the ticks per frame
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame
    }
}
