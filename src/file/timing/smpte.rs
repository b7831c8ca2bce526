#![doc = r#"
SMPTE frame rates for files timed in absolute time

When the top bit of a header's division word is set, delta times count ticks
within frames of SMPTE time code rather than fractions of a quarter note. The
frame rate is stored, negated, in the remaining seven bits of the high byte.
"#]

use crate::RangeError;

/// The possible FPS (Frames Per Second) for MIDI files
///
/// The MIDI specification defines only four possible frame types:
/// - 24 fps: Standard film rate
/// - 25 fps: PAL/SECAM television standard
/// - 29.97 fps: NTSC color television (drop-frame timecode)
/// - 30 fps: NTSC black & white, some digital video formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmpteFps {
    /// 24 frames per second
    TwentyFour,
    /// 25 frames per second
    TwentyFive,
    /// 29.97 frames per second (30000/1001), drop frame
    TwentyNine,
    /// 30 frames per second
    Thirty,
}

impl SmpteFps {
    /// Decode the negative frame rate stored in the top byte of a header's division.
    pub fn from_negative(byte: i8) -> Result<Self, RangeError> {
        Self::from_header_rate(-i64::from(byte))
    }

    /// Look up a frame rate by the value the header stores (negated): 24, 25, 29 or 30.
    pub fn from_header_rate(rate: i64) -> Result<Self, RangeError> {
        match rate {
            24 => Ok(Self::TwentyFour),
            25 => Ok(Self::TwentyFive),
            //drop frame (29.97)
            29 => Ok(Self::TwentyNine),
            30 => Ok(Self::Thirty),
            other => Err(RangeError::SmpteFps(other)),
        }
    }

    /// The rate as written (negated) to a header: 29 stands for 29.97 drop frame.
    pub const fn header_rate(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine => 29,
            Self::Thirty => 30,
        }
    }
}
