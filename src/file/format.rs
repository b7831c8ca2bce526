use crate::RangeError;
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
How the tracks of a file relate to one another
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Format {
    /// Format 0: a single track holding every channel
    SingleMultiChannel = 0,
    /// Format 1: tracks played simultaneously
    Simultaneous = 1,
    /// Format 2: independent single-track patterns
    SequentiallyIndependent = 2,
}

impl Format {
    /// Look up a format from its numeric value.
    pub fn from_u64(value: u64) -> Result<Self, RangeError> {
        u8::try_from(value)
            .ok()
            .and_then(|v| Self::try_from(v).ok())
            .ok_or(RangeError::Format(value))
    }

    /// The numeric value written to the header.
    pub fn number(&self) -> u8 {
        (*self).into()
    }
}
