use crate::RangeError;

/// A seven bit data byte (0-127).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DataByte(pub(crate) u8);

impl DataByte {
    /// Create a data byte, rejecting values with the top bit set.
    pub const fn new(byte: u8) -> Result<Self, RangeError> {
        if byte > 0x7F {
            return Err(RangeError::DataByte(byte as u64));
        }
        Ok(Self(byte))
    }

    /// Create a data byte from a wider integer.
    pub fn from_u64(value: u64) -> Result<Self, RangeError> {
        u8::try_from(value)
            .ok()
            .and_then(|b| Self::new(b).ok())
            .ok_or(RangeError::DataByte(value))
    }

    /// Returns the underlying byte
    pub const fn byte(&self) -> u8 {
        self.0
    }
}

/// A MIDI channel, numbered from zero (0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Channel(u8);

impl Channel {
    /// Create a channel from its zero-based number.
    pub const fn new(channel: u8) -> Result<Self, RangeError> {
        if channel > 0x0F {
            return Err(RangeError::Channel(channel as u64));
        }
        Ok(Self(channel))
    }

    /// Create a channel from a wider integer.
    pub fn from_u64(value: u64) -> Result<Self, RangeError> {
        u8::try_from(value)
            .ok()
            .and_then(|c| Self::new(c).ok())
            .ok_or(RangeError::Channel(value))
    }

    /// Extract the channel from the low nibble of a status byte.
    pub(crate) const fn from_status(status: u8) -> Self {
        Self(status & 0x0F)
    }

    /// Zero-based channel number.
    pub const fn number(&self) -> u8 {
        self.0
    }
}
