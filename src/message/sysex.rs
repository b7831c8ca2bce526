use crate::RangeError;
use alloc::vec::Vec;

/// Marks the end of a system exclusive message, and prefixes continuation packets.
pub const SYSEX_END: u8 = 0xF7;

#[doc = r#"
A system exclusive packet

A file may deliver a message in one `F0` packet, or split it into an `F0`
packet followed by `F7`-prefixed continuation packets. `F7` packets are also
used as escapes for arbitrary bytes.

`data` excludes both the prefix byte and a trailing `F7`; whether the packet
ended in `F7` is kept in `terminated`. An unterminated packet therefore never
has data ending in `F7`.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysExEvent {
    data: Vec<u8>,
    terminated: bool,
    continuation: bool,
}

impl SysExEvent {
    /// A complete `F0 .. F7` message.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            terminated: true,
            continuation: false,
        }
    }

    /// Create a packet from all of its parts.
    ///
    /// Unterminated data may not end in `F7`, since a file could not tell it
    /// apart from a terminated packet.
    pub fn from_parts(
        data: impl Into<Vec<u8>>,
        terminated: bool,
        continuation: bool,
    ) -> Result<Self, RangeError> {
        let data = data.into();
        if !terminated && data.last() == Some(&SYSEX_END) {
            return Err(RangeError::SysExTerminator);
        }
        Ok(Self {
            data,
            terminated,
            continuation,
        })
    }

    /// Split a raw packet body (everything after the length) into data and terminator.
    pub(crate) fn from_packet(body: &[u8], continuation: bool) -> Self {
        let (data, terminated) = match body.split_last() {
            Some((&SYSEX_END, data)) => (data, true),
            _ => (body, false),
        };
        Self {
            data: data.to_vec(),
            terminated,
            continuation,
        }
    }

    /// The packet payload
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// True if the packet ended with `F7`
    pub const fn terminated(&self) -> bool {
        self.terminated
    }

    /// True if the packet was `F7`-prefixed
    pub const fn continuation(&self) -> bool {
        self.continuation
    }

    /// The status byte that prefixes this packet in a file.
    pub const fn status(&self) -> u8 {
        if self.continuation { SYSEX_END } else { 0xF0 }
    }

    /// Length of the packet body as stored in a file.
    pub fn packet_len(&self) -> usize {
        self.data.len() + usize::from(self.terminated)
    }
}
