#![doc = r#"
Growable big-endian output buffer, the write half of the byte cursor.
"#]

use crate::{RangeError, reader::VLQ_MAX};
use alloc::vec::Vec;

/// Appends primitive values to an owned byte buffer.
#[derive(Debug, Default, Clone)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Write a big-endian u16.
    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Write a big-endian u32.
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Write raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Write a MIDI variable length quantity.
    ///
    /// Values above 28 bits cannot be represented.
    pub fn write_vlq(&mut self, value: u32) -> Result<(), RangeError> {
        if value > VLQ_MAX {
            return Err(RangeError::Vlq(u64::from(value)));
        }
        let mut groups = [0u8; 4];
        let mut len = 0;
        let mut rest = value;
        loop {
            groups[len] = (rest & 0x7F) as u8;
            len += 1;
            rest >>= 7;
            if rest == 0 {
                break;
            }
        }
        for i in (0..len).rev() {
            let continuation = if i == 0 { 0 } else { 0x80 };
            self.buf.push(groups[i] | continuation);
        }
        Ok(())
    }

    /// Write a length as a variable length quantity.
    pub fn write_vlq_len(&mut self, len: usize) -> Result<(), RangeError> {
        let len = u32::try_from(len).map_err(|_| RangeError::Vlq(len as u64))?;
        self.write_vlq(len)
    }

    /// Consume the writer, returning the bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
