#![doc = r#"
Sequential, bounds-checked reading over a byte buffer.

Every component that consumes raw bytes (the SMF decoder and the record decoder)
reads through a [`Reader`], which makes it the one place where the end of the
input is detected. All multi-byte integers are big-endian.
"#]

mod error;
pub use error::*;

/// The largest value a MIDI variable length quantity can hold (28 bits).
pub const VLQ_MAX: u32 = 0x0FFF_FFFF;

/// Maximum number of bytes a variable length quantity may occupy.
const VLQ_MAX_LEN: usize = 4;

/// A cursor over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct Reader<'slc> {
    buf: &'slc [u8],
    position: usize,
}

impl<'slc> Reader<'slc> {
    /// Create a reader positioned at the start of `bytes`.
    pub const fn from_byte_slice(bytes: &'slc [u8]) -> Self {
        Self {
            buf: bytes,
            position: 0,
        }
    }

    /// Current offset into the underlying buffer.
    pub const fn buffer_position(&self) -> usize {
        self.position
    }

    /// Number of bytes left to read.
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    /// True once every byte has been consumed.
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the next byte without consuming it.
    pub fn peek_u8(&self) -> ReadResult<u8> {
        self.buf
            .get(self.position)
            .copied()
            .ok_or(ReaderError::oob(self.position, 1))
    }

    /// Consume `n` bytes, returning them as a slice of the original buffer.
    pub fn read_bytes(&mut self, n: usize) -> ReadResult<&'slc [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(ReaderError::oob(self.position, n - remaining));
        }
        let start = self.position;
        self.position += n;
        Ok(&self.buf[start..self.position])
    }

    /// Consume exactly `N` bytes into an array.
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let mut out = [0; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        let byte = self.peek_u8()?;
        self.position += 1;
        Ok(byte)
    }

    /// Read a big-endian u16.
    pub fn read_u16(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Read a big-endian u32.
    pub fn read_u32(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Read a MIDI variable length quantity.
    ///
    /// Seven bits are accumulated per byte while the high bit signals continuation.
    /// A quantity still continuing after four bytes is rejected, as is a buffer
    /// that ends mid-sequence.
    pub fn read_vlq(&mut self) -> ReadResult<u32> {
        let start = self.position;
        let mut value: u32 = 0;
        for _ in 0..VLQ_MAX_LEN {
            let byte = self.read_u8()?;
            value = (value << 7) | u32::from(byte & 0x7F);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(ReaderError::new(start, ReaderErrorKind::VlqOverflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_integers() {
        let bytes = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE];
        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(reader.read_u8().unwrap(), 0x12);
        assert_eq!(reader.read_u16().unwrap(), 0x3456);
        assert_eq!(reader.read_u32().unwrap(), 0x789A_BCDE);
        assert!(reader.is_empty());
    }

    #[test]
    fn out_of_bounds_reports_position_and_shortfall() {
        let mut reader = Reader::from_byte_slice(&[0x00, 0x01]);
        reader.read_u8().unwrap();
        let err = reader.read_u32().unwrap_err();
        assert_eq!(err.position(), 1);
        assert_eq!(err.error_kind(), &ReaderErrorKind::OutOfBounds { needed: 3 });
        // a failed read consumes nothing
        assert_eq!(reader.buffer_position(), 1);
    }

    fn vlq(bytes: &[u8]) -> u32 {
        let mut reader = Reader::from_byte_slice(bytes);
        let value = reader.read_vlq().unwrap();
        assert!(reader.is_empty(), "{bytes:02X?} left bytes unread");
        value
    }

    #[test]
    fn vlq_values() {
        assert_eq!(vlq(&[0x00]), 0);
        assert_eq!(vlq(&[0x40]), 0x40);
        assert_eq!(vlq(&[0x7F]), 0x7F);
        assert_eq!(vlq(&[0x81, 0x00]), 0x80);
        assert_eq!(vlq(&[0xC0, 0x00]), 0x2000);
        assert_eq!(vlq(&[0xFF, 0x7F]), 0x3FFF);
        assert_eq!(vlq(&[0x81, 0x80, 0x00]), 0x4000);
        assert_eq!(vlq(&[0xFF, 0xFF, 0xFF, 0x7F]), VLQ_MAX);
    }

    #[test]
    fn vlq_overflow() {
        let mut reader = Reader::from_byte_slice(&[0x81, 0x80, 0x80, 0x80, 0x00]);
        let err = reader.read_vlq().unwrap_err();
        assert_eq!(err.error_kind(), &ReaderErrorKind::VlqOverflow);
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn vlq_ending_mid_sequence() {
        let mut reader = Reader::from_byte_slice(&[0x81, 0x80]);
        assert!(reader.read_vlq().unwrap_err().is_out_of_bounds());
    }
}
