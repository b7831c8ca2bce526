use crate::{prelude::*, reader::Reader};

/// Length of every header chunk body
pub const HEADER_LENGTH: u32 = 6;

#[doc = r#"
The contents of an `MThd` chunk

```text
format:   u16
ntrks:    u16
division: u16
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeaderChunk {
    format: Format,
    track_count: u16,
    timing: Timing,
}

impl RawHeaderChunk {
    /// Read the body of a header chunk whose prefix declared `length`.
    pub(crate) fn read(reader: &mut Reader<'_>, length: u32) -> ConvertResult<Self> {
        let position = reader.buffer_position();
        if length != HEADER_LENGTH {
            return Err(ConvertError::chunk(position, ChunkError::HeaderLength(length)));
        }
        let format = Format::from_u64(u64::from(reader.read_u16()?))?;
        let track_count = reader.read_u16()?;
        let timing = Timing::from_division(reader.read_u16()?)?;
        Ok(Self {
            format,
            track_count,
            timing,
        })
    }

    /// The declared format
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The declared number of tracks
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// The declared timing
    pub const fn timing(&self) -> Timing {
        self.timing
    }
}
