#![doc = r#"
Contains types for MIDI file chunks

# Overview

MIDI files are organized into chunks, each identified by a 4-character ASCII type identifier
followed by a 32-bit length field and then the chunk data. The Standard MIDI File (SMF)
specification defines two chunk types, though files may contain additional proprietary chunks.

## [`RawHeaderChunk`]

The header chunk (identified by "MThd") must be the first chunk in a MIDI file. It holds the
[`Format`], the number of track chunks that follow and the [`Timing`] used to interpret delta
times. The header chunk always has a fixed length of 6 bytes.

## Track Chunks

Track chunks (identified by "MTrk") contain the events of one [`Track`]. Their events must
consume exactly the number of bytes the chunk declares, and the last one must be an
end-of-track meta event.

## [`UnknownChunk`]

Any chunk with a type identifier other than "MThd" or "MTrk" is skipped over by its declared
length. Only its identifier and length are kept, for logging.

# Example Structure

```text
[Header Chunk: "MThd"]
[Track Chunk 1: "MTrk"]
[Track Chunk 2: "MTrk"]
...
[Track Chunk N: "MTrk"]
[Optional Unknown Chunks]
```
"#]

mod unknown_chunk;
pub use unknown_chunk::*;

mod header;
pub use header::*;

mod track;
pub use track::*;

use crate::{prelude::*, reader::Reader};

/// Identifier of the header chunk
pub const HEADER_TAG: &[u8; 4] = b"MThd";
/// Identifier of a track chunk
pub const TRACK_TAG: &[u8; 4] = b"MTrk";

/// A fully read chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkEvent {
    /// An `MThd` chunk
    Header(RawHeaderChunk),
    /// An `MTrk` chunk with its events decoded
    Track(Track),
    /// Any other chunk
    Unknown(UnknownChunk),
}

/// Read the next chunk, leaving the reader positioned at the chunk after it.
pub fn read_chunk(reader: &mut Reader<'_>) -> ConvertResult<ChunkEvent> {
    let tag: [u8; 4] = reader.read_exact_size()?;
    let length = reader.read_u32()?;
    match &tag {
        HEADER_TAG => Ok(ChunkEvent::Header(RawHeaderChunk::read(reader, length)?)),
        TRACK_TAG => Ok(ChunkEvent::Track(read_track(reader, length)?)),
        _ => {
            reader.read_bytes(length as usize)?;
            Ok(ChunkEvent::Unknown(UnknownChunk::new(tag, length)))
        }
    }
}
