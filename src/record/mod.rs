#![doc = r#"
Fixed-layout record stream for consumers without an SMF or JSON parser

# Layout (version 1, all integers big-endian)

```text
preamble   magic: b"MIRC"  version: u8 (= 1)
summary    format: u8  ntrks: u32  division: u16
event*     delta_time: u32  track_index: u32  kind_tag: u8  channel: u8
           data1: u8  data2: u8  extra_len: u32  extra_bytes: [u8; extra_len]
```

Event records follow the summary until the end of the buffer, grouped by
track: `track_index` never decreases. Tracks are rebuilt from the index alone,
so a track with no records decodes as an empty track.

| kind_tag      | event                   | channel | data1      | data2      | extra   |
|---------------|-------------------------|---------|------------|------------|---------|
| `0x80..=0xE0` | channel voice, by kind  | 0-15    | first byte | second / 0 | empty   |
| `0xFF`        | meta                    | 0       | meta type  | 0          | payload |
| `0xF0`        | sysex                   | 0       | terminated | 0          | payload |
| `0xF7`        | sysex continuation      | 0       | terminated | 0          | payload |

Pitch bend carries its low seven bits in `data1` and high seven bits in `data2`.
`division` is the raw division word of the SMF header.
"#]

mod event;
pub use event::*;

use crate::{prelude::*, reader::Reader, writer::Writer};
use alloc::{format, vec::Vec};

/// Identifies a record stream
pub const RECORD_MAGIC: &[u8; 4] = b"MIRC";
/// The only record layout version this crate reads and writes
pub const RECORD_VERSION: u8 = 1;

/// True if `bytes` starts like a record stream.
pub fn is_record_stream(bytes: &[u8]) -> bool {
    bytes.starts_with(RECORD_MAGIC)
}

/// Flatten a file into a record stream.
pub fn to_records(file: &MidiFile) -> ConvertResult<Vec<u8>> {
    let events: usize = file.tracks().iter().map(Track::len).sum();
    let mut out = Writer::with_capacity(12 + events * EVENT_RECORD_LEN);

    let header = file.header();
    out.write_bytes(RECORD_MAGIC);
    out.write_u8(RECORD_VERSION);
    out.write_u8(header.format().number());
    out.write_u32(u32::from(header.track_count()));
    out.write_u16(header.timing().division());

    for (track_index, track) in (0u32..).zip(file.tracks()) {
        for event in track.events() {
            EventRecord::from_event(track_index, event).write(&mut out)?;
        }
    }
    log::debug!("wrote {} event record(s), {} bytes", events, out.len());
    Ok(out.into_inner())
}

/// Rebuild a file from a record stream.
pub fn from_records(bytes: &[u8]) -> ConvertResult<MidiFile> {
    let mut reader = Reader::from_byte_slice(bytes);

    let magic: [u8; 4] = reader.read_exact_size()?;
    if &magic != RECORD_MAGIC {
        return Err(ConvertError::chunk(0, ChunkError::InvalidRecordTag(magic)));
    }
    let version = reader.read_u8()?;
    if version != RECORD_VERSION {
        return Err(RangeError::Version(u64::from(version)).into());
    }

    let format = Format::from_u64(u64::from(reader.read_u8()?))?;
    let track_count = reader.read_u32()?;
    if track_count > u32::from(u16::MAX) {
        return Err(RangeError::TrackCount(u64::from(track_count)).into());
    }
    let timing = Timing::from_division(reader.read_u16()?)?;

    let mut tracks: Vec<Vec<TimedEvent>> = (0..track_count).map(|_| Vec::new()).collect();
    let mut previous: Option<u32> = None;
    while !reader.is_empty() {
        let record = EventRecord::read(&mut reader)?;
        let index = record.track_index();
        if let Some(previous) = previous.filter(|p| index < *p) {
            return Err(ConvertError::OutOfOrderTrack {
                previous,
                found: index,
            });
        }
        previous = Some(index);

        let Some(track) = tracks.get_mut(index as usize) else {
            return Err(RangeError::TrackIndex { index, track_count }.into());
        };
        track.push(record.into_event()?);
    }

    log::debug!("read record stream with {} track(s)", tracks.len());
    MidiFile::new(format, timing, tracks.into_iter().map(Track::new).collect())
}

fn unknown_tag(tag: u8) -> ConvertError {
    ConvertError::UnknownEventTag(format!("{tag:#04x}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn preamble_and_summary() {
        let timing = Timing::new_ticks_per_quarter_note(480).unwrap();
        let file = MidiFile::new(Format::Simultaneous, timing, vec![Track::default(); 2]).unwrap();
        let bytes = to_records(&file).unwrap();
        assert_eq!(
            bytes,
            [b'M', b'I', b'R', b'C', 1, 1, 0, 0, 0, 2, 0x01, 0xE0]
        );
        assert!(is_record_stream(&bytes));
        assert_eq!(from_records(&bytes).unwrap(), file);
    }

    #[test]
    fn wrong_magic() {
        let err = from_records(b"MThd\x01").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedChunk);
    }

    #[test]
    fn unsupported_version() {
        let err = from_records(b"MIRC\x02\x00\x00\x00\x00\x01\x00\x60").unwrap_err();
        assert!(matches!(err, ConvertError::Range(RangeError::Version(2))));
    }
}
