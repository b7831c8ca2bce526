#![doc = r#"
Error types shared by every codec in the crate.

Every failure is reported at the point of violation as a [`ConvertError`]. The
variants map one-to-one onto the kinds of failure a caller may want to surface:
truncated input, malformed chunks, unknown event tags, out-of-range values and
out-of-order record tracks.
"#]

use crate::reader::ReaderError;
use alloc::string::String;
use thiserror::Error;

/// The result type returned by every conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[doc = r#"
A set of errors that can occur while converting between representations
"#]
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The buffer ended before an expected field, quantity or chunk completed.
    #[error("Truncated input: {0}")]
    TruncatedInput(#[from] ReaderError),
    /// A chunk carried the wrong tag, or its contents disagreed with its declared length.
    #[error("Malformed chunk at position {position}: {kind}")]
    MalformedChunk {
        /// Offset of the chunk (or event) where the problem was detected
        position: usize,
        /// What was wrong with it
        kind: ChunkError,
    },
    /// A text or record discriminator names no known event.
    #[error("Unknown event tag `{0}`")]
    UnknownEventTag(String),
    /// A field's value lies outside its domain.
    #[error("Out of range: {0}")]
    Range(#[from] RangeError),
    /// A record's track index was lower than the record before it.
    #[error("Track index decreased from {previous} to {found}")]
    OutOfOrderTrack {
        /// Track index of the preceding record
        previous: u32,
        /// Track index of the offending record
        found: u32,
    },
    /// The text input is not a JSON document of the expected shape.
    #[error("Invalid text document: {0}")]
    Syntax(#[from] serde_json::Error),
    /// The text input is not valid UTF-8.
    #[error("Text input is not valid UTF-8: {0}")]
    Utf8(#[from] core::str::Utf8Error),
}

/// A fieldless discriminant of [`ConvertError`], for callers that only need to
/// report which class of failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`ConvertError::TruncatedInput`]
    TruncatedInput,
    /// See [`ConvertError::MalformedChunk`]
    MalformedChunk,
    /// See [`ConvertError::UnknownEventTag`]
    UnknownEventTag,
    /// See [`ConvertError::Range`]
    Range,
    /// See [`ConvertError::OutOfOrderTrack`]
    OutOfOrderTrack,
    /// See [`ConvertError::Syntax`] and [`ConvertError::Utf8`]
    Syntax,
}

impl ConvertError {
    pub(crate) const fn chunk(position: usize, kind: ChunkError) -> Self {
        Self::MalformedChunk { position, kind }
    }

    /// Returns the class of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TruncatedInput(_) => ErrorKind::TruncatedInput,
            Self::MalformedChunk { .. } => ErrorKind::MalformedChunk,
            Self::UnknownEventTag(_) => ErrorKind::UnknownEventTag,
            Self::Range(_) => ErrorKind::Range,
            Self::OutOfOrderTrack { .. } => ErrorKind::OutOfOrderTrack,
            Self::Syntax(_) | Self::Utf8(_) => ErrorKind::Syntax,
        }
    }
}

#[doc = r#"
Ways a Standard MIDI File's chunk structure can be malformed
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// The file does not start with `MThd`
    #[error("Expected header tag `MThd`, found {0:02X?}")]
    InvalidHeaderTag([u8; 4]),
    /// A record stream does not start with `MIRC`
    #[error("Expected record stream tag `MIRC`, found {0:02X?}")]
    InvalidRecordTag([u8; 4]),
    /// The header chunk declared a length other than 6
    #[error("Header chunk declared length {0}, expected 6")]
    HeaderLength(u32),
    /// A second `MThd` chunk was found
    #[error("Found a second header chunk")]
    DuplicateHeader,
    /// No header chunk was read
    #[error("No header chunk")]
    MissingHeader,
    /// A track's events did not consume exactly the declared length
    #[error("Track chunk declared {declared} byte(s) but its events consumed {consumed}")]
    TrackLength {
        /// Length from the chunk prefix
        declared: u32,
        /// Bytes actually consumed by whole events
        consumed: usize,
    },
    /// The last event of a track is not an end-of-track meta event
    #[error("Track does not end with an end-of-track event")]
    MissingEndOfTrack,
    /// A data byte appeared where a status byte was needed and no running status is in effect
    #[error("Data byte {0:#04X} without a running status")]
    MissingRunningStatus(u8),
    /// A system common or real-time status that may not appear in a file
    #[error("Status byte {0:#04X} is not allowed in a track")]
    UnsupportedStatus(u8),
    /// The header's track count disagrees with the number of track chunks
    #[error("Header declared {declared} track(s) but {found} were present")]
    TrackCount {
        /// Count from the header
        declared: u64,
        /// Count actually present
        found: u64,
    },
    /// An end-of-track event is followed by more events
    #[error("Track {track} has events after its end-of-track event")]
    EventsAfterEndOfTrack {
        /// Index of the offending track
        track: usize,
    },
    /// A format 0 file must hold exactly one track
    #[error("Format 0 requires exactly one track, found {0}")]
    MultipleTracksForSingleMultiChannel(usize),
}

#[doc = r#"
A value that lies outside the domain of the field it was given for
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Channel numbers are 0-15
    #[error("Channel {0} is not in 0..=15")]
    Channel(u64),
    /// Data bytes are 0-127
    #[error("Data byte {0} is not in 0..=127")]
    DataByte(u64),
    /// Pitch bend is a 14 bit value
    #[error("Pitch bend {0} is not in 0..=16383")]
    PitchBend(u64),
    /// Meta types are a single byte
    #[error("Meta type {0} is not in 0..=255")]
    MetaType(u64),
    /// Values encoded as variable length quantities are limited to 28 bits
    #[error("Value {0} does not fit a variable length quantity")]
    Vlq(u64),
    /// A chunk's body must fit its 32 bit length prefix
    #[error("Chunk length {0} does not fit 32 bits")]
    ChunkLength(u64),
    /// File formats are 0, 1 or 2
    #[error("Format {0} is not 0, 1 or 2")]
    Format(u64),
    /// Track counts are a 16 bit value in the file header
    #[error("Track count {0} does not fit the file header")]
    TrackCount(u64),
    /// A record referred to a track past the declared track count
    #[error("Track index {index} is past the declared {track_count} track(s)")]
    TrackIndex {
        /// Index from the record
        index: u32,
        /// Track count from the summary record
        track_count: u32,
    },
    /// Ticks per quarter note leave the top bit clear
    #[error("Ticks per quarter note {0} is not in 1..=32767")]
    TicksPerQuarterNote(u64),
    /// SMPTE timing supports 24, 25, 29 (drop frame) and 30 fps
    #[error("SMPTE frame rate {0} is not one of 24, 25, 29 or 30")]
    SmpteFps(i64),
    /// SMPTE ticks per frame are a single byte
    #[error("Ticks per frame {0} is not in 0..=255")]
    TicksPerFrame(u64),
    /// A boolean flag carried a value other than 0 or 1
    #[error("Flag value {0} is not 0 or 1")]
    Flag(u8),
    /// A sysex packet whose data ends in `F7` must be terminated
    #[error("Unterminated sysex data cannot end in 0xF7")]
    SysExTerminator,
    /// A text document gave a negative number for an unsigned field
    #[error("Field `{field}` cannot be negative, found {value}")]
    Negative {
        /// Name of the field
        field: &'static str,
        /// Value from the document
        value: i64,
    },
    /// A record carried a non-zero byte in a field its event does not use
    #[error("Record field `{field}` must be 0 for this event, found {value}")]
    UnusedByte {
        /// Name of the record field
        field: &'static str,
        /// Value from the record
        value: u8,
    },
    /// A channel event record carried extra bytes
    #[error("Channel event records carry no extra bytes, found {0}")]
    ExtraBytes(u64),
    /// Document or record schema version this crate does not understand
    #[error("Unsupported schema version {0}")]
    Version(u64),
}
