#![doc = r#"
Rusty representation of a [`MidiFile`]

A [`MidiFile`] is the intermediate representation every conversion passes
through: a [`Header`] and an ordered list of [`Track`]s. It owns all of its
data and is never mutated once built.
"#]

/// Contains the [`MidiFileBuilder`](builder::MidiFileBuilder) and the
/// chunk-level decoding of Standard MIDI Files.
pub mod builder;

mod encode;

mod format;
pub use format::*;

mod header;
pub use header::*;

mod track;
pub use track::*;

mod timing;
pub use timing::*;

use crate::{
    file::builder::{MidiFileBuilder, chunk::read_chunk},
    prelude::*,
    reader::Reader,
};
use alloc::vec::Vec;

#[doc = r#"
A Standard MIDI File, fully decoded
"#]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MidiFile {
    header: Header,
    tracks: Vec<Track>,
}

impl MidiFile {
    /// Build a file from its parts.
    ///
    /// Fails if a format 0 file does not hold exactly one track, if there are
    /// more tracks than a header can count, or if an end-of-track event is
    /// followed by further events.
    pub fn new(format: Format, timing: Timing, tracks: Vec<Track>) -> ConvertResult<Self> {
        let track_count = u16::try_from(tracks.len())
            .map_err(|_| RangeError::TrackCount(tracks.len() as u64))?;
        if format == Format::SingleMultiChannel && tracks.len() != 1 {
            return Err(ConvertError::chunk(
                0,
                ChunkError::MultipleTracksForSingleMultiChannel(tracks.len()),
            ));
        }
        if let Some(index) = tracks.iter().position(|t| t.misplaced_end_of_track().is_some()) {
            return Err(ConvertError::chunk(
                0,
                ChunkError::EventsAfterEndOfTrack { track: index },
            ));
        }
        Ok(Self {
            header: Header::new(format, track_count, timing),
            tracks,
        })
    }

    /// Parse a Standard MIDI File.
    ///
    /// The returned value holds no reference to `bytes`.
    pub fn parse(bytes: &[u8]) -> ConvertResult<Self> {
        let mut reader = Reader::from_byte_slice(bytes);
        let mut builder = MidiFileBuilder::default();

        let tag: [u8; 4] = reader.clone().read_exact_size()?;
        if &tag != builder::chunk::HEADER_TAG {
            return Err(ConvertError::chunk(0, ChunkError::InvalidHeaderTag(tag)));
        }

        while !reader.is_empty() {
            let position = reader.buffer_position();
            let chunk = read_chunk(&mut reader)?;
            builder
                .handle_chunk(chunk)
                .map_err(|k| ConvertError::chunk(position, k))?;
        }

        builder.build()
    }

    /// Encode as a Standard MIDI File.
    ///
    /// Every status byte is written in full. A track that does not end with an
    /// end-of-track event gets one appended.
    pub fn to_bytes(&self) -> ConvertResult<Vec<u8>> {
        encode::write_file(self).map_err(ConvertError::from)
    }

    /// Returns header info
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the format type for the file.
    pub const fn format(&self) -> Format {
        self.header.format()
    }

    /// Returns the timing of the file.
    pub const fn timing(&self) -> &Timing {
        self.header.timing()
    }

    /// Returns the track list
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Executes the provided function for all the tracks in the file.
    pub fn for_each_track<F>(&self, func: F)
    where
        F: FnMut(&Track),
    {
        self.tracks.iter().for_each(func)
    }
}
