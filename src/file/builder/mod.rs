pub mod chunk;

use super::MidiFile;
use crate::{
    file::builder::chunk::{ChunkEvent, RawHeaderChunk},
    prelude::*,
};
use alloc::vec::Vec;

/// A builder used to create a new [`MidiFile`] from decoded chunks.
#[derive(Default)]
pub struct MidiFileBuilder {
    header: Option<RawHeaderChunk>,
    tracks: Vec<Track>,
    unknown_chunks: usize,
}

impl MidiFileBuilder {
    /// Handles a chunk of a midi file.
    pub fn handle_chunk(&mut self, chunk: ChunkEvent) -> Result<(), ChunkError> {
        use ChunkEvent::*;
        match chunk {
            Header(h) => {
                if self.header.is_some() {
                    return Err(ChunkError::DuplicateHeader);
                }
                self.header = Some(h);
                Ok(())
            }
            Track(t) => {
                if self.header.is_none() {
                    return Err(ChunkError::MissingHeader);
                }
                self.tracks.push(t);
                Ok(())
            }
            Unknown(data) => {
                log::warn!(
                    "skipping unknown chunk {:?} ({} bytes)",
                    data.tag(),
                    data.length()
                );
                self.unknown_chunks += 1;
                Ok(())
            }
        }
    }

    /// Attempts to finish the midifile from the provided chunks.
    pub fn build(self) -> ConvertResult<MidiFile> {
        let Some(header) = self.header else {
            return Err(ConvertError::chunk(0, ChunkError::MissingHeader));
        };
        if usize::from(header.track_count()) != self.tracks.len() {
            return Err(ConvertError::chunk(
                0,
                ChunkError::TrackCount {
                    declared: u64::from(header.track_count()),
                    found: self.tracks.len() as u64,
                },
            ));
        }
        log::debug!(
            "decoded format {} file with {} track(s), {} unknown chunk(s) skipped",
            header.format().number(),
            self.tracks.len(),
            self.unknown_chunks
        );
        MidiFile::new(header.format(), header.timing(), self.tracks)
    }
}
