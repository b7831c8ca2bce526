use crate::prelude::*;

#[doc = r#"
The file header: format, track count and timing.

The track count always equals the number of tracks in the owning
[`MidiFile`], since it is taken from the track list when the file is built.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    format: Format,
    track_count: u16,
    timing: Timing,
}

impl Header {
    pub(crate) const fn new(format: Format, track_count: u16, timing: Timing) -> Self {
        Self {
            format,
            track_count,
            timing,
        }
    }
    /// Get the format
    pub const fn format(&self) -> Format {
        self.format
    }
    /// Number of tracks in the file
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }
    /// Get the timing props
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }
}
