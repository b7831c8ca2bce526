/// A chunk whose identifier is neither `MThd` nor `MTrk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownChunk {
    tag: [u8; 4],
    length: u32,
}

impl UnknownChunk {
    pub(crate) const fn new(tag: [u8; 4], length: u32) -> Self {
        Self { tag, length }
    }

    /// The four byte identifier
    pub const fn tag(&self) -> [u8; 4] {
        self.tag
    }

    /// The declared length of the chunk body
    pub const fn length(&self) -> u32 {
        self.length
    }
}
