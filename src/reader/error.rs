use thiserror::Error;

#[doc = r#"
An error produced by the byte [`Reader`](super::Reader) when the input ends
before a field, variable length quantity or chunk is complete.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReaderErrorKind {
    /// Reading out of bounds.
    #[error("Read out of bounds! {needed} more byte(s) were required")]
    OutOfBounds {
        /// Number of bytes missing from the buffer
        needed: usize,
    },
    /// A variable length quantity did not terminate within four bytes.
    #[error("Variable length quantity exceeds 28 bits")]
    VlqOverflow,
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }
    /// True if out of bounds or unexpected end of file
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::OutOfBounds { .. })
    }
    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }
    /// Returns the position where the read error occurred.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Create a new out of bounds error
    pub const fn oob(position: usize, needed: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::OutOfBounds { needed },
        }
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;
