#![no_std]
#![warn(missing_docs)]
#![doc = r#"
Lossless conversion between Standard MIDI Files and two alternate forms

A Standard MIDI File (SMF) is decoded into a [`MidiFile`](file::MidiFile), an
owned intermediate representation, which can then be written out as

- a human-readable JSON document ([`text`]),
- a fixed-layout record stream for consumers without an SMF parser ([`record`]),
- or back into an SMF.

Every conversion passes through a [`MidiFile`](file::MidiFile). The three entry
points in [`convert`] compose the codecs for callers that only move buffers
around.

```
use midiconv::prelude::*;

let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0x01, 0xE0,
    b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00,
];
let text = midiconv::convert::decode_to_text(&bytes).unwrap();
let back = midiconv::convert::encode_from_record_or_text(text.as_bytes()).unwrap();
assert_eq!(MidiFile::parse(&back).unwrap(), MidiFile::parse(&bytes).unwrap());
```

Enable the `std` feature (on by default) to use the crate with the standard
library; without it the crate only needs `alloc`.
"#]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod convert;

mod error;
pub use error::*;

pub mod file;

pub mod message;

pub mod reader;

pub mod record;

pub mod text;

pub mod writer;

#[doc = r#"
Common re-exports when working with `midiconv`
"#]
pub mod prelude {
    pub use crate::{
        ChunkError, ConvertError, ConvertResult, ErrorKind, RangeError,
        file::{Format, Header, MidiFile, SmpteFps, SmpteHeader, Timing, TimedEvent, Track},
        message::*,
        reader::VLQ_MAX,
    };
}
