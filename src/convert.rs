#![doc = r#"
The three conversions, composed from the decoders and encoders

Each operation is a pure function from one complete buffer to another. Data
always passes through a [`MidiFile`]; no representation is converted straight
into another.

```text
decode_to_text:              SMF bytes  -> MidiFile -> JSON text
decode_to_record:            SMF bytes  -> MidiFile -> record bytes
encode_from_record_or_text:  records or JSON text -> MidiFile -> SMF bytes
```
"#]

use crate::{
    prelude::*,
    record,
    text::{self, TextStyle},
};
use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

/// Decode a Standard MIDI File into a pretty-printed text document.
pub fn decode_to_text(bytes: &[u8]) -> ConvertResult<String> {
    let file = MidiFile::parse(bytes)?;
    text::to_text(&file, TextStyle::Pretty)
}

/// Decode a Standard MIDI File into a record stream.
pub fn decode_to_record(bytes: &[u8]) -> ConvertResult<Vec<u8>> {
    let file = MidiFile::parse(bytes)?;
    record::to_records(&file)
}

/// Encode a record stream or a text document as a Standard MIDI File.
///
/// Input starting with the record magic is read as records; anything else must
/// be a UTF-8 text document.
pub fn encode_from_record_or_text(input: &[u8]) -> ConvertResult<Vec<u8>> {
    let file = if record::is_record_stream(input) {
        record::from_records(input)?
    } else {
        text::from_text(core::str::from_utf8(input)?)?
    };
    file.to_bytes()
}

#[doc = r#"
The conversion to run, named as on a command line

| name     | operation                        |
|----------|----------------------------------|
| `json`   | [`decode_to_text`]               |
| `record` | [`decode_to_record`]             |
| `midi`   | [`encode_from_record_or_text`]   |
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Conversion {
    /// SMF to text
    #[default]
    Json,
    /// SMF to records
    Record,
    /// Text or records to SMF
    Midi,
}

impl Conversion {
    /// Every conversion, in command line order
    pub const ALL: [Self; 3] = [Self::Json, Self::Record, Self::Midi];

    /// The command line name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Record => "record",
            Self::Midi => "midi",
        }
    }

    /// Run the conversion over a complete input buffer.
    pub fn apply(&self, input: &[u8]) -> ConvertResult<Vec<u8>> {
        log::debug!("running {} conversion over {} bytes", self, input.len());
        match self {
            Self::Json => decode_to_text(input).map(String::into_bytes),
            Self::Record => decode_to_record(input),
            Self::Midi => encode_from_record_or_text(input),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A conversion name that is not `json`, `record` or `midi`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown conversion `{0}`, expected one of json, record, midi")]
pub struct UnknownConversion(pub String);

impl FromStr for Conversion {
    type Err = UnknownConversion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownConversion(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for conversion in Conversion::ALL {
            assert_eq!(conversion.name().parse::<Conversion>(), Ok(conversion));
        }
        assert_eq!(Conversion::default(), Conversion::Json);
        assert!("cairo".parse::<Conversion>().is_err());
    }

    #[test]
    fn non_utf8_text_is_rejected() {
        let err = encode_from_record_or_text(&[0xFF, 0xFE, 0x00]).unwrap_err();
        assert!(matches!(err, ConvertError::Utf8(_)));
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }
}
