#![doc = r#"
The serialized shape of the text document, version 1

```json
{
  "version": 1,
  "header": { "format": 1, "ntrks": 1, "division": { "ticks_per_quarter_note": 480 } },
  "tracks": [
    [
      { "delta_time": 0, "type": "note_on", "channel": 0, "note": 60, "velocity": 100 },
      { "delta_time": 480, "type": "pitch_bend", "channel": 0, "value": 8192 },
      { "delta_time": 0, "type": "sysex", "data": "7e7f0901", "terminated": true, "continuation": false },
      { "delta_time": 0, "type": "meta", "meta_type": 47, "name": "end_of_track", "data": "" }
    ]
  ]
}
```

`division` is either `{ "ticks_per_quarter_note": n }` or
`{ "smpte": { "fps": 24 | 25 | 29 | 30, "ticks_per_frame": n } }`.

Numbers are kept as JSON numbers and range checked afterwards, so an
out-of-range or negative value is reported against the field it was given for.
Every field a type needs is required, including the sysex flags and empty
payloads.
"#]

use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// The only document version this crate reads and writes.
pub const TEXT_VERSION: u64 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Document {
    pub version: Number,
    pub header: HeaderDoc,
    pub tracks: Vec<Vec<EventDoc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct HeaderDoc {
    pub format: Number,
    pub ntrks: Number,
    pub division: DivisionDoc,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum DivisionDoc {
    TicksPerQuarterNote(Number),
    Smpte { fps: Number, ticks_per_frame: Number },
}

/// One event. Which of the optional fields are present depends on `tag`.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct EventDoc {
    pub delta_time: Number,
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_type: Option<Number>,
    /// Informational only, ignored when reading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation: Option<bool>,
}

impl EventDoc {
    pub fn new(delta_time: u32, tag: &str) -> Self {
        Self {
            delta_time: Number::from(delta_time),
            tag: tag.into(),
            channel: None,
            note: None,
            velocity: None,
            pressure: None,
            controller: None,
            program: None,
            value: None,
            meta_type: None,
            name: None,
            data: None,
            terminated: None,
            continuation: None,
        }
    }
}
