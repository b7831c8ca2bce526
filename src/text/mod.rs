#![doc = r#"
Bidirectional mapping between a [`MidiFile`] and a JSON document

The document mirrors the intermediate representation: a header object, then
the tracks as an ordered list of event lists. Every event has a `delta_time`,
a `type` discriminator and the fields that type needs. Meta and sysex payloads
are written as hex strings, so arbitrary bytes (including zeros) survive.

See [`document`] for the schema.
"#]

pub mod document;

use crate::prelude::*;
use alloc::{borrow::ToOwned, string::String, vec::Vec};
use document::*;
use serde::de::Error as _;
use serde_json::Number;

const NOTE_OFF: &str = "note_off";
const NOTE_ON: &str = "note_on";
const POLY_PRESSURE: &str = "poly_pressure";
const CONTROL_CHANGE: &str = "control_change";
const PROGRAM_CHANGE: &str = "program_change";
const CHANNEL_PRESSURE: &str = "channel_pressure";
const PITCH_BEND: &str = "pitch_bend";
const META: &str = "meta";
const SYSEX: &str = "sysex";

/// How the JSON text is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// Indented, one field per line
    #[default]
    Pretty,
    /// A single line
    Compact,
}

/// Serialize a file as a text document.
pub fn to_text(file: &MidiFile, style: TextStyle) -> ConvertResult<String> {
    let header = file.header();
    let document = Document {
        version: Number::from(TEXT_VERSION),
        header: HeaderDoc {
            format: Number::from(header.format().number()),
            ntrks: Number::from(header.track_count()),
            division: division_doc(header.timing()),
        },
        tracks: file
            .tracks()
            .iter()
            .map(|track| track.events().iter().map(event_doc).collect())
            .collect(),
    };
    let text = match style {
        TextStyle::Pretty => serde_json::to_string_pretty(&document)?,
        TextStyle::Compact => serde_json::to_string(&document)?,
    };
    log::debug!("wrote text document of {} bytes", text.len());
    Ok(text)
}

/// Parse a text document back into a file.
pub fn from_text(text: &str) -> ConvertResult<MidiFile> {
    let document: Document = serde_json::from_str(text)?;
    let version = unsigned(&document.version, "version")?;
    if version != TEXT_VERSION {
        return Err(RangeError::Version(version).into());
    }
    let HeaderDoc {
        format,
        ntrks,
        division,
    } = document.header;
    let format = Format::from_u64(unsigned(&format, "format")?)?;
    let ntrks = unsigned(&ntrks, "ntrks")?;
    let timing = timing(division)?;
    if ntrks != document.tracks.len() as u64 {
        return Err(ConvertError::chunk(
            0,
            ChunkError::TrackCount {
                declared: ntrks,
                found: document.tracks.len() as u64,
            },
        ));
    }

    let tracks = document
        .tracks
        .into_iter()
        .map(|events| {
            events
                .into_iter()
                .map(timed_event)
                .collect::<ConvertResult<Vec<_>>>()
                .map(Track::new)
        })
        .collect::<ConvertResult<Vec<_>>>()?;
    log::debug!("read text document with {} track(s)", tracks.len());
    MidiFile::new(format, timing, tracks)
}

fn division_doc(timing: &Timing) -> DivisionDoc {
    match timing {
        Timing::TicksPerQuarterNote(t) => {
            DivisionDoc::TicksPerQuarterNote(Number::from(t.ticks_per_quarter_note()))
        }
        Timing::Smpte(s) => DivisionDoc::Smpte {
            fps: Number::from(s.fps().header_rate()),
            ticks_per_frame: Number::from(s.ticks_per_frame()),
        },
    }
}

fn timing(division: DivisionDoc) -> ConvertResult<Timing> {
    Ok(match division {
        DivisionDoc::TicksPerQuarterNote(tpqn) => {
            Timing::new_ticks_per_quarter_note(unsigned(&tpqn, "ticks_per_quarter_note")?)?
        }
        DivisionDoc::Smpte {
            fps,
            ticks_per_frame,
        } => {
            let fps = SmpteFps::from_header_rate(signed(&fps, "fps")?)?;
            let ticks_per_frame = unsigned(&ticks_per_frame, "ticks_per_frame")?;
            let ticks_per_frame = u8::try_from(ticks_per_frame)
                .map_err(|_| RangeError::TicksPerFrame(ticks_per_frame))?;
            Timing::new_smpte(fps, ticks_per_frame)
        }
    })
}

fn event_doc(event: &TimedEvent) -> EventDoc {
    let delta_time = event.delta_time();
    let byte = |b: &DataByte| Some(Number::from(b.byte()));
    match event.event() {
        EventPayload::Channel(channel) => {
            let mut doc = EventDoc::new(delta_time, channel_tag(channel.kind()));
            doc.channel = Some(Number::from(channel.channel().number()));
            match channel.event() {
                VoiceEvent::NoteOff { note, velocity } | VoiceEvent::NoteOn { note, velocity } => {
                    doc.note = byte(note);
                    doc.velocity = byte(velocity);
                }
                VoiceEvent::PolyPressure { note, pressure } => {
                    doc.note = byte(note);
                    doc.pressure = byte(pressure);
                }
                VoiceEvent::ControlChange { controller, value } => {
                    doc.controller = byte(controller);
                    doc.value = byte(value);
                }
                VoiceEvent::ProgramChange { program } => {
                    doc.program = byte(program);
                }
                VoiceEvent::ChannelPressure { pressure } => {
                    doc.pressure = byte(pressure);
                }
                VoiceEvent::PitchBend(bend) => {
                    doc.value = Some(Number::from(bend.value()));
                }
            }
            doc
        }
        EventPayload::Meta(meta) => {
            let mut doc = EventDoc::new(delta_time, META);
            doc.meta_type = Some(Number::from(meta.meta_type()));
            doc.name = meta.kind().map(|kind| kind.name().to_owned());
            doc.data = Some(hex::encode(meta.data()));
            doc
        }
        EventPayload::SysEx(sysex) => {
            let mut doc = EventDoc::new(delta_time, SYSEX);
            doc.data = Some(hex::encode(sysex.data()));
            doc.terminated = Some(sysex.terminated());
            doc.continuation = Some(sysex.continuation());
            doc
        }
    }
}

fn timed_event(doc: EventDoc) -> ConvertResult<TimedEvent> {
    let delta_time = unsigned(&doc.delta_time, "delta_time")?;
    let delta_time = u32::try_from(delta_time)
        .ok()
        .filter(|d| *d <= VLQ_MAX)
        .ok_or(RangeError::Vlq(delta_time))?;

    let event: EventPayload = match doc.tag.as_str() {
        META => {
            let meta_type = field(doc.meta_type, "meta_type")?;
            let meta_type =
                u8::try_from(meta_type).map_err(|_| RangeError::MetaType(meta_type))?;
            MetaEvent::new(meta_type, bytes(&required(doc.data, "data")?)?).into()
        }
        SYSEX => SysExEvent::from_parts(
            bytes(&required(doc.data, "data")?)?,
            required(doc.terminated, "terminated")?,
            required(doc.continuation, "continuation")?,
        )?
        .into(),
        tag => {
            let kind =
                channel_kind(tag).ok_or_else(|| ConvertError::UnknownEventTag(tag.to_owned()))?;
            let channel = Channel::from_u64(field(doc.channel, "channel")?)?;
            let byte = |value: Option<Number>, name| -> ConvertResult<DataByte> {
                Ok(DataByte::from_u64(field(value, name)?)?)
            };
            let voice = match kind {
                ChannelKind::NoteOff => VoiceEvent::NoteOff {
                    note: byte(doc.note, "note")?,
                    velocity: byte(doc.velocity, "velocity")?,
                },
                ChannelKind::NoteOn => VoiceEvent::NoteOn {
                    note: byte(doc.note, "note")?,
                    velocity: byte(doc.velocity, "velocity")?,
                },
                ChannelKind::PolyPressure => VoiceEvent::PolyPressure {
                    note: byte(doc.note, "note")?,
                    pressure: byte(doc.pressure, "pressure")?,
                },
                ChannelKind::ControlChange => VoiceEvent::ControlChange {
                    controller: byte(doc.controller, "controller")?,
                    value: byte(doc.value, "value")?,
                },
                ChannelKind::ProgramChange => VoiceEvent::ProgramChange {
                    program: byte(doc.program, "program")?,
                },
                ChannelKind::ChannelPressure => VoiceEvent::ChannelPressure {
                    pressure: byte(doc.pressure, "pressure")?,
                },
                ChannelKind::PitchBend => {
                    VoiceEvent::PitchBend(PitchBend::new(field(doc.value, "value")?)?)
                }
            };
            ChannelEvent::new(channel, voice).into()
        }
    };
    Ok(TimedEvent::new(delta_time, event))
}

fn channel_tag(kind: ChannelKind) -> &'static str {
    match kind {
        ChannelKind::NoteOff => NOTE_OFF,
        ChannelKind::NoteOn => NOTE_ON,
        ChannelKind::PolyPressure => POLY_PRESSURE,
        ChannelKind::ControlChange => CONTROL_CHANGE,
        ChannelKind::ProgramChange => PROGRAM_CHANGE,
        ChannelKind::ChannelPressure => CHANNEL_PRESSURE,
        ChannelKind::PitchBend => PITCH_BEND,
    }
}

fn channel_kind(tag: &str) -> Option<ChannelKind> {
    [
        ChannelKind::NoteOff,
        ChannelKind::NoteOn,
        ChannelKind::PolyPressure,
        ChannelKind::ControlChange,
        ChannelKind::ProgramChange,
        ChannelKind::ChannelPressure,
        ChannelKind::PitchBend,
    ]
    .into_iter()
    .find(|kind| channel_tag(*kind) == tag)
}

fn required<T>(field: Option<T>, name: &'static str) -> ConvertResult<T> {
    field.ok_or_else(|| ConvertError::Syntax(serde_json::Error::missing_field(name)))
}

fn field(value: Option<Number>, name: &'static str) -> ConvertResult<u64> {
    unsigned(&required(value, name)?, name)
}

/// Negative numbers are out of range for the field, fractions are not integers at all.
fn unsigned(number: &Number, field: &'static str) -> ConvertResult<u64> {
    if let Some(value) = number.as_u64() {
        return Ok(value);
    }
    match number.as_i64() {
        Some(value) => Err(RangeError::Negative { field, value }.into()),
        None => Err(not_an_integer(number, field)),
    }
}

fn signed(number: &Number, field: &'static str) -> ConvertResult<i64> {
    number.as_i64().ok_or_else(|| not_an_integer(number, field))
}

fn not_an_integer(number: &Number, field: &'static str) -> ConvertError {
    ConvertError::Syntax(serde_json::Error::custom(format_args!(
        "field `{field}` must be an integer, found {number}"
    )))
}

fn bytes(data: &str) -> ConvertResult<Vec<u8>> {
    hex::decode(data).map_err(|e| ConvertError::Syntax(serde_json::Error::custom(e)))
}
