#![allow(dead_code)]

use midiconv::prelude::*;

/// Assemble an SMF from a header and raw track bodies.
pub fn smf(format: u16, division: u16, tracks: &[&[u8]]) -> Vec<u8> {
    let mut bytes = b"MThd\0\0\0\x06".to_vec();
    bytes.extend_from_slice(&format.to_be_bytes());
    bytes.extend_from_slice(&(tracks.len() as u16).to_be_bytes());
    bytes.extend_from_slice(&division.to_be_bytes());
    for track in tracks {
        bytes.extend_from_slice(&chunk(b"MTrk", track));
    }
    bytes
}

/// A chunk with the given tag and body.
pub fn chunk(tag: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut bytes = tag.to_vec();
    bytes.extend_from_slice(&(body.len() as u32).to_be_bytes());
    bytes.extend_from_slice(body);
    bytes
}

pub fn channel(kind: ChannelKind, channel: u8, data1: u8, data2: u8) -> EventPayload {
    ChannelEvent::from_parts(kind, Channel::new(channel).unwrap(), data1, data2)
        .unwrap()
        .into()
}

pub fn note_on(channel_no: u8, note: u8, velocity: u8) -> EventPayload {
    channel(ChannelKind::NoteOn, channel_no, note, velocity)
}

pub fn note_off(channel_no: u8, note: u8, velocity: u8) -> EventPayload {
    channel(ChannelKind::NoteOff, channel_no, note, velocity)
}

pub fn end_of_track() -> TimedEvent {
    TimedEvent::new(0, MetaEvent::end_of_track())
}

/// The single-track file of one note: on at 0, off 480 ticks later.
pub fn one_note_bytes() -> Vec<u8> {
    smf(
        0,
        480,
        &[&[
            0x00, 0x90, 60, 100, // note on
            0x83, 0x60, 0x80, 60, 0, // note off after 480 ticks
            0x00, 0xFF, 0x2F, 0x00,
        ]],
    )
}

/// A format 1 file touching every kind of event.
pub fn every_event() -> MidiFile {
    let conductor = Track::new(vec![
        TimedEvent::new(0, MetaEvent::new(0x03, b"Conductor".to_vec())),
        TimedEvent::new(0, MetaEvent::set_tempo(500_000)),
        TimedEvent::new(0, MetaEvent::new(0x58, [4, 2, 24, 8])),
        TimedEvent::new(0, MetaEvent::new(0x60, [0x00, 0x00, 0xFF])),
        end_of_track(),
    ]);
    let voices = Track::new(vec![
        TimedEvent::new(0, SysExEvent::new([0x7E, 0x7F, 0x09, 0x01])),
        TimedEvent::new(0, SysExEvent::from_parts([0x43, 0x12, 0x00], false, false).unwrap()),
        TimedEvent::new(10, SysExEvent::from_parts([0x00, 0x00], true, true).unwrap()),
        TimedEvent::new(0, channel(ChannelKind::ProgramChange, 9, 25, 0)),
        TimedEvent::new(0, channel(ChannelKind::ControlChange, 9, 7, 127)),
        TimedEvent::new(0, note_on(9, 36, 127)),
        TimedEvent::new(0, channel(ChannelKind::PolyPressure, 9, 36, 40)),
        TimedEvent::new(96, channel(ChannelKind::ChannelPressure, 9, 20, 0)),
        TimedEvent::new(96, channel(ChannelKind::PitchBend, 9, 0x7F, 0x7F)),
        TimedEvent::new(0x0FFF_FFFF, note_off(9, 36, 0)),
        end_of_track(),
    ]);
    let timing = Timing::new_ticks_per_quarter_note(96).unwrap();
    MidiFile::new(Format::Simultaneous, timing, vec![conductor, voices]).unwrap()
}
