mod common;

use common::*;
use midiconv::prelude::*;
use pretty_assertions::assert_eq;

fn chunk_error(result: ConvertResult<MidiFile>) -> ChunkError {
    match result {
        Err(ConvertError::MalformedChunk { kind, .. }) => kind,
        other => panic!("expected a malformed chunk, got {other:?}"),
    }
}

#[test]
fn parse_one_note() {
    let file = MidiFile::parse(&one_note_bytes()).unwrap();

    assert_eq!(file.format(), Format::SingleMultiChannel);
    assert_eq!(file.header().track_count(), 1);
    assert_eq!(file.timing().ticks_per_quarter_note(), Some(480));
    assert_eq!(
        file.tracks(),
        &[Track::new(vec![
            TimedEvent::new(0, note_on(0, 60, 100)),
            TimedEvent::new(480, note_off(0, 60, 0)),
            end_of_track(),
        ])]
    );
}

#[test]
fn round_trip_every_event() {
    let file = every_event();
    let bytes = file.to_bytes().unwrap();
    assert_eq!(MidiFile::parse(&bytes).unwrap(), file);
}

#[test]
fn encoding_is_stable() {
    let bytes = one_note_bytes();
    let file = MidiFile::parse(&bytes).unwrap();
    // no running status in the input, so the encoder reproduces it exactly
    assert_eq!(file.to_bytes().unwrap(), bytes);
}

#[test]
fn running_status_is_expanded() {
    let bytes = smf(
        0,
        96,
        &[&[
            0x00, 0x90, 60, 100, // note on, full status
            0x00, 64, 100, // note on, running status
            0x00, 0xFF, 0x01, 0x01, b'x', // meta leaves running status alone
            0x60, 60, 0, // still note on
            0x00, 0xC2, 5, // program change, one data byte
            0x00, 6, // running program change
            0x00, 0xFF, 0x2F, 0x00,
        ]],
    );
    let file = MidiFile::parse(&bytes).unwrap();
    let events = file.tracks()[0].events();
    assert_eq!(events.len(), 7);
    assert_eq!(events[1], TimedEvent::new(0, note_on(0, 64, 100)));
    assert_eq!(events[3], TimedEvent::new(96, note_on(0, 60, 0)));
    assert_eq!(
        events[5],
        TimedEvent::new(0, channel(ChannelKind::ProgramChange, 2, 6, 0))
    );

    // re-encoding writes every status byte, and decodes to the same events
    let encoded = file.to_bytes().unwrap();
    assert!(encoded.len() > bytes.len());
    assert_eq!(MidiFile::parse(&encoded).unwrap(), file);
}

#[test]
fn data_byte_without_running_status() {
    let bytes = smf(0, 96, &[&[0x00, 60, 100, 0x00, 0xFF, 0x2F, 0x00]]);
    assert_eq!(
        chunk_error(MidiFile::parse(&bytes)),
        ChunkError::MissingRunningStatus(60)
    );
}

#[test]
fn system_common_status_is_rejected() {
    let bytes = smf(0, 96, &[&[0x00, 0xF2, 0x00, 0x00, 0x00, 0xFF, 0x2F, 0x00]]);
    assert_eq!(
        chunk_error(MidiFile::parse(&bytes)),
        ChunkError::UnsupportedStatus(0xF2)
    );
}

#[test]
fn header_magic_is_checked() {
    let mut bytes = one_note_bytes();
    bytes[0..4].copy_from_slice(b"RIFF");
    assert_eq!(
        chunk_error(MidiFile::parse(&bytes)),
        ChunkError::InvalidHeaderTag(*b"RIFF")
    );
}

#[test]
fn header_length_is_checked() {
    let mut bytes = one_note_bytes();
    bytes[7] = 7;
    assert_eq!(
        chunk_error(MidiFile::parse(&bytes)),
        ChunkError::HeaderLength(7)
    );
}

#[test]
fn track_events_overrunning_declared_length() {
    // declared 4 bytes, but the end-of-track event carries two payload bytes (6 total)
    let mut bytes = smf(0, 96, &[]);
    bytes[11] = 1;
    bytes.extend_from_slice(b"MTrk\0\0\0\x04");
    bytes.extend_from_slice(&[0x00, 0xFF, 0x2F, 0x02, 0x00, 0x00]);
    assert_eq!(
        chunk_error(MidiFile::parse(&bytes)),
        ChunkError::TrackLength {
            declared: 4,
            consumed: 6
        }
    );
}

#[test]
fn track_events_short_of_declared_length() {
    let mut bytes = smf(0, 96, &[&[0x00, 0xFF, 0x2F, 0x00, 0x00, 0x00]]);
    assert_eq!(
        chunk_error(MidiFile::parse(&bytes)),
        ChunkError::TrackLength {
            declared: 6,
            consumed: 4
        }
    );

    // truncating the file instead runs out of input
    bytes.truncate(bytes.len() - 4);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedInput);
}

#[test]
fn track_without_end_of_track() {
    let bytes = smf(0, 96, &[&[0x00, 0x90, 60, 100]]);
    assert_eq!(
        chunk_error(MidiFile::parse(&bytes)),
        ChunkError::MissingEndOfTrack
    );
}

#[test]
fn truncated_meta_payload() {
    let mut bytes = smf(0, 96, &[]);
    bytes[11] = 1;
    bytes.extend_from_slice(b"MTrk\0\0\0\x08");
    bytes.extend_from_slice(&[0x00, 0xFF, 0x01, 0x10, b'a']);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(matches!(err, ConvertError::TruncatedInput(_)), "{err}");
}

#[test]
fn unknown_chunks_are_skipped() {
    let mut bytes = smf(1, 96, &[&[0x00, 0xFF, 0x2F, 0x00]]);
    let vendor = chunk(b"XFIH", &[1, 2, 3, 4, 5]);
    bytes.splice(14..14, vendor.iter().copied());
    bytes.extend_from_slice(&chunk(b"XFKM", &[]));

    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(file.tracks(), &[Track::new(vec![end_of_track()])]);
}

#[test]
fn track_count_must_match_header() {
    let mut bytes = smf(1, 96, &[&[0x00, 0xFF, 0x2F, 0x00]]);
    bytes[11] = 2;
    assert_eq!(
        chunk_error(MidiFile::parse(&bytes)),
        ChunkError::TrackCount {
            declared: 2,
            found: 1
        }
    );
}

#[test]
fn format_zero_holds_one_track() {
    let eot: &[u8] = &[0x00, 0xFF, 0x2F, 0x00];
    let bytes = smf(0, 96, &[eot, eot]);
    assert_eq!(
        chunk_error(MidiFile::parse(&bytes)),
        ChunkError::MultipleTracksForSingleMultiChannel(2)
    );
}

#[test]
fn duplicate_header() {
    let mut bytes = smf(1, 96, &[]);
    let header = bytes.clone();
    bytes.extend_from_slice(&header);
    assert_eq!(
        chunk_error(MidiFile::parse(&bytes)),
        ChunkError::DuplicateHeader
    );
}

#[test]
fn unknown_format_is_out_of_range() {
    let bytes = smf(3, 96, &[]);
    assert!(matches!(
        MidiFile::parse(&bytes),
        Err(ConvertError::Range(RangeError::Format(3)))
    ));
}

#[test]
fn zero_division_is_out_of_range() {
    let bytes = smf(0, 0, &[&[0x00, 0xFF, 0x2F, 0x00]]);
    assert!(matches!(
        MidiFile::parse(&bytes),
        Err(ConvertError::Range(RangeError::TicksPerQuarterNote(0)))
    ));
}

#[test]
fn smpte_timing() {
    // 25 fps, 40 ticks per frame
    let bytes = smf(2, 0xE728, &[&[0x00, 0xFF, 0x2F, 0x00]]);
    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(file.format(), Format::SequentiallyIndependent);
    assert_eq!(*file.timing(), Timing::new_smpte(SmpteFps::TwentyFive, 40));
    assert_eq!(file.to_bytes().unwrap(), bytes);
}

#[test]
fn sysex_packets() {
    let bytes = smf(
        0,
        96,
        &[&[
            0x00, 0xF0, 0x03, 0x43, 0x12, 0x00, // first packet, unterminated
            0x81, 0x48, 0xF7, 0x02, 0x43, 0xF7, // continuation, terminated
            0x00, 0xFF, 0x2F, 0x00,
        ]],
    );
    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(
        &file.tracks()[0].events()[..2],
        &[
            TimedEvent::new(0, SysExEvent::from_parts([0x43, 0x12, 0x00], false, false).unwrap()),
            TimedEvent::new(200, SysExEvent::from_parts([0x43], true, true).unwrap()),
        ]
    );
    assert_eq!(file.to_bytes().unwrap(), bytes);
}

#[test]
fn encoder_appends_end_of_track() {
    let timing = Timing::new_ticks_per_quarter_note(96).unwrap();
    let track = Track::new(vec![TimedEvent::new(0, note_on(0, 60, 1))]);
    let file = MidiFile::new(Format::SingleMultiChannel, timing, vec![track]).unwrap();

    let decoded = MidiFile::parse(&file.to_bytes().unwrap()).unwrap();
    assert_eq!(
        decoded.tracks()[0].events(),
        &[TimedEvent::new(0, note_on(0, 60, 1)), end_of_track()]
    );
}

#[test]
fn events_after_end_of_track_are_rejected() {
    let timing = Timing::new_ticks_per_quarter_note(96).unwrap();
    let track = Track::new(vec![end_of_track(), TimedEvent::new(0, note_on(0, 60, 1))]);
    let err = MidiFile::new(Format::Simultaneous, timing, vec![track]).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::MalformedChunk {
            kind: ChunkError::EventsAfterEndOfTrack { track: 0 },
            ..
        }
    ));
}
