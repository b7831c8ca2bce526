use super::builder::chunk::{HEADER_LENGTH, HEADER_TAG, TRACK_TAG};
use crate::{prelude::*, writer::Writer};
use alloc::vec::Vec;

/// Rough bytes per event, used to size buffers up front.
const EVENTS_TO_BYTES: usize = 4;

pub(super) fn write_file(file: &MidiFile) -> Result<Vec<u8>, RangeError> {
    let events: usize = file.tracks().iter().map(Track::len).sum();
    let mut out = Writer::with_capacity(14 + file.tracks().len() * 12 + events * EVENTS_TO_BYTES);

    let header = file.header();
    out.write_bytes(HEADER_TAG);
    out.write_u32(HEADER_LENGTH);
    out.write_u16(u16::from(header.format().number()));
    out.write_u16(header.track_count());
    out.write_u16(header.timing().division());

    for track in file.tracks() {
        write_track(track, &mut out)?;
    }
    log::debug!(
        "encoded {} track(s) into {} bytes",
        header.track_count(),
        out.len()
    );
    Ok(out.into_inner())
}

/// Encode a track into a scratch buffer, then prefix it with its tag and length.
fn write_track(track: &Track, out: &mut Writer) -> Result<(), RangeError> {
    let mut scratch = Writer::with_capacity(track.len() * EVENTS_TO_BYTES);
    for event in track.events() {
        write_event(event, &mut scratch)?;
    }
    if !track.ends_with_end_of_track() {
        log::warn!("track has no end-of-track event, appending one");
        write_event(
            &TimedEvent::new(0, MetaEvent::end_of_track()),
            &mut scratch,
        )?;
    }

    let body = scratch.into_inner();
    let length =
        u32::try_from(body.len()).map_err(|_| RangeError::ChunkLength(body.len() as u64))?;
    out.write_bytes(TRACK_TAG);
    out.write_u32(length);
    out.write_bytes(&body);
    Ok(())
}

/// Write one event. The status byte is always written; running status is never used.
fn write_event(event: &TimedEvent, out: &mut Writer) -> Result<(), RangeError> {
    out.write_vlq(event.delta_time())?;
    match event.event() {
        EventPayload::Channel(channel) => {
            out.write_u8(channel.status());
            let data = channel.data();
            out.write_bytes(&data[..channel.kind().data_len()]);
        }
        EventPayload::Meta(meta) => {
            out.write_u8(0xFF);
            out.write_u8(meta.meta_type());
            out.write_vlq_len(meta.data().len())?;
            out.write_bytes(meta.data());
        }
        EventPayload::SysEx(sysex) => {
            out.write_u8(sysex.status());
            out.write_vlq_len(sysex.packet_len())?;
            out.write_bytes(sysex.data());
            if sysex.terminated() {
                out.write_u8(SYSEX_END);
            }
        }
    }
    Ok(())
}
