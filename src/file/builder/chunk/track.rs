use crate::{
    message::SYSEX_END,
    prelude::*,
    reader::Reader,
};
use alloc::vec::Vec;

/// Decode the events of an `MTrk` chunk whose prefix declared `length`.
///
/// Events are read until an end-of-track event or until the declared length is
/// reached. Either way the events must have consumed exactly `length` bytes.
pub fn read_track(reader: &mut Reader<'_>, length: u32) -> ConvertResult<Track> {
    let start = reader.buffer_position();
    let declared = length as usize;
    let mut running_status = None;
    let mut events = Vec::new();

    while reader.buffer_position() - start < declared {
        let event = read_event(reader, &mut running_status)?;
        log::trace!("{:?}", event);
        let end = event.event().is_end_of_track();
        events.push(event);
        if end {
            break;
        }
    }

    let consumed = reader.buffer_position() - start;
    if consumed != declared {
        return Err(ConvertError::chunk(
            start,
            ChunkError::TrackLength {
                declared: length,
                consumed,
            },
        ));
    }
    let track = Track::new(events);
    if !track.ends_with_end_of_track() {
        return Err(ConvertError::chunk(start, ChunkError::MissingEndOfTrack));
    }
    log::debug!("decoded track of {} event(s)", track.len());
    Ok(track)
}

/// Read one delta time and event.
///
/// `running_status` holds the last channel status byte. Meta and sysex events
/// leave it untouched.
fn read_event(reader: &mut Reader<'_>, running_status: &mut Option<u8>) -> ConvertResult<TimedEvent> {
    let delta_time = reader.read_vlq()?;
    let position = reader.buffer_position();
    let byte = reader.peek_u8()?;
    let status = if byte & 0x80 == 0 {
        running_status.ok_or(ConvertError::chunk(
            position,
            ChunkError::MissingRunningStatus(byte),
        ))?
    } else {
        reader.read_u8()?;
        byte
    };

    let event: EventPayload = match status {
        0xFF => {
            let meta_type = reader.read_u8()?;
            let len = reader.read_vlq()?;
            MetaEvent::new(meta_type, reader.read_bytes(len as usize)?).into()
        }
        0xF0 | SYSEX_END => {
            let len = reader.read_vlq()?;
            SysExEvent::from_packet(reader.read_bytes(len as usize)?, status == SYSEX_END).into()
        }
        0x80..=0xEF => {
            *running_status = Some(status);
            read_channel_event(reader, status)?.into()
        }
        other => {
            return Err(ConvertError::chunk(
                position,
                ChunkError::UnsupportedStatus(other),
            ));
        }
    };
    Ok(TimedEvent::new(delta_time, event))
}

fn read_channel_event(reader: &mut Reader<'_>, status: u8) -> ConvertResult<ChannelEvent> {
    let Some(kind) = ChannelKind::from_status(status) else {
        return Err(ConvertError::chunk(
            reader.buffer_position(),
            ChunkError::UnsupportedStatus(status),
        ));
    };
    let data1 = reader.read_u8()?;
    let data2 = match kind.data_len() {
        2 => reader.read_u8()?,
        _ => 0,
    };
    Ok(ChannelEvent::from_parts(
        kind,
        Channel::from_status(status),
        data1,
        data2,
    )?)
}
