use crate::prelude::*;
use alloc::vec::Vec;

#[doc = r#"
An event and the number of ticks since the previous event in its track
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEvent {
    delta_time: u32,
    event: EventPayload,
}

impl TimedEvent {
    /// Create a new timed event
    pub fn new(delta_time: u32, event: impl Into<EventPayload>) -> Self {
        Self {
            delta_time,
            event: event.into(),
        }
    }

    /// Ticks since the previous event in the track
    pub const fn delta_time(&self) -> u32 {
        self.delta_time
    }

    /// The event payload
    pub const fn event(&self) -> &EventPayload {
        &self.event
    }
}

#[doc = r#"
An ordered list of events. The order carries musical time, since each delta
is relative to the event before it.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Track {
    events: Vec<TimedEvent>,
}

impl Track {
    /// Create a new track
    pub fn new(events: Vec<TimedEvent>) -> Self {
        Self { events }
    }

    /// Get the events of this track
    pub fn events(&self) -> &[TimedEvent] {
        &self.events
    }

    /// Take the events out of this track
    pub fn into_events(self) -> Vec<TimedEvent> {
        self.events
    }

    /// Number of events in the track
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the track holds no events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// True if the final event is an end-of-track meta event
    pub fn ends_with_end_of_track(&self) -> bool {
        self.events
            .last()
            .is_some_and(|e| e.event().is_end_of_track())
    }

    /// Position of the first end-of-track event that is followed by more events.
    pub(crate) fn misplaced_end_of_track(&self) -> Option<usize> {
        let last = self.events.len().checked_sub(1)?;
        self.events[..last]
            .iter()
            .position(|e| e.event().is_end_of_track())
    }
}

impl FromIterator<TimedEvent> for Track {
    fn from_iter<T: IntoIterator<Item = TimedEvent>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
