#![doc = r#"
Event payloads carried by a track

# Hierarchy
```text
                     |--------------|
                     | EventPayload |
                     |--------------|
                   /        |         \
|--------------|  |-----------|  |-------------|
| ChannelEvent |  | MetaEvent |  | SysExEvent  |
|--------------|  |-----------|  |-------------|
       |
|------------|
| VoiceEvent |
|------------|
```

Payloads own their bytes. Nothing here refers back into the buffer an event was
decoded from.
"#]

mod data;
pub use data::*;

mod channel;
pub use channel::*;

mod meta;
pub use meta::*;

mod sysex;
pub use sysex::*;

#[doc = r#"
The set of possible events in a track
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    /// A channel voice message
    Channel(ChannelEvent),
    /// A meta event, its payload preserved opaquely
    Meta(MetaEvent),
    /// A system exclusive packet
    SysEx(SysExEvent),
}

impl EventPayload {
    /// True if this is the end-of-track meta event.
    pub fn is_end_of_track(&self) -> bool {
        matches!(self, Self::Meta(meta) if meta.is_end_of_track())
    }
}

impl From<ChannelEvent> for EventPayload {
    fn from(value: ChannelEvent) -> Self {
        Self::Channel(value)
    }
}

impl From<MetaEvent> for EventPayload {
    fn from(value: MetaEvent) -> Self {
        Self::Meta(value)
    }
}

impl From<SysExEvent> for EventPayload {
    fn from(value: SysExEvent) -> Self {
        Self::SysEx(value)
    }
}
