use coursecap_core::events::Event;

use crate::workers::events::EventHeader;

/// The user asked for subtitle download at the prompt.
#[derive(serde::Serialize)]
pub struct SubtitlesRequested {
    pub header: EventHeader,
}

impl SubtitlesRequested {
    pub const EVENT_TYPE: &'static str = "ui.subtitles_requested";

    pub fn new() -> Self {
        Self {
            header: EventHeader::root(),
        }
    }
}

impl Default for SubtitlesRequested {
    fn default() -> Self {
        Self::new()
    }
}

impl Event for SubtitlesRequested {
    fn event_id(&self) -> uuid::Uuid {
        self.header.event_id
    }

    fn parent_ids(&self) -> &[uuid::Uuid] {
        &self.header.parent_ids
    }

    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn timestamp(&self) -> std::time::SystemTime {
        self.header.timestamp
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self as &dyn std::any::Any
    }
}
