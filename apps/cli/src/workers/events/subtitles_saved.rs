use std::path::PathBuf;

use coursecap_core::events::Event;

use crate::workers::events::EventHeader;

/// Transcript fetch finished; `files` is empty when nothing was available.
#[derive(serde::Serialize)]
pub struct SubtitlesSaved {
    pub header: EventHeader,
    pub files: Vec<PathBuf>,
}

impl SubtitlesSaved {
    pub const EVENT_TYPE: &'static str = "subtitles.saved";

    pub fn new(parent_event_id: uuid::Uuid, files: Vec<PathBuf>) -> Self {
        Self {
            header: EventHeader::child_of(parent_event_id),
            files,
        }
    }
}

impl Event for SubtitlesSaved {
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
