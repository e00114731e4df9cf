use coursecap_core::events::Event;

use crate::workers::events::EventHeader;

/// The tracker decided a navigation happened; captured state is already
/// cleared by the time this is published.
#[derive(serde::Serialize)]
pub struct LessonChanged {
    pub header: EventHeader,
}

impl LessonChanged {
    pub const EVENT_TYPE: &'static str = "lesson.changed";

    pub fn new(parent_event_id: uuid::Uuid) -> Self {
        Self {
            header: EventHeader::child_of(parent_event_id),
        }
    }
}

impl Event for LessonChanged {
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
