pub mod command_requested;
pub mod lesson_changed;
pub mod manifest_observed;
pub mod page_mutated;
pub mod subtitles_requested;
pub mod subtitles_saved;

pub use command_requested::*;
pub use lesson_changed::*;
pub use manifest_observed::*;
pub use page_mutated::*;
use std::time::SystemTime;
pub use subtitles_requested::*;
pub use subtitles_saved::*;

#[derive(Clone, Debug, serde::Serialize)]
pub struct EventHeader {
    pub event_id: uuid::Uuid,
    pub parent_ids: Vec<uuid::Uuid>,
    pub timestamp: SystemTime,
}

impl EventHeader {
    pub fn root() -> Self {
        Self {
            event_id: uuid::Uuid::new_v4(),
            parent_ids: Vec::new(),
            timestamp: SystemTime::now(),
        }
    }

    pub fn child_of(parent_event_id: uuid::Uuid) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4(),
            parent_ids: vec![parent_event_id],
            timestamp: SystemTime::now(),
        }
    }
}
