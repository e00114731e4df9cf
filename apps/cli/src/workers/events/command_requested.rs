use coursecap_core::events::Event;

use crate::workers::events::EventHeader;

/// The user asked for the download command at the prompt.
#[derive(serde::Serialize)]
pub struct CommandRequested {
    pub header: EventHeader,
}

impl CommandRequested {
    pub const EVENT_TYPE: &'static str = "ui.command_requested";

    pub fn new() -> Self {
        Self {
            header: EventHeader::root(),
        }
    }
}

impl Default for CommandRequested {
    fn default() -> Self {
        Self::new()
    }
}

impl Event for CommandRequested {
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
