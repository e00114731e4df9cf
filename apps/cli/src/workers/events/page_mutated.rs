use coursecap_core::events::Event;

use crate::workers::events::EventHeader;

/// One attribute-mutation record read from the page feed.
#[derive(serde::Serialize)]
pub struct PageMutated {
    pub header: EventHeader,
    pub attribute: String,
}

impl PageMutated {
    pub const EVENT_TYPE: &'static str = "page.attribute_mutated";

    pub fn new(attribute: String) -> Self {
        Self {
            header: EventHeader::root(),
            attribute,
        }
    }
}

impl Event for PageMutated {
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
