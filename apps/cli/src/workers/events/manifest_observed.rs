use coursecap_core::events::Event;

use crate::workers::events::EventHeader;

/// A scan pass found a manifest URL different from the one on record.
#[derive(serde::Serialize)]
pub struct ManifestObserved {
    pub header: EventHeader,
    pub url: String,
}

impl ManifestObserved {
    pub const EVENT_TYPE: &'static str = "stream.manifest_observed";

    pub fn new(url: String) -> Self {
        Self {
            header: EventHeader::root(),
            url,
        }
    }
}

impl Event for ManifestObserved {
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
