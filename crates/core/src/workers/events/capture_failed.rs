use std::{any::Any, sync::Arc, time::SystemTime};

use serde::Serialize;
use uuid::Uuid;

use crate::events::Event;

/// Published by the worker loop when a handler fails; UI sinks render it
/// as an informational message instead of surfacing a diagnostic.
#[derive(Clone, Serialize)]
pub struct CaptureFailed {
    pub event_id: Uuid,
    pub ts: SystemTime,
    pub parents: [Uuid; 1],
    pub stage: &'static str,
    pub message: String,
}

impl CaptureFailed {
    pub const EVENT_TYPE: &'static str = "capture.failed";

    pub fn new(event: Arc<dyn Event>, subscriber_id: &'static str, message: String) -> Self {
        Self {
            message,
            event_id: Uuid::new_v4(),
            ts: SystemTime::now(),
            parents: [event.event_id()],
            stage: subscriber_id,
        }
    }
}

impl Event for CaptureFailed {
    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn parent_ids(&self) -> &[Uuid] {
        &self.parents
    }

    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn timestamp(&self) -> SystemTime {
        self.ts
    }

    fn as_any(&self) -> &dyn Any {
        self as &dyn Any
    }
}
