use std::sync::Arc;

use coursecap_core::{
    CaptureSession,
    events::{EnrichedEvent, EventBus, expect},
    queues::QueueKind,
    workers::{InputSpec, SubscriptionSpec, Worker},
};

use crate::workers::events::{LessonChanged, PageMutated};

/// Detects lesson navigation from page mutation signals.
///
/// The course app toggles an "active" class on the current lesson's
/// navigation entry, so any class-attribute mutation is treated as a
/// navigation signal. That over-triggers on unrelated class churn; a spare
/// clear is harmless, a missed one leaves a wrong download command.
pub struct TrackSessionWorker {
    session: Arc<CaptureSession>,
}

impl TrackSessionWorker {
    const NAVIGATION_ATTRIBUTE: &'static str = "class";

    pub fn new(session: Arc<CaptureSession>) -> Self {
        Self { session }
    }
}

impl Worker for TrackSessionWorker {
    const SUBSCRIBER_ID: &'static str = "lesson.track_session";

    fn subscription() -> SubscriptionSpec {
        SubscriptionSpec {
            subscriber_id: Self::SUBSCRIBER_ID,
            inputs: vec![InputSpec {
                event_type: PageMutated::EVENT_TYPE,
                queue_kind: QueueKind::FifoDropOldest { capacity: 8 },
            }],
        }
    }

    async fn handle(&mut self, event: Arc<EnrichedEvent>, bus: &EventBus) -> anyhow::Result<()> {
        let mutation = expect::<PageMutated>(&event.event, PageMutated::EVENT_TYPE)?;
        if mutation.attribute != Self::NAVIGATION_ATTRIBUTE {
            return Ok(());
        }

        // Clear before notifying: subscribers reading captured state in
        // response to the change must already see it unset.
        self.session.clear();
        bus.publish(Arc::new(LessonChanged::new(event.event.event_id())));

        Ok(())
    }
}
