use std::{sync::Arc, time::Duration};

use coursecap_core::{CaptureSession, events::EventBus};
use tokio::sync::broadcast;

use crate::{
    feed::{PageRecord, TelemetryFeed},
    workers::events::PageMutated,
};

/// Pumps non-resource page signals out of the feed: attribute mutations
/// become bus events for the session tracker, title records update the
/// lesson identity (latest-wins).
pub struct PageWatcher {
    feed: Arc<TelemetryFeed>,
    session: Arc<CaptureSession>,
    poll_interval: Duration,
}

impl PageWatcher {
    pub fn new(
        feed: Arc<TelemetryFeed>,
        session: Arc<CaptureSession>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            feed,
            session,
            poll_interval,
        }
    }

    pub async fn run(self, bus: Arc<EventBus>, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = shutdown.recv() => return,
                _ = ticker.tick() => self.pump_once(&bus).await,
            }
        }
    }

    pub async fn pump_once(&self, bus: &EventBus) {
        let Ok(records) = self.feed.drain_page_records().await else {
            return;
        };

        for record in records {
            match record {
                PageRecord::Mutation { attribute } => {
                    bus.publish(Arc::new(PageMutated::new(attribute)));
                }
                PageRecord::Title { value } => {
                    self.session.set_lesson_title(&value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursecap_core::events::{BusConfig, EventBusBuilder};
    use std::io::Write;
    use uuid::Uuid;

    fn quiet_bus() -> EventBus {
        let (bus, _wiring) = EventBusBuilder::new(BusConfig {
            session_id: Uuid::new_v4(),
            strict_routing: false,
        })
        .build()
        .unwrap();
        bus
    }

    #[tokio::test]
    async fn titles_update_session_and_mutations_hit_the_bus() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page-feed.jsonl");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, r#"{{"kind":"title","value":"Old title"}}"#).unwrap();
        writeln!(file, r#"{{"kind":"mutation","attribute":"class"}}"#).unwrap();
        writeln!(file, r#"{{"kind":"title","value":"Lesson 2: Dough"}}"#).unwrap();

        let session = Arc::new(CaptureSession::new());
        let watcher = PageWatcher::new(
            Arc::new(TelemetryFeed::new(path)),
            Arc::clone(&session),
            Duration::from_millis(1000),
        );
        let bus = quiet_bus();

        watcher.pump_once(&bus).await;

        assert_eq!(session.lesson_title().as_deref(), Some("Lesson 2: Dough"));
        assert_eq!(bus.unrouted_total(), 1);

        // Nothing new in the feed, nothing re-published.
        watcher.pump_once(&bus).await;
        assert_eq!(bus.unrouted_total(), 1);
    }
}
