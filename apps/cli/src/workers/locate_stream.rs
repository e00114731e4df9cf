use std::{sync::Arc, time::Duration};

use coursecap_core::{
    CaptureSession, events::EventBus, newest_manifest, telemetry::TelemetrySource,
};
use tokio::sync::broadcast;

use crate::workers::events::ManifestObserved;

/// Periodic telemetry scanner.
///
/// Lessons load asynchronously, so there is no single event to hook; the
/// locator rescans the accumulated resource records on a fixed interval for
/// the whole session and pushes a notification whenever the captured
/// manifest actually changes.
pub struct StreamLocator {
    source: Arc<dyn TelemetrySource>,
    session: Arc<CaptureSession>,
    needle: String,
    scan_interval: Duration,
}

impl StreamLocator {
    pub fn new(
        source: Arc<dyn TelemetrySource>,
        session: Arc<CaptureSession>,
        needle: String,
        scan_interval: Duration,
    ) -> Self {
        Self {
            source,
            session,
            needle,
            scan_interval,
        }
    }

    pub async fn run(self, bus: Arc<EventBus>, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = tokio::time::interval(self.scan_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = shutdown.recv() => return,
                _ = ticker.tick() => self.scan_once(&bus).await,
            }
        }
    }

    /// One scan pass. A feed read failure skips the tick; the next tick
    /// retries unconditionally anyway.
    pub async fn scan_once(&self, bus: &EventBus) {
        let Ok(records) = self.source.resource_records().await else {
            return;
        };

        if let Some(url) = newest_manifest(&records, &self.needle, self.session.stale_cutoff())
            && self.session.capture(url)
        {
            bus.publish(Arc::new(ManifestObserved::new(url.to_string())));
        }

        let horizon = records
            .iter()
            .fold(0.0f64, |acc, r| acc.max(r.start_time));
        self.session.note_records_through(horizon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use coursecap_core::{
        MANIFEST_NEEDLE,
        events::{BusConfig, EventBusBuilder},
        types::ResourceRecord,
    };
    use std::sync::Mutex;
    use uuid::Uuid;

    struct FixedTelemetry {
        records: Mutex<Vec<ResourceRecord>>,
    }

    #[async_trait]
    impl TelemetrySource for FixedTelemetry {
        async fn resource_records(&self) -> coursecap_core::Result<Vec<ResourceRecord>> {
            Ok(self.records.lock().unwrap().clone())
        }
    }

    fn locator_over(records: Vec<ResourceRecord>) -> (StreamLocator, Arc<CaptureSession>) {
        let session = Arc::new(CaptureSession::new());
        let locator = StreamLocator::new(
            Arc::new(FixedTelemetry {
                records: Mutex::new(records),
            }),
            Arc::clone(&session),
            MANIFEST_NEEDLE.to_string(),
            Duration::from_millis(1000),
        );
        (locator, session)
    }

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
    async fn rescanning_unchanged_telemetry_notifies_once() {
        let (locator, session) = locator_over(vec![ResourceRecord {
            name: "https://cdn.example/a/video.m3u8".to_string(),
            start_time: 100.0,
        }]);
        let bus = quiet_bus();

        locator.scan_once(&bus).await;
        locator.scan_once(&bus).await;

        assert_eq!(
            session.manifest().as_deref(),
            Some("https://cdn.example/a/video.m3u8")
        );
        // No subscribers in this bus, so every publish lands in the
        // unrouted counter; two scans over identical telemetry publish once.
        assert_eq!(bus.unrouted_total(), 1);
    }

    #[tokio::test]
    async fn scan_without_match_leaves_state_unset() {
        let (locator, session) = locator_over(vec![ResourceRecord {
            name: "https://cdn.example/app.js".to_string(),
            start_time: 10.0,
        }]);
        let bus = quiet_bus();

        locator.scan_once(&bus).await;
        assert_eq!(session.manifest(), None);
        assert_eq!(bus.unrouted_total(), 0);
    }
}
