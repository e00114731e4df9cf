use std::sync::Arc;

use anyhow::{Ok, Result};
use tokio::sync::broadcast;

use crate::{
    events::{EnrichedEvent, EventBus},
    workers::{CaptureFailed, SubscriptionSpec, WorkerBatch, WorkerInputs},
};

/// A bus subscriber with a fixed identity and declared inputs.
///
/// `run` loops until shutdown; a failing `handle` publishes
/// `capture.failed` instead of tearing the worker down, so one bad event
/// degrades to an informational message rather than ending the session.
pub trait Worker: Send + Sized + 'static {
    const SUBSCRIBER_ID: &'static str;
    fn subscription() -> SubscriptionSpec;
    async fn handle(&mut self, event: Arc<EnrichedEvent>, bus: &EventBus) -> Result<()>;
    async fn run(
        mut self,
        mut inputs: WorkerInputs,
        bus: Arc<EventBus>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<()> {
        loop {
            tokio::select! {
                _ = shutdown.recv() => return Ok(()),
                batch = inputs.next() => match batch {
                    WorkerBatch::Snapshots(snapshot_updates) => {
                        for update in snapshot_updates {
                            self.dispatch(update.event, &bus).await;
                        }
                    }
                    WorkerBatch::FifoItem { event_type: _event_type, event } => {
                        self.dispatch(event, &bus).await;
                    }
                }
            }
        }
    }

    async fn dispatch(&mut self, event: Arc<EnrichedEvent>, bus: &EventBus) {
        let parent = Arc::clone(&event);
        if let Err(e) = self.handle(event, bus).await {
            bus.publish(Arc::new(CaptureFailed::new(
                Arc::clone(&parent.event),
                Self::SUBSCRIBER_ID,
                format!("{e}"),
            )));
        }
    }
}
