use std::sync::Arc;

use crate::{
    events::EnrichedEvent,
    queues::{FifoDropOldestReceiver, Latest1Queue},
};

pub struct Latest1Input {
    pub event_type: &'static str,
    pub queue: Arc<Latest1Queue<Arc<EnrichedEvent>>>,
}

pub struct FifoInput {
    pub event_type: &'static str,
    pub receiver: FifoDropOldestReceiver<Arc<EnrichedEvent>>,
}

pub struct WorkerInputs {
    pub latest: Vec<Latest1Input>,
    pub fifos: Vec<FifoInput>,
    pub notify_any: Arc<tokio::sync::Notify>,
    pub fifo_index: usize,
}

pub enum WorkerBatch {
    /// Coalesced latest-wins values, at most one per subscribed type.
    Snapshots(Vec<SnapshotUpdate>),
    FifoItem {
        event_type: &'static str,
        event: Arc<EnrichedEvent>,
    },
}

pub struct SnapshotUpdate {
    pub event_type: &'static str,
    pub event: Arc<EnrichedEvent>,
}

impl WorkerInputs {
    /// Wait for the next batch. Latest-wins slots are drained first;
    /// FIFO inputs are polled round-robin so no single input starves
    /// the others.
    pub async fn next(&mut self) -> WorkerBatch {
        loop {
            let mut snaps = Vec::new();
            for l in &self.latest {
                if let Some(e) = l.queue.try_recv() {
                    snaps.push(SnapshotUpdate {
                        event_type: l.event_type,
                        event: e,
                    });
                }
            }

            if !snaps.is_empty() {
                return WorkerBatch::Snapshots(snaps);
            }

            if !self.fifos.is_empty() {
                let start = self.fifo_index;

                loop {
                    let i = self.fifo_index;
                    self.fifo_index = (self.fifo_index + 1) % self.fifos.len();

                    if let Some(e) = self.fifos[i].receiver.try_recv() {
                        return WorkerBatch::FifoItem {
                            event_type: self.fifos[i].event_type,
                            event: e,
                        };
                    }

                    if self.fifo_index == start {
                        break;
                    }
                }
            }
            self.notify_any.notified().await;
        }
    }
}
