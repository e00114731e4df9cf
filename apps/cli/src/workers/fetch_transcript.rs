use std::{path::PathBuf, sync::Arc, time::Duration};

use coursecap_core::{
    cues_to_srt,
    events::{EnrichedEvent, EventBus},
    queues::QueueKind,
    safe_filename,
    transcript::{TranscriptClient, TranscriptCues},
    workers::{InputSpec, SubscriptionSpec, Worker},
};
use tokio::fs;

use crate::{
    pipeline::SessionSpec,
    workers::events::{SubtitlesRequested, SubtitlesSaved},
};

/// Delay between successive file writes, mirroring the pacing the page
/// version needed to dodge multi-download throttling.
const DOWNLOAD_GAP: Duration = Duration::from_millis(500);

/// Fetches the lesson transcript on demand and writes one `.srt` per track.
pub struct FetchTranscriptWorker {
    client: TranscriptClient,
    spec: SessionSpec,
}

impl FetchTranscriptWorker {
    pub fn new(spec: SessionSpec) -> Self {
        Self {
            client: TranscriptClient::new(),
            spec,
        }
    }

    async fn write_tracks(
        output_dir: &PathBuf,
        cues: &TranscriptCues,
        gap: Duration,
    ) -> anyhow::Result<Vec<PathBuf>> {
        let mut track_ids: Vec<&String> = cues.keys().collect();
        track_ids.sort();

        let mut files = Vec::new();
        for (i, track_id) in track_ids.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(gap).await;
            }

            let mut stem = safe_filename(track_id);
            if stem.is_empty() {
                stem = "track".to_string();
            }
            let path = output_dir.join(format!("{}.srt", stem));
            fs::write(&path, cues_to_srt(&cues[*track_id].content)).await?;
            files.push(path);
        }

        Ok(files)
    }
}

impl Worker for FetchTranscriptWorker {
    const SUBSCRIBER_ID: &'static str = "transcript.fetch";

    fn subscription() -> SubscriptionSpec {
        SubscriptionSpec {
            subscriber_id: Self::SUBSCRIBER_ID,
            inputs: vec![InputSpec {
                event_type: SubtitlesRequested::EVENT_TYPE,
                queue_kind: QueueKind::FifoDropOldest { capacity: 4 },
            }],
        }
    }

    async fn handle(&mut self, event: Arc<EnrichedEvent>, bus: &EventBus) -> anyhow::Result<()> {
        // Fetched fresh on every request; failures collapse to an empty
        // mapping inside the client.
        let cues = self.client.fetch_transcript(&self.spec.page_url).await;
        let files = Self::write_tracks(&self.spec.output_dir, &cues, DOWNLOAD_GAP).await?;

        bus.publish(Arc::new(SubtitlesSaved::new(event.event.event_id(), files)));

        Ok(())
    }
}
