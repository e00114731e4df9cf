use std::sync::Arc;

use coursecap_core::{
    CaptureSession,
    events::{EnrichedEvent, EventBus, downcast_ref},
    queues::QueueKind,
    render_ffmpeg_command, safe_filename, slug_from_page_url,
    workers::{CaptureFailed, InputSpec, SubscriptionSpec, Worker},
};

use crate::{
    command_box::CommandBox,
    pipeline::SessionSpec,
    workers::events::{CommandRequested, LessonChanged, ManifestObserved, SubtitlesSaved},
};

const NO_STREAM_YET: &str =
    "No HLS stream detected yet.\nOpen a lesson and let it start playing.";

/// Owns the command box and renders every state change pushed at it.
///
/// Manifest observations arrive on a latest-wins slot: if the scanner
/// outpaces this sink, only the newest URL is worth displaying.
pub struct CommandBoxSinkWorker {
    session: Arc<CaptureSession>,
    spec: SessionSpec,
    command_box: CommandBox,
}

impl CommandBoxSinkWorker {
    pub fn new(session: Arc<CaptureSession>, spec: SessionSpec, command_box: CommandBox) -> Self {
        Self {
            session,
            spec,
            command_box,
        }
    }

    fn lesson_output_name(&self) -> String {
        self.session
            .lesson_title()
            .map(|title| safe_filename(&title))
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| slug_from_page_url(&self.spec.page_url))
    }

    fn show_command(&mut self, url: &str) {
        let command = render_ffmpeg_command(url, &self.lesson_output_name());
        self.command_box.show(&command);
    }
}

impl Worker for CommandBoxSinkWorker {
    const SUBSCRIBER_ID: &'static str = "ui.command_box_sink";

    fn subscription() -> SubscriptionSpec {
        SubscriptionSpec {
            subscriber_id: Self::SUBSCRIBER_ID,
            inputs: vec![
                InputSpec {
                    event_type: ManifestObserved::EVENT_TYPE,
                    queue_kind: QueueKind::Latest1,
                },
                InputSpec {
                    event_type: LessonChanged::EVENT_TYPE,
                    queue_kind: QueueKind::FifoDropOldest { capacity: 4 },
                },
                InputSpec {
                    event_type: CommandRequested::EVENT_TYPE,
                    queue_kind: QueueKind::FifoDropOldest { capacity: 4 },
                },
                InputSpec {
                    event_type: SubtitlesSaved::EVENT_TYPE,
                    queue_kind: QueueKind::FifoDropOldest { capacity: 4 },
                },
                InputSpec {
                    event_type: CaptureFailed::EVENT_TYPE,
                    queue_kind: QueueKind::FifoDropOldest { capacity: 4 },
                },
            ],
        }
    }

    async fn handle(&mut self, event: Arc<EnrichedEvent>, _bus: &EventBus) -> anyhow::Result<()> {
        if let Some(observed) = downcast_ref::<ManifestObserved>(&event.event) {
            self.show_command(&observed.url);
        }

        if downcast_ref::<LessonChanged>(&event.event).is_some() {
            self.command_box.hide();
        }

        if downcast_ref::<CommandRequested>(&event.event).is_some() {
            match self.session.manifest() {
                Some(url) => self.show_command(&url),
                None => self.command_box.show(NO_STREAM_YET),
            }
        }

        if let Some(saved) = downcast_ref::<SubtitlesSaved>(&event.event) {
            if saved.files.is_empty() {
                self.command_box.show("No subtitles found.");
            } else {
                self.command_box.show(&format!(
                    "Saved {} subtitle file(s) to {}",
                    saved.files.len(),
                    self.spec.output_dir.display()
                ));
            }
        }

        if let Some(failed) = downcast_ref::<CaptureFailed>(&event.event) {
            self.command_box
                .show(&format!("{} failed: {}", failed.stage, failed.message));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursecap_core::events::{BusConfig, Event, EventBusBuilder};
    use std::path::PathBuf;
    use std::time::Duration;
    use tokio::time::Instant;
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

    fn spec() -> SessionSpec {
        SessionSpec {
            page_url: "https://courses.example/classes/advanced-baking/12345".to_string(),
            output_dir: PathBuf::from("/tmp/subs"),
            manifest_needle: "video.m3u8".to_string(),
            scan_interval: Duration::from_millis(1000),
        }
    }

    fn enrich(event: impl Event) -> Arc<EnrichedEvent> {
        Arc::new(EnrichedEvent {
            event: Arc::new(event),
            ingest_seq: 0,
            session_id: Uuid::new_v4(),
            ingested_at: Instant::now(),
        })
    }

    #[tokio::test]
    async fn manifest_observation_renders_command_with_title() {
        let session = Arc::new(CaptureSession::new());
        session.set_lesson_title("Lesson 3: Shaping / Scoring");
        let mut sink = CommandBoxSinkWorker::new(Arc::clone(&session), spec(), CommandBox::new());
        let bus = quiet_bus();

        sink.handle(
            enrich(ManifestObserved::new(
                "https://cdn.example/a/video.m3u8".to_string(),
            )),
            &bus,
        )
        .await
        .unwrap();

        assert!(sink.command_box.is_visible());
        assert_eq!(
            sink.command_box.text(),
            "ffmpeg -i \"https://cdn.example/a/video.m3u8\" -c copy \"Lesson 3- Shaping - Scoring.mp4\""
        );
    }

    #[tokio::test]
    async fn missing_title_falls_back_to_page_slug() {
        let session = Arc::new(CaptureSession::new());
        let mut sink = CommandBoxSinkWorker::new(Arc::clone(&session), spec(), CommandBox::new());
        let bus = quiet_bus();

        sink.handle(
            enrich(ManifestObserved::new(
                "https://cdn.example/a/video.m3u8".to_string(),
            )),
            &bus,
        )
        .await
        .unwrap();

        assert!(sink.command_box.text().ends_with("\"12345.mp4\""));
    }

    #[tokio::test]
    async fn lesson_change_hides_the_box() {
        let session = Arc::new(CaptureSession::new());
        let mut sink = CommandBoxSinkWorker::new(Arc::clone(&session), spec(), CommandBox::new());
        let bus = quiet_bus();

        sink.handle(
            enrich(ManifestObserved::new(
                "https://cdn.example/a/video.m3u8".to_string(),
            )),
            &bus,
        )
        .await
        .unwrap();
        sink.handle(enrich(LessonChanged::new(Uuid::new_v4())), &bus)
            .await
            .unwrap();

        assert!(!sink.command_box.is_visible());
        assert_eq!(sink.command_box.text(), "");
    }

    #[tokio::test]
    async fn command_request_without_capture_shows_instruction() {
        let session = Arc::new(CaptureSession::new());
        let mut sink = CommandBoxSinkWorker::new(Arc::clone(&session), spec(), CommandBox::new());
        let bus = quiet_bus();

        sink.handle(enrich(CommandRequested::new()), &bus)
            .await
            .unwrap();

        assert_eq!(sink.command_box.text(), NO_STREAM_YET);
    }

    #[tokio::test]
    async fn command_request_reads_current_capture() {
        let session = Arc::new(CaptureSession::new());
        session.capture("https://cdn.example/b/video.m3u8");
        let mut sink = CommandBoxSinkWorker::new(Arc::clone(&session), spec(), CommandBox::new());
        let bus = quiet_bus();

        sink.handle(enrich(CommandRequested::new()), &bus)
            .await
            .unwrap();

        assert!(
            sink.command_box
                .text()
                .starts_with("ffmpeg -i \"https://cdn.example/b/video.m3u8\"")
        );
    }

    #[tokio::test]
    async fn subtitle_outcomes_are_reported() {
        let session = Arc::new(CaptureSession::new());
        let mut sink = CommandBoxSinkWorker::new(Arc::clone(&session), spec(), CommandBox::new());
        let bus = quiet_bus();

        sink.handle(enrich(SubtitlesSaved::new(Uuid::new_v4(), vec![])), &bus)
            .await
            .unwrap();
        assert_eq!(sink.command_box.text(), "No subtitles found.");

        sink.handle(
            enrich(SubtitlesSaved::new(
                Uuid::new_v4(),
                vec![PathBuf::from("/tmp/subs/en-US.srt")],
            )),
            &bus,
        )
        .await
        .unwrap();
        assert!(sink.command_box.text().starts_with("Saved 1 subtitle"));
    }
}
