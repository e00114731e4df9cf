use std::{path::PathBuf, sync::Arc, time::Duration};

use coursecap_core::{
    CaptureSession,
    events::{BusConfig, EventBus, EventBusBuilder},
    telemetry::TelemetrySource,
    workers::Worker,
};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::{
    command_box::CommandBox,
    feed::TelemetryFeed,
    workers::{
        command_box_sink::CommandBoxSinkWorker, fetch_transcript::FetchTranscriptWorker,
        locate_stream::StreamLocator, track_session::TrackSessionWorker, watch_page::PageWatcher,
    },
};

/// Per-session configuration shared by workers and sources.
#[derive(Clone)]
pub struct SessionSpec {
    pub page_url: String,
    pub output_dir: PathBuf,
    pub manifest_needle: String,
    pub scan_interval: Duration,
}

pub struct SessionHandle {
    pub bus: Arc<EventBus>,
    pub shutdown_tx: broadcast::Sender<()>,
}

/// Wire the bus, start the workers, start the sources. Everything runs
/// until the shutdown signal, the analog of the page unloading.
pub fn start_session(spec: SessionSpec, feed: Arc<TelemetryFeed>) -> anyhow::Result<SessionHandle> {
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    let session = Arc::new(CaptureSession::new());

    let builder = EventBusBuilder::new(BusConfig {
        session_id: Uuid::new_v4(),
        strict_routing: false,
    })
    .subscribe(TrackSessionWorker::subscription())
    .subscribe(FetchTranscriptWorker::subscription())
    .subscribe(CommandBoxSinkWorker::subscription());

    let (bus, mut wiring) = builder.build()?;
    let arc_bus = Arc::new(bus);

    let track_session_worker = TrackSessionWorker::new(Arc::clone(&session));
    let fetch_transcript_worker = FetchTranscriptWorker::new(spec.clone());
    let command_box_sink_worker =
        CommandBoxSinkWorker::new(Arc::clone(&session), spec.clone(), CommandBox::new());

    tokio::spawn(track_session_worker.run(
        wiring
            .take(TrackSessionWorker::SUBSCRIBER_ID)
            .expect("tracker wired"),
        Arc::clone(&arc_bus),
        shutdown_rx.resubscribe(),
    ));
    tokio::spawn(fetch_transcript_worker.run(
        wiring
            .take(FetchTranscriptWorker::SUBSCRIBER_ID)
            .expect("transcript worker wired"),
        Arc::clone(&arc_bus),
        shutdown_rx.resubscribe(),
    ));
    tokio::spawn(command_box_sink_worker.run(
        wiring
            .take(CommandBoxSinkWorker::SUBSCRIBER_ID)
            .expect("command box sink wired"),
        Arc::clone(&arc_bus),
        shutdown_rx.resubscribe(),
    ));

    let locator = StreamLocator::new(
        Arc::clone(&feed) as Arc<dyn TelemetrySource>,
        Arc::clone(&session),
        spec.manifest_needle.clone(),
        spec.scan_interval,
    );
    tokio::spawn(locator.run(Arc::clone(&arc_bus), shutdown_rx.resubscribe()));

    let watcher = PageWatcher::new(feed, Arc::clone(&session), spec.scan_interval);
    tokio::spawn(watcher.run(Arc::clone(&arc_bus), shutdown_rx.resubscribe()));

    Ok(SessionHandle {
        bus: arc_bus,
        shutdown_tx,
    })
}
