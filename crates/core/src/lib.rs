//! Coursecap Core Library
//!
//! Core functionality for capturing streaming manifest URLs from page
//! telemetry, fetching lesson transcripts, and converting them to SubRip
//! subtitle files.

pub mod error;
pub mod events;
pub mod format;
pub mod naming;
pub mod queues;
pub mod routes;
pub mod session;
pub mod telemetry;
pub mod transcript;
pub mod types;
pub mod workers;

// Re-export commonly used items at crate root
pub use error::{CaptureError, Result};
pub use format::{cues_to_srt, format_timestamp, render_ffmpeg_command};
pub use naming::{safe_filename, slug_from_page_url};
pub use session::CaptureSession;
pub use telemetry::{MANIFEST_NEEDLE, TelemetrySource, newest_manifest};
pub use transcript::{TranscriptClient, TranscriptCues};
pub use types::{Cue, ResourceRecord, TranscriptTrack};
