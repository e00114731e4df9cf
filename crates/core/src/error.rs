use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Telemetry feed not found at {path} after {attempts} attempts")]
    FeedUnavailable { path: PathBuf, attempts: u32 },

    #[error("Transcript request failed: {0}")]
    TranscriptRequest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CaptureError>;
