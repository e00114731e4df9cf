use serde::{Deserialize, Serialize};

/// One timed caption entry from a lesson transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cue {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// One caption track as returned by the transcript endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptTrack {
    #[serde(default)]
    pub content: Vec<Cue>,
}

/// One network resource-load record from the host page's performance
/// timeline. `start_time` is milliseconds since page navigation start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: String,
    #[serde(rename = "startTime", default)]
    pub start_time: f64,
}
