use std::collections::HashMap;

use serde::Deserialize;

use crate::{Result, types::TranscriptTrack};

/// Track id → ordered cue sequence, as served by the transcript endpoint.
pub type TranscriptCues = HashMap<String, TranscriptTrack>;

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    #[serde(rename = "transcriptCuesArray", default)]
    transcript_cues_array: TranscriptCues,
}

/// Client for the per-page transcript convention endpoint.
pub struct TranscriptClient {
    http: reqwest::Client,
}

impl TranscriptClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Fetch caption data for a lesson page.
    ///
    /// Failures of any kind (network, non-JSON body, malformed shape)
    /// collapse to an empty mapping: the caller's fallback is "no subtitles
    /// found" regardless of cause, so no error taxonomy is surfaced.
    pub async fn fetch_transcript(&self, page_url: &str) -> TranscriptCues {
        self.request_cues(page_url).await.unwrap_or_default()
    }

    async fn request_cues(&self, page_url: &str) -> Result<TranscriptCues> {
        let url = transcript_endpoint(page_url);
        let response = self
            .http
            .get(&url)
            .header("x-requested-with", "XMLHttpRequest")
            .send()
            .await?
            .json::<TranscriptResponse>()
            .await?;

        Ok(response.transcript_cues_array)
    }
}

impl Default for TranscriptClient {
    fn default() -> Self {
        Self::new()
    }
}

fn transcript_endpoint(page_url: &str) -> String {
    format!("{}/transcripts?format=json", page_url.trim_end_matches('/'))
}

/// Parse a transcript payload body. Split out of the HTTP path so the shape
/// handling is testable without a server.
pub fn parse_transcript_body(body: &str) -> TranscriptCues {
    serde_json::from_str::<TranscriptResponse>(body)
        .map(|r| r.transcript_cues_array)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_convention_suffix() {
        assert_eq!(
            transcript_endpoint("https://courses.example/classes/intro/111"),
            "https://courses.example/classes/intro/111/transcripts?format=json"
        );
        assert_eq!(
            transcript_endpoint("https://courses.example/classes/intro/111/"),
            "https://courses.example/classes/intro/111/transcripts?format=json"
        );
    }

    #[test]
    fn parses_tracks_and_cues() {
        let body = r#"{
            "transcriptCuesArray": {
                "en-US": {
                    "content": [
                        {"start": 0.0, "end": 1.5, "text": "Welcome"},
                        {"start": 1.5, "end": 3.0, "text": "to the course"}
                    ]
                },
                "de-DE": {"content": []}
            }
        }"#;

        let cues = parse_transcript_body(body);
        assert_eq!(cues.len(), 2);
        let en = &cues["en-US"];
        assert_eq!(en.content.len(), 2);
        assert_eq!(en.content[0].text, "Welcome");
        assert_eq!(en.content[1].start, 1.5);
        assert!(cues["de-DE"].content.is_empty());
    }

    #[test]
    fn missing_cues_key_yields_empty_mapping() {
        assert!(parse_transcript_body("{}").is_empty());
    }

    #[test]
    fn malformed_body_yields_empty_mapping() {
        assert!(parse_transcript_body("<!DOCTYPE html><html></html>").is_empty());
        assert!(parse_transcript_body("").is_empty());
        assert!(parse_transcript_body(r#"{"transcriptCuesArray": 7}"#).is_empty());
    }
}
