use std::{
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use async_trait::async_trait;
use coursecap_core::{
    CaptureError, Result, telemetry::TelemetrySource, types::ResourceRecord,
};
use serde::Deserialize;

/// One line of the page feed, written by the browser exporter snippet.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum FeedRecord {
    Resource {
        name: String,
        #[serde(rename = "startTime", default)]
        start_time: f64,
    },
    Mutation {
        #[serde(default)]
        attribute: String,
    },
    Title {
        value: String,
    },
}

/// Page signals other than resource loads, drained incrementally.
#[derive(Debug, PartialEq, Eq)]
pub enum PageRecord {
    Mutation { attribute: String },
    Title { value: String },
}

/// JSONL page-feed adapter.
///
/// Resource records are re-read in full on every poll (the exporter mirrors
/// the page's accumulated performance timeline); mutation and title records
/// are consumed once each, tracked by a line cursor. Lines that fail to
/// parse are skipped, matching the tool's best-effort posture.
pub struct TelemetryFeed {
    path: PathBuf,
    drained_lines: Mutex<usize>,
}

impl TelemetryFeed {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            drained_lines: Mutex::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return mutation/title records appended since the previous drain.
    pub async fn drain_page_records(&self) -> Result<Vec<PageRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let lines: Vec<&str> = content.lines().collect();

        let mut cursor = self.drained_lines.lock().expect("TelemetryFeed poisoned");
        let fresh = lines.get(*cursor..).unwrap_or_default();
        let mut records = Vec::new();
        for line in fresh {
            match serde_json::from_str::<FeedRecord>(line) {
                Ok(FeedRecord::Mutation { attribute }) => {
                    records.push(PageRecord::Mutation { attribute });
                }
                Ok(FeedRecord::Title { value }) => {
                    records.push(PageRecord::Title { value });
                }
                Ok(FeedRecord::Resource { .. }) | Err(_) => {}
            }
        }
        *cursor = lines.len();

        Ok(records)
    }
}

#[async_trait]
impl TelemetrySource for TelemetryFeed {
    async fn resource_records(&self) -> Result<Vec<ResourceRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let records = content
            .lines()
            .filter_map(|line| serde_json::from_str::<FeedRecord>(line).ok())
            .filter_map(|record| match record {
                FeedRecord::Resource { name, start_time } => {
                    Some(ResourceRecord { name, start_time })
                }
                _ => None,
            })
            .collect();
        Ok(records)
    }
}

/// Bounded wait for the exporter to create the feed file.
pub async fn wait_for_feed(path: &Path, attempts: u32, delay: Duration) -> Result<()> {
    for _ in 0..attempts {
        if path.exists() {
            return Ok(());
        }
        tokio::time::sleep(delay).await;
    }
    Err(CaptureError::FeedUnavailable {
        path: path.to_path_buf(),
        attempts,
    })
}
