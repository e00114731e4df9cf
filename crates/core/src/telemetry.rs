use async_trait::async_trait;

use crate::{Result, types::ResourceRecord};

/// Substring identifying a streaming manifest among resource names.
pub const MANIFEST_NEEDLE: &str = "video.m3u8";

/// Read-only access to the host page's accumulated resource-load records.
///
/// Implementations are polled, not subscribed: the record list grows for the
/// lifetime of the page and every call returns the full accumulated list.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    async fn resource_records(&self) -> Result<Vec<ResourceRecord>>;
}

/// Pick the manifest candidate from a record list.
///
/// Matches records whose name contains `needle`, skips records at or before
/// `stale_cutoff`, and picks the largest start time. The record list carries
/// no ordering contract, so ordering by start time keeps the winner
/// deterministic; on equal start times the later record in scan order wins.
pub fn newest_manifest<'a>(
    records: &'a [ResourceRecord],
    needle: &str,
    stale_cutoff: Option<f64>,
) -> Option<&'a str> {
    records
        .iter()
        .filter(|r| r.name.contains(needle))
        .filter(|r| stale_cutoff.is_none_or(|cutoff| r.start_time > cutoff))
        .max_by(|a, b| a.start_time.total_cmp(&b.start_time))
        .map(|r| r.name.as_str())
}
