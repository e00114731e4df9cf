use std::sync::Mutex;

/// Transient state for one lesson-viewing session.
///
/// Holds the last observed manifest URL (latest-wins, no history) and the
/// telemetry staleness cutoff. The locator writes, the session tracker
/// clears, UI sinks read; each touch is a short mutex hold.
pub struct CaptureSession {
    manifest: Mutex<Option<String>>,
    lesson_title: Mutex<Option<String>>,
    /// Largest resource start time any scan has observed so far.
    horizon: Mutex<f64>,
    /// Records at or before this start time belong to a previous lesson.
    stale_before: Mutex<Option<f64>>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self {
            manifest: Mutex::new(None),
            lesson_title: Mutex::new(None),
            horizon: Mutex::new(0.0),
            stale_before: Mutex::new(None),
        }
    }

    /// Store a newly observed manifest URL. Returns `true` only when the
    /// stored value actually changed, so callers can skip duplicate
    /// notifications for an unchanged telemetry list.
    pub fn capture(&self, url: &str) -> bool {
        let mut manifest = self.manifest.lock().expect("CaptureSession poisoned");
        if manifest.as_deref() == Some(url) {
            return false;
        }
        *manifest = Some(url.to_string());
        true
    }

    pub fn manifest(&self) -> Option<String> {
        self.manifest.lock().expect("CaptureSession poisoned").clone()
    }

    /// Advance the telemetry high-water mark after a scan pass.
    pub fn note_records_through(&self, latest_start_time: f64) {
        let mut horizon = self.horizon.lock().expect("CaptureSession poisoned");
        if latest_start_time > *horizon {
            *horizon = latest_start_time;
        }
    }

    /// Start time at or before which resource records are ignored, if a
    /// lesson change has pinned one.
    pub fn stale_cutoff(&self) -> Option<f64> {
        *self.stale_before.lock().expect("CaptureSession poisoned")
    }

    /// Invalidate captured state on a lesson change.
    ///
    /// Drops the manifest URL and pins the staleness cutoff to the current
    /// telemetry horizon, so rescanning the accumulated record list cannot
    /// resurrect a URL observed before the change.
    pub fn clear(&self) {
        let horizon = *self.horizon.lock().expect("CaptureSession poisoned");
        *self.stale_before.lock().expect("CaptureSession poisoned") = Some(horizon);
        *self.manifest.lock().expect("CaptureSession poisoned") = None;
    }

    pub fn set_lesson_title(&self, title: &str) {
        *self.lesson_title.lock().expect("CaptureSession poisoned") = Some(title.to_string());
    }

    pub fn lesson_title(&self) -> Option<String> {
        self.lesson_title
            .lock()
            .expect("CaptureSession poisoned")
            .clone()
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_reports_change_only_once() {
        let session = CaptureSession::new();
        assert!(session.capture("https://cdn.example/a/video.m3u8"));
        assert!(!session.capture("https://cdn.example/a/video.m3u8"));
        assert_eq!(
            session.manifest().as_deref(),
            Some("https://cdn.example/a/video.m3u8")
        );
    }

    #[test]
    fn capture_is_latest_wins() {
        let session = CaptureSession::new();
        session.capture("https://cdn.example/a/video.m3u8");
        assert!(session.capture("https://cdn.example/b/video.m3u8"));
        assert_eq!(
            session.manifest().as_deref(),
            Some("https://cdn.example/b/video.m3u8")
        );
    }

    #[test]
    fn clear_drops_manifest_and_pins_cutoff() {
        let session = CaptureSession::new();
        session.capture("https://cdn.example/a/video.m3u8");
        session.note_records_through(1500.0);
        session.clear();

        assert_eq!(session.manifest(), None);
        assert_eq!(session.stale_cutoff(), Some(1500.0));

        // A fresher record moves the horizon but not the pinned cutoff.
        session.note_records_through(2000.0);
        assert_eq!(session.stale_cutoff(), Some(1500.0));
    }

    #[test]
    fn horizon_never_moves_backwards() {
        let session = CaptureSession::new();
        session.note_records_through(900.0);
        session.note_records_through(400.0);
        session.clear();
        assert_eq!(session.stale_cutoff(), Some(900.0));
    }

    #[test]
    fn no_cutoff_before_first_clear() {
        let session = CaptureSession::new();
        session.note_records_through(300.0);
        assert_eq!(session.stale_cutoff(), None);
    }
}
