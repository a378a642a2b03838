//! Session telemetry counters.
//!
//! Lock-free atomic counters recorded on the pose-processing path, with a
//! point-in-time snapshot for display surfaces (CLI summary, overlay
//! debug view). Counting never blocks placement.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters for one AR session.
#[derive(Debug, Default)]
pub struct SessionTelemetry {
    poses_received: AtomicU64,
    poses_accepted: AtomicU64,
    placements_issued: AtomicU64,
    already_placed: AtomicU64,
    malformed_skipped: AtomicU64,
    signal_reports: AtomicU64,
}

impl SessionTelemetry {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// A pose event arrived from the observer stream.
    pub fn pose_received(&self) {
        self.poses_received.fetch_add(1, Ordering::Relaxed);
    }

    /// A pose passed the movement gate and was processed.
    pub fn pose_accepted(&self) {
        self.poses_accepted.fetch_add(1, Ordering::Relaxed);
    }

    /// An anchor creation request was emitted.
    pub fn placement_issued(&self) {
        self.placements_issued.fetch_add(1, Ordering::Relaxed);
    }

    /// A nearby landmark was skipped because it is already placed.
    pub fn already_placed(&self, count: u64) {
        self.already_placed.fetch_add(count, Ordering::Relaxed);
    }

    /// A landmark was skipped because its coordinates are malformed.
    pub fn malformed_skipped(&self) {
        self.malformed_skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// The observer stream reported a signal condition.
    pub fn signal_reported(&self) {
        self.signal_reports.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of all counters.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            poses_received: self.poses_received.load(Ordering::Relaxed),
            poses_accepted: self.poses_accepted.load(Ordering::Relaxed),
            placements_issued: self.placements_issued.load(Ordering::Relaxed),
            already_placed: self.already_placed.load(Ordering::Relaxed),
            malformed_skipped: self.malformed_skipped.load(Ordering::Relaxed),
            signal_reports: self.signal_reports.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of session counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TelemetrySnapshot {
    /// Pose events received, including gated ones.
    pub poses_received: u64,
    /// Poses that passed the movement gate.
    pub poses_accepted: u64,
    /// Anchor creation requests emitted.
    pub placements_issued: u64,
    /// Nearby landmarks skipped as already placed.
    pub already_placed: u64,
    /// Landmarks skipped for malformed coordinates.
    pub malformed_skipped: u64,
    /// Signal conditions reported by the observer stream.
    pub signal_reports: u64,
}
