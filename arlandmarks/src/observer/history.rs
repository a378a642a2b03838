//! Pose history and derived-heading calculation.
//!
//! Maintains a bounded history of recent observer positions for deriving a
//! ground-track heading from position deltas when the device compass is
//! unavailable.
//!
//! # Design
//!
//! - Stores the last 30 samples at 1Hz (30 seconds of history)
//! - Heading is the bearing from the oldest to the newest position
//! - Used as a fallback when no compass heading arrives with a pose
//! - Too-small displacements yield no heading (the track would be noise)

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::geo::{self, GeoPoint};

/// Default maximum samples to retain (30 seconds at 1Hz).
const DEFAULT_MAX_SAMPLES: usize = 30;

/// Default minimum interval between samples (1Hz).
const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Minimum displacement for a reliable walking track, in meters.
const DEFAULT_MIN_TRACK_METERS: f64 = 8.0;

/// A single position sample in the history.
#[derive(Debug, Clone, Copy)]
pub struct PositionSample {
    /// Sampled coordinate.
    pub coordinate: GeoPoint,
    /// When the sample was recorded.
    pub timestamp: Instant,
}

/// Configuration for the pose history.
#[derive(Debug, Clone)]
pub struct PoseHistoryConfig {
    /// Maximum samples to retain.
    pub max_samples: usize,
    /// Minimum interval between samples.
    pub sample_interval: Duration,
    /// Minimum displacement for heading derivation, in meters.
    pub min_track_meters: f64,
}

impl Default for PoseHistoryConfig {
    fn default() -> Self {
        Self {
            max_samples: DEFAULT_MAX_SAMPLES,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            min_track_meters: DEFAULT_MIN_TRACK_METERS,
        }
    }
}

/// Bounded history of observer positions with heading derivation.
#[derive(Debug, Default)]
pub struct PoseHistory {
    samples: VecDeque<PositionSample>,
    config: PoseHistoryConfig,
    last_sample_time: Option<Instant>,
}

impl PoseHistory {
    /// Create a history with default configuration.
    pub fn new() -> Self {
        Self::with_config(PoseHistoryConfig::default())
    }

    /// Create a history with custom configuration.
    pub fn with_config(config: PoseHistoryConfig) -> Self {
        Self {
            samples: VecDeque::with_capacity(config.max_samples),
            config,
            last_sample_time: None,
        }
    }

    /// Record a position sample.
    ///
    /// Respects the sample interval: samples arriving too quickly are
    /// ignored. Returns true if the sample was recorded.
    pub fn record(&mut self, coordinate: GeoPoint) -> bool {
        let now = Instant::now();

        if let Some(last) = self.last_sample_time {
            if now.duration_since(last) < self.config.sample_interval {
                return false;
            }
        }

        self.push(PositionSample {
            coordinate,
            timestamp: now,
        });
        self.last_sample_time = Some(now);
        true
    }

    /// Record a sample with an explicit timestamp (for testing).
    #[cfg(test)]
    pub fn record_at(&mut self, coordinate: GeoPoint, timestamp: Instant) {
        self.push(PositionSample {
            coordinate,
            timestamp,
        });
    }

    fn push(&mut self, sample: PositionSample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.config.max_samples {
            self.samples.pop_front();
        }
    }

    /// Derive a ground-track heading from the position history.
    ///
    /// Returns the bearing from the oldest to the newest position in
    /// degrees clockwise from north, or `None` when there are fewer than
    /// two samples or the displacement is below the configured minimum.
    pub fn derived_heading_deg(&self) -> Option<f64> {
        if self.samples.len() < 2 {
            return None;
        }

        let oldest = self.samples.front()?;
        let newest = self.samples.back()?;

        let displacement =
            geo::surface_distance_meters(&oldest.coordinate, &newest.coordinate).ok()?;
        if displacement < self.config.min_track_meters {
            return None;
        }

        let track = geo::bearing(&oldest.coordinate, &newest.coordinate).ok()?;
        Some(track.to_degrees())
    }

    /// Number of samples currently held.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Time span covered by the samples.
    pub fn time_span(&self) -> Option<Duration> {
        let oldest = self.samples.front()?;
        let newest = self.samples.back()?;
        Some(newest.timestamp.duration_since(oldest.timestamp))
    }

    /// The most recent position, if any.
    pub fn latest(&self) -> Option<GeoPoint> {
        self.samples.back().map(|s| s.coordinate)
    }

    /// Drop all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.last_sample_time = None;
    }
}
