//! Observer pose model and stream error conditions.

use std::time::Instant;

use thiserror::Error;

use crate::geo::GeoPoint;

/// A position/heading sample for the observer.
///
/// Produced by the platform location stream, consumed transiently by the
/// proximity filter and placement engine. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverPose {
    /// Geographic coordinate of the observer.
    pub coordinate: GeoPoint,
    /// Compass heading in degrees clockwise from north, when available.
    ///
    /// The placement engine does not apply this itself; world alignment to
    /// heading is the renderer's responsibility. It is carried for
    /// consumers and as input to the derived-track fallback.
    pub heading_deg: Option<f64>,
    /// When the sample was taken.
    pub timestamp: Instant,
}

impl ObserverPose {
    /// Create a pose at the given coordinate, timestamped now.
    pub fn new(coordinate: GeoPoint) -> Self {
        Self {
            coordinate,
            heading_deg: None,
            timestamp: Instant::now(),
        }
    }

    /// Attach a compass heading in degrees.
    pub fn with_heading(mut self, heading_deg: f64) -> Self {
        self.heading_deg = Some(heading_deg);
        self
    }

    /// Create a pose with an explicit timestamp (for testing).
    pub fn with_timestamp(coordinate: GeoPoint, timestamp: Instant) -> Self {
        Self {
            coordinate,
            heading_deg: None,
            timestamp,
        }
    }
}

/// Failure conditions reported by the observer stream.
///
/// Neither is fatal to the session: placement stalls until the next usable
/// pose arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ObserverError {
    /// The user denied location access. Recoverable only by external user
    /// action; surfaced as a persistent user-visible state.
    #[error("location permission denied")]
    PermissionDenied,

    /// No position or heading signal is currently available.
    #[error("position signal unavailable")]
    SignalUnavailable,
}

/// An event delivered from the observer stream to the session.
///
/// Sent over an unbounded channel so the producer never blocks; the
/// session drains events one at a time (single-writer discipline).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObserverEvent {
    /// A new position sample.
    Pose(ObserverPose),
    /// The stream reported a failure condition.
    Signal(ObserverError),
}
