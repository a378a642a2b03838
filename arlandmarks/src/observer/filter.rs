//! Minimum-movement gate for incoming pose samples.
//!
//! Platform location streams deliver at high frequency even when the
//! observer is standing still. Processing every sample re-runs the
//! proximity scan for no benefit, so samples that moved less than a
//! configured threshold from the last accepted position are dropped.

use tracing::debug;

use crate::geo::{self, GeoPoint};

/// Default minimum movement between accepted samples, in meters.
///
/// Matches the distance filter the mobile location manager runs with.
pub const DEFAULT_MIN_MOVEMENT_METERS: f64 = 5.0;

/// Drops pose samples that have not moved far enough to matter.
#[derive(Debug)]
pub struct PoseFilter {
    min_movement_meters: f64,
    last_accepted: Option<GeoPoint>,
}

impl Default for PoseFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_MOVEMENT_METERS)
    }
}

impl PoseFilter {
    /// Create a filter with the given movement threshold in meters.
    pub fn new(min_movement_meters: f64) -> Self {
        Self {
            min_movement_meters,
            last_accepted: None,
        }
    }

    /// Decide whether a sample should be processed.
    ///
    /// The first sample is always accepted. A sample with non-finite
    /// coordinates is always rejected. Accepting a sample updates the
    /// reference position.
    pub fn accept(&mut self, coordinate: &GeoPoint) -> bool {
        if !coordinate.is_finite() {
            debug!(%coordinate, "dropping malformed pose sample");
            return false;
        }

        let Some(last) = self.last_accepted else {
            self.last_accepted = Some(*coordinate);
            return true;
        };

        match geo::surface_distance_meters(&last, coordinate) {
            Ok(moved) if moved >= self.min_movement_meters => {
                self.last_accepted = Some(*coordinate);
                true
            }
            Ok(moved) => {
                debug!(moved_meters = moved, "dropping pose below movement threshold");
                false
            }
            Err(_) => false,
        }
    }

    /// Forget the reference position, so the next sample is accepted
    /// unconditionally. Called on session reset.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_always_accepted() {
        let mut filter = PoseFilter::default();
        assert!(filter.accept(&GeoPoint::new(47.3769, 8.5417)));
    }

    #[test]
    fn test_small_movement_rejected() {
        let mut filter = PoseFilter::new(5.0);
        assert!(filter.accept(&GeoPoint::new(47.3769, 8.5417)));

        // ~1m north of the accepted position.
        assert!(!filter.accept(&GeoPoint::new(47.37690899, 8.5417)));
    }

    #[test]
    fn test_sufficient_movement_accepted() {
        let mut filter = PoseFilter::new(5.0);
        assert!(filter.accept(&GeoPoint::new(47.3769, 8.5417)));

        // ~11m north.
        assert!(filter.accept(&GeoPoint::new(47.3770, 8.5417)));
    }

    #[test]
    fn test_reference_only_updates_on_accept() {
        let mut filter = PoseFilter::new(5.0);
        assert!(filter.accept(&GeoPoint::new(47.3769, 8.5417)));

        // Creep north in ~3m steps: each is below the threshold relative
        // to the last *accepted* position until the cumulative movement
        // crosses it.
        assert!(!filter.accept(&GeoPoint::new(47.376927, 8.5417)));
        assert!(filter.accept(&GeoPoint::new(47.376954, 8.5417)));
    }

    #[test]
    fn test_malformed_sample_rejected() {
        let mut filter = PoseFilter::default();
        assert!(!filter.accept(&GeoPoint::new(f64::NAN, 8.5417)));

        // A malformed sample must not poison the reference.
        assert!(filter.accept(&GeoPoint::new(47.3769, 8.5417)));
    }

    #[test]
    fn test_reset_clears_reference() {
        let mut filter = PoseFilter::new(5.0);
        assert!(filter.accept(&GeoPoint::new(47.3769, 8.5417)));
        assert!(!filter.accept(&GeoPoint::new(47.3769, 8.5417)));

        filter.reset();
        assert!(filter.accept(&GeoPoint::new(47.3769, 8.5417)));
    }
}
