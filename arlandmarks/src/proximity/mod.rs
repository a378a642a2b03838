//! Proximity filtering of landmarks around the observer.
//!
//! Pure selection over a store snapshot: no state, no side effects, safe
//! to run on the producing callback context. Ordering follows the
//! snapshot's name order, so results are deterministic for identical
//! input.

use tracing::debug;

use crate::geo;
use crate::observer::ObserverPose;
use crate::store::{Landmark, Snapshot};

/// Select the landmarks within `radius_meters` of the observer.
///
/// Inactive landmarks are excluded. Entries whose coordinates are
/// malformed (non-finite) are skipped rather than propagated; the data is
/// bad, not the pose, so the rest of the snapshot still resolves.
pub fn nearby(snapshot: &Snapshot, pose: &ObserverPose, radius_meters: f64) -> Vec<Landmark> {
    snapshot
        .all()
        .iter()
        .filter(|lm| lm.is_active)
        .filter(|lm| {
            match geo::surface_distance_meters(&pose.coordinate, &lm.coordinate()) {
                Ok(distance) => distance <= radius_meters,
                Err(error) => {
                    debug!(landmark = %lm.id, %error, "skipping landmark with malformed coordinates");
                    false
                }
            }
        })
        .cloned()
        .collect()
}
