//! Placement engine: observer pose + landmark → AR anchor request.

use crate::geo::{self, GeoError};
use crate::observer::ObserverPose;
use crate::store::Landmark;

use super::model::{ArPlacement, LocalOffset, MarkerSpec};

/// Compute the AR placement for a landmark relative to an observer pose.
///
/// 1. Great-circle distance and bearing from observer to landmark.
/// 2. Distance compressed into the bounded AR radius.
/// 3. Offset in the local frame: `x = r·sin(b)`, `z = −r·cos(b)`, `y = 0`.
///
/// Placement is at eye level: the landmark's altitude metadata is not
/// applied as a vertical offset. The bearing is absolute (clockwise from
/// north); aligning the AR world to the device heading is the renderer's
/// world-alignment job.
///
/// Deterministic and pure: calling it repeatedly for the same inputs
/// yields the same result. Whether the placement actually enters the
/// scene is gated separately by the placement tracker.
///
/// # Errors
///
/// Returns [`GeoError`] when either coordinate is malformed (non-finite);
/// the caller skips the entry instead of creating a corrupt anchor.
pub fn place(pose: &ObserverPose, landmark: &Landmark) -> Result<ArPlacement, GeoError> {
    let target = landmark.coordinate();

    let distance = geo::surface_distance_meters(&pose.coordinate, &target)?;
    let bearing = geo::bearing(&pose.coordinate, &target)?;
    let radius = geo::compressed_radius(distance);

    let offset = LocalOffset {
        x: (radius * bearing.sin()) as f32,
        y: 0.0,
        z: -(radius * bearing.cos()) as f32,
    };

    Ok(ArPlacement {
        landmark_id: landmark.id.clone(),
        offset,
        marker: MarkerSpec::for_landmark(landmark),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::geo::GeoPoint;
    use crate::store::LandmarkId;

    fn landmark(id: &str, lat: f64, lon: f64) -> Landmark {
        Landmark {
            id: LandmarkId::new(id),
            name: id.to_string(),
            latitude: lat,
            longitude: lon,
            altitude: 0.0,
            description: None,
            year_built: None,
            architect: None,
            category: None,
            is_active: true,
        }
    }

    fn observer() -> ObserverPose {
        ObserverPose::new(GeoPoint::new(47.3769, 8.5417))
    }

    #[test]
    fn test_landmark_due_north_sits_on_negative_z() {
        // ~550m north of the observer.
        let lm = landmark("lm-north", 47.3819, 8.5417);
        let placement = place(&observer(), &lm).unwrap();

        assert!(placement.offset.x.abs() < 0.05);
        assert!(placement.offset.z < 0.0);
        assert_eq!(placement.offset.y, 0.0);
    }

    #[test]
    fn test_landmark_due_east_sits_on_positive_x() {
        // ~750m east of the observer.
        let lm = landmark("lm-east", 47.3769, 8.5517);
        let placement = place(&observer(), &lm).unwrap();

        assert!(placement.offset.x > 0.0);
        assert!(placement.offset.z.abs() < 0.05);
    }

    #[test]
    fn test_offset_radius_matches_compression() {
        let observer = observer();
        let lm = landmark("lm-gross", 47.3702, 8.5442);

        let distance = geo::surface_distance_meters(
            &observer.coordinate,
            &lm.coordinate(),
        )
        .unwrap();
        let expected = geo::compressed_radius(distance) as f32;

        let placement = place(&observer, &lm).unwrap();
        assert!(
            (placement.offset.horizontal_radius() - expected).abs() < 1e-4,
            "Offset radius {} does not match compressed radius {}",
            placement.offset.horizontal_radius(),
            expected
        );
    }

    #[test]
    fn test_eye_level_ignores_altitude() {
        let observer = observer();
        let mut lm = landmark("lm-gross", 47.3702, 8.5442);
        lm.altitude = 410.0;

        let placement = place(&observer, &lm).unwrap();
        assert_eq!(placement.offset.y, 0.0);
    }

    #[test]
    fn test_deterministic() {
        let observer = observer();
        let lm = landmark("lm-gross", 47.3702, 8.5442);

        let first = place(&observer, &lm).unwrap();
        let second = place(&observer, &lm).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_landmark_is_an_error() {
        let lm = landmark("lm-bad", f64::NAN, 8.5442);
        assert!(place(&observer(), &lm).is_err());
    }

    #[test]
    fn test_malformed_pose_is_an_error() {
        let pose = ObserverPose::new(GeoPoint::new(47.3769, f64::INFINITY));
        let lm = landmark("lm-gross", 47.3702, 8.5442);
        assert!(place(&pose, &lm).is_err());
    }
}
