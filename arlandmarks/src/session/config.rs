//! AR session configuration.

use crate::observer::DEFAULT_MIN_MOVEMENT_METERS;

/// Default proximity radius around the observer, in meters.
///
/// Landmarks beyond this are not considered for placement. 2 km keeps a
/// city-center data set useful without flooding the scene.
pub const DEFAULT_RADIUS_METERS: f64 = 2000.0;

/// Configuration for one AR session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Proximity radius in meters.
    pub radius_meters: f64,

    /// Minimum observer movement between processed poses, in meters.
    pub min_movement_meters: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            radius_meters: DEFAULT_RADIUS_METERS,
            min_movement_meters: DEFAULT_MIN_MOVEMENT_METERS,
        }
    }
}

impl SessionConfig {
    /// Set the proximity radius.
    pub fn with_radius_meters(mut self, radius_meters: f64) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    /// Set the movement gate threshold.
    pub fn with_min_movement_meters(mut self, min_movement_meters: f64) -> Self {
        self.min_movement_meters = min_movement_meters;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.radius_meters, 2000.0);
        assert_eq!(config.min_movement_meters, 5.0);
    }

    #[test]
    fn test_builders() {
        let config = SessionConfig::default()
            .with_radius_meters(500.0)
            .with_min_movement_meters(0.0);
        assert_eq!(config.radius_meters, 500.0);
        assert_eq!(config.min_movement_meters, 0.0);
    }
}
