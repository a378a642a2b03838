//! Core geographic value types.

use std::fmt;

use thiserror::Error;

/// Mean Earth radius in meters, used by the haversine distance calculation.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A geographic coordinate in the WGS84 frame.
///
/// Latitude and longitude are in degrees, altitude in meters above sea
/// level. Altitude defaults to 0.0 when unknown; it is carried for display
/// purposes and is not used for AR placement (markers sit at eye level).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees (positive = north).
    pub latitude: f64,
    /// Longitude in degrees (positive = east).
    pub longitude: f64,
    /// Altitude in meters above sea level.
    pub altitude: f64,
}

impl GeoPoint {
    /// Create a point at sea level.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: 0.0,
        }
    }

    /// Set the altitude in meters.
    pub fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = altitude;
        self
    }

    /// Whether both horizontal components are finite numbers.
    ///
    /// Altitude is not checked: it never participates in bearing or
    /// distance calculations.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Errors produced by geographic calculations.
///
/// Malformed coordinates (non-finite components) yield an error instead of
/// letting NaN propagate into scene placement. Callers skip the affected
/// entry and continue.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    /// A latitude component was NaN or infinite.
    #[error("non-finite latitude: {0}")]
    NonFiniteLatitude(f64),

    /// A longitude component was NaN or infinite.
    #[error("non-finite longitude: {0}")]
    NonFiniteLongitude(f64),
}
