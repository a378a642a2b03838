//! Domain model for landmarks and their categories.
//!
//! These types mirror the data source's wire representation: a landmark
//! carries its category embedded by value, exactly as the backend returns
//! it. Entries are immutable once loaded into a snapshot; a refresh
//! replaces the whole snapshot, never individual records.

use std::fmt;

use serde::Deserialize;

use crate::geo::GeoPoint;

/// Stable, globally unique landmark identity.
///
/// The same value is used as the scene identifier attached to a marker at
/// anchor creation time, so a renderer hit-test result maps back to the
/// landmark without any fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct LandmarkId(String);

impl LandmarkId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string (used at the renderer boundary).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LandmarkId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LandmarkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A landmark category: display metadata shared by its landmarks.
///
/// Referenced by landmarks, never owned by them; the category list is its
/// own resource on the data source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    /// Category identity.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Marker color as a hex string (e.g. "#EF4444").
    pub color: String,
    /// Icon glyph rendered inside the marker balloon.
    pub icon: String,
    /// Position in category listings.
    #[serde(default)]
    pub sort_order: i32,
}

/// A geo-tagged landmark entity with display metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Landmark {
    /// Stable identity, unique across refreshes.
    pub id: LandmarkId,
    /// Display name.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Altitude in meters; 0.0 when unknown. Not used for placement.
    #[serde(default)]
    pub altitude: f64,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Construction year, where known.
    #[serde(default)]
    pub year_built: Option<i32>,
    /// Attribution metadata, where known.
    #[serde(default)]
    pub architect: Option<String>,
    /// Embedded category, if the landmark has one.
    #[serde(default)]
    pub category: Option<Category>,
    /// Inactive landmarks are excluded from proximity results.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Landmark {
    /// The landmark's geographic coordinate.
    pub fn coordinate(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude).with_altitude(self.altitude)
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.id)
    }
}
