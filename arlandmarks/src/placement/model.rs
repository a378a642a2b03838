//! Placement output types handed to the renderer.
//!
//! An [`ArPlacement`] is a pure data description of an anchor the renderer
//! should create: a local-frame offset plus the marker's visual spec. The
//! core never touches the scene graph itself.

use crate::store::{Landmark, LandmarkId};

/// Marker color used when a landmark has no category.
pub const DEFAULT_MARKER_COLOR: &str = "#3B82F6";

/// Marker glyph used when a landmark has no category.
pub const DEFAULT_MARKER_ICON: &str = "📍";

/// Offset in the observer-centered AR frame, in meters.
///
/// `x` points east of the session origin, `z` south (negative z is the
/// device-forward direction at session start), `y` up. The AR frame is
/// single-precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalOffset {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl LocalOffset {
    /// Horizontal distance from the session origin.
    pub fn horizontal_radius(&self) -> f32 {
        (self.x * self.x + self.z * self.z).sqrt()
    }
}

/// Visual specification for a rendered marker.
///
/// Copied from the landmark and its category at placement time; neutral
/// defaults apply when the category is absent. Validating the color hex
/// string is the renderer's concern, not ours.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    /// Label text shown below the marker.
    pub label: String,
    /// Balloon color as a hex string.
    pub color: String,
    /// Icon glyph inside the balloon.
    pub icon: String,
}

impl MarkerSpec {
    /// Build the marker spec for a landmark.
    pub fn for_landmark(landmark: &Landmark) -> Self {
        let (color, icon) = match &landmark.category {
            Some(category) => (category.color.clone(), category.icon.clone()),
            None => (
                DEFAULT_MARKER_COLOR.to_string(),
                DEFAULT_MARKER_ICON.to_string(),
            ),
        };

        Self {
            label: landmark.name.clone(),
            color,
            icon,
        }
    }
}

/// A request to create one scene anchor.
///
/// Ephemeral: produced by the placement engine, consumed once by the
/// renderer. The scene identifier attached to the resulting anchor is the
/// landmark id, which is what hit resolution matches against later.
#[derive(Debug, Clone, PartialEq)]
pub struct ArPlacement {
    /// Identity of the source landmark.
    pub landmark_id: LandmarkId,
    /// Offset from the observer's AR session origin.
    pub offset: LocalOffset,
    /// Visual spec for the marker.
    pub marker: MarkerSpec,
}

impl ArPlacement {
    /// The identifier the renderer attaches to the created anchor.
    pub fn scene_identifier(&self) -> &str {
        self.landmark_id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Category;

    fn landmark_with_category(category: Option<Category>) -> Landmark {
        Landmark {
            id: LandmarkId::new("lm-1"),
            name: "Grossmünster".to_string(),
            latitude: 47.3702,
            longitude: 8.5442,
            altitude: 410.0,
            description: None,
            year_built: None,
            architect: None,
            category,
            is_active: true,
        }
    }

    #[test]
    fn test_marker_spec_from_category() {
        let lm = landmark_with_category(Some(Category {
            id: "cat-church".to_string(),
            name: "Kirche".to_string(),
            color: "#EF4444".to_string(),
            icon: "⛪".to_string(),
            sort_order: 1,
        }));

        let spec = MarkerSpec::for_landmark(&lm);
        assert_eq!(spec.label, "Grossmünster");
        assert_eq!(spec.color, "#EF4444");
        assert_eq!(spec.icon, "⛪");
    }

    #[test]
    fn test_marker_spec_defaults_without_category() {
        let spec = MarkerSpec::for_landmark(&landmark_with_category(None));
        assert_eq!(spec.color, DEFAULT_MARKER_COLOR);
        assert_eq!(spec.icon, DEFAULT_MARKER_ICON);
    }

    #[test]
    fn test_horizontal_radius() {
        let offset = LocalOffset {
            x: 3.0,
            y: 0.0,
            z: -4.0,
        };
        assert!((offset.horizontal_radius() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_scene_identifier_is_landmark_id() {
        let placement = ArPlacement {
            landmark_id: LandmarkId::new("lm-1"),
            offset: LocalOffset {
                x: 0.0,
                y: 0.0,
                z: -2.0,
            },
            marker: MarkerSpec::for_landmark(&landmark_with_category(None)),
        };
        assert_eq!(placement.scene_identifier(), "lm-1");
    }
}
