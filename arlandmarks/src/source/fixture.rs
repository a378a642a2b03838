//! In-memory landmark source.
//!
//! Serves a fixed data set from memory. Used by the CLI's simulation mode
//! and anywhere a session should run without a network backend.

use crate::store::{Category, Landmark};

use super::{DataSourceError, LandmarkSource};

/// A landmark source that returns a fixed in-memory data set.
#[derive(Debug, Clone, Default)]
pub struct StaticLandmarkSource {
    landmarks: Vec<Landmark>,
    categories: Vec<Category>,
}

impl StaticLandmarkSource {
    /// Create a source serving the given data.
    pub fn new(landmarks: Vec<Landmark>, categories: Vec<Category>) -> Self {
        Self {
            landmarks,
            categories,
        }
    }
}

impl LandmarkSource for StaticLandmarkSource {
    fn fetch_landmarks(&self) -> Result<Vec<Landmark>, DataSourceError> {
        Ok(self.landmarks.clone())
    }

    fn fetch_categories(&self) -> Result<Vec<Category>, DataSourceError> {
        Ok(self.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LandmarkId;

    #[test]
    fn test_serves_fixed_data() {
        let source = StaticLandmarkSource::new(
            vec![Landmark {
                id: LandmarkId::new("lm-1"),
                name: "Grossmünster".to_string(),
                latitude: 47.3702,
                longitude: 8.5442,
                altitude: 0.0,
                description: None,
                year_built: None,
                architect: None,
                category: None,
                is_active: true,
            }],
            vec![],
        );

        assert_eq!(source.fetch_landmarks().unwrap().len(), 1);
        assert!(source.fetch_categories().unwrap().is_empty());
    }
}
