//! Hit resolution and selection state.
//!
//! When the user taps the screen, the renderer hit-tests the scene and
//! hands back the scene identifier of the topmost entity, or nothing when
//! the tap landed on empty space. The scene identifier was set to the
//! landmark id at anchor creation, so resolution is an exact identity
//! match: no fuzzy matching, no positional lookup.
//!
//! Selection is a two-state machine: `Unselected ⇄ Selected(landmark)`.
//! A tap on empty space or an explicit dismissal deselects; there is never
//! more than one selected landmark.

use crate::store::{Landmark, LandmarkId};

/// Resolve a scene identifier back to the landmark it was created from.
///
/// Returns `None` when no candidate matches. Absence is a valid outcome
/// meaning "deselect", not an error: the hit may have struck a
/// non-marker entity, or the landmark may have left the snapshot since
/// its anchor was created.
pub fn resolve<'a>(scene_identifier: &str, candidates: &'a [Landmark]) -> Option<&'a Landmark> {
    let id = LandmarkId::new(scene_identifier);
    candidates.iter().find(|lm| lm.id == id)
}

/// UI-facing selection state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    /// Nothing is selected.
    #[default]
    Unselected,
    /// Exactly one landmark is selected.
    Selected(Landmark),
}

impl Selection {
    /// Apply a hit-test result.
    ///
    /// A resolved hit selects that landmark; an unresolved or empty hit
    /// deselects.
    pub fn apply_hit(&mut self, hit: Option<&Landmark>) {
        *self = match hit {
            Some(landmark) => Selection::Selected(landmark.clone()),
            None => Selection::Unselected,
        };
    }

    /// Explicit dismissal (e.g. the info card was closed).
    pub fn dismiss(&mut self) {
        *self = Selection::Unselected;
    }

    /// The currently selected landmark, if any.
    pub fn selected(&self) -> Option<&Landmark> {
        match self {
            Selection::Selected(landmark) => Some(landmark),
            Selection::Unselected => None,
        }
    }

    /// Whether a landmark is currently selected.
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landmark(id: &str, name: &str) -> Landmark {
        Landmark {
            id: LandmarkId::new(id),
            name: name.to_string(),
            latitude: 47.37,
            longitude: 8.54,
            altitude: 0.0,
            description: None,
            year_built: None,
            architect: None,
            category: None,
            is_active: true,
        }
    }

    fn candidates() -> Vec<Landmark> {
        vec![
            landmark("lm-1", "Fraumünster"),
            landmark("lm-2", "Grossmünster"),
        ]
    }

    mod resolve {
        use super::*;

        #[test]
        fn test_unique_match() {
            let candidates = candidates();
            let found = resolve("lm-2", &candidates).unwrap();
            assert_eq!(found.name, "Grossmünster");
        }

        #[test]
        fn test_no_match_is_none() {
            let candidates = candidates();
            assert!(resolve("anchor-xyz", &candidates).is_none());
            assert!(resolve("", &candidates).is_none());
        }

        #[test]
        fn test_empty_candidates() {
            assert!(resolve("lm-1", &[]).is_none());
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn test_starts_unselected() {
            let selection = Selection::default();
            assert!(!selection.is_selected());
            assert!(selection.selected().is_none());
        }

        #[test]
        fn test_hit_selects() {
            let candidates = candidates();
            let mut selection = Selection::default();

            selection.apply_hit(resolve("lm-1", &candidates));
            assert_eq!(selection.selected().unwrap().name, "Fraumünster");
        }

        #[test]
        fn test_empty_hit_deselects() {
            let candidates = candidates();
            let mut selection = Selection::default();

            selection.apply_hit(resolve("lm-1", &candidates));
            selection.apply_hit(None);
            assert!(!selection.is_selected());
        }

        #[test]
        fn test_unmatched_hit_deselects() {
            let candidates = candidates();
            let mut selection = Selection::default();

            selection.apply_hit(resolve("lm-1", &candidates));
            selection.apply_hit(resolve("anchor-xyz", &candidates));
            assert!(!selection.is_selected());
        }

        #[test]
        fn test_reselection_replaces() {
            let candidates = candidates();
            let mut selection = Selection::default();

            selection.apply_hit(resolve("lm-1", &candidates));
            selection.apply_hit(resolve("lm-2", &candidates));
            assert_eq!(selection.selected().unwrap().name, "Grossmünster");
        }

        #[test]
        fn test_dismiss() {
            let candidates = candidates();
            let mut selection = Selection::default();

            selection.apply_hit(resolve("lm-1", &candidates));
            selection.dismiss();
            assert!(!selection.is_selected());
        }
    }
}
