//! Landmark snapshot store.
//!
//! Holds the latest snapshot of landmarks and categories, replaced
//! atomically on each refresh from the data source. There is no per-entry
//! mutation API: a failed refresh leaves the previous snapshot fully
//! intact, and readers on hot paths (pose processing, hit resolution)
//! work against a cheap `Arc` clone that is immune to concurrent
//! replacement.
//!
//! # Ordering
//!
//! Landmarks are ordered by name, categories by sort order. The order is
//! stable for identical input so downstream results are deterministic.

mod model;

pub use model::{Category, Landmark, LandmarkId};

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// An immutable snapshot of the known landmarks and categories.
#[derive(Debug, Default)]
pub struct Snapshot {
    landmarks: Vec<Landmark>,
    categories: Vec<Category>,
    by_id: HashMap<LandmarkId, usize>,
}

impl Snapshot {
    fn build(mut landmarks: Vec<Landmark>, mut categories: Vec<Category>) -> Self {
        landmarks.sort_by(|a, b| a.name.cmp(&b.name));
        categories.sort_by_key(|c| c.sort_order);

        let by_id = landmarks
            .iter()
            .enumerate()
            .map(|(index, lm)| (lm.id.clone(), index))
            .collect();

        Self {
            landmarks,
            categories,
            by_id,
        }
    }

    /// All landmarks, ordered by name.
    pub fn all(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// All categories, ordered by sort order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a landmark by identity.
    pub fn by_id(&self, id: &LandmarkId) -> Option<&Landmark> {
        self.by_id.get(id).map(|&index| &self.landmarks[index])
    }

    /// Number of landmarks in the snapshot.
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Whether the snapshot contains no landmarks.
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

/// Shared, atomically replaceable landmark snapshot.
///
/// Cloning the store is cheap and all clones observe the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct LandmarkStore {
    inner: Arc<RwLock<Arc<Snapshot>>>,
}

impl LandmarkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a snapshot.
    pub fn with_data(landmarks: Vec<Landmark>, categories: Vec<Category>) -> Self {
        let store = Self::new();
        store.replace(landmarks, categories);
        store
    }

    /// Replace the current snapshot wholesale.
    ///
    /// This is the only write path; it is called with a complete, freshly
    /// fetched data set. Readers holding an older snapshot keep it until
    /// they re-query.
    pub fn replace(&self, landmarks: Vec<Landmark>, categories: Vec<Category>) {
        let snapshot = Arc::new(Snapshot::build(landmarks, categories));
        *self.inner.write() = snapshot;
    }

    /// The current snapshot as a cheap shared handle.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.inner.read().clone()
    }

    /// All landmarks in the current snapshot, ordered by name.
    pub fn all(&self) -> Vec<Landmark> {
        self.snapshot().all().to_vec()
    }

    /// Look up a landmark by identity in the current snapshot.
    pub fn by_id(&self, id: &LandmarkId) -> Option<Landmark> {
        self.snapshot().by_id(id).cloned()
    }
}
