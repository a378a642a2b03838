//! AR placement: idempotency tracking and anchor computation.
//!
//! Owned state plus pure functions, instead of imperative mutation of a
//! live scene graph:
//!
//! - [`PlacementTracker`] owns the placed-identity record and decides,
//!   per pose update, which landmarks still need an anchor
//! - [`engine::place`] turns (pose, landmark) into an [`ArPlacement`],
//!   a data value the renderer consumes to create the actual anchor
//!
//! Keeping anchor creation as data means the whole pipeline is unit
//! testable without a renderer.

pub mod engine;
mod model;
mod tracker;

pub use model::{
    ArPlacement, LocalOffset, MarkerSpec, DEFAULT_MARKER_COLOR, DEFAULT_MARKER_ICON,
};
pub use tracker::PlacementTracker;
