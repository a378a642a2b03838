//! Observer stream contract.
//!
//! The platform location stack (outside this crate) produces position and
//! heading samples on its own callback path. This module defines the
//! contract the core consumes:
//!
//! - [`ObserverPose`] samples and [`ObserverError`] conditions, wrapped in
//!   [`ObserverEvent`] values delivered over an unbounded channel into the
//!   session (fire-and-forget, the producer never blocks)
//! - [`PoseFilter`], a minimum-movement gate that drops samples from a
//!   stationary observer
//! - [`PoseHistory`], which derives a fallback ground-track heading from
//!   position deltas when no compass heading is available
//!
//! Stream failures are never fatal: the session logs them and placement
//! stalls until the next usable pose arrives.

mod filter;
mod history;
mod model;

pub use filter::{PoseFilter, DEFAULT_MIN_MOVEMENT_METERS};
pub use history::{PoseHistory, PoseHistoryConfig, PositionSample};
pub use model::{ObserverError, ObserverEvent, ObserverPose};
