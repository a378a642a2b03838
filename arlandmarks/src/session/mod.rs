//! AR session orchestration.
//!
//! [`ArSession`] wires the pipeline together: pose events arrive on an
//! unbounded channel, each accepted pose narrows the store snapshot to
//! nearby landmarks, the placement tracker diffs against what is already
//! in the scene, and the engine's anchor requests go out on a second
//! channel for the renderer to consume.
//!
//! # Concurrency
//!
//! Pose processing is single-writer: the session task handles one event
//! to completion before taking the next, so concurrent pose updates can
//! never race on the placement record and the "place at most once"
//! invariant holds. Hit resolution only reads the current snapshot and
//! may run from any thread concurrently with pose processing.
//!
//! # Example
//!
//! ```ignore
//! use arlandmarks::session::{ArSession, SessionConfig};
//! use arlandmarks::store::LandmarkStore;
//! use tokio::sync::mpsc;
//!
//! let store = LandmarkStore::new();
//! let (session, mut anchors) = ArSession::new(store, SessionConfig::default());
//! let (pose_tx, pose_rx) = mpsc::unbounded_channel();
//! let handle = Arc::clone(&session).start(pose_rx);
//!
//! // Feed poses from the platform location stream...
//! // ...and create scene anchors from `anchors` on the render side.
//! ```

mod config;
mod telemetry;

pub use config::{SessionConfig, DEFAULT_RADIUS_METERS};
pub use telemetry::{SessionTelemetry, TelemetrySnapshot};

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::observer::{ObserverEvent, ObserverPose, PoseFilter, PoseHistory};
use crate::placement::{engine, ArPlacement, PlacementTracker};
use crate::proximity;
use crate::selection::{self, Selection};
use crate::source::{DataSourceError, LandmarkSource};
use crate::store::{Landmark, LandmarkStore};

/// Coordinates one AR session.
///
/// All collaborators are injected at construction; the session holds no
/// process-wide state and multiple sessions can coexist (e.g. in tests).
pub struct ArSession {
    store: LandmarkStore,
    config: SessionConfig,
    tracker: Mutex<PlacementTracker>,
    pose_filter: Mutex<PoseFilter>,
    history: Mutex<PoseHistory>,
    last_compass_heading: Mutex<Option<f64>>,
    selection: Mutex<Selection>,
    telemetry: Arc<SessionTelemetry>,
    /// Dropped when the pose loop ends, so the renderer side observes
    /// end-of-session as a closed channel after draining.
    anchor_tx: Mutex<Option<UnboundedSender<ArPlacement>>>,
    cancellation: CancellationToken,
}

impl ArSession {
    /// Create a session over the given store.
    ///
    /// Returns the session handle and the receiving end of the anchor
    /// channel. The renderer side consumes [`ArPlacement`] values from it
    /// and creates one scene anchor per value, tagging each anchor with
    /// the placement's scene identifier.
    pub fn new(
        store: LandmarkStore,
        config: SessionConfig,
    ) -> (Arc<Self>, UnboundedReceiver<ArPlacement>) {
        let (anchor_tx, anchor_rx) = mpsc::unbounded_channel();

        let session = Arc::new(Self {
            pose_filter: Mutex::new(PoseFilter::new(config.min_movement_meters)),
            store,
            config,
            tracker: Mutex::new(PlacementTracker::new()),
            history: Mutex::new(PoseHistory::new()),
            last_compass_heading: Mutex::new(None),
            selection: Mutex::new(Selection::default()),
            telemetry: Arc::new(SessionTelemetry::new()),
            anchor_tx: Mutex::new(Some(anchor_tx)),
            cancellation: CancellationToken::new(),
        });

        (session, anchor_rx)
    }

    /// Start the pose-processing loop.
    ///
    /// Runs until the pose channel closes or [`stop`](Self::stop) is
    /// called. Events are processed strictly in order, one at a time.
    pub fn start(self: Arc<Self>, mut rx: UnboundedReceiver<ObserverEvent>) -> JoinHandle<()> {
        let session = self;

        tokio::spawn(async move {
            info!(
                radius_meters = session.config.radius_meters,
                "AR session started"
            );

            loop {
                tokio::select! {
                    _ = session.cancellation.cancelled() => {
                        info!("AR session cancelled");
                        break;
                    }
                    event = rx.recv() => {
                        match event {
                            Some(ObserverEvent::Pose(pose)) => session.handle_pose(pose),
                            Some(ObserverEvent::Signal(error)) => {
                                session.telemetry.signal_reported();
                                warn!(%error, "observer stream condition; placement stalls until the next pose");
                            }
                            None => {
                                info!("observer stream closed; AR session stopping");
                                break;
                            }
                        }
                    }
                }
            }

            // Close the anchor channel so the renderer side can finish
            // draining and observe end-of-session.
            session.anchor_tx.lock().take();
        })
    }

    /// Process one pose update to completion.
    fn handle_pose(&self, pose: ObserverPose) {
        self.telemetry.pose_received();

        if let Some(heading) = pose.heading_deg {
            *self.last_compass_heading.lock() = Some(heading);
        }

        if !self.pose_filter.lock().accept(&pose.coordinate) {
            return;
        }
        self.telemetry.pose_accepted();
        self.history.lock().record(pose.coordinate);

        let snapshot = self.store.snapshot();
        let nearby = proximity::nearby(&snapshot, &pose, self.config.radius_meters);

        let mut tracker = self.tracker.lock();
        let eligible = tracker.newly_eligible(&nearby);
        self.telemetry
            .already_placed((nearby.len() - eligible.len()) as u64);

        debug!(
            nearby = nearby.len(),
            new = eligible.len(),
            "processed pose {}",
            pose.coordinate
        );

        let anchor_tx = self.anchor_tx.lock();
        let Some(anchor_tx) = anchor_tx.as_ref() else {
            return;
        };

        for landmark in eligible {
            match engine::place(&pose, &landmark) {
                Ok(placement) => {
                    if anchor_tx.send(placement).is_err() {
                        warn!("anchor channel closed; dropping placement requests");
                        return;
                    }
                    tracker.mark_placed(landmark.id.clone());
                    self.telemetry.placement_issued();
                    info!(landmark = %landmark, "placement issued");
                }
                Err(error) => {
                    self.telemetry.malformed_skipped();
                    warn!(landmark = %landmark.id, %error, "skipping placement for malformed coordinates");
                }
            }
        }
    }

    /// Refresh the landmark snapshot from the data source.
    ///
    /// All-or-nothing: on any fetch error the previous snapshot is kept
    /// and the error is returned unmodified.
    pub fn refresh(&self, source: &dyn LandmarkSource) -> Result<(), DataSourceError> {
        let landmarks = source.fetch_landmarks().map_err(|error| {
            warn!(%error, "landmark refresh failed; keeping previous snapshot");
            error
        })?;
        let categories = source.fetch_categories().map_err(|error| {
            warn!(%error, "category refresh failed; keeping previous snapshot");
            error
        })?;

        info!(
            landmarks = landmarks.len(),
            categories = categories.len(),
            "landmark snapshot refreshed"
        );
        self.store.replace(landmarks, categories);
        Ok(())
    }

    /// Resolve a renderer hit-test result and update the selection.
    ///
    /// `None` (tap on empty space) and an unmatched identifier both
    /// deselect. Returns the newly selected landmark, if any.
    pub fn resolve_hit(&self, scene_identifier: Option<&str>) -> Option<Landmark> {
        let snapshot = self.store.snapshot();
        let hit = scene_identifier.and_then(|id| selection::resolve(id, snapshot.all()));

        let mut selection = self.selection.lock();
        selection.apply_hit(hit);
        selection.selected().cloned()
    }

    /// The currently selected landmark, if any.
    pub fn selected(&self) -> Option<Landmark> {
        self.selection.lock().selected().cloned()
    }

    /// Explicitly dismiss the selection (info card closed).
    pub fn dismiss_selection(&self) {
        self.selection.lock().dismiss();
    }

    /// Best-known observer heading in degrees clockwise from north.
    ///
    /// Prefers the compass heading from the most recent pose that carried
    /// one, falling back to the ground track derived from position
    /// history.
    pub fn heading_deg(&self) -> Option<f64> {
        (*self.last_compass_heading.lock()).or_else(|| self.history.lock().derived_heading_deg())
    }

    /// Number of landmarks placed this session.
    pub fn placed_count(&self) -> usize {
        self.tracker.lock().placed_count()
    }

    /// Point-in-time copy of the session counters.
    pub fn telemetry_snapshot(&self) -> TelemetrySnapshot {
        self.telemetry.snapshot()
    }

    /// The landmark store this session reads from.
    pub fn store(&self) -> &LandmarkStore {
        &self.store
    }

    /// Reset the session to its initial placement state.
    ///
    /// Called when the AR world itself is torn down and rebuilt. Clears
    /// the placement record, movement gate, pose history and selection;
    /// the landmark snapshot is kept.
    pub fn reset(&self) {
        self.tracker.lock().reset();
        self.pose_filter.lock().reset();
        self.history.lock().clear();
        *self.last_compass_heading.lock() = None;
        self.selection.lock().dismiss();
        info!("AR session reset");
    }

    /// Stop the pose-processing loop.
    pub fn stop(&self) {
        self.cancellation.cancel();
    }
}
