//! The canvas state store - single owner of [`CanvasViewState`].
//!
//! One dedicated thread per canvas session owns the state and drains a
//! single-consumer intent queue, so concurrent gesture callbacks (the UI
//! toolkit delivers them on its own event-dispatch thread) apply one at a
//! time, in submission order, with no lost updates. After every applied
//! intent the store publishes a fresh immutable snapshot; readers never
//! observe partial mutation.
//!
//! The catalog fetch is the only asynchronous boundary. It runs on the
//! store thread, so intent producers never block on it.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::catalog::ImageCatalog;
use crate::config::CanvasConfig;
use crate::intent::{CanvasIntent, IntentSink};
use crate::state::CanvasViewState;
use crate::types::{ImageRef, point};

/// Snapshot cell shared between the store thread and its handles.
struct SharedSnapshot {
    current: RwLock<Arc<CanvasViewState>>,
    subscribers: Mutex<Vec<Sender<Arc<CanvasViewState>>>>,
}

/// Cloneable front door to a canvas store: enqueue intents, read or
/// subscribe to snapshots.
#[derive(Clone)]
pub struct StoreHandle {
    intents: Sender<CanvasIntent>,
    shared: Arc<SharedSnapshot>,
}

impl StoreHandle {
    /// Enqueue an intent. Total: if the store has stopped the intent is
    /// dropped with a warning rather than an error, matching the crate's
    /// no-op-on-invalid-input policy.
    pub fn dispatch(&self, intent: CanvasIntent) {
        if self.intents.send(intent).is_err() {
            warn!("intent dropped: canvas store has stopped");
        }
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> Arc<CanvasViewState> {
        self.shared.current.read().clone()
    }

    /// Subscribe to snapshot updates. The current snapshot is delivered
    /// immediately, then one per applied state change.
    ///
    /// The subscriber list is locked across the replay-and-register pair so
    /// a concurrent publish cannot fall between them.
    pub fn subscribe(&self) -> Receiver<Arc<CanvasViewState>> {
        let (tx, rx) = mpsc::channel();
        let mut subscribers = self.shared.subscribers.lock();
        let _ = tx.send(self.shared.current.read().clone());
        subscribers.push(tx);
        rx
    }
}

impl IntentSink for StoreHandle {
    fn dispatch(&self, intent: CanvasIntent) {
        StoreHandle::dispatch(self, intent);
    }
}

/// The store itself. Lives on its own thread; owned by nobody after
/// [`CanvasStore::spawn`] returns.
pub struct CanvasStore {
    state: CanvasViewState,
    catalog: Box<dyn ImageCatalog + Send>,
    config: CanvasConfig,
    shared: Arc<SharedSnapshot>,
    intents: Receiver<CanvasIntent>,
}

impl CanvasStore {
    /// Start a store thread for the given catalog and config. The thread
    /// runs until every handle (and thus every intent sender) is dropped.
    pub fn spawn(
        catalog: Box<dyn ImageCatalog + Send>,
        config: CanvasConfig,
    ) -> (StoreHandle, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel();
        let shared = Arc::new(SharedSnapshot {
            current: RwLock::new(Arc::new(CanvasViewState::default())),
            subscribers: Mutex::new(Vec::new()),
        });

        let store = CanvasStore {
            state: CanvasViewState::default(),
            catalog,
            config,
            shared: shared.clone(),
            intents: rx,
        };
        let worker = std::thread::spawn(move || store.run());

        (
            StoreHandle {
                intents: tx,
                shared,
            },
            worker,
        )
    }

    fn run(mut self) {
        info!("canvas store started");
        while let Ok(intent) = self.intents.recv() {
            self.apply(intent);
        }
        info!("canvas store stopped");
    }

    fn apply(&mut self, intent: CanvasIntent) {
        crate::profile_scope!("apply_intent");

        match intent {
            CanvasIntent::LoadImages => self.load_images(),
            CanvasIntent::StartDrag { image, global } => {
                self.state.start_drag(image, global);
                self.publish();
            }
            CanvasIntent::UpdateDrag { x, y } => {
                self.state.update_drag(x, y);
                self.publish();
            }
            CanvasIntent::EndDrag {
                drop_x,
                drop_y,
                canvas_origin,
            } => {
                self.state.end_drag(
                    point(drop_x, drop_y),
                    canvas_origin,
                    self.config.drag_preview_half_px(),
                );
                self.publish();
            }
            CanvasIntent::CancelDrag => {
                self.state.cancel_drag();
                self.publish();
            }
            CanvasIntent::UpdateTransform {
                id,
                dx,
                dy,
                new_scale,
                new_rotation,
            } => {
                self.state
                    .update_transform(&id, dx, dy, new_scale, new_rotation);
                self.publish();
            }
        }
    }

    /// Fetch the catalog and resolve entry names to image references.
    /// Runs on the store thread; the loading flag is published before the
    /// fetch so observers can show a spinner.
    fn load_images(&mut self) {
        self.state.load_started();
        self.publish();

        match self.catalog.fetch() {
            Ok(records) => {
                let images: Vec<ImageRef> = records
                    .iter()
                    .map(|record| ImageRef::resolve(&record.name))
                    .collect();
                debug!(count = images.len(), "catalog loaded");
                self.state.images_loaded(images);
            }
            Err(err) => {
                warn!(%err, "catalog load failed");
                self.state.load_failed(err.to_string());
            }
        }
        self.publish();
    }

    /// Replace the published snapshot wholesale and fan it out to
    /// subscribers. Disconnected subscribers are pruned here.
    fn publish(&mut self) {
        crate::profile_scope!("publish_snapshot");

        let snapshot = Arc::new(self.state.clone());
        *self.shared.current.write() = snapshot.clone();
        self.shared
            .subscribers
            .lock()
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}
