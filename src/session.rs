//! Canvas session wiring.
//!
//! A [`CanvasSession`] owns one store thread and triggers the one-time
//! catalog load, which is everything an embedding UI needs to get a live
//! canvas screen.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;

use anyhow::anyhow;

use crate::catalog::{ImageCatalog, StaticCatalog};
use crate::config::CanvasConfig;
use crate::intent::CanvasIntent;
use crate::state::CanvasViewState;
use crate::store::{CanvasStore, StoreHandle};

/// One canvas screen's worth of state machinery.
pub struct CanvasSession {
    handle: StoreHandle,
    worker: JoinHandle<()>,
}

impl CanvasSession {
    /// Spawn a store for `catalog` and issue the initial `LoadImages`.
    pub fn new(catalog: Box<dyn ImageCatalog + Send>, config: CanvasConfig) -> Self {
        let (handle, worker) = CanvasStore::spawn(catalog, config);
        handle.dispatch(CanvasIntent::LoadImages);
        Self { handle, worker }
    }

    /// Session backed by the built-in static catalog at default density.
    pub fn with_default_catalog() -> Self {
        Self::new(Box::new(StaticCatalog), CanvasConfig::default())
    }

    /// Handle for dispatching intents and reading snapshots. Clone it for
    /// each gesture tracker or observer that needs one.
    pub fn handle(&self) -> &StoreHandle {
        &self.handle
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> Arc<CanvasViewState> {
        self.handle.snapshot()
    }

    /// Subscribe to snapshot updates; the current snapshot arrives first.
    pub fn subscribe(&self) -> Receiver<Arc<CanvasViewState>> {
        self.handle.subscribe()
    }

    /// Stop the store and wait for its thread to exit.
    ///
    /// The thread exits once its intent queue closes, so any handle cloned
    /// from this session keeps the store alive until that clone is dropped.
    pub fn shutdown(self) -> anyhow::Result<()> {
        let Self { handle, worker } = self;
        drop(handle);
        worker
            .join()
            .map_err(|_| anyhow!("canvas store thread panicked"))
    }
}
