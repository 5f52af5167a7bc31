//! Headless engine for a drag-and-drop image canvas screen.
//!
//! A user long-presses an image in a horizontal carousel, drags it onto a
//! square canvas, and then pans/zooms/rotates each placed image with touch
//! gestures. This crate owns all of the state and geometry for that
//! screen; rendering, windowing, and theming stay in the embedding UI.
//!
//! # Architecture
//!
//! ```text
//! touch callbacks (UI thread)
//!     │
//!     ▼
//! input::CarouselDragTracker / input::TransformTracker
//!     │  CanvasIntent
//!     ▼
//! store::StoreHandle ──► intent queue ──► store thread (owns CanvasViewState)
//!                                              │
//!                                              ▼
//!                            published Arc<CanvasViewState> snapshots
//! ```
//!
//! Intents are applied strictly in submission order by a single store
//! thread, and every applied intent replaces the published snapshot
//! wholesale, so observers never see a half-updated canvas.
//!
//! # Quick start
//!
//! ```ignore
//! use imagecanvas::CanvasSession;
//!
//! let session = CanvasSession::with_default_catalog();
//! let snapshots = session.subscribe();
//! // hand session.handle() clones to the gesture trackers...
//! ```

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod intent;
pub mod logging;
pub mod perf;
pub mod session;
pub mod state;
pub mod store;
pub mod types;

pub use catalog::{ImageCatalog, ImageRecord, StaticCatalog};
pub use config::CanvasConfig;
pub use error::{CatalogError, CatalogResult};
pub use intent::{CanvasIntent, IntentSink};
pub use session::CanvasSession;
pub use state::CanvasViewState;
pub use store::{CanvasStore, StoreHandle};
pub use types::{CanvasImage, ImageId, ImageRef, Point, TempDrag, point};
