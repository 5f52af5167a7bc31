//! Store workflow tests.
//!
//! These spawn the real store thread and assert on the snapshot stream.
//! Every applied intent publishes exactly once (the catalog load publishes
//! twice: loading, then outcome), and a fresh subscription replays the
//! current snapshot first - so expected snapshot counts are deterministic.

use crate::helpers::{
    FailingCatalog, assert_approx, assert_placed_count, image, init_logging, recv_snapshots,
    test_config,
};
use imagecanvas::catalog::StaticCatalog;
use imagecanvas::intent::CanvasIntent;
use imagecanvas::store::CanvasStore;
use imagecanvas::types::point;

#[test]
fn test_load_then_drag_then_drop_workflow() {
    init_logging();
    let (handle, _worker) = CanvasStore::spawn(Box::new(StaticCatalog), test_config());
    let snapshots = handle.subscribe();

    handle.dispatch(CanvasIntent::LoadImages);
    handle.dispatch(CanvasIntent::StartDrag {
        image: image(2),
        global: point(40.0, 700.0),
    });
    handle.dispatch(CanvasIntent::UpdateDrag { x: 200.0, y: 200.0 });
    handle.dispatch(CanvasIntent::EndDrag {
        drop_x: 200.0,
        drop_y: 200.0,
        canvas_origin: point(50.0, 50.0),
    });

    // initial + (loading, loaded) + start + update + end
    let seen = recv_snapshots(&snapshots, 6);

    assert!(!seen[0].is_loading);
    assert!(seen[1].is_loading);
    assert_eq!(seen[2].images.len(), 10);
    assert!(!seen[2].is_loading);

    let dragging = &seen[3];
    assert_eq!(dragging.temp_drag.unwrap().position(), point(40.0, 700.0));
    assert_eq!(seen[4].temp_drag.unwrap().position(), point(200.0, 200.0));

    let done = &seen[5];
    assert_eq!(done.temp_drag, None);
    assert_placed_count(done, 1);
    assert_approx(done.canvas_images[0].offset_x, 120.0);
    assert_approx(done.canvas_images[0].offset_y, 120.0);
}

#[test]
fn test_failed_load_surfaces_error_and_keeps_canvas() {
    init_logging();
    let (handle, _worker) =
        CanvasStore::spawn(Box::new(FailingCatalog("backend down")), test_config());
    let snapshots = handle.subscribe();

    handle.dispatch(CanvasIntent::LoadImages);

    let seen = recv_snapshots(&snapshots, 3);
    let failed = &seen[2];
    assert!(!failed.is_loading);
    assert_eq!(
        failed.error.as_deref(),
        Some("catalog unavailable: backend down")
    );
    assert!(failed.images.is_empty());
    assert_placed_count(failed, 0);
}

#[test]
fn test_transform_intents_apply_in_submission_order() {
    init_logging();
    let (handle, _worker) = CanvasStore::spawn(Box::new(StaticCatalog), test_config());
    let snapshots = handle.subscribe();

    // Commit one image at (120, 120).
    handle.dispatch(CanvasIntent::StartDrag {
        image: image(1),
        global: point(0.0, 0.0),
    });
    handle.dispatch(CanvasIntent::EndDrag {
        drop_x: 200.0,
        drop_y: 200.0,
        canvas_origin: point(50.0, 50.0),
    });
    let committed = recv_snapshots(&snapshots, 3).pop().unwrap();
    let id = committed.canvas_images[0].id.clone();

    // A burst of gesture deltas, like a fast two-finger pan.
    let deltas = [(5.0, 0.0), (5.0, 1.0), (-2.0, 3.0), (0.5, -0.5)];
    for (dx, dy) in deltas {
        handle.dispatch(CanvasIntent::UpdateTransform {
            id: id.clone(),
            dx,
            dy,
            new_scale: None,
            new_rotation: None,
        });
    }

    let last = recv_snapshots(&snapshots, deltas.len()).pop().unwrap();
    let img = last.get_image(&id).unwrap();
    assert_approx(img.offset_x, 120.0 + 8.5);
    assert_approx(img.offset_y, 120.0 + 3.5);
}

#[test]
fn test_noop_intents_leave_state_unchanged() {
    init_logging();
    let (handle, _worker) = CanvasStore::spawn(Box::new(StaticCatalog), test_config());
    let snapshots = handle.subscribe();

    // No drag active, no such image: all of these are published no-ops.
    handle.dispatch(CanvasIntent::UpdateDrag { x: 1.0, y: 1.0 });
    handle.dispatch(CanvasIntent::EndDrag {
        drop_x: 200.0,
        drop_y: 200.0,
        canvas_origin: point(0.0, 0.0),
    });
    handle.dispatch(CanvasIntent::CancelDrag);

    let seen = recv_snapshots(&snapshots, 4);
    for snapshot in &seen[1..] {
        assert_eq!(**snapshot, *seen[0]);
    }
}

#[test]
fn test_subscribe_replays_current_snapshot() {
    init_logging();
    let (handle, _worker) = CanvasStore::spawn(Box::new(StaticCatalog), test_config());

    let first = handle.subscribe();
    let seen = recv_snapshots(&first, 1);
    assert_eq!(*seen[0], Default::default());

    handle.dispatch(CanvasIntent::LoadImages);
    recv_snapshots(&first, 2);

    // A late subscriber starts from the loaded state, not from scratch.
    let late = handle.subscribe();
    let current = recv_snapshots(&late, 1).pop().unwrap();
    assert_eq!(current.images.len(), 10);
}
