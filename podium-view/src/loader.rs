//! Asynchronous asset loading
//!
//! Decoding runs on a worker thread and reports back over a channel the
//! controller polls at frame start, so load completion is applied atomically
//! with respect to rendering. The generation tag is the liveness check: a
//! completion carrying a stale generation is dropped without touching the
//! scene.

use podium_assets::{load_model, LoadError};
use podium_core::TriangleMesh;
use std::path::PathBuf;

/// Result of one load attempt, tagged with the generation it started under
pub struct LoadComplete {
    pub generation: u64,
    pub result: Result<TriangleMesh, LoadError>,
}

/// Fetch and decode the asset on a worker thread
///
/// The returned receiver yields exactly one message. Dropping the receiver
/// (controller teardown) makes the worker's send a no-op.
pub fn spawn_load(path: PathBuf, generation: u64) -> flume::Receiver<LoadComplete> {
    let (tx, rx) = flume::bounded(1);
    std::thread::spawn(move || {
        let result = load_model(&path);
        let _ = tx.send(LoadComplete { generation, result });
    });
    rx
}
