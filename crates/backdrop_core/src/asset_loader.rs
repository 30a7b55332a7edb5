//! Background asset loading
//!
//! Every load request runs on its own worker thread so a slow or failing
//! asset never holds up the others or the frame loop. Results come back over
//! a channel and are drained by the owning thread with
//! [`poll_all`](AssetLoader::poll_all).
//!
//! Dropping the loader closes the result channel. Workers that finish after
//! that point discard their result.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::asset_error::AssetError;
use crate::model::{Model, ModelLoader};
use crate::source::AssetSource;

/// Result of a background asset load
pub struct LoadResult {
    /// Position of the source in the manifest
    pub index: usize,
    /// The source that was requested
    pub source: AssetSource,
    /// The loaded model or error
    pub result: Result<Model, AssetError>,
}

/// Background asset loader
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use backdrop_core::{AssetLoader, AssetSource, ObjLoader};
///
/// let mut loader = AssetLoader::new(Arc::new(ObjLoader::new()));
/// loader.load_async(0, AssetSource::new("models/cube.obj", 1.0));
///
/// // Later, once per frame:
/// for done in loader.poll_all() {
///     match done.result {
///         Ok(_model) => { /* register asset */ }
///         Err(_e) => { /* log and skip */ }
///     }
/// }
/// ```
pub struct AssetLoader {
    model_loader: Arc<dyn ModelLoader>,
    /// Cloned into every worker
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
    /// Requests issued but not yet drained
    in_flight: usize,
}

impl AssetLoader {
    /// Create a loader that reads models with the given capability
    pub fn new(model_loader: Arc<dyn ModelLoader>) -> Self {
        let (sender, receiver) = channel::<LoadResult>();
        Self {
            model_loader,
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Request an asset to be loaded in the background
    pub fn load_async(&mut self, index: usize, source: AssetSource) {
        let model_loader = Arc::clone(&self.model_loader);
        let sender = self.sender.clone();

        let spawned = thread::Builder::new()
            .name(format!("asset-load-{}", index))
            .spawn(move || {
                let result = model_loader.load(&source.path);
                // The animator may have been torn down; a closed channel is fine
                let _ = sender.send(LoadResult { index, source, result });
            });

        match spawned {
            Ok(_) => self.in_flight += 1,
            Err(e) => log::warn!("Failed to spawn asset load thread {}: {}", index, e),
        }
    }

    /// Check if one asset has finished loading (non-blocking)
    pub fn poll(&mut self) -> Option<LoadResult> {
        match self.receiver.try_recv() {
            Ok(result) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Collect all completed loads (non-blocking)
    pub fn poll_all(&mut self) -> Vec<LoadResult> {
        let mut results = Vec::new();
        while let Some(result) = self.poll() {
            results.push(result);
        }
        results
    }

    /// Number of requests that have not been drained yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
