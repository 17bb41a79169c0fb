//! API handlers for the Web API.

pub mod board;
pub mod comment;
pub mod post;

pub use board::*;
pub use comment::*;
pub use post::*;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::forum::ForumStore;

/// Shared handle to the in-memory store.
///
/// Handlers run concurrently on the multi-threaded runtime, so every
/// access goes through the mutex; this serializes writes and keeps the id
/// counters and comment counts consistent.
pub type SharedStore = Arc<Mutex<ForumStore>>;

/// Application state shared across all handlers.
pub struct AppState {
    /// The community board store.
    pub store: SharedStore,
}

impl AppState {
    /// Create application state around an existing store handle.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Create application state with a freshly seeded store.
    pub fn seeded() -> Self {
        Self::new(Arc::new(Mutex::new(ForumStore::seeded())))
    }
}
