use chat_core::MessageStore;
use std::sync::Arc;

/// Shared handler state: one store (and its pool) for the whole process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MessageStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }
}
