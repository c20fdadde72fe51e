use matching_engine::Exchange;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub exchange: Arc<Exchange>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            exchange: Arc::new(Exchange::new()),
        }
    }
}
