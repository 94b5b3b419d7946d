use std::sync::Arc;

use crate::probes::Probe;

/// Shared state handed to the health routes
#[derive(Clone)]
pub struct AppState {
    pub service_name: Arc<str>,
    pub database: Arc<dyn Probe>,
    pub cache: Arc<dyn Probe>,
}

impl AppState {
    pub fn new(service_name: &str, database: Arc<dyn Probe>, cache: Arc<dyn Probe>) -> Self {
        Self {
            service_name: Arc::from(service_name),
            database,
            cache,
        }
    }
}
