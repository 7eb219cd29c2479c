use std::sync::Arc;

use tb_core::{ProbeSettings, Prober};

/// Everything a request handler needs, built once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub settings: ProbeSettings,
    pub prober: Arc<dyn Prober + Send + Sync>,
    pub cors: bool,
    pub verbose: bool,
}

impl AppContext {
    pub fn new(settings: ProbeSettings, prober: Arc<dyn Prober + Send + Sync>) -> Self {
        Self {
            settings,
            prober,
            cors: false,
            verbose: false,
        }
    }
}
