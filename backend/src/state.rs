use std::{path::PathBuf, sync::Arc};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    /// Profile document, re-read on every page request
    profile_path: Arc<PathBuf>,
    /// Directory holding the wasm bundle
    static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            profile_path: Arc::new(config.profile_path.clone()),
            static_dir: Arc::new(config.static_dir.clone()),
        }
    }

    pub fn profile_path(&self) -> &PathBuf {
        &self.profile_path
    }

    pub fn static_dir(&self) -> &PathBuf {
        &self.static_dir
    }
}
