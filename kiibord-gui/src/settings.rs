use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use kiibord_auth::services::{ThemeMode, ThemeStore, ThemeStoreError};

use crate::dir::KiibordDirectory;

pub const DEFAULT_FILE_NAME: &str = "settings.json";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Settings {
    pub theme: Option<ThemeMode>,
}

/// Theme preference persisted as json in the data directory.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(datadir: &KiibordDirectory) -> Self {
        Self {
            path: datadir.path().join(DEFAULT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Settings, ThemeStoreError> {
        if !self.path.is_file() {
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| ThemeStoreError::Format(e.to_string()))
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        match self.read() {
            Ok(settings) => settings.theme,
            Err(e) => {
                warn!("Failed to load settings from {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn store(&self, mode: ThemeMode) -> Result<(), ThemeStoreError> {
        let mut settings = self.read().unwrap_or_default();
        settings.theme = Some(mode);
        let content = serde_json::to_string_pretty(&settings)
            .map_err(|e| ThemeStoreError::Format(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        info!("Theme preference saved: {:?}", mode);
        Ok(())
    }
}
