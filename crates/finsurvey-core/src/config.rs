//! Where the app keeps its data.

use std::path::{Path, PathBuf};

/// Database file created inside the data directory
pub const DB_FILE_NAME: &str = "finsurvey.redb";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    /// Keep everything in memory; nothing survives the process
    pub ephemeral: bool,
}

impl AppConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ephemeral: false,
        }
    }

    /// Named instance next to the default directory (`finsurvey-<name>`)
    pub fn for_instance(name: &str) -> Self {
        Self::new(platform_data_dir().join(format!("finsurvey-{}", name)))
    }

    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

fn platform_data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// `<platform data dir>/finsurvey`
pub fn default_data_dir() -> PathBuf {
    platform_data_dir().join("finsurvey")
}
