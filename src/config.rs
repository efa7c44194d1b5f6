//! Where the store lives and how its lines are delimited.

use std::path::{Path, PathBuf};

use dotenv::dotenv;

use crate::domain::contact::DEFAULT_SEPARATOR;

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/contacts.txt";
pub const STORAGE_PATH_VAR: &str = "TXT_STORAGE_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub separator: char,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            separator: DEFAULT_SEPARATOR,
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Loads a `.env` file into the process environment if one exists, so
/// `TXT_STORAGE_PATH` can live there.
pub fn load_env_file() {
    dotenv().ok();
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PATH)
    }
}
