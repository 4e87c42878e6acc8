//! Export/import file I/O.
//!
//! Export writes the pretty-printed document under a fixed file name; import
//! just reads text. Parsing stays in the store so a failed import never
//! touches state.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name every export is written under
pub const EXPORT_FILE_NAME: &str = "dashboard-config.json";

pub trait ConfigFiles {
    /// Write an export and return where it landed
    fn write_export(&mut self, file_name: &str, contents: &str) -> Result<PathBuf>;

    /// Read a user-chosen file for import
    fn read_import(&self, path: &Path) -> Result<String>;
}

/// Exports into a directory on disk
#[derive(Debug, Clone)]
pub struct FsConfigFiles {
    export_dir: PathBuf,
}

impl FsConfigFiles {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
        }
    }
}

impl ConfigFiles for FsConfigFiles {
    fn write_export(&mut self, file_name: &str, contents: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.export_dir)
            .with_context(|| format!("Failed to create {}", self.export_dir.display()))?;
        let path = self.export_dir.join(file_name);
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write export {}", path.display()))?;
        Ok(path)
    }

    fn read_import(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
