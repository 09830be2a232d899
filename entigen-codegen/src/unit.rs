use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use serde::Serialize;

/// One generated C# file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedUnit {
    /// File name relative to the output directory.
    pub file_name: String,
    /// Qualified declared name of the source entity.
    pub entity: String,
    pub content: String,
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was created or its content changed
    Written,
    /// File already held exactly this content
    Unchanged,
}

impl GeneratedUnit {
    pub fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    /// True when the file under `base` is missing or differs from this unit.
    pub fn is_stale(&self, base: &Path) -> bool {
        std::fs::read_to_string(self.path(base)).map_or(true, |existing| existing != self.content)
    }

    /// Write the unit below `base`, leaving an up-to-date file untouched.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        if !self.is_stale(base) {
            return Ok(WriteResult::Unchanged);
        }
        let path = self.path(base);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(&path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        Ok(WriteResult::Written)
    }
}
