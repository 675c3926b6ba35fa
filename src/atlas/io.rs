//! Atlas JSON reading and writing

use super::descriptor::Atlas;
use crate::error::{AtlasError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

impl Atlas {
    /// Two-space indented JSON with no trailing newline
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Write the atlas, creating parent directories as needed
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| AtlasError::io(parent, e))?;
        }
        fs::write(path, json).map_err(|e| AtlasError::io(path, e))?;
        debug!("Wrote {} frames to {}", self.len(), path.display());
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AtlasError::io(path, e))?;
        Self::from_json(&content)
    }
}
