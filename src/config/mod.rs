//! Generator configuration
//!
//! Each generator reads a TOML file under `config/`. A missing file means
//! "use the built-in defaults"; a file that exists but cannot be read,
//! parsed or validated stops the run.

pub mod frames;
pub mod grid;

pub use frames::{DirectionPattern, FrameAtlasConfig, ResizeFilter};
pub use grid::{GridAtlasConfig, WrapRule};

use crate::error::{AtlasError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

/// A config type that can be loaded from a TOML file.
pub trait ConfigFile: DeserializeOwned + Default {
    /// Semantic checks that serde cannot express. Returns a human-readable reason.
    fn check(&self) -> std::result::Result<(), String>;
}

/// Load `path`, falling back to defaults if the file does not exist.
pub fn load_or_default<T: ConfigFile>(path: &Path) -> Result<T> {
    if !path.exists() {
        info!("Config {} not found, using defaults", path.display());
        let config = T::default();
        config.check().map_err(|msg| AtlasError::config(path, msg))?;
        return Ok(config);
    }
    load(path)
}

/// Load and validate `path`; the file must exist.
pub fn load<T: ConfigFile>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| AtlasError::io(path, e))?;
    let config = parse::<T>(&content).map_err(|msg| AtlasError::config(path, msg))?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

fn parse<T: ConfigFile>(content: &str) -> std::result::Result<T, String> {
    let config: T = toml::from_str(content).map_err(|e| e.to_string())?;
    config.check()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("isoatlas_{}_{}", Uuid::new_v4(), name))
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = temp_path("absent.toml");
        let config: GridAtlasConfig = load_or_default(&path).unwrap();
        assert_eq!(config, GridAtlasConfig::default());
    }

    #[test]
    fn test_invalid_file_is_fatal() {
        let path = temp_path("grid.toml");
        fs::write(&path, "width = 0\n").unwrap();
        let err = load_or_default::<GridAtlasConfig>(&path).unwrap_err();
        assert!(matches!(err, AtlasError::Config { .. }), "got {:?}", err);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_unparsable_file_is_fatal() {
        let path = temp_path("frames.toml");
        fs::write(&path, "total_frames = \"lots\"\n").unwrap();
        let err = load_or_default::<FrameAtlasConfig>(&path).unwrap_err();
        assert!(matches!(err, AtlasError::Config { .. }), "got {:?}", err);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_shipped_configs_match_defaults() {
        use crate::constants::{FRAME_ATLAS_FILE, GRID_ATLAS_FILE};
        let frames: FrameAtlasConfig = load(Path::new(FRAME_ATLAS_FILE)).unwrap();
        assert_eq!(frames, FrameAtlasConfig::default());
        let grid: GridAtlasConfig = load(Path::new(GRID_ATLAS_FILE)).unwrap();
        assert_eq!(grid, GridAtlasConfig::default());
    }

    #[test]
    fn test_load_requires_file() {
        let path = temp_path("missing.toml");
        assert!(matches!(
            load::<FrameAtlasConfig>(&path),
            Err(AtlasError::Io { .. })
        ));
    }
}
