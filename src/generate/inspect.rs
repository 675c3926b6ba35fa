//! Atlas inspection: load a written atlas back and summarize it

use crate::atlas::{Atlas, Size};
use crate::error::Result;
use std::fmt;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasSummary {
    pub frames: usize,
    /// Direction labels in first-seen order, with their frame counts
    pub directions: Vec<(String, usize)>,
    pub extent: Size,
    pub total_area: u64,
}

impl AtlasSummary {
    /// Share of the bounding extent covered by frames, in percent
    pub fn coverage_percent(&self) -> f64 {
        let extent_area = self.extent.area();
        if extent_area == 0 {
            return 0.0;
        }
        self.total_area as f64 / extent_area as f64 * 100.0
    }
}

impl fmt::Display for AtlasSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frames: {}", self.frames)?;
        writeln!(f, "Extent: {}x{}", self.extent.w, self.extent.h)?;
        writeln!(
            f,
            "Area:   {} px ({:.1}% of extent)",
            self.total_area,
            self.coverage_percent()
        )?;
        write!(f, "Directions:")?;
        for (label, count) in &self.directions {
            write!(f, "\n  {:<8} {} frames", label, count)?;
        }
        Ok(())
    }
}

pub fn summarize(atlas: &Atlas) -> AtlasSummary {
    let mut directions: Vec<(String, usize)> = Vec::new();
    for frame in atlas.iter() {
        let label = frame.direction();
        match directions.iter_mut().find(|entry| entry.0 == label) {
            Some((_, count)) => *count += 1,
            None => directions.push((label.to_string(), 1)),
        }
    }

    AtlasSummary {
        frames: atlas.len(),
        directions,
        extent: atlas.extent(),
        total_area: atlas.total_area(),
    }
}

/// Load `path`, check names and overlaps, and summarize.
pub fn run(path: &Path) -> Result<AtlasSummary> {
    let atlas = Atlas::load_from_file(path)?;
    atlas.validate(None)?;
    let summary = summarize(&atlas);
    info!("{} holds {} frames", path.display(), summary.frames);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AtlasError;
    use crate::config::GridAtlasConfig;
    use crate::generate::grid;
    use std::fs;
    use uuid::Uuid;

    #[test]
    fn test_summarize_grid_atlas() {
        let summary = summarize(&grid::describe(&GridAtlasConfig::default()));
        assert_eq!(summary.frames, 48);
        assert_eq!(summary.directions.len(), 8);
        assert_eq!(summary.directions[0], ("x+1y-1".to_string(), 6));
        assert!(summary.directions.iter().all(|(_, n)| *n == 6));
        assert_eq!(summary.extent, Size::new(2125, 340));
        assert_eq!(summary.total_area, 48 * 85 * 170);
        assert!(summary.total_area <= summary.extent.area());
    }

    #[test]
    fn test_empty_atlas_summary() {
        let summary = summarize(&Atlas::new());
        assert_eq!(summary.frames, 0);
        assert_eq!(summary.coverage_percent(), 0.0);
        assert!(summary.to_string().starts_with("Frames: 0"));
    }

    #[test]
    fn test_run_rejects_duplicate_names() {
        let path = std::env::temp_dir().join(format!("isoatlas_inspect_{}.json", Uuid::new_v4()));
        let frame = r#"{"filename": "a_0", "frame": {"x": 0, "y": 0, "w": 1, "h": 1},
            "rotated": false, "trimmed": false,
            "spriteSourceSize": {"x": 0, "y": 0, "w": 1, "h": 1},
            "sourceSize": {"w": 1, "h": 1}}"#;
        fs::write(&path, format!(r#"{{"frames": [{}, {}]}}"#, frame, frame)).unwrap();

        assert!(matches!(run(&path), Err(AtlasError::DuplicateFrame(_))));
        let _ = fs::remove_file(&path);
    }
}
