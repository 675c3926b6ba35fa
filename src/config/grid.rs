//! Grid atlas configuration (geometry for an existing sheet)

use super::ConfigFile;
use crate::constants::*;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// When the layout cursor moves to the next row.
///
/// In TOML: `wrap = { pixels = 2048 }` or `wrap = "columns"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapRule {
    /// Wrap once the cursor x exceeds this many pixels
    Pixels(u32),
    /// Wrap after every `cols` frames
    Columns,
}

impl Default for WrapRule {
    fn default() -> Self {
        WrapRule::Pixels(DEFAULT_GRID_WRAP_PX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridAtlasConfig {
    /// Output file stem
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Columns in the referenced sheet
    pub cols: u32,
    pub per_direction: u32,
    pub directions: Vec<String>,
    pub wrap: WrapRule,
    pub output_dir: PathBuf,
}

impl Default for GridAtlasConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_GRID_NAME.to_string(),
            width: DEFAULT_GRID_FRAME_WIDTH,
            height: DEFAULT_GRID_FRAME_HEIGHT,
            cols: DEFAULT_GRID_COLS,
            per_direction: DEFAULT_GRID_PER_DIRECTION,
            directions: DEFAULT_GRID_DIRECTIONS.iter().map(|d| d.to_string()).collect(),
            wrap: WrapRule::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl GridAtlasConfig {
    /// The cursor wraps when its x is strictly greater than this.
    pub fn wrap_threshold(&self) -> u64 {
        match self.wrap {
            WrapRule::Pixels(px) => u64::from(px),
            // After `cols` placements x == cols * width, which must trigger a wrap
            WrapRule::Columns => {
                let row_px = u64::from(self.cols) * u64::from(self.width);
                row_px.saturating_sub(1)
            }
        }
    }

    /// Frames that land on each row under the wrap rule
    pub fn frames_per_row(&self) -> u64 {
        self.wrap_threshold() / u64::from(self.width.max(1)) + 1
    }

    /// Rows the layout occupies
    pub fn rows(&self) -> u64 {
        (self.total_frames() as u64).div_ceil(self.frames_per_row())
    }

    pub fn total_frames(&self) -> usize {
        self.directions.len() * self.per_direction as usize
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.json", self.name))
    }
}

impl ConfigFile for GridAtlasConfig {
    fn check(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("name must not be empty".into());
        }
        if self.width == 0 || self.height == 0 {
            return Err("frame width and height must be positive".into());
        }
        if self.cols == 0 {
            return Err("cols must be at least 1".into());
        }
        if self.directions.is_empty() {
            return Err("at least one direction is required".into());
        }
        let mut labels = HashSet::new();
        for direction in &self.directions {
            if !labels.insert(direction.as_str()) {
                return Err(format!("direction {} listed twice", direction));
            }
        }
        // Every frame edge must be addressable in u32 pixels
        let max_right = self.wrap_threshold() + u64::from(self.width);
        if max_right > u64::from(u32::MAX) {
            return Err(format!(
                "wrap point {}px plus frame width {} overflows the sheet coordinates",
                self.wrap_threshold(),
                self.width
            ));
        }
        let max_bottom = self.rows() * u64::from(self.height);
        if max_bottom > u64::from(u32::MAX) {
            return Err(format!(
                "{} rows of {}px overflow the sheet coordinates",
                self.rows(),
                self.height
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wrap_is_pixel_threshold() {
        let config = GridAtlasConfig::default();
        assert!(config.check().is_ok());
        assert_eq!(config.wrap_threshold(), 2048);
        // 2048 / 85 = 24, so the 25th frame still starts on the first row
        assert_eq!(config.frames_per_row(), 25);
        assert_eq!(config.total_frames(), 48);
    }

    #[test]
    fn test_column_wrap_matches_cols() {
        let config = GridAtlasConfig {
            wrap: WrapRule::Columns,
            ..Default::default()
        };
        assert_eq!(config.wrap_threshold(), 2039);
        assert_eq!(config.frames_per_row(), u64::from(config.cols));
        assert_eq!(config.rows(), 2);
    }

    #[test]
    fn test_wrap_rule_toml_forms() {
        let pixels: GridAtlasConfig = toml::from_str("wrap = { pixels = 1024 }").unwrap();
        assert_eq!(pixels.wrap, WrapRule::Pixels(1024));
        let columns: GridAtlasConfig = toml::from_str("wrap = \"columns\"").unwrap();
        assert_eq!(columns.wrap, WrapRule::Columns);
        assert_eq!(columns.width, DEFAULT_GRID_FRAME_WIDTH);
    }

    #[test]
    fn test_check_rejects_bad_values() {
        let zero = GridAtlasConfig {
            height: 0,
            ..Default::default()
        };
        assert!(zero.check().is_err());

        let mut dup = GridAtlasConfig::default();
        dup.directions.push("x+1y-1".into());
        assert!(dup.check().is_err());
    }

    #[test]
    fn test_check_rejects_column_wrap_past_u32() {
        let config = GridAtlasConfig {
            cols: 100_000,
            width: 100_000,
            wrap: WrapRule::Columns,
            ..Default::default()
        };
        // cols * width no longer fits in u32 but is still computed exactly
        assert_eq!(config.wrap_threshold(), 9_999_999_999);
        assert!(config.check().is_err());
    }

    #[test]
    fn test_check_rejects_pixel_wrap_past_u32() {
        let config = GridAtlasConfig {
            width: 1,
            wrap: WrapRule::Pixels(u32::MAX),
            ..Default::default()
        };
        assert_eq!(config.frames_per_row(), u64::from(u32::MAX) + 1);
        assert!(config.check().is_err());
    }

    #[test]
    fn test_check_rejects_rows_past_u32() {
        let config = GridAtlasConfig {
            width: 1,
            height: u32::MAX / 2,
            wrap: WrapRule::Pixels(0),
            ..Default::default()
        };
        // One frame per row, 48 rows
        assert_eq!(config.rows(), 48);
        assert!(config.check().is_err());
    }

    #[test]
    fn test_check_accepts_layout_at_u32_edge() {
        let config = GridAtlasConfig {
            width: 1,
            wrap: WrapRule::Pixels(u32::MAX - 1),
            ..Default::default()
        };
        assert!(config.check().is_ok());
    }
}
