//! Frame atlas configuration (composited character walk cycles)

use super::ConfigFile;
use crate::constants::*;
use crate::pattern;
use crate::scale::ScaleRounding;
use image::ImageFormat;
use image::imageops::FilterType;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// One canvas row: a direction label and the template for its source frames
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectionPattern {
    pub label: String,
    pub pattern: String,
}

/// Resampling filter used when scaling frames down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    /// Bicubic
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrameAtlasConfig {
    /// Directory holding one folder per character
    pub root: PathBuf,
    pub character: String,
    /// Source frames per direction, numbered from 0
    pub total_frames: u32,
    /// Only every `frame_step`-th source frame is used
    pub frame_step: u32,
    /// Row order of the output sheet
    pub directions: Vec<DirectionPattern>,
    pub output_dir: PathBuf,
    /// Output image extension; also selects the encoder
    pub image_ext: String,
    pub rounding: ScaleRounding,
    pub filter: ResizeFilter,
}

/// Output formats whose encoders take 8-bit RGBA at any sheet size
const RGBA8_FORMATS: [ImageFormat; 6] = [
    ImageFormat::Png,
    ImageFormat::Bmp,
    ImageFormat::Tiff,
    ImageFormat::WebP,
    ImageFormat::Tga,
    ImageFormat::Qoi,
];

impl Default for FrameAtlasConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_FRAMES_ROOT),
            character: DEFAULT_CHARACTER.to_string(),
            total_frames: DEFAULT_TOTAL_FRAMES,
            frame_step: DEFAULT_FRAME_STEP,
            directions: DEFAULT_DIRECTION_PATTERNS
                .iter()
                .map(|(label, pattern)| DirectionPattern {
                    label: label.to_string(),
                    pattern: pattern.to_string(),
                })
                .collect(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            image_ext: DEFAULT_IMAGE_EXT.to_string(),
            rounding: ScaleRounding::default(),
            filter: ResizeFilter::default(),
        }
    }
}

impl FrameAtlasConfig {
    /// Source frame numbers used per direction: 0, step, 2*step, ... < total
    pub fn sampled_indices(&self) -> Vec<u32> {
        (0..self.total_frames)
            .step_by(self.frame_step.max(1) as usize)
            .collect()
    }

    /// Grid columns in the output sheet (one per sampled frame)
    pub fn frames_per_direction(&self) -> u32 {
        self.sampled_indices().len() as u32
    }

    pub fn character_dir(&self) -> PathBuf {
        self.root.join(&self.character)
    }

    pub fn source_path(&self, direction: &DirectionPattern, index: u32) -> crate::Result<PathBuf> {
        let relative = pattern::expand(&direction.pattern, &self.character, index)?;
        Ok(self.character_dir().join(relative))
    }

    pub fn image_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.character, self.image_ext))
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.json", self.character))
    }

    /// Encoder for `image_ext`, if it can store the RGBA sheet
    pub fn image_format(&self) -> Option<ImageFormat> {
        ImageFormat::from_extension(&self.image_ext).filter(|f| RGBA8_FORMATS.contains(f))
    }
}

impl ConfigFile for FrameAtlasConfig {
    fn check(&self) -> Result<(), String> {
        if self.character.is_empty() {
            return Err("character must not be empty".into());
        }
        if self.frame_step == 0 {
            return Err("frame_step must be at least 1".into());
        }
        if self.total_frames == 0 {
            return Err("total_frames must be at least 1".into());
        }
        if self.directions.is_empty() {
            return Err("at least one direction is required".into());
        }
        if self.image_format().is_none() {
            return Err(format!(
                "image_ext {:?} is not a format that can store RGBA images",
                self.image_ext
            ));
        }
        let mut labels = HashSet::new();
        for direction in &self.directions {
            if !labels.insert(direction.label.as_str()) {
                return Err(format!("direction {} listed twice", direction.label));
            }
            pattern::validate(&direction.pattern).map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults_are_valid() {
        let config = FrameAtlasConfig::default();
        assert!(config.check().is_ok());
        let labels: Vec<_> = config.directions.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["x+1", "x-1", "y+1", "y-1"]);
    }

    #[test]
    fn test_sampled_indices() {
        let config = FrameAtlasConfig::default();
        assert_eq!(config.sampled_indices(), vec![0, 3, 6, 9, 12, 15, 18, 21, 24, 27]);
        assert_eq!(config.frames_per_direction(), 10);

        let uneven = FrameAtlasConfig {
            total_frames: 10,
            frame_step: 4,
            ..Default::default()
        };
        assert_eq!(uneven.sampled_indices(), vec![0, 4, 8]);
    }

    #[test]
    fn test_paths() {
        let config = FrameAtlasConfig {
            root: PathBuf::from("/art"),
            output_dir: PathBuf::from("out"),
            ..Default::default()
        };
        let path = config.source_path(&config.directions[2], 12).unwrap();
        assert_eq!(path, Path::new("/art/Knight/PNG/Knight_Front-Walking-Front_12.png"));
        assert_eq!(config.image_path(), Path::new("out/Knight.png"));
        assert_eq!(config.json_path(), Path::new("out/Knight.json"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FrameAtlasConfig = toml::from_str(
            r#"
character = "Archer"
filter = "lanczos3"

[[directions]]
label = "x+1"
pattern = "%s/walk_%02d.png"
"#,
        )
        .unwrap();
        assert_eq!(config.character, "Archer");
        assert_eq!(config.total_frames, DEFAULT_TOTAL_FRAMES);
        assert_eq!(config.filter, ResizeFilter::Lanczos3);
        assert_eq!(config.directions.len(), 1);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_check_rejects_bad_values() {
        let zero_step = FrameAtlasConfig {
            frame_step: 0,
            ..Default::default()
        };
        assert!(zero_step.check().is_err());

        let mut dup = FrameAtlasConfig::default();
        dup.directions.push(dup.directions[0].clone());
        assert!(dup.check().is_err());

        let mut bad_pattern = FrameAtlasConfig::default();
        bad_pattern.directions[0].pattern = "%s_%x.png".into();
        assert!(bad_pattern.check().is_err());
    }

    #[test]
    fn test_check_rejects_formats_without_alpha() {
        for ext in ["jpg", "jpeg", "ico", "xyz", ""] {
            let config = FrameAtlasConfig {
                image_ext: ext.into(),
                ..Default::default()
            };
            assert!(config.check().is_err(), "{:?} should be rejected", ext);
        }
        for ext in ["png", "PNG", "bmp", "webp", "tga"] {
            let config = FrameAtlasConfig {
                image_ext: ext.into(),
                ..Default::default()
            };
            assert!(config.check().is_ok(), "{:?} should be accepted", ext);
        }
    }
}
