//! Grid atlas describer
//!
//! Produces the atlas for a sprite sheet that already exists, from its frame
//! size and layout alone. Frames are laid out in raster order: left to right,
//! moving down a row once the cursor passes the wrap threshold. No image is read.

use crate::atlas::{Atlas, FrameDescriptor, Rect};
use crate::config::GridAtlasConfig;
use crate::error::Result;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Compute the atlas for `config` in memory.
///
/// The cursor runs in u64; configs that pass `check` keep every coordinate
/// within u32, anything else saturates instead of wrapping around.
pub fn describe(config: &GridAtlasConfig) -> Atlas {
    if config.frames_per_row() != u64::from(config.cols) {
        warn!(
            "Wrap threshold {}px puts {} frames on a row, but the sheet has {} columns",
            config.wrap_threshold(),
            config.frames_per_row(),
            config.cols
        );
    }

    let threshold = config.wrap_threshold();
    let mut atlas = Atlas::with_capacity(config.total_frames());
    let mut x = 0u64;
    let mut y = 0u64;

    for direction in &config.directions {
        for i in 0..config.per_direction {
            let filename = format!("{}_{}", direction, i);
            let rect = Rect::new(to_px(x), to_px(y), config.width, config.height);
            debug!("{} -> ({}, {})", filename, x, y);
            atlas.push(FrameDescriptor::new(filename, rect));

            x += u64::from(config.width);
            if x > threshold {
                x = 0;
                y += u64::from(config.height);
            }
        }
    }

    atlas
}

fn to_px(v: u64) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

/// Describe the sheet and write `{output_dir}/{name}.json`.
pub fn run(config: &GridAtlasConfig) -> Result<PathBuf> {
    let atlas = describe(config);
    atlas.validate(None)?;

    let path = config.json_path();
    atlas.write_to_file(&path)?;
    info!("Wrote {} frames to {}", atlas.len(), path.display());
    Ok(path)
}
