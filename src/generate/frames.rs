//! Frame atlas builder
//!
//! Loads a character's walk-cycle frames for every direction, scales them by
//! 3/8, and tiles them into one sheet: one row per direction, one column per
//! sampled frame. Every cell has the scaled size of the largest source frame,
//! and each frame is pasted at its cell's top-left corner.

use crate::atlas::{Atlas, FrameDescriptor, Rect, Size};
use crate::config::FrameAtlasConfig;
use crate::error::{AtlasError, Result};
use crate::scale::scale_size;
use image::{RgbaImage, imageops};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tracing::{debug, info};

/// A composited sheet and its atlas, not yet written anywhere
pub struct FrameAtlasOutput {
    pub image: RgbaImage,
    pub atlas: Atlas,
    pub cell: Size,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameAtlasPaths {
    pub image: PathBuf,
    pub json: PathBuf,
}

/// Decode every sampled source frame, grouped by direction in config order.
/// The first unreadable file aborts the load.
pub fn load_sources(config: &FrameAtlasConfig) -> Result<Vec<Vec<RgbaImage>>> {
    let indices = config.sampled_indices();
    let mut rows = Vec::with_capacity(config.directions.len());

    for direction in &config.directions {
        info!("Loading {} frames for {}", indices.len(), direction.label);
        let mut frames = Vec::with_capacity(indices.len());
        for &index in &indices {
            let path = config.source_path(direction, index)?;
            let img = image::open(&path)
                .map_err(|e| AtlasError::image(&path, e))?
                .to_rgba8();
            debug!("{} is {}x{}", path.display(), img.width(), img.height());
            frames.push(img);
        }
        rows.push(frames);
    }

    Ok(rows)
}

/// Uniform cell size: the scaled maximum width and height over all frames
pub fn cell_size(rows: &[Vec<RgbaImage>], config: &FrameAtlasConfig) -> Size {
    let (max_w, max_h) = rows
        .iter()
        .flatten()
        .fold((0, 0), |(w, h), img| (w.max(img.width()), h.max(img.height())));
    let (w, h) = scale_size(max_w, max_h, config.rounding);
    Size::new(w, h)
}

/// Build the sheet and atlas in memory.
pub fn build(config: &FrameAtlasConfig) -> Result<FrameAtlasOutput> {
    let rows = load_sources(config)?;
    compose(config, &rows)
}

/// Tile already-loaded frames. `rows` must follow `config.directions`.
pub fn compose(config: &FrameAtlasConfig, rows: &[Vec<RgbaImage>]) -> Result<FrameAtlasOutput> {
    let cell = cell_size(rows, config);
    // One column per sampled frame: ceil(total / step). This equals total / step when
    // the step divides evenly; otherwise the last sampled frame gets its own column
    // instead of being clipped off the sheet.
    let cols = config.frames_per_direction();
    let canvas = Size::new(cell.w * cols, cell.h * config.directions.len() as u32);
    info!(
        "Cell {}x{}, sheet {}x{} ({} cols x {} rows)",
        cell.w,
        cell.h,
        canvas.w,
        canvas.h,
        cols,
        config.directions.len()
    );

    // Zero-initialized, i.e. fully transparent
    let mut image = RgbaImage::new(canvas.w, canvas.h);
    let mut atlas = Atlas::with_capacity(rows.iter().map(Vec::len).sum());

    for (row, (direction, frames)) in config.directions.iter().zip(rows).enumerate() {
        for (col, source) in frames.iter().enumerate() {
            let filename = format!("{}_{:02}", direction.label, col);
            let (w, h) = scale_size(source.width(), source.height(), config.rounding);
            if w == 0 || h == 0 {
                return Err(AtlasError::DegenerateFrame { filename, w, h });
            }

            let resized = imageops::resize(source, w, h, config.filter.into());
            let x = col as u32 * cell.w;
            let y = row as u32 * cell.h;
            // Replace, not blend: transparent source pixels stay transparent
            imageops::replace(&mut image, &resized, i64::from(x), i64::from(y));

            debug!("{} -> ({}, {}) {}x{}", filename, x, y, w, h);
            atlas.push(FrameDescriptor::new(filename, Rect::new(x, y, w, h)));
        }
    }

    atlas.validate(Some(canvas))?;
    Ok(FrameAtlasOutput { image, atlas, cell })
}

/// Build the sheet and write `{character}.json` and `{character}.{ext}`.
/// Nothing is written unless every source frame loaded.
pub fn run(config: &FrameAtlasConfig) -> Result<FrameAtlasPaths> {
    let paths = FrameAtlasPaths {
        image: config.image_path(),
        json: config.json_path(),
    };
    let format = config.image_format().ok_or_else(|| {
        AtlasError::config(
            &paths.image,
            format!("cannot write RGBA images as .{}", config.image_ext),
        )
    })?;

    let output = build(config)?;

    // Encode before touching the output directory so a failed encode leaves no files
    let mut encoded = Cursor::new(Vec::new());
    output
        .image
        .write_to(&mut encoded, format)
        .map_err(|e| AtlasError::image(&paths.image, e))?;

    fs::create_dir_all(&config.output_dir).map_err(|e| AtlasError::io(&config.output_dir, e))?;
    output.atlas.write_to_file(&paths.json)?;
    fs::write(&paths.image, encoded.into_inner())
        .map_err(|e| AtlasError::io(&paths.image, e))?;

    info!(
        "Wrote {} frames to {} and {}",
        output.atlas.len(),
        paths.json.display(),
        paths.image.display()
    );
    Ok(paths)
}
