//! Structural checks on a built or loaded atlas

use super::descriptor::{Atlas, Size};
use crate::error::{AtlasError, Result};
use std::collections::HashSet;

pub fn check_unique_names(atlas: &Atlas) -> Result<()> {
    let mut seen = HashSet::with_capacity(atlas.len());
    for frame in atlas.iter() {
        if !seen.insert(frame.filename.as_str()) {
            return Err(AtlasError::DuplicateFrame(frame.filename.clone()));
        }
    }
    Ok(())
}

/// Pairwise overlap test. Atlases hold tens of frames, so O(n²) is fine.
pub fn check_no_overlap(atlas: &Atlas) -> Result<()> {
    for (i, a) in atlas.frames.iter().enumerate() {
        for b in &atlas.frames[i + 1..] {
            if a.frame.intersects(&b.frame) {
                return Err(AtlasError::Overlap {
                    first: a.filename.clone(),
                    second: b.filename.clone(),
                });
            }
        }
    }
    Ok(())
}

pub fn check_within(atlas: &Atlas, canvas: Size) -> Result<()> {
    for frame in atlas.iter() {
        let rect = &frame.frame;
        if rect.right() > u64::from(canvas.w) || rect.bottom() > u64::from(canvas.h) {
            return Err(AtlasError::OutOfBounds {
                filename: frame.filename.clone(),
                canvas_w: canvas.w,
                canvas_h: canvas.h,
            });
        }
    }
    Ok(())
}

impl Atlas {
    /// Run every check; the bounds check only when a canvas is known.
    pub fn validate(&self, canvas: Option<Size>) -> Result<()> {
        check_unique_names(self)?;
        check_no_overlap(self)?;
        if let Some(canvas) = canvas {
            check_within(self, canvas)?;
        }
        Ok(())
    }
}
