//! Error types shared by the generators

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AtlasError>;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to process image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("atlas JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("bad filename pattern {pattern:?}: {message}")]
    Pattern { pattern: String, message: String },

    #[error("frame {filename} scales to an empty {w}x{h} image")]
    DegenerateFrame { filename: String, w: u32, h: u32 },

    #[error("duplicate frame name {0}")]
    DuplicateFrame(String),

    #[error("frames {first} and {second} overlap")]
    Overlap { first: String, second: String },

    #[error("frame {filename} lies outside the {canvas_w}x{canvas_h} canvas")]
    OutOfBounds {
        filename: String,
        canvas_w: u32,
        canvas_h: u32,
    },
}

impl AtlasError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Image {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
