//! Isoatlas - sprite-sheet and atlas tools for the isometric game's assets
//!
//! Offline generators run by hand when art changes. Each run either writes all
//! of its outputs or stops at the first error.

pub mod atlas;
pub mod config;
pub mod constants;
pub mod error;
pub mod generate;
pub mod pattern;
pub mod scale;

pub use atlas::{Atlas, FrameDescriptor, Rect, Size};
pub use config::{DirectionPattern, FrameAtlasConfig, GridAtlasConfig, ResizeFilter, WrapRule};
pub use error::{AtlasError, Result};
pub use scale::ScaleRounding;
