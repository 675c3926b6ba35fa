//! Atlas data model
//!
//! An atlas is an ordered list of named frame rectangles, written as the
//! `{"frames": [...]}` JSON consumed by the game's sprite loader.

pub mod descriptor;
pub mod io;
pub mod validate;

pub use descriptor::{Atlas, FrameDescriptor, Rect, Size};
pub use validate::{check_no_overlap, check_unique_names, check_within};
