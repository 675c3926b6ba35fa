//! Sprite-sheet generators
//!
//! - `frames`: composite a character's walk-cycle frames into one sheet + atlas
//! - `grid`: describe an existing fixed-grid sheet as an atlas (no image work)
//! - `inspect`: read an atlas back and summarize it

pub mod frames;
pub mod grid;
pub mod inspect;
