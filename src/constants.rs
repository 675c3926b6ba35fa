//! Default values for the sprite-sheet generators
//!
//! These reproduce the asset pipeline's historical constants. Config files under
//! `config/` override them; a missing config file falls back to these.

// =============================================================================
// CONFIG FILES
// =============================================================================

pub const FRAME_ATLAS_FILE: &str = "config/frame_atlas.toml";
pub const GRID_ATLAS_FILE: &str = "config/grid_atlas.toml";

// =============================================================================
// OUTPUT
// =============================================================================

pub const DEFAULT_OUTPUT_DIR: &str = "assets";
pub const DEFAULT_IMAGE_EXT: &str = "png";

// =============================================================================
// FRAME ATLAS (composited character sheets)
// =============================================================================

pub const DEFAULT_FRAMES_ROOT: &str = "/data/assets/Isometric Tower Defense/1. Characters";
pub const DEFAULT_CHARACTER: &str = "Knight";
pub const DEFAULT_TOTAL_FRAMES: u32 = 30;
pub const DEFAULT_FRAME_STEP: u32 = 3;

/// Walk-cycle directions in canvas row order, with their source filename templates.
/// `%s` is the character name, `%d` the source frame number.
pub const DEFAULT_DIRECTION_PATTERNS: [(&str, &str); 4] = [
    ("x+1", "PNG/%s_Front-Walking-Front-Left_%d.png"),
    ("x-1", "PNG/%s_Back-Walking-Back-Right_%d.png"),
    ("y+1", "PNG/%s_Front-Walking-Front_%d.png"),
    ("y-1", "PNG/%s_Back-Walking-Back_%d.png"),
];

/// Scale-down ratio applied to every source frame (3/8).
pub const SCALE_NUMERATOR: u32 = 3;
pub const SCALE_DENOMINATOR: u32 = 8;

// =============================================================================
// GRID ATLAS (pre-existing sheet, geometry only)
// =============================================================================

pub const DEFAULT_GRID_NAME: &str = "spag";
pub const DEFAULT_GRID_FRAME_WIDTH: u32 = 85;
pub const DEFAULT_GRID_FRAME_HEIGHT: u32 = 170;
pub const DEFAULT_GRID_COLS: u32 = 24;
pub const DEFAULT_GRID_PER_DIRECTION: u32 = 6;

/// Cursor wraps to the next row once x exceeds this many pixels.
/// Not derived from cols * width (24 * 85 = 2040).
pub const DEFAULT_GRID_WRAP_PX: u32 = 2048;

// +x is down to the right, +y is down to the left
pub const DEFAULT_GRID_DIRECTIONS: [&str; 8] = [
    "x+1y-1", "x+0y-1", "x-1y-1", "x-1y+0", "x-1y+1", "x+0y+1", "x+1y+0", "x+1y+1",
];
