//! Frame descriptor types and their JSON shape

use serde::{Deserialize, Serialize};

/// Pixel rectangle within a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> u64 {
        u64::from(self.x) + u64::from(self.w)
    }

    pub fn bottom(&self) -> u64 {
        u64::from(self.y) + u64::from(self.h)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }

    /// True when the two rectangles share at least one pixel.
    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        u64::from(self.x) < other.right()
            && u64::from(other.x) < self.right()
            && u64::from(self.y) < other.bottom()
            && u64::from(other.y) < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }
}

/// One named animation cell.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDescriptor {
    pub filename: String,
    pub frame: Rect,
    pub rotated: bool,
    pub trimmed: bool,
    pub sprite_source_size: Rect,
    pub source_size: Size,
}

impl FrameDescriptor {
    /// Untrimmed, unrotated frame whose source size equals its rectangle size.
    pub fn new(filename: impl Into<String>, frame: Rect) -> Self {
        Self {
            filename: filename.into(),
            frame,
            rotated: false,
            trimmed: false,
            sprite_source_size: Rect::new(0, 0, frame.w, frame.h),
            source_size: Size::new(frame.w, frame.h),
        }
    }

    /// Direction label, i.e. everything before the last `_`.
    pub fn direction(&self) -> &str {
        self.filename
            .rsplit_once('_')
            .map(|(dir, _)| dir)
            .unwrap_or(&self.filename)
    }
}

/// Ordered frame list; serializes as `{"frames": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atlas {
    pub frames: Vec<FrameDescriptor>,
}

impl Atlas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, frame: FrameDescriptor) {
        self.frames.push(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrameDescriptor> {
        self.frames.iter()
    }

    pub fn get(&self, filename: &str) -> Option<&FrameDescriptor> {
        self.frames.iter().find(|f| f.filename == filename)
    }

    /// Sum of all frame rectangle areas
    pub fn total_area(&self) -> u64 {
        self.frames.iter().map(|f| f.frame.area()).sum()
    }

    /// Smallest size, anchored at the origin, that contains every frame
    pub fn extent(&self) -> Size {
        let w = self.frames.iter().map(|f| f.frame.right()).max().unwrap_or(0);
        let h = self.frames.iter().map(|f| f.frame.bottom()).max().unwrap_or(0);
        Size::new(w as u32, h as u32)
    }
}
