use crate::geometry::Point;

/// Playing field extent, origin at the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Inclusive on every edge: a point exactly on the border is inside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width as f32 && p.y <= self.height as f32
    }
}
