//! Integer geometry used by draw calls.

/// A pixel coordinate. May lie outside the canvas; draws clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned box with inclusive corners `[x0, y0, x1, y1]`.
///
/// Corners are not required to be ordered; [`Rect::normalized`] orders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box spanning `center ± half` on each axis.
    pub const fn centered(cx: i32, cy: i32, half_w: i32, half_h: i32) -> Self {
        Self::new(cx - half_w, cy - half_h, cx + half_w, cy + half_h)
    }

    /// Square box around a centre point.
    pub const fn circle(cx: i32, cy: i32, radius: i32) -> Self {
        Self::centered(cx, cy, radius, radius)
    }

    /// Box with origin and size (`width`/`height` in pixels).
    pub const fn sized(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::new(x, y, x + width as i32 - 1, y + height as i32 - 1)
    }

    /// Same box with `x0 <= x1` and `y0 <= y1`.
    pub fn normalized(self) -> Self {
        Self::new(
            self.x0.min(self.x1),
            self.y0.min(self.y1),
            self.x0.max(self.x1),
            self.y0.max(self.y1),
        )
    }

    /// Width in pixels of the normalized box.
    pub fn width(self) -> u32 {
        self.x0.abs_diff(self.x1) + 1
    }

    /// Height in pixels of the normalized box.
    pub fn height(self) -> u32 {
        self.y0.abs_diff(self.y1) + 1
    }

    pub fn contains(self, p: Point) -> bool {
        let r = self.normalized();
        p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
    }

    /// Shrink by `inset` on every side.
    pub fn inset(self, inset: i32) -> Self {
        let r = self.normalized();
        Self::new(r.x0 + inset, r.y0 + inset, r.x1 - inset, r.y1 - inset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_is_inclusive() {
        let r = Rect::sized(100, 234, 200, 300);
        assert_eq!(r, Rect::new(100, 234, 299, 533));
        assert_eq!(r.width(), 200);
        assert_eq!(r.height(), 300);
    }

    #[test]
    fn test_normalized_orders_corners() {
        let r = Rect::new(10, 20, 0, 5).normalized();
        assert_eq!(r, Rect::new(0, 5, 10, 20));
    }

    #[test]
    fn test_contains() {
        let r = Rect::circle(5, 5, 2);
        assert!(r.contains(Point::new(3, 7)));
        assert!(!r.contains(Point::new(8, 5)));
    }
}
