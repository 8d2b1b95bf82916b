//! Geometric drawing primitives.
//!
//! Boxes use inclusive pixel corners. Ellipses and arcs are inscribed in the
//! pixel-edge rectangle `[x0, x1 + 1) x [y0, y1 + 1)` and tested at pixel
//! centres, so a box of odd size yields a symmetric shape.

use crate::types::{Colour, Point, Rect};

use super::Canvas;

/// Inscribed ellipse of a box, in continuous pixel-edge coordinates.
#[derive(Debug, Clone, Copy)]
struct EllipseFit {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

impl EllipseFit {
    fn new(bbox: Rect) -> Self {
        let r = bbox.normalized();
        let left = r.x0 as f64;
        let right = r.x1 as f64 + 1.0;
        let top = r.y0 as f64;
        let bottom = r.y1 as f64 + 1.0;
        Self {
            cx: (left + right) / 2.0,
            cy: (top + bottom) / 2.0,
            rx: (right - left) / 2.0,
            ry: (bottom - top) / 2.0,
        }
    }

    fn shrink(self, by: f64) -> Option<Self> {
        let rx = self.rx - by;
        let ry = self.ry - by;
        (rx > 0.0 && ry > 0.0).then_some(Self { rx, ry, ..self })
    }

    /// Normalized squared distance of a pixel centre; `<= 1` is inside.
    fn distance(&self, x: i32, y: i32) -> f64 {
        let dx = (x as f64 + 0.5 - self.cx) / self.rx;
        let dy = (y as f64 + 0.5 - self.cy) / self.ry;
        dx * dx + dy * dy
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        self.distance(x, y) <= 1.0
    }

    /// Angle of a pixel centre in degrees, clockwise from 3 o'clock.
    fn angle(&self, x: i32, y: i32) -> f64 {
        let dx = (x as f64 + 0.5 - self.cx) / self.rx;
        let dy = (y as f64 + 0.5 - self.cy) / self.ry;
        dy.atan2(dx).to_degrees().rem_euclid(360.0)
    }
}

impl Canvas {
    /// Fill the ellipse inscribed in `bbox`.
    pub fn fill_ellipse(&mut self, bbox: Rect, colour: Colour) {
        let fit = EllipseFit::new(bbox);
        self.for_each_in(bbox, |canvas, x, y| {
            if fit.contains(x, y) {
                canvas.plot(x, y, colour);
            }
        });
    }

    /// Outline the ellipse inscribed in `bbox` with a band `width` pixels
    /// thick, drawn inward from the edge.
    pub fn stroke_ellipse(&mut self, bbox: Rect, colour: Colour, width: u32) {
        let outer = EllipseFit::new(bbox);
        let inner = outer.shrink(width.max(1) as f64);
        self.for_each_in(bbox, |canvas, x, y| {
            let in_outer = outer.contains(x, y);
            let in_inner = inner.is_some_and(|e| e.contains(x, y));
            if in_outer && !in_inner {
                canvas.plot(x, y, colour);
            }
        });
    }

    /// Stroke the part of the inscribed ellipse between two angles
    /// (degrees, clockwise from 3 o'clock, as screen y grows downward).
    pub fn arc(&mut self, bbox: Rect, start_deg: f32, end_deg: f32, colour: Colour, width: u32) {
        let outer = EllipseFit::new(bbox);
        let inner = outer.shrink(width.max(1) as f64);
        let start = (start_deg as f64).rem_euclid(360.0);
        let mut sweep = end_deg as f64 - start_deg as f64;
        if sweep >= 360.0 {
            sweep = 360.0;
        } else {
            sweep = sweep.rem_euclid(360.0);
        }

        self.for_each_in(bbox, |canvas, x, y| {
            if !outer.contains(x, y) || inner.is_some_and(|e| e.contains(x, y)) {
                return;
            }
            let offset = (outer.angle(x, y) - start).rem_euclid(360.0);
            if offset <= sweep {
                canvas.plot(x, y, colour);
            }
        });
    }

    /// Fill a rectangle (inclusive corners).
    pub fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        let r = rect.normalized();
        for y in r.y0..=r.y1 {
            self.hline(y, r.x0, r.x1, colour);
        }
    }

    /// Outline a rectangle with a band `width` pixels thick drawn inward.
    pub fn stroke_rect(&mut self, rect: Rect, colour: Colour, width: u32) {
        let r = rect.normalized();
        let w = width.max(1) as i32;
        self.for_each_in(r, |canvas, x, y| {
            let edge = x - r.x0 < w || r.x1 - x < w || y - r.y0 < w || r.y1 - y < w;
            if edge {
                canvas.plot(x, y, colour);
            }
        });
    }

    /// Fill one horizontal scanline from `x0` to `x1` inclusive.
    pub fn hline(&mut self, y: i32, x0: i32, x1: i32, colour: Colour) {
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let start = x0.min(x1).max(0);
        let end = x0.max(x1).min(self.width() as i32 - 1);
        for x in start..=end {
            self.plot(x, y, colour);
        }
    }

    /// Fill one vertical scanline from `y0` to `y1` inclusive.
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, colour: Colour) {
        if x < 0 || x >= self.width() as i32 {
            return;
        }
        let start = y0.min(y1).max(0);
        let end = y0.max(y1).min(self.height() as i32 - 1);
        for y in start..=end {
            self.plot(x, y, colour);
        }
    }

    /// Fill `rect` row by row, interpolating from `from` (first row) to
    /// `to` (last row) per channel with floor rounding.
    ///
    /// Interpolation spans the whole rectangle even when part of it is
    /// clipped, so the visible rows keep their colours.
    pub fn vertical_gradient(&mut self, rect: Rect, from: Colour, to: Colour) {
        let r = rect.normalized();
        let steps = r.height() - 1;
        for (i, y) in (r.y0..=r.y1).enumerate() {
            self.hline(y, r.x0, r.x1, from.lerp_floor(to, i as u32, steps));
        }
    }

    /// Fill `rect` column by column, interpolating left to right.
    pub fn horizontal_gradient(&mut self, rect: Rect, from: Colour, to: Colour) {
        let r = rect.normalized();
        let steps = r.width() - 1;
        for (i, x) in (r.x0..=r.x1).enumerate() {
            self.vline(x, r.y0, r.y1, from.lerp_floor(to, i as u32, steps));
        }
    }

    /// Fill a polygon using the even-odd rule at pixel centres. Edges are
    /// also traced so slivers thinner than a pixel stay visible.
    pub fn fill_polygon(&mut self, points: &[Point], colour: Colour) {
        if points.is_empty() {
            return;
        }
        if points.len() < 3 {
            self.draw_line(points, colour, 1);
            return;
        }

        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let max_y = points
            .iter()
            .map(|p| p.y)
            .max()
            .unwrap_or(0)
            .min(self.height() as i32 - 1);

        let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
        for y in min_y..=max_y {
            let scan = y as f64;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                let (ay, by) = (a.y as f64, b.y as f64);
                if (ay <= scan && scan < by) || (by <= scan && scan < ay) {
                    let t = (scan - ay) / (by - ay);
                    crossings.push(a.x as f64 + t * (b.x - a.x) as f64);
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for span in crossings.chunks_exact(2) {
                self.hline(y, span[0].ceil() as i32, span[1].floor() as i32, colour);
            }
        }

        self.stroke_polygon_edges(points, colour, 1, false);
    }

    /// Outline a closed polygon.
    pub fn stroke_polygon(&mut self, points: &[Point], colour: Colour, width: u32) {
        self.stroke_polygon_edges(points, colour, width, true);
    }

    /// Draw a polyline through `points` with the given stroke width.
    ///
    /// Widths above one are rendered as the set of pixels whose centre lies
    /// within `width / 2` of a segment, giving round joins and caps.
    pub fn draw_line(&mut self, points: &[Point], colour: Colour, width: u32) {
        match points {
            [] => {}
            [p] => self.plot(p.x, p.y, colour),
            _ => {
                if width <= 1 {
                    for pair in points.windows(2) {
                        self.bresenham(pair[0], pair[1], colour);
                    }
                } else {
                    self.thick_polyline(points, colour, width as f64 / 2.0);
                }
            }
        }
    }

    fn stroke_polygon_edges(&mut self, points: &[Point], colour: Colour, width: u32, closed_thick: bool) {
        if points.len() < 2 {
            return;
        }
        let mut ring: Vec<Point> = points.to_vec();
        ring.push(points[0]);
        if closed_thick && width > 1 {
            self.thick_polyline(&ring, colour, width as f64 / 2.0);
        } else {
            for pair in ring.windows(2) {
                self.bresenham(pair[0], pair[1], colour);
            }
        }
    }

    fn bresenham(&mut self, from: Point, to: Point, colour: Colour) {
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, colour);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Every pixel is painted at most once so translucent strokes do not
    /// darken at the joins.
    fn thick_polyline(&mut self, points: &[Point], colour: Colour, half: f64) {
        let pad = half.ceil() as i32;
        let min_x = points.iter().map(|p| p.x).min().unwrap_or(0) - pad;
        let max_x = points.iter().map(|p| p.x).max().unwrap_or(0) + pad;
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0) - pad;
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(0) + pad;

        self.for_each_in(Rect::new(min_x, min_y, max_x, max_y), |canvas, x, y| {
            let near = points
                .windows(2)
                .any(|seg| segment_distance(x, y, seg[0], seg[1]) <= half);
            if near {
                canvas.plot(x, y, colour);
            }
        });
    }

    /// Visit every on-canvas pixel of a box.
    fn for_each_in(&mut self, rect: Rect, mut f: impl FnMut(&mut Canvas, i32, i32)) {
        let r = rect.normalized();
        let x0 = r.x0.max(0);
        let y0 = r.y0.max(0);
        let x1 = r.x1.min(self.width() as i32 - 1);
        let y1 = r.y1.min(self.height() as i32 - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                f(self, x, y);
            }
        }
    }
}

/// Distance from pixel `(x, y)` to segment `a`-`b`.
fn segment_distance(x: i32, y: i32, a: Point, b: Point) -> f64 {
    let (px, py) = (x as f64, y as f64);
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (bx, by) = (b.x as f64, b.y as f64);
    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (ax + t * dx, ay + t * dy);
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Colour {
        Colour::rgb(255, 0, 0)
    }

    fn count(canvas: &Canvas, colour: Colour) -> usize {
        canvas.pixels().iter().filter(|&&c| c == colour).count()
    }

    #[test]
    fn test_fill_rect_inclusive() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_rect(Rect::new(2, 3, 4, 5), red());
        assert_eq!(count(&canvas, red()), 9);
        assert_eq!(canvas.get(2, 3), Some(red()));
        assert_eq!(canvas.get(4, 5), Some(red()));
        assert_eq!(canvas.get(5, 5), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_fill_rect_reversed_corners() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_rect(Rect::new(4, 5, 2, 3), red());
        assert_eq!(count(&canvas, red()), 9);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(Rect::new(-100, -100, 100, 100), red());
        assert_eq!(count(&canvas, red()), 16);
    }

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut canvas = Canvas::new(10, 10);
        canvas.stroke_rect(Rect::new(0, 0, 9, 9), red(), 2);
        assert_eq!(canvas.get(0, 0), Some(red()));
        assert_eq!(canvas.get(1, 5), Some(red()));
        assert_eq!(canvas.get(2, 5), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(5, 5), Some(Colour::TRANSPARENT));
        // 10x10 minus 6x6 interior
        assert_eq!(count(&canvas, red()), 64);
    }

    #[test]
    fn test_fill_ellipse_symmetric_and_bounded() {
        let mut canvas = Canvas::new(20, 20);
        canvas.fill_ellipse(Rect::new(5, 5, 14, 14), red());
        assert_eq!(canvas.get(9, 9), Some(red()));
        assert_eq!(canvas.get(5, 5), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(4, 9), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(5, 9), Some(red()));
        assert_eq!(canvas.get(14, 9), Some(red()));
        for y in 0..20 {
            for x in 0..20 {
                assert_eq!(canvas.get(x, y), canvas.get(19 - x, y));
                assert_eq!(canvas.get(x, y), canvas.get(x, 19 - y));
            }
        }
    }

    #[test]
    fn test_stroke_ellipse_hollow() {
        let mut canvas = Canvas::new(20, 20);
        canvas.stroke_ellipse(Rect::new(0, 0, 19, 19), red(), 2);
        assert_eq!(canvas.get(0, 10), Some(red()));
        assert_eq!(canvas.get(10, 10), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_degenerate_ellipse_does_not_panic() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_ellipse(Rect::new(5, 5, 5, 5), red());
        canvas.stroke_ellipse(Rect::new(8, 8, 2, 2), red(), 10);
        assert_eq!(canvas.get(5, 5), Some(red()));
    }

    #[test]
    fn test_arc_lower_half() {
        let mut canvas = Canvas::new(21, 21);
        canvas.arc(Rect::new(0, 0, 20, 20), 0.0, 180.0, red(), 3);
        // Bottom of the ring is drawn, top is not
        assert_eq!(canvas.get(10, 19), Some(red()));
        assert_eq!(canvas.get(10, 1), Some(Colour::TRANSPARENT));
        // Centre stays empty
        assert_eq!(canvas.get(10, 10), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_vertical_gradient_endpoints() {
        let from = Colour::rgb(25, 25, 50);
        let to = Colour::rgb(75, 25, 100);
        let mut canvas = Canvas::new(8, 100);
        canvas.vertical_gradient(canvas.bounds(), from, to);
        assert_eq!(canvas.get(0, 0), Some(from));
        assert_eq!(canvas.get(7, 99), Some(to));

        // Monotonic in the red channel
        let reds: Vec<u8> = (0..100).map(|y| canvas.get(3, y).unwrap().r).collect();
        assert!(reds.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_horizontal_gradient_endpoints() {
        let from = Colour::rgb(255, 0, 0);
        let to = Colour::rgb(0, 0, 255);
        let mut canvas = Canvas::new(50, 3);
        canvas.horizontal_gradient(canvas.bounds(), from, to);
        assert_eq!(canvas.get(0, 1), Some(from));
        assert_eq!(canvas.get(49, 1), Some(to));
        assert_eq!(canvas.get(10, 0), canvas.get(10, 2));
    }

    #[test]
    fn test_single_row_gradient_uses_start_colour() {
        let mut canvas = Canvas::new(3, 1);
        canvas.vertical_gradient(canvas.bounds(), red(), Colour::WHITE);
        assert_eq!(canvas.get(1, 0), Some(red()));
    }

    #[test]
    fn test_fill_polygon_triangle() {
        let mut canvas = Canvas::new(11, 11);
        let tri = [Point::new(5, 0), Point::new(0, 10), Point::new(10, 10)];
        canvas.fill_polygon(&tri, red());
        assert_eq!(canvas.get(5, 5), Some(red()));
        assert_eq!(canvas.get(5, 0), Some(red()));
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(10, 0), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(0, 10), Some(red()));
    }

    #[test]
    fn test_fill_polygon_offscreen_clips() {
        let mut canvas = Canvas::new(5, 5);
        let poly = [Point::new(-10, -10), Point::new(20, -10), Point::new(20, 20), Point::new(-10, 20)];
        canvas.fill_polygon(&poly, red());
        assert_eq!(count(&canvas, red()), 25);
    }

    #[test]
    fn test_thin_line() {
        let mut canvas = Canvas::new(5, 5);
        canvas.draw_line(&[Point::new(0, 0), Point::new(4, 4)], red(), 1);
        for i in 0..5 {
            assert_eq!(canvas.get(i, i), Some(red()));
        }
        assert_eq!(count(&canvas, red()), 5);
    }

    #[test]
    fn test_thick_line_width() {
        let mut canvas = Canvas::new(20, 20);
        canvas.draw_line(&[Point::new(2, 10), Point::new(17, 10)], red(), 4);
        assert_eq!(canvas.get(10, 8), Some(red()));
        assert_eq!(canvas.get(10, 12), Some(red()));
        assert_eq!(canvas.get(10, 13), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_hline_clips() {
        let mut canvas = Canvas::new(3, 3);
        canvas.hline(1, -5, 10, red());
        canvas.hline(-1, 0, 2, red());
        assert_eq!(count(&canvas, red()), 3);
    }
}
