// File: crates/ray-core/src/geometry.rs
// Summary: Plot rectangle in pixels and the data-to-pixel mapping used by the renderer.

use crate::figure::Range1d;
use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot area left after removing `insets` from a `width` x `height` surface.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        Self::from_ltrb(
            insets.left as i32,
            insets.top as i32,
            width - insets.right as i32,
            height - insets.bottom as i32,
        )
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Largest distance from `(x, y)` to any corner.
    pub fn farthest_corner(&self, x: f32, y: f32) -> f32 {
        [
            (self.left, self.top),
            (self.right, self.top),
            (self.left, self.bottom),
            (self.right, self.bottom),
        ]
        .iter()
        .map(|&(cx, cy)| (cx as f32 - x).hypot(cy as f32 - y))
        .fold(0.0, f32::max)
    }
}

/// Span with its sign kept, so reversed ranges flip the axis instead of collapsing it.
#[inline]
fn nonzero_span(r: &Range1d) -> f64 {
    let s = r.span();
    if s.abs() < 1e-9 { 1e-9f64.copysign(s) } else { s }
}

/// Linear map from data ranges onto a pixel rectangle (y grows downward on screen).
#[derive(Clone, Copy, Debug)]
pub struct PixelMap {
    pub rect: RectI32,
    pub x: Range1d,
    pub y: Range1d,
}

impl PixelMap {
    #[inline]
    fn px_per_x(&self) -> f64 { self.rect.width() as f64 / nonzero_span(&self.x) }
    #[inline]
    fn px_per_y(&self) -> f64 { self.rect.height() as f64 / nonzero_span(&self.y) }

    #[inline]
    pub fn sx(&self, x: f64) -> f32 {
        (self.rect.left as f64 + (x - self.x.start) * self.px_per_x()) as f32
    }

    #[inline]
    pub fn sy(&self, y: f64) -> f32 {
        (self.rect.bottom as f64 - (y - self.y.start) * self.px_per_y()) as f32
    }

    /// Unit pixel direction of a data-space angle, or `None` when it collapses to a point.
    pub fn direction(&self, angle: f64) -> Option<(f32, f32)> {
        let dx = angle.cos() * self.px_per_x();
        let dy = -angle.sin() * self.px_per_y();
        let len = dx.hypot(dy);
        if !len.is_finite() || len < 1e-12 {
            return None;
        }
        Some(((dx / len) as f32, (dy / len) as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_map() -> PixelMap {
        PixelMap {
            rect: RectI32::from_ltrb(0, 0, 100, 100),
            x: Range1d::new(0.0, 10.0),
            y: Range1d::new(0.0, 10.0),
        }
    }

    #[test]
    fn maps_corners() {
        let m = unit_map();
        assert_eq!((m.sx(0.0), m.sy(0.0)), (0.0, 100.0));
        assert_eq!((m.sx(10.0), m.sy(10.0)), (100.0, 0.0));
    }

    #[test]
    fn diagonal_points_up_right_on_screen() {
        let (dx, dy) = unit_map().direction(std::f64::consts::FRAC_PI_4).unwrap();
        assert!((dx - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert!((dy + std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn reversed_x_range_mirrors_horizontally() {
        let mut m = unit_map();
        m.x = Range1d::new(10.0, 0.0);
        assert_eq!(m.sx(10.0), 0.0);
        assert_eq!(m.sx(0.0), 100.0);
        assert_eq!(m.sx(2.5), 75.0);
        let (dx, dy) = m.direction(std::f64::consts::FRAC_PI_4).unwrap();
        assert!(dx < 0.0 && dy < 0.0, "up-left on screen, got ({dx}, {dy})");
    }

    #[test]
    fn farthest_corner_from_origin() {
        let r = RectI32::from_ltrb(0, 0, 30, 40);
        assert_eq!(r.farthest_corner(0.0, 0.0), 50.0);
    }
}
