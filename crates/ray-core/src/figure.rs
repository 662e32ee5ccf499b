// File: crates/ray-core/src/figure.rs
// Summary: Figure trait (x-range + ray primitive), ray glyph model and an in-memory figure.

use skia_safe as skia;

/// Closed interval of one axis in data units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range1d {
    pub start: f64,
    pub end: f64,
}

impl Range1d {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> f64 { self.end - self.start }
}

/// One ray on a figure's draw list.
///
/// `angle` is in radians, counter-clockwise from the positive x direction.
/// A `length` of zero extends the ray to the edge of the visible area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayGlyph {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub angle: f64,
    pub line_color: skia::Color,
    pub line_width: f32,
}

impl RayGlyph {
    pub fn is_unbounded(&self) -> bool { self.length == 0.0 }
}

/// Drawing surface the helpers write to. Callers own it; helpers only borrow.
pub trait Figure {
    /// Visible x-axis range.
    fn x_range(&self) -> Range1d;
    /// Append a ray to the draw list.
    fn ray(&mut self, glyph: RayGlyph);
}

/// Figure that only records what was drawn. Useful for headless callers and tests.
#[derive(Clone, Debug)]
pub struct RecordingFigure {
    pub x_range: Range1d,
    pub rays: Vec<RayGlyph>,
}

impl RecordingFigure {
    pub fn new(x_range: Range1d) -> Self {
        Self { x_range, rays: Vec::new() }
    }
}

impl Default for RecordingFigure {
    fn default() -> Self {
        Self::new(Range1d::new(0.0, 10.0))
    }
}

impl Figure for RecordingFigure {
    fn x_range(&self) -> Range1d { self.x_range }

    fn ray(&mut self, glyph: RayGlyph) {
        self.rays.push(glyph);
    }
}
