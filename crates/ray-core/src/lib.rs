// File: crates/ray-core/src/lib.rs
// Summary: Core library entry point; exports the drawing helpers, the figure trait and the Skia plot.

pub mod center;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod plot;
pub mod ray;
pub mod theme;
pub mod types;

pub use center::center;
pub use error::FigureError;
pub use figure::{Figure, Range1d, RayGlyph, RecordingFigure};
pub use plot::{Plot, RenderOptions};
pub use ray::{ray, ray_glyph, RAY_COLOR, RAY_WIDTH};
pub use theme::Theme;
