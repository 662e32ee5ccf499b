// File: crates/ray-core/src/ray.rs
// Summary: Draw the line y = m*x + b as a ray starting at a given (or the leftmost visible) x.

use log::debug;
use skia_safe as skia;

use crate::error::FigureError;
use crate::figure::{Figure, RayGlyph};

/// Stroke color of rays drawn by [`ray`].
pub const RAY_COLOR: skia::Color = skia::Color::RED;
/// Stroke width of rays drawn by [`ray`].
pub const RAY_WIDTH: f32 = 2.0;

fn finite(name: &'static str, value: f64) -> Result<f64, FigureError> {
    if value.is_finite() { Ok(value) } else { Err(FigureError::NonFinite { name, value }) }
}

/// Compute the glyph for slope `m`, intercept `b`, starting at `x_0`.
///
/// The angle is `atan2(1, m)`; it matches the line's direction only when both axes
/// share the same scale.
pub fn ray_glyph(m: f64, b: f64, x_0: f64) -> Result<RayGlyph, FigureError> {
    let m = finite("m", m)?;
    let b = finite("b", b)?;
    let x_0 = finite("x_0", x_0)?;
    let y = m * x_0 + b;
    Ok(RayGlyph {
        x: x_0,
        y,
        length: 0.0,
        angle: 1f64.atan2(m),
        line_color: RAY_COLOR,
        line_width: RAY_WIDTH,
    })
}

/// Add the ray of `y = m*x + b` to figure `p`.
///
/// When `x_0` is `None` the ray starts at the figure's x-range start. On error the
/// figure is left untouched.
pub fn ray<F: Figure + ?Sized>(
    p: &mut F,
    m: f64,
    b: f64,
    x_0: Option<f64>,
) -> Result<(), FigureError> {
    let x_0 = x_0.unwrap_or_else(|| p.x_range().start);
    let glyph = ray_glyph(m, b, x_0)?;
    debug!("ray m={m} b={b} origin=({}, {}) angle={:.6}", glyph.x, glyph.y, glyph.angle);
    p.ray(glyph);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn unit_slope_through_origin() {
        let g = ray_glyph(1.0, 0.0, 0.0).unwrap();
        assert_eq!((g.x, g.y), (0.0, 0.0));
        assert!((g.angle - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn zero_slope_angle_is_atan2_of_one_and_zero() {
        let g = ray_glyph(0.0, 3.0, 2.0).unwrap();
        assert_eq!(g.y, 3.0);
        assert!((g.angle - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn rejects_nan_slope() {
        let err = ray_glyph(f64::NAN, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, FigureError::NonFinite { name: "m", .. }));
    }
}
