// File: crates/ray-core/tests/ray.rs
// Purpose: Validate ray origin, angle, styling and draw-call count against a recording figure.

use std::f64::consts::FRAC_PI_4;

use ray_core::{ray, Figure, FigureError, Plot, Range1d, RecordingFigure, RAY_COLOR, RAY_WIDTH};

#[test]
fn explicit_origin_unit_slope() {
    let mut fig = RecordingFigure::default();
    ray(&mut fig, 1.0, 0.0, Some(0.0)).expect("finite inputs");

    assert_eq!(fig.rays.len(), 1);
    let g = fig.rays[0];
    assert_eq!((g.x, g.y), (0.0, 0.0));
    assert!((g.angle - FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn omitted_origin_uses_x_range_start() {
    let mut fig = RecordingFigure::new(Range1d::new(-3.0, 5.0));
    ray(&mut fig, 2.0, 1.0, None).unwrap();

    let g = fig.rays[0];
    assert_eq!(g.x, -3.0);
    assert_eq!(g.y, 2.0 * -3.0 + 1.0);
}

#[test]
fn one_unbounded_red_width_two_draw_per_call() {
    let mut fig = RecordingFigure::default();
    for m in [0.5, -1.0, 3.0] {
        ray(&mut fig, m, 0.0, None).unwrap();
    }
    assert_eq!(fig.rays.len(), 3);
    for g in &fig.rays {
        assert!(g.is_unbounded());
        assert_eq!(g.length, 0.0);
        assert_eq!(g.line_color, RAY_COLOR);
        assert_eq!(g.line_width, RAY_WIDTH);
        assert_eq!(g.line_width, 2.0);
    }
}

#[test]
fn non_finite_input_leaves_figure_untouched() {
    let mut fig = RecordingFigure::default();
    let err = ray(&mut fig, 1.0, f64::INFINITY, None).unwrap_err();
    assert_eq!(err, FigureError::NonFinite { name: "b", value: f64::INFINITY });
    assert!(fig.rays.is_empty());

    fig.x_range = Range1d::new(f64::NAN, 1.0);
    assert!(matches!(ray(&mut fig, 1.0, 0.0, None), Err(FigureError::NonFinite { name: "x_0", .. })));
    assert!(fig.rays.is_empty());
}

#[test]
fn works_through_trait_object() {
    let mut plot = Plot::new(Range1d::new(1.0, 2.0), Range1d::new(0.0, 1.0));
    {
        let fig: &mut dyn Figure = &mut plot;
        ray(fig, -1.0, 2.0, None).unwrap();
    }
    assert_eq!(plot.rays.len(), 1);
    assert_eq!((plot.rays[0].x, plot.rays[0].y), (1.0, 1.0));
}
