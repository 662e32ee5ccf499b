// File: crates/ray-core/src/plot.rs
// Summary: Skia-backed figure and headless PNG rendering of its draw list on a CPU raster surface.

use anyhow::{Context, Result};
use log::trace;
use skia_safe as skia;

use crate::figure::{Figure, Range1d, RayGlyph};
use crate::geometry::{PixelMap, RectI32};
use crate::grid::linspace;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw the axis frame and labels. Turn off for pixel-stable output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

pub struct Plot {
    pub x_range: Range1d,
    pub y_range: Range1d,
    pub x_label: String,
    pub y_label: String,
    pub rays: Vec<RayGlyph>,
}

impl Plot {
    pub fn new(x_range: Range1d, y_range: Range1d) -> Self {
        Self {
            x_range,
            y_range,
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            rays: Vec::new(),
        }
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Render the plot to PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let rect = RectI32::inset(opts.width, opts.height, &opts.insets);
        let map = PixelMap { rect, x: self.x_range, y: self.y_range };

        draw_grid(canvas, &rect, &opts.theme);
        if opts.draw_labels {
            draw_frame(canvas, &rect, &opts.theme, &self.x_label, &self.y_label);
        }
        for glyph in &self.rays {
            draw_ray(canvas, &map, glyph);
        }

        let image = surface.image_snapshot();
        let data = image
            .encode(None, skia::EncodedImageFormat::PNG, None)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the plot to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

impl Figure for Plot {
    fn x_range(&self) -> Range1d { self.x_range }

    fn ray(&mut self, glyph: RayGlyph) {
        self.rays.push(glyph);
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, rect: &RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (rect.left as f64, rect.top as f64, rect.right as f64, rect.bottom as f64);
    // verticals
    for x in linspace(l, r, 10) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(t, b, 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, rect: &RectI32, theme: &Theme, x_label: &str, y_label: &str) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    let mut paint_text = skia::Paint::default();
    paint_text.set_color(theme.axis_label);
    let mut font = skia::Font::default();
    font.set_size(14.0);

    canvas.draw_str(x_label, (r - 80.0, b + 24.0), &font, &paint_text);
    canvas.draw_str(y_label, (l - 56.0, t + 14.0), &font, &paint_text);
}

fn draw_ray(canvas: &skia::Canvas, map: &PixelMap, glyph: &RayGlyph) {
    let (ox, oy) = (map.sx(glyph.x), map.sy(glyph.y));
    let end = if glyph.is_unbounded() {
        let Some((dx, dy)) = map.direction(glyph.angle) else { return };
        // Far enough to leave the plot from anywhere; the clip trims it.
        let reach = map.rect.farthest_corner(ox, oy) + 1.0;
        (ox + dx * reach, oy + dy * reach)
    } else {
        let x1 = glyph.x + glyph.length * glyph.angle.cos();
        let y1 = glyph.y + glyph.length * glyph.angle.sin();
        (map.sx(x1), map.sy(y1))
    };
    trace!("ray pixels ({ox:.1}, {oy:.1}) -> ({:.1}, {:.1})", end.0, end.1);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(glyph.line_width);
    stroke.set_color(glyph.line_color);

    let rect = &map.rect;
    canvas.save();
    canvas.clip_rect(
        skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32),
        skia::ClipOp::Intersect,
        true,
    );
    canvas.draw_line((ox, oy), end, &stroke);
    canvas.restore();
}
