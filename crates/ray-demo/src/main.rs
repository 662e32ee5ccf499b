// File: crates/ray-demo/src/main.rs
// Summary: Demo loads slope/intercept rows from CSV, draws each as a ray and renders the plot to PNG.

use anyhow::{Context, Result};
use log::{info, warn};
use ray_core::{center, ray, theme, Plot, Range1d, RenderOptions};
use std::path::{Path, PathBuf};

/// One line `y = slope * x + intercept`, optionally starting at `x0`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct RayRow {
    slope: f64,
    intercept: f64,
    x0: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next();
    let out = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out/rays.png"));

    let mut plot = Plot::new(Range1d::new(-10.0, 10.0), Range1d::new(-10.0, 10.0)).with_labels("x", "y");

    let rows = match &input {
        Some(raw) => {
            let path = Path::new(raw);
            println!("Using input file: {}", path.display());
            load_rays_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No input file; drawing built-in fan of rays");
            fan(plot.x_range)
        }
    };
    println!("Loaded {} rays", rows.len());
    if rows.is_empty() {
        anyhow::bail!("no rays loaded; check headers (slope,intercept[,x0]).");
    }

    for row in &rows {
        ray(&mut plot, row.slope, row.intercept, row.x0)
            .with_context(|| format!("drawing {:?}", row))?;
    }

    // RAY_THEME=light|dark
    let opts = RenderOptions {
        theme: theme::find(&std::env::var("RAY_THEME").unwrap_or_default()),
        ..RenderOptions::default()
    };
    plot.render_to_png(&opts, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Rays through the origin with slopes spread over [-2, 2], alternately started from the
/// left edge of `x_range` and from halfway between that edge and zero.
fn fan(x_range: Range1d) -> Vec<RayRow> {
    let half = center(&[x_range.start])[0];
    [-2.0, -1.0, -0.5, 0.5, 1.0, 2.0]
        .iter()
        .enumerate()
        .map(|(i, &slope)| RayRow {
            slope,
            intercept: 0.0,
            x0: if i % 2 == 0 { None } else { Some(half) },
        })
        .collect()
}

/// Load rows with `slope`, `intercept` and optional `x0` columns.
fn load_rays_csv(path: &Path) -> Result<Vec<RayRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    info!("headers: {:?}", headers);

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_slope = idx(&["slope", "m"]).context("missing slope column")?;
    let i_intercept = idx(&["intercept", "b"]).context("missing intercept column")?;
    let i_x0 = idx(&["x0", "x_0", "start"]);

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        let (Some(slope), Some(intercept)) = (parse(i_slope), parse(i_intercept)) else {
            warn!("skipping row {}: unparsable slope/intercept", line + 1);
            continue;
        };
        let x0 = match i_x0.and_then(|i| rec.get(i)) {
            None | Some("") => None,
            Some(s) => match s.parse::<f64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!("row {}: ignoring unparsable x0 '{}'", line + 1, s);
                    None
                }
            },
        };
        out.push(RayRow { slope, intercept, x0 });
    }
    Ok(out)
}
