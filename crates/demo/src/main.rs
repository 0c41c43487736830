// File: crates/demo/src/main.rs
// Summary: Demo loads a weather dataset and renders the scatter plot to PNG and SVG.

use anyhow::{Context, Result};
use scatter_core::{load_records, theme, Dimensions, RenderOptions, ScatterChart};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Accept path from CLI or fall back to the sample filename
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "my_weather_data.json".to_string());
    let viewport = match std::env::args().nth(2) {
        Some(s) => parse_viewport(&s)?,
        None => (1000.0, 1000.0),
    };
    let theme = std::env::args()
        .nth(3)
        .map(|name| theme::find(&name))
        .unwrap_or_else(theme::Theme::light);

    let path = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());

    let records = load_records(&path)
        .with_context(|| format!("failed to load dataset '{}'", path.display()))?;
    println!("Loaded {} records", records.len());

    if records.is_empty() {
        anyhow::bail!("no records loaded — check headers/fields.");
    }

    let dims = Dimensions::from_viewport(viewport.0, viewport.1)?;
    println!(
        "Chart {:.0}x{:.0} (bounded {:.0}x{:.0})",
        dims.width,
        dims.height,
        dims.bounded_width(),
        dims.bounded_height()
    );

    let chart = ScatterChart::new(records);
    let mut opts = RenderOptions::new(dims);
    opts.theme = theme;

    let out_png = out_name_with(&path, "scatter");
    chart.render_to_png(&opts, &out_png)?;
    println!("Wrote {}", out_png.display());

    let out_svg = out_png.with_extension("svg");
    chart.render_to_svg(&opts, &out_svg)?;
    println!("Wrote {}", out_svg.display());

    Ok(())
}

/// Parse a `WIDTHxHEIGHT` viewport argument.
fn parse_viewport(s: &str) -> Result<(f64, f64)> {
    let lower = s.to_ascii_lowercase();
    let (w, h) = lower
        .split_once('x')
        .with_context(|| format!("viewport '{s}' should look like 1000x800"))?;
    Ok((w.trim().parse()?, h.trim().parse()?))
}

/// Resolve path, trying a .json/.csv swap if the given file is missing.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            println!("  (extension swapped between .json/.csv)");
            return Ok(alt);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "json" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("json");
            Some(alt)
        }
        _ => None,
    }
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{}_{}.png", stem, suffix));
    out
}
