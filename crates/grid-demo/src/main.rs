// File: crates/grid-demo/src/main.rs
// Summary: Demo builds a 3x2 grid of sine/cosine panels with shared scales and renders it to PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use grid_core::{FigureOptions, GridFigure, LayoutParams, Margins};
use grid_plot_examples::{trig_scales, TrigPlot};
use grid_render_skia::{theme, SkiaCanvas};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "grid-demo", about = "Render a demo multi-panel figure")]
struct Cli {
    /// Output PNG path
    #[arg(long, default_value = "target/out/trig_grid.png")]
    out: PathBuf,

    /// Output resolution
    #[arg(long, default_value_t = 150.0)]
    dpi: f64,

    /// Color theme (paper or dark)
    #[arg(long, default_value = "paper")]
    theme: String,

    /// Number of rows (one y scale each)
    #[arg(long, default_value_t = 3)]
    rows: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    let (x_scales, y_scales) = trig_scales(cli.rows).context("building demo scales")?;
    let options = FigureOptions {
        layout: LayoutParams {
            width: 160.0,
            height: 120.0,
            dpi: cli.dpi,
            margins: Margins::new(18.0, 5.0, 20.0, 15.0),
            horizontal_gap: 2.0,
            vertical_gap: 2.0,
        },
        column_titles: vec!["sine".to_string(), "cosine".to_string()],
    };

    let (px_w, px_h) = options.layout.pixel_size();
    tracing::info!(px_w, px_h, dpi = cli.dpi, "page size");

    let canvas = SkiaCanvas::new(theme::find(&cli.theme));
    let figure = GridFigure::with_plotter(canvas, x_scales, y_scales, options, TrigPlot::default())
        .context("invalid figure configuration")?;
    tracing::info!(rows = figure.grid().nrows(), cols = figure.grid().ncols(), "figure decorated");

    let (canvas, grid) = figure.into_parts();
    canvas
        .render_to_png(&grid, &cli.out)
        .with_context(|| format!("failed to render '{}'", cli.out.display()))?;
    println!("Wrote {}", cli.out.display());
    Ok(())
}
