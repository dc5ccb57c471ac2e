// File: crates/grid-plot-examples/src/lib.rs
// Summary: Example plotters drawing onto decorated grids.

use std::f64::consts::PI;

use grid_core::ticks::linspace;
use grid_core::{Grid, Panel, Plotter, Scale};

/// Sine in the first column, cosine in the second; amplitude and frequency grow by row.
///
/// Row `r` (zero-based) draws `sin((1+r)·πx)·(1+r)` for `x` in `[0, 2]` and
/// `cos((1+r)·2πx)·(1+r)` against `2x`.
#[derive(Clone, Copy, Debug)]
pub struct TrigPlot {
    pub samples: usize,
}

impl Default for TrigPlot {
    fn default() -> Self { Self { samples: 50 } }
}

impl<P: Panel> Plotter<P> for TrigPlot {
    fn plot(&mut self, grid: &mut Grid<P>) {
        let x = linspace(0.0, 2.0, self.samples);
        let x2: Vec<f64> = x.iter().map(|v| v * 2.0).collect();
        for row in 0..grid.nrows() {
            let k = (1 + row) as f64;
            if let Some(p) = grid.get_mut(row, 0) {
                let y: Vec<f64> = x.iter().map(|v| (k * v * PI).sin() * k).collect();
                p.draw_line(&x, &y);
            }
            if let Some(p) = grid.get_mut(row, 1) {
                let y: Vec<f64> = x.iter().map(|v| (k * v * PI * 2.0).cos() * k).collect();
                p.draw_line(&x2, &y);
            }
        }
        tracing::debug!(rows = grid.nrows(), samples = self.samples, "trig curves drawn");
    }
}

/// Scales matching the curves `TrigPlot` draws on an `nrows x 2` grid.
pub fn trig_scales(nrows: usize) -> grid_core::Result<(Vec<Scale>, Vec<Scale>)> {
    let xs = vec![Scale::new("a", vec![0.0, 1.0, 2.0])?, Scale::new("b", vec![0.0, 2.0, 4.0])?];
    let labels = ["c", "d", "e", "f", "g", "h"];
    let ys = (0..nrows)
        .map(|r| {
            let k = (1 + r) as f64;
            let label = labels.get(r).copied().unwrap_or("y");
            Scale::new(label, vec![-k, 0.0, k])
        })
        .collect::<grid_core::Result<Vec<_>>>()?;
    Ok((xs, ys))
}
