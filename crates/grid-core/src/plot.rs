// File: crates/grid-core/src/plot.rs
// Summary: Plotting strategy invoked once a grid has been fully decorated.

use crate::canvas::Panel;
use crate::grid::Grid;

/// Draws data onto an already decorated grid. Ranges and ticks are fixed by the
/// time `plot` runs; a plotter only adds series.
pub trait Plotter<P: Panel> {
    fn plot(&mut self, grid: &mut Grid<P>);
}

/// Plotter that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPlot;

impl<P: Panel> Plotter<P> for NoPlot {
    fn plot(&mut self, _grid: &mut Grid<P>) {}
}

impl<P: Panel, F: FnMut(&mut Grid<P>)> Plotter<P> for F {
    fn plot(&mut self, grid: &mut Grid<P>) { self(grid) }
}
