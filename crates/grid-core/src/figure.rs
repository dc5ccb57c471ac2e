// File: crates/grid-core/src/figure.rs
// Summary: GridFigure construction and the scale/label/tick decoration pipeline.

use crate::canvas::{Canvas, GridSpec, Panel};
use crate::error::{Axis, ConfigurationError, Result};
use crate::geometry::SubplotFractions;
use crate::grid::Grid;
use crate::plot::{NoPlot, Plotter};
use crate::scale::Scale;
use crate::select::Selector;
use crate::ticks::{HAlign, TickDirection, VAlign};
use crate::types::LayoutParams;

/// Everything besides the scales that shapes a figure.
#[derive(Clone, Debug, Default)]
pub struct FigureOptions {
    pub layout: LayoutParams,
    /// Titles for the top-row panels, left to right. May be shorter than the column count.
    pub column_titles: Vec<String>,
}

/// A decorated grid of panels sharing one x scale per column and one y scale per row.
pub struct GridFigure<C: Canvas> {
    canvas: C,
    grid: Grid<C::Panel>,
    x_scales: Vec<Scale>,
    y_scales: Vec<Scale>,
    column_titles: Vec<String>,
    layout: LayoutParams,
    fractions: SubplotFractions,
}

impl<C: Canvas> GridFigure<C> {
    /// Build and decorate a figure without drawing any data.
    pub fn new(canvas: C, x_scales: Vec<Scale>, y_scales: Vec<Scale>, options: FigureOptions) -> Result<Self> {
        Self::with_plotter(canvas, x_scales, y_scales, options, NoPlot)
    }

    /// Build and decorate a figure, then hand the grid to `plotter` to draw data.
    ///
    /// Nothing is allocated on the canvas unless every parameter is valid.
    pub fn with_plotter<T: Plotter<C::Panel>>(
        mut canvas: C,
        x_scales: Vec<Scale>,
        y_scales: Vec<Scale>,
        options: FigureOptions,
        mut plotter: T,
    ) -> Result<Self> {
        if x_scales.is_empty() {
            return Err(ConfigurationError::EmptyScales { axis: Axis::X });
        }
        if y_scales.is_empty() {
            return Err(ConfigurationError::EmptyScales { axis: Axis::Y });
        }
        let (nrows, ncols) = (y_scales.len(), x_scales.len());
        if options.column_titles.len() > ncols {
            return Err(ConfigurationError::TooManyTitles { given: options.column_titles.len(), ncols });
        }
        let FigureOptions { layout, column_titles } = options;
        let fractions = layout.fractions(nrows, ncols)?;

        let spec = GridSpec { nrows, ncols, fractions, width: layout.width, height: layout.height, dpi: layout.dpi };
        let mut grid = canvas.create_grid(&spec);
        tracing::debug!(nrows, ncols, "allocated panel grid");

        decorate(&mut grid, &x_scales, &y_scales, &column_titles)?;
        plotter.plot(&mut grid);

        Ok(Self { canvas, grid, x_scales, y_scales, column_titles, layout, fractions })
    }

    pub fn canvas(&self) -> &C { &self.canvas }
    pub fn grid(&self) -> &Grid<C::Panel> { &self.grid }
    pub fn x_scales(&self) -> &[Scale] { &self.x_scales }
    pub fn y_scales(&self) -> &[Scale] { &self.y_scales }
    pub fn column_titles(&self) -> &[String] { &self.column_titles }
    pub fn layout(&self) -> &LayoutParams { &self.layout }
    pub fn fractions(&self) -> &SubplotFractions { &self.fractions }

    /// Give the canvas and its panels back to the caller for rendering.
    pub fn into_parts(self) -> (C, Grid<C::Panel>) { (self.canvas, self.grid) }
}

/// Apply titles, shared axis labels, scale binding and tick clean-up to a fresh grid.
///
/// Fails with `ShapeMismatch` unless `grid` is `y_scales.len() x x_scales.len()`; the
/// grid is left untouched in that case. Every step only sets state, so running this
/// twice on equal grids gives equal results.
pub fn decorate<P: Panel>(
    grid: &mut Grid<P>,
    x_scales: &[Scale],
    y_scales: &[Scale],
    column_titles: &[String],
) -> Result<()> {
    let expected = (y_scales.len(), x_scales.len());
    if grid.shape() != expected {
        return Err(ConfigurationError::ShapeMismatch { expected, got: grid.shape() });
    }
    if grid.nrows() == 0 || grid.ncols() == 0 {
        return Ok(());
    }

    for (col, title) in column_titles.iter().enumerate().take(grid.ncols()) {
        grid[(0, col)].set_title(title);
    }
    tracing::trace!(count = column_titles.len(), "titles set");

    let last_row = grid.nrows() - 1;
    for (col, xs) in x_scales.iter().enumerate() {
        grid[(last_row, col)].set_xlabel(xs.label());
    }
    for (row, ys) in y_scales.iter().enumerate() {
        grid[(row, 0)].set_ylabel(ys.label());
    }
    tracing::trace!("axis labels set");

    for ((row, col), panel) in grid.iter_mut() {
        bind_scales(panel, &x_scales[col], &y_scales[row]);
    }
    tracing::trace!("scales bound");

    grid.apply(Selector::All, Selector::All, |p| p.set_tick_direction(TickDirection::In));
    grid.apply(Selector::all_but_last(), Selector::All, |p| p.clear_xtick_labels());
    grid.apply(Selector::All, Selector::all_but_first(), |p| p.clear_ytick_labels());
    grid.apply(Selector::last(), Selector::All, |p| {
        p.align_first_last_xtick_labels(HAlign::Left, HAlign::Right)
    });
    grid.apply(Selector::All, Selector::first(), |p| {
        p.align_first_last_ytick_labels(VAlign::Bottom, VAlign::Top)
    });
    tracing::trace!("tick labels de-duplicated and aligned");
    Ok(())
}

fn bind_scales<P: Panel>(panel: &mut P, xs: &Scale, ys: &Scale) {
    let (x0, x1) = xs.limits();
    panel.set_xlim(x0, x1);
    panel.set_xticks(xs.ticks());
    let (y0, y1) = ys.limits();
    panel.set_ylim(y0, y1);
    panel.set_yticks(ys.ticks());
}
