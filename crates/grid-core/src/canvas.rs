// File: crates/grid-core/src/canvas.rs
// Summary: Canvas/panel traits the grid engine drives; implemented by rendering backends.

use crate::geometry::SubplotFractions;
use crate::grid::Grid;
use crate::ticks::{HAlign, TickDirection, VAlign};

/// What a canvas needs to allocate a panel grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub nrows: usize,
    pub ncols: usize,
    pub fractions: SubplotFractions,
    /// Page width in millimetres.
    pub width: f64,
    /// Page height in millimetres.
    pub height: f64,
    pub dpi: f64,
}

impl GridSpec {
    /// Page size in whole pixels; same rounding as [`LayoutParams::pixel_size`](crate::LayoutParams::pixel_size).
    pub fn pixel_size(&self) -> (i32, i32) { crate::units::page_px(self.width, self.height, self.dpi) }
}

/// One plotting region. The engine only ever calls these setters; it never reads
/// panel state back.
pub trait Panel {
    fn set_title(&mut self, text: &str);
    fn set_xlabel(&mut self, text: &str);
    fn set_ylabel(&mut self, text: &str);
    fn set_xlim(&mut self, min: f64, max: f64);
    fn set_ylim(&mut self, min: f64, max: f64);
    /// Replace the x ticks; labels are regenerated from the values.
    fn set_xticks(&mut self, ticks: &[f64]);
    fn set_yticks(&mut self, ticks: &[f64]);
    fn set_tick_direction(&mut self, direction: TickDirection);
    /// Hide x tick label text, keeping the tick marks.
    fn clear_xtick_labels(&mut self);
    fn clear_ytick_labels(&mut self);
    fn align_first_last_xtick_labels(&mut self, first: HAlign, last: HAlign);
    fn align_first_last_ytick_labels(&mut self, first: VAlign, last: VAlign);
    fn draw_line(&mut self, xs: &[f64], ys: &[f64]);
}

/// Backend that owns the figure/page and hands out its panels.
///
/// Implementations must place panel `(row, col)` where
/// [`SubplotFractions::panel_rect`] says it goes.
pub trait Canvas {
    type Panel: Panel;

    fn create_grid(&mut self, spec: &GridSpec) -> Grid<Self::Panel>;
}
