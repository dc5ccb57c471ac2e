// File: crates/grid-core/src/geometry.rs
// Summary: Physical page layout -> normalized subplot fractions, and their realization per panel.

use crate::error::{Axis, ConfigurationError, Result};
use crate::types::LayoutParams;

/// Normalized layout fractions handed to a canvas.
///
/// `left`/`right`/`top`/`bottom` are positions on the page in `[0, 1]`, measured from
/// the bottom-left corner. `wspace`/`hspace` are gaps expressed as a fraction of the
/// mean panel width/height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubplotFractions {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub wspace: f64,
    pub hspace: f64,
}

/// Normalized rectangle of a single panel (origin bottom-left, y up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FracRect {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl FracRect {
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.top - self.bottom }
}

impl LayoutParams {
    /// Convert the physical page description into subplot fractions for an
    /// `nrows x ncols` grid.
    ///
    /// Fails when the grid is empty, a length is not a usable number, or the margins
    /// and gaps leave no room for the panels themselves.
    pub fn fractions(&self, nrows: usize, ncols: usize) -> Result<SubplotFractions> {
        if nrows == 0 || ncols == 0 {
            return Err(ConfigurationError::EmptyGrid { nrows, ncols });
        }
        self.validate_lengths()?;

        let m = &self.margins;
        let total_h = m.hsum() + (ncols - 1) as f64 * self.horizontal_gap;
        let total_v = m.vsum() + (nrows - 1) as f64 * self.vertical_gap;
        if self.width <= total_h {
            return Err(ConfigurationError::DoesNotFit { axis: Axis::X, available: self.width, required: total_h });
        }
        if self.height <= total_v {
            return Err(ConfigurationError::DoesNotFit { axis: Axis::Y, available: self.height, required: total_v });
        }

        let fractions = SubplotFractions {
            left: m.left / self.width,
            right: 1.0 - m.right / self.width,
            top: 1.0 - m.top / self.height,
            bottom: m.bottom / self.height,
            wspace: gap_fraction(ncols, self.horizontal_gap, self.width - total_h),
            hspace: gap_fraction(nrows, self.vertical_gap, self.height - total_v),
        };
        tracing::debug!(nrows, ncols, ?fractions, "computed subplot fractions");
        Ok(fractions)
    }

    fn validate_lengths(&self) -> Result<()> {
        let positive = [("width", self.width), ("height", self.height), ("dpi", self.dpi)];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigurationError::InvalidLength { name, value });
            }
        }
        let m = &self.margins;
        let non_negative = [
            ("left margin", m.left),
            ("right margin", m.right),
            ("top margin", m.top),
            ("bottom margin", m.bottom),
            ("horizontal gap", self.horizontal_gap),
            ("vertical gap", self.vertical_gap),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidLength { name, value });
            }
        }
        Ok(())
    }
}

/// Physical gap -> fraction of the mean panel size along one axis.
/// `remaining` is the page length left for panels once margins and gaps are taken.
fn gap_fraction(count: usize, gap: f64, remaining: f64) -> f64 {
    if count == 1 {
        return 0.0;
    }
    count as f64 * gap / remaining
}

impl SubplotFractions {
    /// Where panel `(row, col)` lands on the page. Row 0 is the top row.
    pub fn panel_rect(&self, row: usize, col: usize, nrows: usize, ncols: usize) -> FracRect {
        let cell_w = (self.right - self.left) / (ncols as f64 + self.wspace * (ncols as f64 - 1.0));
        let sep_w = self.wspace * cell_w;
        let cell_h = (self.top - self.bottom) / (nrows as f64 + self.hspace * (nrows as f64 - 1.0));
        let sep_h = self.hspace * cell_h;

        let left = self.left + col as f64 * (cell_w + sep_w);
        let top = self.top - row as f64 * (cell_h + sep_h);
        FracRect { left, right: left + cell_w, bottom: top - cell_h, top }
    }
}
