// File: crates/grid-core/src/grid.rs
// Summary: Fixed-shape, row-major container of panel handles.

use crate::select::Selector;

/// `nrows x ncols` panels owned by a canvas backend. The shape never changes
/// after creation; panels are mutated in place but never replaced.
#[derive(Clone, Debug)]
pub struct Grid<P> {
    nrows: usize,
    ncols: usize,
    panels: Vec<P>,
}

impl<P> Grid<P> {
    /// Build a grid by asking `make` for each `(row, col)` in row-major order.
    pub fn from_fn(nrows: usize, ncols: usize, mut make: impl FnMut(usize, usize) -> P) -> Self {
        let mut panels = Vec::with_capacity(nrows * ncols);
        for row in 0..nrows {
            for col in 0..ncols {
                panels.push(make(row, col));
            }
        }
        Self { nrows, ncols, panels }
    }

    pub fn nrows(&self) -> usize { self.nrows }
    pub fn ncols(&self) -> usize { self.ncols }
    pub fn shape(&self) -> (usize, usize) { (self.nrows, self.ncols) }

    pub fn get(&self, row: usize, col: usize) -> Option<&P> {
        if row < self.nrows && col < self.ncols { self.panels.get(row * self.ncols + col) } else { None }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut P> {
        if row < self.nrows && col < self.ncols { self.panels.get_mut(row * self.ncols + col) } else { None }
    }

    /// Every panel with its `(row, col)`, row-major.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &P)> {
        let ncols = self.ncols.max(1);
        self.panels.iter().enumerate().map(move |(i, p)| ((i / ncols, i % ncols), p))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = ((usize, usize), &mut P)> {
        let ncols = self.ncols.max(1);
        self.panels.iter_mut().enumerate().map(move |(i, p)| ((i / ncols, i % ncols), p))
    }

    /// Apply `f` to each panel in the sub-rectangle picked by `rows` x `cols`.
    pub fn apply(&mut self, rows: impl Into<Selector>, cols: impl Into<Selector>, mut f: impl FnMut(&mut P)) {
        let rows = rows.into().resolve(self.nrows);
        let cols = cols.into().resolve(self.ncols);
        for row in rows {
            for col in cols.clone() {
                f(&mut self.panels[row * self.ncols + col]);
            }
        }
    }
}

impl<P> std::ops::Index<(usize, usize)> for Grid<P> {
    type Output = P;
    fn index(&self, (row, col): (usize, usize)) -> &P {
        assert!(row < self.nrows && col < self.ncols, "panel ({row}, {col}) outside {}x{} grid", self.nrows, self.ncols);
        &self.panels[row * self.ncols + col]
    }
}

impl<P> std::ops::IndexMut<(usize, usize)> for Grid<P> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut P {
        assert!(row < self.nrows && col < self.ncols, "panel ({row}, {col}) outside {}x{} grid", self.nrows, self.ncols);
        &mut self.panels[row * self.ncols + col]
    }
}
