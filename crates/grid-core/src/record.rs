// File: crates/grid-core/src/record.rs
// Summary: In-memory canvas that records every panel call; reference backend for tests and benches.

use crate::canvas::{Canvas, GridSpec, Panel};
use crate::geometry::FracRect;
use crate::grid::Grid;
use crate::ticks::{default_labels, HAlign, TickDirection, TickLabel, VAlign};

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedPanel {
    pub row: usize,
    pub col: usize,
    pub rect: FracRect,
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub xlim: Option<(f64, f64)>,
    pub ylim: Option<(f64, f64)>,
    pub xticks: Vec<f64>,
    pub yticks: Vec<f64>,
    pub xtick_labels: Vec<TickLabel<HAlign>>,
    pub ytick_labels: Vec<TickLabel<VAlign>>,
    pub tick_direction: TickDirection,
    pub lines: Vec<Vec<(f64, f64)>>,
}

impl RecordedPanel {
    fn new(row: usize, col: usize, rect: FracRect) -> Self {
        Self {
            row,
            col,
            rect,
            title: None,
            xlabel: None,
            ylabel: None,
            xlim: None,
            ylim: None,
            xticks: Vec::new(),
            yticks: Vec::new(),
            xtick_labels: Vec::new(),
            ytick_labels: Vec::new(),
            tick_direction: TickDirection::default(),
            lines: Vec::new(),
        }
    }

    /// True when at least one x tick label still has text.
    pub fn has_xtick_text(&self) -> bool { self.xtick_labels.iter().any(|l| !l.text.is_empty()) }

    pub fn has_ytick_text(&self) -> bool { self.ytick_labels.iter().any(|l| !l.text.is_empty()) }
}

impl Panel for RecordedPanel {
    fn set_title(&mut self, text: &str) { self.title = Some(text.to_string()); }
    fn set_xlabel(&mut self, text: &str) { self.xlabel = Some(text.to_string()); }
    fn set_ylabel(&mut self, text: &str) { self.ylabel = Some(text.to_string()); }
    fn set_xlim(&mut self, min: f64, max: f64) { self.xlim = Some((min, max)); }
    fn set_ylim(&mut self, min: f64, max: f64) { self.ylim = Some((min, max)); }

    fn set_xticks(&mut self, ticks: &[f64]) {
        self.xticks = ticks.to_vec();
        self.xtick_labels = default_labels(ticks);
    }

    fn set_yticks(&mut self, ticks: &[f64]) {
        self.yticks = ticks.to_vec();
        self.ytick_labels = default_labels(ticks);
    }

    fn set_tick_direction(&mut self, direction: TickDirection) { self.tick_direction = direction; }

    fn clear_xtick_labels(&mut self) {
        for l in &mut self.xtick_labels { l.text.clear(); }
    }

    fn clear_ytick_labels(&mut self) {
        for l in &mut self.ytick_labels { l.text.clear(); }
    }

    fn align_first_last_xtick_labels(&mut self, first: HAlign, last: HAlign) {
        if let Some(l) = self.xtick_labels.first_mut() { l.align = first; }
        if let Some(l) = self.xtick_labels.last_mut() { l.align = last; }
    }

    fn align_first_last_ytick_labels(&mut self, first: VAlign, last: VAlign) {
        if let Some(l) = self.ytick_labels.first_mut() { l.align = first; }
        if let Some(l) = self.ytick_labels.last_mut() { l.align = last; }
    }

    fn draw_line(&mut self, xs: &[f64], ys: &[f64]) {
        self.lines.push(xs.iter().copied().zip(ys.iter().copied()).collect());
    }
}

/// Canvas that keeps panels in memory. Remembers the last `GridSpec` it was given.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub last_spec: Option<GridSpec>,
    pub grids_created: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self { Self::default() }
}

impl Canvas for RecordingCanvas {
    type Panel = RecordedPanel;

    fn create_grid(&mut self, spec: &GridSpec) -> Grid<RecordedPanel> {
        self.last_spec = Some(*spec);
        self.grids_created += 1;
        Grid::from_fn(spec.nrows, spec.ncols, |row, col| {
            RecordedPanel::new(row, col, spec.fractions.panel_rect(row, col, spec.nrows, spec.ncols))
        })
    }
}
