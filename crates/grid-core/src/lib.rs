// File: crates/grid-core/src/lib.rs
// Summary: Core library entry point; exports the grid geometry engine and decoration pipeline.

pub mod canvas;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod plot;
pub mod record;
pub mod scale;
pub mod select;
pub mod ticks;
pub mod types;
pub mod units;

pub use canvas::{Canvas, GridSpec, Panel};
pub use error::{ConfigurationError, Result};
pub use figure::{decorate, FigureOptions, GridFigure};
pub use geometry::{FracRect, SubplotFractions};
pub use grid::Grid;
pub use plot::{NoPlot, Plotter};
pub use record::{RecordedPanel, RecordingCanvas};
pub use scale::Scale;
pub use select::{Index, Selector};
pub use ticks::{HAlign, TickDirection, TickLabel, VAlign};
pub use types::{LayoutParams, Margins};
