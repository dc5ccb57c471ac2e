// File: crates/grid-core/src/scale.rs
// Summary: Shared axis scale (label + ticks) for one grid row or column.

use std::sync::Arc;

use crate::error::{ConfigurationError, Result};

/// Label and tick positions shared by every panel of a row (y) or column (x).
///
/// The first and last ticks double as the axis limits. Ticks are strictly monotonic,
/// either ascending or descending. Clones share the tick storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    label: String,
    ticks: Arc<[f64]>,
}

impl Scale {
    pub fn new(label: impl Into<String>, ticks: impl Into<Vec<f64>>) -> Result<Self> {
        let label = label.into();
        let ticks = ticks.into();
        if ticks.len() < 2 {
            return Err(ConfigurationError::TooFewTicks { label, count: ticks.len() });
        }
        if let Some(index) = ticks.iter().position(|t| !t.is_finite()) {
            return Err(ConfigurationError::NonFiniteTick { label, index });
        }
        let ascending = ticks[1] > ticks[0];
        let broken = ticks.windows(2).position(|w| if ascending { w[1] <= w[0] } else { w[1] >= w[0] });
        if let Some(i) = broken {
            return Err(ConfigurationError::NonMonotonicTicks { label, index: i + 1 });
        }
        Ok(Self { label, ticks: ticks.into() })
    }

    pub fn label(&self) -> &str { &self.label }

    pub fn ticks(&self) -> &[f64] { &self.ticks }

    /// Axis range `(first tick, last tick)`.
    pub fn limits(&self) -> (f64, f64) {
        (self.ticks[0], self.ticks[self.ticks.len() - 1])
    }
}
