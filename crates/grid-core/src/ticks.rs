// File: crates/grid-core/src/ticks.rs
// Summary: Tick presentation types and label formatting shared by canvas backends.

/// Which way tick marks point relative to the panel frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TickDirection {
    In,
    #[default]
    Out,
    InOut,
}

/// Horizontal anchor of an x tick label relative to its tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical anchor of a y tick label relative to its tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VAlign {
    Bottom,
    #[default]
    Center,
    Top,
}

/// One tick label as a backend keeps it: text (empty once cleared) plus its anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel<A> {
    pub text: String,
    pub align: A,
}

/// Build default labels for a tick sequence.
pub fn default_labels<A: Default>(ticks: &[f64]) -> Vec<TickLabel<A>> {
    ticks.iter().map(|&t| TickLabel { text: format_tick(t), align: A::default() }).collect()
}

/// Shortest readable decimal for a tick value: `2.0 -> "2"`, `0.25 -> "0.25"`, `-0.0 -> "0"`.
pub fn format_tick(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{:.6}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Evenly spaced samples including both ends.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
