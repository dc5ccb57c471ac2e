// File: crates/grid-render-skia/src/theme.rs
// Summary: Paper/Dark color themes for figure rendering.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub panel_background: skia::Color,
    pub frame: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    /// Line colors, cycled per series within a panel.
    pub series: [skia::Color; 4],
}

impl Theme {
    pub fn paper() -> Self {
        Self {
            name: "paper",
            background: skia::Color::from_argb(255, 255, 255, 255),
            panel_background: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            tick_label: skia::Color::from_argb(255, 20, 20, 30),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            title: skia::Color::from_argb(255, 0, 0, 0),
            series: [
                skia::Color::from_argb(255, 31, 119, 180),
                skia::Color::from_argb(255, 255, 127, 14),
                skia::Color::from_argb(255, 44, 160, 44),
                skia::Color::from_argb(255, 214, 39, 40),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            panel_background: skia::Color::from_argb(255, 24, 24, 28),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 235, 235, 245),
            series: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 230, 70),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
            ],
        }
    }

    pub fn series_color(&self, index: usize) -> skia::Color {
        self.series[index % self.series.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::paper() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::paper(), Theme::dark()]
}

/// Find a theme by its `name` (case-insensitive), falling back to paper with a warning.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    tracing::warn!(requested = name, "unknown theme, using paper");
    Theme::paper()
}
