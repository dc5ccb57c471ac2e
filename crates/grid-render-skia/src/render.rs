// File: crates/grid-render-skia/src/render.rs
// Summary: Rasterizes a decorated panel grid (frames, ticks, labels, series) onto a Skia canvas.

use grid_core::units::MM_PER_INCH;
use grid_core::{FracRect, Grid, GridSpec, HAlign, RecordedPanel, TickDirection, VAlign};
use skia_safe as skia;

use crate::text::TextStyle;
use crate::theme::Theme;

const POINTS_PER_INCH: f32 = 72.0;

/// Physical sizes used while drawing. Font and stroke sizes are in points,
/// lengths in millimetres; both scale with the page dpi.
#[derive(Clone, Copy, Debug)]
pub struct RenderStyle {
    pub tick_label_pt: f32,
    pub axis_label_pt: f32,
    pub title_pt: f32,
    pub frame_width_pt: f32,
    pub line_width_pt: f32,
    pub tick_length_mm: f32,
    pub pad_mm: f32,
    /// Skip all text; keeps pixel output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            tick_label_pt: 7.0,
            axis_label_pt: 8.0,
            title_pt: 9.0,
            frame_width_pt: 0.6,
            line_width_pt: 1.0,
            tick_length_mm: 1.2,
            pad_mm: 0.8,
            draw_labels: true,
        }
    }
}

struct Px {
    per_mm: f32,
    per_pt: f32,
}

impl Px {
    fn new(dpi: f64) -> Self {
        Self { per_mm: (dpi / MM_PER_INCH) as f32, per_pt: dpi as f32 / POINTS_PER_INCH }
    }
}

struct Fonts {
    tick: TextStyle,
    label: TextStyle,
    title: TextStyle,
}

/// Paint the whole figure: background, then every panel in row-major order.
pub(crate) fn draw_grid(canvas: &skia::Canvas, grid: &Grid<RecordedPanel>, spec: &GridSpec, theme: &Theme, style: &RenderStyle) {
    canvas.clear(theme.background);
    let (w, h) = spec.pixel_size();
    let px = Px::new(spec.dpi);
    let fonts = Fonts {
        tick: TextStyle::new(style.tick_label_pt * px.per_pt, theme.tick_label),
        label: TextStyle::new(style.axis_label_pt * px.per_pt, theme.axis_label),
        title: TextStyle::new(style.title_pt * px.per_pt, theme.title),
    };
    for (_, panel) in grid.iter() {
        let rect = to_pixels(&panel.rect, w, h);
        draw_panel(canvas, panel, rect, &px, &fonts, theme, style);
    }
}

fn to_pixels(r: &FracRect, w: i32, h: i32) -> skia::Rect {
    let (w, h) = (w as f64, h as f64);
    skia::Rect::from_xywh(
        (r.left * w) as f32,
        ((1.0 - r.top) * h) as f32,
        (r.width() * w) as f32,
        (r.height() * h) as f32,
    )
}

/// Data range -> pixel span along one axis.
struct AxisMap {
    lo: f64,
    hi: f64,
    lo_px: f32,
    hi_px: f32,
}

impl AxisMap {
    fn new(lim: Option<(f64, f64)>, lo_px: f32, hi_px: f32) -> Self {
        let (lo, mut hi) = lim.unwrap_or((0.0, 1.0));
        if (hi - lo).abs() < 1e-12 { hi = lo + 1.0; }
        Self { lo, hi, lo_px, hi_px }
    }

    #[inline]
    fn map(&self, v: f64) -> f32 {
        self.lo_px + ((v - self.lo) / (self.hi - self.lo)) as f32 * (self.hi_px - self.lo_px)
    }

    fn contains(&self, v: f64) -> bool {
        let eps = (self.hi - self.lo).abs() * 1e-9;
        v >= self.lo.min(self.hi) - eps && v <= self.lo.max(self.hi) + eps
    }
}

fn draw_panel(
    canvas: &skia::Canvas,
    p: &RecordedPanel,
    r: skia::Rect,
    px: &Px,
    fonts: &Fonts,
    theme: &Theme,
    style: &RenderStyle,
) {
    let xmap = AxisMap::new(p.xlim, r.left, r.right);
    let ymap = AxisMap::new(p.ylim, r.bottom, r.top);

    let mut fill = skia::Paint::default();
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.panel_background);
    canvas.draw_rect(r, &fill);

    draw_series(canvas, p, r, &xmap, &ymap, px, theme, style);

    let mut frame = skia::Paint::default();
    frame.set_anti_alias(true);
    frame.set_style(skia::paint::Style::Stroke);
    frame.set_stroke_width(style.frame_width_pt * px.per_pt);
    frame.set_color(theme.frame);
    canvas.draw_rect(r, &frame);

    // Ticks on the bottom and left edges.
    let len = style.tick_length_mm * px.per_mm;
    let (inside, outside) = match p.tick_direction {
        TickDirection::In => (len, 0.0),
        TickDirection::Out => (0.0, len),
        TickDirection::InOut => (len * 0.5, len * 0.5),
    };
    let mut tick = frame.clone();
    tick.set_color(theme.tick);
    for &t in p.xticks.iter().filter(|&&t| xmap.contains(t)) {
        let x = xmap.map(t);
        canvas.draw_line((x, r.bottom + outside), (x, r.bottom - inside), &tick);
    }
    for &t in p.yticks.iter().filter(|&&t| ymap.contains(t)) {
        let y = ymap.map(t);
        canvas.draw_line((r.left - outside, y), (r.left + inside, y), &tick);
    }

    if style.draw_labels {
        draw_labels(canvas, p, r, &xmap, &ymap, outside, px, fonts, style);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_series(
    canvas: &skia::Canvas,
    p: &RecordedPanel,
    r: skia::Rect,
    xmap: &AxisMap,
    ymap: &AxisMap,
    px: &Px,
    theme: &Theme,
    style: &RenderStyle,
) {
    if p.lines.is_empty() {
        return;
    }
    canvas.save();
    canvas.clip_rect(r, skia::ClipOp::Intersect, true);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(style.line_width_pt * px.per_pt);

    for (i, line) in p.lines.iter().enumerate() {
        if line.len() < 2 {
            continue;
        }
        let mut path = skia::Path::new();
        let (x0, y0) = line[0];
        path.move_to((xmap.map(x0), ymap.map(y0)));
        for &(x, y) in line.iter().skip(1) {
            path.line_to((xmap.map(x), ymap.map(y)));
        }
        stroke.set_color(theme.series_color(i));
        canvas.draw_path(&path, &stroke);
    }
    canvas.restore();
}

#[allow(clippy::too_many_arguments)]
fn draw_labels(
    canvas: &skia::Canvas,
    p: &RecordedPanel,
    r: skia::Rect,
    xmap: &AxisMap,
    ymap: &AxisMap,
    outside: f32,
    px: &Px,
    fonts: &Fonts,
    style: &RenderStyle,
) {
    let pad = style.pad_mm * px.per_mm;

    // x tick labels hang below the bottom edge
    let mut x_text = false;
    for (&t, label) in p.xticks.iter().zip(&p.xtick_labels) {
        if label.text.is_empty() || !xmap.contains(t) { continue; }
        fonts.tick.draw_anchored(canvas, &label.text, xmap.map(t), r.bottom + outside + pad, label.align, VAlign::Top);
        x_text = true;
    }

    // y tick labels sit left of the frame, right-aligned
    let mut y_text_width = 0.0f32;
    for (&t, label) in p.yticks.iter().zip(&p.ytick_labels) {
        if label.text.is_empty() || !ymap.contains(t) { continue; }
        fonts.tick.draw_anchored(canvas, &label.text, r.left - outside - pad, ymap.map(t), HAlign::Right, label.align);
        y_text_width = y_text_width.max(fonts.tick.measure_width(&label.text));
    }

    if let Some(xlabel) = &p.xlabel {
        let mut y = r.bottom + outside + pad;
        if x_text { y += fonts.tick.line_height() + pad; }
        fonts.label.draw_anchored(canvas, xlabel, r.center_x(), y, HAlign::Center, VAlign::Top);
    }

    if let Some(ylabel) = &p.ylabel {
        let mut x = r.left - outside - pad;
        if y_text_width > 0.0 { x -= y_text_width + pad; }
        canvas.save();
        canvas.translate((x, r.center_y()));
        canvas.rotate(-90.0, None);
        fonts.label.draw_anchored(canvas, ylabel, 0.0, 0.0, HAlign::Center, VAlign::Bottom);
        canvas.restore();
    }

    if let Some(title) = &p.title {
        fonts.title.draw_anchored(canvas, title, r.center_x(), r.top - pad, HAlign::Center, VAlign::Bottom);
    }
}
