// File: crates/grid-render-skia/src/text.rs
// Summary: Anchored single-line text drawing on top of Skia fonts.

use grid_core::{HAlign, VAlign};
use skia_safe as skia;

pub struct TextStyle {
    font: skia::Font,
    paint: skia::Paint,
}

impl TextStyle {
    pub fn new(size_px: f32, color: skia::Color) -> Self {
        let font = match skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::normal()) {
            Some(tf) => skia::Font::new(tf, size_px.max(1.0)),
            None => {
                // No system fonts: metrics still work, glyphs may not draw.
                let mut f = skia::Font::default();
                f.set_size(size_px.max(1.0));
                f
            }
        };
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color);
        Self { font, paint }
    }

    pub fn measure_width(&self, text: &str) -> f32 {
        self.font.measure_str(text, Some(&self.paint)).0
    }

    /// Height from the top of capitals to the bottom of descenders.
    pub fn line_height(&self) -> f32 {
        let (_, m) = self.font.metrics();
        -m.ascent + m.descent
    }

    /// Draw `text` so that the point `(x, y)` sits at the requested anchor of its box.
    pub fn draw_anchored(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, h: HAlign, v: VAlign) {
        if text.is_empty() {
            return;
        }
        let w = self.measure_width(text);
        let ox = match h {
            HAlign::Left => x,
            HAlign::Center => x - w * 0.5,
            HAlign::Right => x - w,
        };
        let (_, m) = self.font.metrics();
        let baseline = match v {
            VAlign::Top => y - m.ascent,
            VAlign::Center => y + m.cap_height * 0.5,
            VAlign::Bottom => y - m.descent,
        };
        canvas.draw_str(text, (ox, baseline), &self.font, &self.paint);
    }
}
