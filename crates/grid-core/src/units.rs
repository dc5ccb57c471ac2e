// File: crates/grid-core/src/units.rs
// Summary: Physical unit conversion.

pub const MM_PER_INCH: f64 = 25.4;

#[inline]
pub fn mm_to_inch(mm: f64) -> f64 { mm / MM_PER_INCH }

#[inline]
pub fn mm_to_px(mm: f64, dpi: f64) -> f64 { mm_to_inch(mm) * dpi }

/// Whole-pixel size of a `width_mm x height_mm` page at `dpi`.
pub fn page_px(width_mm: f64, height_mm: f64, dpi: f64) -> (i32, i32) {
    (mm_to_px(width_mm, dpi).round() as i32, mm_to_px(height_mm, dpi).round() as i32)
}
