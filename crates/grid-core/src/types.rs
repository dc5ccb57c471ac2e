// File: crates/grid-core/src/types.rs
// Summary: Shared types and default page constants (sizes, margins, gaps in millimetres).

/// Default page width in millimetres.
pub const WIDTH_MM: f64 = 160.0;
/// Default page height in millimetres.
pub const HEIGHT_MM: f64 = 120.0;
/// Default output resolution in dots per inch.
pub const DPI: f64 = 150.0;
/// Default gap between adjacent panels, in millimetres.
pub const GAP_MM: f64 = 2.0;

/// Page margins, in millimetres.
/// Contract: all fields are finite and non-negative (checked by the geometry pass).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(18.0, 5.0, 20.0, 15.0)
    }
}

/// Physical page description: size, resolution, margins and inter-panel gaps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub width: f64,
    pub height: f64,
    pub dpi: f64,
    pub margins: Margins,
    pub horizontal_gap: f64,
    pub vertical_gap: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            width: WIDTH_MM,
            height: HEIGHT_MM,
            dpi: DPI,
            margins: Margins::default(),
            horizontal_gap: GAP_MM,
            vertical_gap: GAP_MM,
        }
    }
}

impl LayoutParams {
    /// Page size in whole pixels at the configured resolution.
    pub fn pixel_size(&self) -> (i32, i32) { crate::units::page_px(self.width, self.height, self.dpi) }
}
