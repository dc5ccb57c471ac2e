// File: crates/grid-render-skia/src/lib.rs
// Summary: Skia-backed canvas for grid figures; headless PNG rendering via CPU raster surfaces.

use anyhow::Result;
use grid_core::{Canvas, Grid, GridSpec, RecordedPanel, RecordingCanvas};
use skia_safe as skia;

pub mod render;
pub mod text;
pub mod theme;

pub use render::RenderStyle;
pub use theme::Theme;

/// Canvas that keeps panel state in memory and rasterizes it on demand.
pub struct SkiaCanvas {
    pub theme: Theme,
    pub style: RenderStyle,
    recorder: RecordingCanvas,
}

impl SkiaCanvas {
    pub fn new(theme: Theme) -> Self {
        Self { theme, style: RenderStyle::default(), recorder: RecordingCanvas::new() }
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// The page allocated by the last `create_grid` call, if any.
    pub fn page(&self) -> Option<&GridSpec> { self.recorder.last_spec.as_ref() }

    /// Rasterize `grid` and encode it as PNG.
    pub fn render_to_png_bytes(&self, grid: &Grid<RecordedPanel>) -> Result<Vec<u8>> {
        let spec = self.page().ok_or_else(|| anyhow::anyhow!("no panel grid was created on this canvas"))?;
        let (w, h) = spec.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;

        render::draw_grid(surface.canvas(), grid, spec, &self.theme, &self.style);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render `grid` to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, grid: &Grid<RecordedPanel>, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(grid)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote figure");
        Ok(())
    }
}

impl Default for SkiaCanvas {
    fn default() -> Self { Self::new(Theme::default()) }
}

impl Canvas for SkiaCanvas {
    type Panel = RecordedPanel;

    fn create_grid(&mut self, spec: &GridSpec) -> Grid<RecordedPanel> {
        self.recorder.create_grid(spec)
    }
}
