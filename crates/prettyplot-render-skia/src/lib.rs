// File: crates/prettyplot-render-skia/src/lib.rs
// Summary: Skia renderer crate; a retained-scene `Renderer` rasterized to PNG/RGBA or written as SVG/PDF.
// Notes:
// - Marks are stored as they arrive and drawn in one pass on export, so axis
//   ranges and margins can take every mark into account.
// - `show` opens a window with the `window` feature; without it, it only logs.

pub mod draw;
pub mod export;
pub mod layout;
pub mod scale;
pub mod scene;
pub mod text;
pub mod theme;
pub mod ticks;
#[cfg(feature = "window")]
pub mod window;

use std::path::Path;

use prettyplot_core::render::{
    AxisId, AxisStyle, Colorbar, Decorations, FigureSpec, HistogramKind, HistogramMark, ImageMark,
    Legend, LineMark, ReferenceLine, Renderer,
};
use prettyplot_core::{AxisGroup, ImageFormat, PlotError, PlotResult};
use tracing::{debug, trace, warn};

pub use scene::MarkId;
use scene::{Item, Scene};

/// `Renderer` drawing with Skia's CPU raster backend (PNG, RGBA) and SVG canvas.
pub struct SkiaRenderer {
    scene: Option<Scene>,
    window_title: String,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { scene: None, window_title: "prettyplot".to_string() }
    }

    /// Title of the window opened by `show`.
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn is_open(&self) -> bool {
        self.scene.is_some()
    }

    fn scene(&self) -> PlotResult<&Scene> {
        self.scene.as_ref().ok_or_else(|| PlotError::Render("no open figure".into()))
    }

    fn scene_mut(&mut self) -> PlotResult<&mut Scene> {
        self.scene.as_mut().ok_or_else(|| PlotError::Render("no open figure".into()))
    }

    /// Current figure encoded as PNG.
    pub fn png_bytes(&self) -> PlotResult<Vec<u8>> {
        export::png_bytes(self.scene()?)
    }

    /// Current figure as an SVG document.
    pub fn svg_bytes(&self) -> PlotResult<Vec<u8>> {
        export::svg_bytes(self.scene()?)
    }

    /// Current figure as a PDF document.
    pub fn pdf_bytes(&self) -> PlotResult<Vec<u8>> {
        export::pdf_bytes(self.scene()?)
    }

    /// Current figure as RGBA pixels: `(pixels, width, height, row_bytes)`.
    pub fn rgba8(&self) -> PlotResult<(Vec<u8>, u32, u32, usize)> {
        export::rgba8(self.scene()?)
    }
}

impl Renderer for SkiaRenderer {
    type Handle = MarkId;

    fn create_figure(&mut self, spec: &FigureSpec) -> PlotResult<()> {
        if self.scene.is_some() {
            return Err(PlotError::Render("a figure is already open".into()));
        }
        debug!(width = spec.width_px(), height = spec.height_px(), font = %spec.font_family, "figure created");
        self.scene = Some(Scene::new(spec.clone()));
        Ok(())
    }

    fn add_line(&mut self, group: AxisGroup, mark: &LineMark) -> PlotResult<MarkId> {
        let scene = self.scene_mut()?;
        let color = scene.color_for(group, mark.color);
        trace!(?group, points = mark.data.len(), %color, "line added");
        Ok(scene.push(Item::Line { group, mark: mark.clone(), color }))
    }

    fn add_histogram(&mut self, mark: &HistogramMark) -> PlotResult<MarkId> {
        let scene = self.scene_mut()?;
        let color = match mark.kind {
            HistogramKind::Outline => mark.edge_color,
            HistogramKind::Bar | HistogramKind::Step => scene.color_for(AxisGroup::Left, mark.color),
        };
        trace!(kind = ?mark.kind, bins = mark.heights.len(), "histogram added");
        Ok(scene.push(Item::Histogram { mark: mark.clone(), color }))
    }

    fn add_image(&mut self, mark: &ImageMark) -> PlotResult<MarkId> {
        let scene = self.scene_mut()?;
        trace!(rows = mark.grid.rows(), cols = mark.grid.cols(), cmap = %mark.colormap, "image added");
        Ok(scene.push(Item::Image(mark.clone())))
    }

    fn add_reference_line(&mut self, line: &ReferenceLine) -> PlotResult<()> {
        self.scene_mut()?.push(Item::Reference(*line));
        Ok(())
    }

    fn configure_axis(&mut self, axis: AxisId, style: &AxisStyle) -> PlotResult<()> {
        self.scene_mut()?.axes.insert(axis, style.clone());
        Ok(())
    }

    fn set_colorbar(&mut self, colorbar: &Colorbar) -> PlotResult<()> {
        let scene = self.scene_mut()?;
        if !scene.has_image() {
            warn!("colorbar set on a figure without an image; it will not be drawn");
        }
        scene.colorbar = Some(colorbar.clone());
        Ok(())
    }

    fn set_legend(&mut self, legend: &Legend<MarkId>) -> PlotResult<()> {
        let scene = self.scene_mut()?;
        if let Some(bad) = legend.entries.iter().find(|e| scene.item(e.handle).is_none()) {
            return Err(PlotError::Render(format!("legend entry `{}` refers to an unknown mark", bad.label)));
        }
        scene.legend = Some(legend.clone());
        Ok(())
    }

    fn set_decorations(&mut self, decorations: &Decorations) -> PlotResult<()> {
        self.scene_mut()?.decorations = Some(decorations.clone());
        Ok(())
    }

    fn export(&mut self, path: &Path, format: ImageFormat) -> PlotResult<()> {
        export::write(self.scene()?, path, format)
    }

    #[cfg(feature = "window")]
    fn show(&mut self) -> PlotResult<()> {
        window::show(self.scene()?, &self.window_title)
    }

    #[cfg(not(feature = "window"))]
    fn show(&mut self) -> PlotResult<()> {
        self.scene()?;
        warn!(title = %self.window_title, "built without the `window` feature; show() does nothing");
        Ok(())
    }

    fn close_figure(&mut self) {
        if let Some(scene) = self.scene.take() {
            debug!(marks = scene.items.len(), "figure closed");
        }
    }
}
