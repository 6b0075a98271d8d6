// File: crates/prettyplot-core/src/render/mod.rs
// Summary: Renderer contract: figure lifecycle, marks, axis/colorbar/legend configuration, export.
// Notes:
// - Marks are fully resolved (no option shapes left) before they reach a backend.
// - A backend owns at most one open figure; `FigureGuard` closes it on every exit path.

mod marks;
mod recording;

use std::ops::{Deref, DerefMut};
use std::path::Path;

pub use marks::{
    AxisId, AxisScale, AxisStyle, Colorbar, ColorbarSide, Decorations, FigureLabel, FigureSpec,
    HistogramKind, HistogramMark, ImageMark, LabelAnchor, Legend, LegendEntry, LineMark,
    Orientation, ReferenceLine, ReferenceLineStyle, TickDirection,
};
pub use recording::{Call, RecordingRenderer};

use crate::error::PlotResult;
use crate::route::AxisGroup;
use crate::style::ImageFormat;

/// Contract implemented by any rendering backend.
///
/// The dispatcher calls these in a fixed order: `create_figure`, marks,
/// axes and decorations, legend, `export`, `show`, `close_figure`.
/// Mark-adding calls return an opaque handle used only for legend entries.
pub trait Renderer {
    type Handle: Clone + std::fmt::Debug;

    fn create_figure(&mut self, spec: &FigureSpec) -> PlotResult<()>;

    fn add_line(&mut self, group: AxisGroup, mark: &LineMark) -> PlotResult<Self::Handle>;
    fn add_histogram(&mut self, mark: &HistogramMark) -> PlotResult<Self::Handle>;
    fn add_image(&mut self, mark: &ImageMark) -> PlotResult<Self::Handle>;
    fn add_reference_line(&mut self, line: &ReferenceLine) -> PlotResult<()>;

    fn configure_axis(&mut self, axis: AxisId, style: &AxisStyle) -> PlotResult<()>;
    fn set_colorbar(&mut self, colorbar: &Colorbar) -> PlotResult<()>;
    fn set_legend(&mut self, legend: &Legend<Self::Handle>) -> PlotResult<()>;
    fn set_decorations(&mut self, decorations: &Decorations) -> PlotResult<()>;

    fn export(&mut self, path: &Path, format: ImageFormat) -> PlotResult<()>;
    /// Display the current figure; returns once the display is dismissed.
    fn show(&mut self) -> PlotResult<()>;
    /// Discard the current figure. Must be idempotent.
    fn close_figure(&mut self);
}

/// Open figure on a renderer; closes it when dropped.
pub struct FigureGuard<'r, R: Renderer + ?Sized> {
    renderer: &'r mut R,
}

impl<'r, R: Renderer + ?Sized> FigureGuard<'r, R> {
    pub fn open(renderer: &'r mut R, spec: &FigureSpec) -> PlotResult<Self> {
        renderer.create_figure(spec)?;
        Ok(Self { renderer })
    }
}

impl<R: Renderer + ?Sized> Deref for FigureGuard<'_, R> {
    type Target = R;
    fn deref(&self) -> &R {
        self.renderer
    }
}

impl<R: Renderer + ?Sized> DerefMut for FigureGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.renderer
    }
}

impl<R: Renderer + ?Sized> Drop for FigureGuard<'_, R> {
    fn drop(&mut self) {
        self.renderer.close_figure();
    }
}
