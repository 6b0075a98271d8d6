// File: crates/prettyplot-core/src/render/recording.rs
// Summary: Renderer that records every call instead of drawing; used by tests and dry runs.

use std::path::{Path, PathBuf};

use crate::error::{PlotError, PlotResult};
use crate::route::AxisGroup;
use crate::style::ImageFormat;

use super::{
    AxisId, AxisStyle, Colorbar, Decorations, FigureSpec, HistogramMark, ImageMark, Legend,
    LineMark, ReferenceLine, Renderer,
};

/// One recorded renderer call.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CreateFigure(FigureSpec),
    AddLine { group: AxisGroup, mark: LineMark },
    AddHistogram(HistogramMark),
    AddImage(ImageMark),
    AddReferenceLine(ReferenceLine),
    ConfigureAxis { axis: AxisId, style: AxisStyle },
    SetColorbar(Colorbar),
    SetLegend(Legend<usize>),
    SetDecorations(Decorations),
    Export { path: PathBuf, format: ImageFormat },
    Show,
    CloseFigure,
}

impl Call {
    pub fn name(&self) -> &'static str {
        match self {
            Call::CreateFigure(_) => "create_figure",
            Call::AddLine { .. } => "add_line",
            Call::AddHistogram(_) => "add_histogram",
            Call::AddImage(_) => "add_image",
            Call::AddReferenceLine(_) => "add_reference_line",
            Call::ConfigureAxis { .. } => "configure_axis",
            Call::SetColorbar(_) => "set_colorbar",
            Call::SetLegend(_) => "set_legend",
            Call::SetDecorations(_) => "set_decorations",
            Call::Export { .. } => "export",
            Call::Show => "show",
            Call::CloseFigure => "close_figure",
        }
    }
}

/// Handles are the index of the recorded mark call.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<Call>,
    open: bool,
    fail_export: bool,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose `export` fails, to exercise error paths after the figure is open.
    pub fn failing_export() -> Self {
        Self { fail_export: true, ..Self::default() }
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls.iter().map(Call::name).collect()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn lines(&self) -> impl Iterator<Item = (AxisGroup, &LineMark)> {
        self.calls.iter().filter_map(|c| match c {
            Call::AddLine { group, mark } => Some((*group, mark)),
            _ => None,
        })
    }

    pub fn histograms(&self) -> impl Iterator<Item = &HistogramMark> {
        self.calls.iter().filter_map(|c| match c {
            Call::AddHistogram(m) => Some(m),
            _ => None,
        })
    }

    pub fn reference_lines(&self) -> impl Iterator<Item = &ReferenceLine> {
        self.calls.iter().filter_map(|c| match c {
            Call::AddReferenceLine(l) => Some(l),
            _ => None,
        })
    }

    /// Style of the last `configure_axis` call for `axis`.
    pub fn axis(&self, axis: AxisId) -> Option<&AxisStyle> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::ConfigureAxis { axis: a, style } if *a == axis => Some(style),
            _ => None,
        })
    }

    pub fn legend(&self) -> Option<&Legend<usize>> {
        self.calls.iter().find_map(|c| match c {
            Call::SetLegend(l) => Some(l),
            _ => None,
        })
    }

    pub fn decorations(&self) -> Option<&Decorations> {
        self.calls.iter().find_map(|c| match c {
            Call::SetDecorations(d) => Some(d),
            _ => None,
        })
    }

    fn record_mark(&mut self, call: Call) -> PlotResult<usize> {
        self.ensure_open()?;
        self.calls.push(call);
        Ok(self.calls.len() - 1)
    }

    fn record(&mut self, call: Call) -> PlotResult<()> {
        self.ensure_open()?;
        self.calls.push(call);
        Ok(())
    }

    fn ensure_open(&self) -> PlotResult<()> {
        if self.open {
            Ok(())
        } else {
            Err(PlotError::Render("no open figure".into()))
        }
    }
}

impl Renderer for RecordingRenderer {
    type Handle = usize;

    fn create_figure(&mut self, spec: &FigureSpec) -> PlotResult<()> {
        if self.open {
            return Err(PlotError::Render("a figure is already open".into()));
        }
        self.open = true;
        self.calls.push(Call::CreateFigure(spec.clone()));
        Ok(())
    }

    fn add_line(&mut self, group: AxisGroup, mark: &LineMark) -> PlotResult<usize> {
        self.record_mark(Call::AddLine { group, mark: mark.clone() })
    }

    fn add_histogram(&mut self, mark: &HistogramMark) -> PlotResult<usize> {
        self.record_mark(Call::AddHistogram(mark.clone()))
    }

    fn add_image(&mut self, mark: &ImageMark) -> PlotResult<usize> {
        self.record_mark(Call::AddImage(mark.clone()))
    }

    fn add_reference_line(&mut self, line: &ReferenceLine) -> PlotResult<()> {
        self.record(Call::AddReferenceLine(*line))
    }

    fn configure_axis(&mut self, axis: AxisId, style: &AxisStyle) -> PlotResult<()> {
        self.record(Call::ConfigureAxis { axis, style: style.clone() })
    }

    fn set_colorbar(&mut self, colorbar: &Colorbar) -> PlotResult<()> {
        self.record(Call::SetColorbar(colorbar.clone()))
    }

    fn set_legend(&mut self, legend: &Legend<usize>) -> PlotResult<()> {
        self.record(Call::SetLegend(legend.clone()))
    }

    fn set_decorations(&mut self, decorations: &Decorations) -> PlotResult<()> {
        self.record(Call::SetDecorations(decorations.clone()))
    }

    fn export(&mut self, path: &Path, format: ImageFormat) -> PlotResult<()> {
        self.record(Call::Export { path: path.to_path_buf(), format })?;
        if self.fail_export {
            return Err(PlotError::Render(format!("export to {} refused", path.display())));
        }
        Ok(())
    }

    fn show(&mut self) -> PlotResult<()> {
        self.record(Call::Show)
    }

    fn close_figure(&mut self) {
        if self.open {
            self.open = false;
            self.calls.push(Call::CloseFigure);
        }
    }
}
