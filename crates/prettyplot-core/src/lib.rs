// File: crates/prettyplot-core/src/lib.rs
// Summary: Core library entry point; parameter objects, normalization, binning and the renderer contract.

pub mod color;
pub mod data;
pub mod dispatch;
pub mod error;
pub mod grid;
pub mod histogram;
pub mod normalize;
pub mod params;
pub mod render;
pub mod route;
pub mod style;
pub mod template;
pub mod types;
pub mod version;

pub use color::Color;
pub use data::{ErrorBar, Grid, XData, XYData};
pub use dispatch::{single_hist, single_imshow, single_plot};
pub use error::{PlotError, PlotResult};
pub use histogram::{Bins, Cumulative};
pub use normalize::{AxisValue, GroupTable, StyleValue};
pub use params::{
    ColorbarParams, FigureParams, HistParams, ImshowParams, LegendParams, OutputParams, PlotParams,
    TickParams,
};
pub use render::{FigureGuard, RecordingRenderer, Renderer};
pub use route::{AxisGroup, GroupSizes, SeriesSet};
pub use style::{
    Aspect, Colormap, FontFamily, ImageFormat, Interpolation, LegendLoc, LegendPosition, LineStyle,
    Marker,
};
