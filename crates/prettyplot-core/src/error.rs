// File: crates/prettyplot-core/src/error.rs
// Summary: Error type shared by the normalizer, the dispatcher and renderer backends.

use thiserror::Error;

use crate::route::AxisGroup;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    /// A list-shaped option does not have one entry per series of the group it addresses.
    #[error("option `{option}` has {found} entries for the {group} group, expected {expected}")]
    ShapeMismatch {
        option: &'static str,
        group: AxisGroup,
        expected: usize,
        found: usize,
    },

    #[error("invalid value for `{option}`: {reason}")]
    InvalidOption { option: &'static str, reason: String },

    #[error("degenerate data: {0}")]
    DegenerateData(String),

    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PlotError {
    pub(crate) fn invalid(option: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOption { option, reason: reason.into() }
    }

    /// True for errors raised while checking the configuration, before anything is drawn.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. } | Self::InvalidOption { .. })
    }
}
