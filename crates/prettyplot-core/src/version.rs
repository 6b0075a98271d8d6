// File: crates/prettyplot-core/src/version.rs
// Summary: Version information for diagnostics.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name, version and supported export formats on one line.
pub fn summary() -> String {
    format!("{} {} (export formats: png, svg, pdf)", env!("CARGO_PKG_NAME"), VERSION)
}
