// File: crates/prettyplot-core/src/style.rs
// Summary: Style vocabularies (markers, line styles, legend placement, aspect, formats, colormaps).
// Notes:
// - String forms follow the short codes users already know (`"o"`, `"--"`,
//   `"upper right"`); `Display` writes the canonical code back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlotError;

/// Implements `FromStr`/`Display` and string-based serde for a fieldless enum.
macro_rules! string_enum {
    ($ty:ident, $option:literal, { $($variant:ident => [$canon:literal $(, $alias:literal)*]),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = PlotError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = s.trim().to_ascii_lowercase();
                match key.as_str() {
                    $($canon $(| $alias)* => Ok($ty::$variant),)+
                    _ => Err(PlotError::invalid($option, format!("unknown value `{s}`"))),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $($ty::$variant => f.write_str($canon),)+
                }
            }
        }

        impl TryFrom<String> for $ty {
            type Error = PlotError;
            fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
        }

        impl From<$ty> for String {
            fn from(v: $ty) -> Self { v.to_string() }
        }
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Marker {
    #[default]
    None,
    Point,
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    Diamond,
    Plus,
    Cross,
    Star,
}

string_enum!(Marker, "markers", {
    None => ["none", "", " "],
    Point => [".", "point"],
    Circle => ["o", "circle"],
    Square => ["s", "square"],
    TriangleUp => ["^", "triangle_up"],
    TriangleDown => ["v", "triangle_down"],
    Diamond => ["d", "diamond"],
    Plus => ["+", "plus"],
    Cross => ["x", "cross"],
    Star => ["*", "star"],
});

impl Marker {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Marker::None)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
    /// No connecting line (markers only).
    None,
}

string_enum!(LineStyle, "linestyles", {
    Solid => ["-", "solid"],
    Dashed => ["--", "dashed"],
    Dotted => [":", "dotted"],
    DashDot => ["-.", "dashdot"],
    None => ["none", "", " "],
});

impl LineStyle {
    /// On/off dash pattern in units of the line width; `None` for solid or invisible lines.
    pub fn dash_pattern(&self) -> Option<&'static [f32]> {
        match self {
            LineStyle::Dashed => Some(&[3.7, 1.6]),
            LineStyle::Dotted => Some(&[1.0, 1.65]),
            LineStyle::DashDot => Some(&[6.4, 1.6, 1.0, 1.6]),
            LineStyle::Solid | LineStyle::None => None,
        }
    }
}

/// Named legend anchor positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LegendPosition {
    /// Corner with the least overlap with the drawn data.
    #[default]
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    Right,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

string_enum!(LegendPosition, "legend_loc", {
    Best => ["best"],
    UpperRight => ["upper right"],
    UpperLeft => ["upper left"],
    LowerLeft => ["lower left"],
    LowerRight => ["lower right"],
    Right => ["right"],
    CenterLeft => ["center left"],
    CenterRight => ["center right"],
    LowerCenter => ["lower center"],
    UpperCenter => ["upper center"],
    Center => ["center"],
});

/// Legend placement: a named position or the legend box's lower-left corner in axes fractions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegendLoc {
    Named(LegendPosition),
    Anchor([f64; 2]),
}

impl Default for LegendLoc {
    fn default() -> Self {
        LegendLoc::Named(LegendPosition::Best)
    }
}

impl From<LegendPosition> for LegendLoc {
    fn from(p: LegendPosition) -> Self {
        LegendLoc::Named(p)
    }
}

/// Ratio of one y data unit to one x data unit on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AspectRepr", into = "AspectRepr")]
pub enum Aspect {
    /// Fill the available plot area.
    #[default]
    Auto,
    /// One x unit and one y unit have the same length.
    Equal,
    Ratio(f64),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AspectRepr {
    Name(String),
    Ratio(f64),
}

impl TryFrom<AspectRepr> for Aspect {
    type Error = PlotError;

    fn try_from(repr: AspectRepr) -> Result<Self, Self::Error> {
        match repr {
            AspectRepr::Name(n) => match n.trim().to_ascii_lowercase().as_str() {
                "auto" => Ok(Aspect::Auto),
                "equal" => Ok(Aspect::Equal),
                other => other
                    .parse::<f64>()
                    .map_err(|_| PlotError::invalid("aspect", format!("unknown aspect `{n}`")))
                    .and_then(|r| Aspect::Ratio(r).checked()),
            },
            AspectRepr::Ratio(r) => Aspect::Ratio(r).checked(),
        }
    }
}

impl From<Aspect> for AspectRepr {
    fn from(a: Aspect) -> Self {
        match a {
            Aspect::Auto => AspectRepr::Name("auto".into()),
            Aspect::Equal => AspectRepr::Name("equal".into()),
            Aspect::Ratio(r) => AspectRepr::Ratio(r),
        }
    }
}

impl Aspect {
    fn checked(self) -> Result<Self, PlotError> {
        match self {
            Aspect::Ratio(r) if !(r.is_finite() && r > 0.0) => {
                Err(PlotError::invalid("aspect", "ratio must be positive"))
            }
            other => Ok(other),
        }
    }

    /// Numeric ratio, `None` for `Auto`.
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Aspect::Auto => None,
            Aspect::Equal => Some(1.0),
            Aspect::Ratio(r) => Some(*r),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ImageFormat {
    Png,
    #[default]
    Svg,
    Pdf,
}

string_enum!(ImageFormat, "img_fmt", {
    Png => ["png"],
    Svg => ["svg"],
    Pdf => ["pdf"],
});

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
            ImageFormat::Pdf => "pdf",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Turbo,
    Greys,
    Blues,
    Reds,
    RedBlue,
}

string_enum!(Colormap, "cmap", {
    Viridis => ["viridis"],
    Plasma => ["plasma"],
    Inferno => ["inferno"],
    Magma => ["magma"],
    Cividis => ["cividis"],
    Turbo => ["turbo"],
    Greys => ["greys", "gray", "grey"],
    Blues => ["blues"],
    Reds => ["reds"],
    RedBlue => ["red_blue", "rdbu"],
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Interpolation {
    #[default]
    Nearest,
    Bilinear,
}

string_enum!(Interpolation, "interpolation", {
    Nearest => ["nearest", "none"],
    Bilinear => ["bilinear"],
});

/// Font family for every piece of text in a figure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FontFamily {
    #[default]
    Serif,
    SansSerif,
    Monospace,
}

string_enum!(FontFamily, "font_family", {
    Serif => ["serif"],
    SansSerif => ["sans-serif", "sans"],
    Monospace => ["monospace", "mono"],
});
