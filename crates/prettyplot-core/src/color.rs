// File: crates/prettyplot-core/src/color.rs
// Summary: RGBA color value parsed from names, hex codes, gray levels and cycle references.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlotError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Default color cycle (`"C0"` .. `"C9"`).
pub const CYCLE: [Color; 10] = [
    Color::rgb(0x1f, 0x77, 0xb4),
    Color::rgb(0xff, 0x7f, 0x0e),
    Color::rgb(0x2c, 0xa0, 0x2c),
    Color::rgb(0xd6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xbd),
    Color::rgb(0x8c, 0x56, 0x4b),
    Color::rgb(0xe3, 0x77, 0xc2),
    Color::rgb(0x7f, 0x7f, 0x7f),
    Color::rgb(0xbc, 0xbd, 0x22),
    Color::rgb(0x17, 0xbe, 0xcf),
];

const NAMED: &[(&str, Color)] = &[
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 128, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("gray", Color::rgb(128, 128, 128)),
    ("grey", Color::rgb(128, 128, 128)),
    ("lightgray", Color::rgb(211, 211, 211)),
    ("darkgray", Color::rgb(169, 169, 169)),
    ("silver", Color::rgb(192, 192, 192)),
    ("orange", Color::rgb(255, 165, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("brown", Color::rgb(165, 42, 42)),
    ("pink", Color::rgb(255, 192, 203)),
    ("olive", Color::rgb(128, 128, 0)),
    ("navy", Color::rgb(0, 0, 128)),
    ("teal", Color::rgb(0, 128, 128)),
    ("maroon", Color::rgb(128, 0, 0)),
    ("lime", Color::rgb(0, 255, 0)),
    ("gold", Color::rgb(255, 215, 0)),
    ("indigo", Color::rgb(75, 0, 130)),
    ("violet", Color::rgb(238, 130, 238)),
    ("crimson", Color::rgb(220, 20, 60)),
    ("coral", Color::rgb(255, 127, 80)),
    ("salmon", Color::rgb(250, 128, 114)),
    ("turquoise", Color::rgb(64, 224, 208)),
    ("skyblue", Color::rgb(135, 206, 235)),
    ("darkblue", Color::rgb(0, 0, 139)),
    ("darkred", Color::rgb(139, 0, 0)),
    ("darkgreen", Color::rgb(0, 100, 0)),
    ("tab:blue", CYCLE[0]),
    ("tab:orange", CYCLE[1]),
    ("tab:green", CYCLE[2]),
    ("tab:red", CYCLE[3]),
    ("tab:purple", CYCLE[4]),
    ("tab:brown", CYCLE[5]),
    ("tab:pink", CYCLE[6]),
    ("tab:gray", CYCLE[7]),
    ("tab:olive", CYCLE[8]),
    ("tab:cyan", CYCLE[9]),
];

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The `i`-th entry of the default color cycle (wraps around).
    pub fn cycle(i: usize) -> Self {
        CYCLE[i % CYCLE.len()]
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * self.a as f64).round() as u8;
        Self { a, ..self }
    }

    fn single_letter(c: char) -> Option<Self> {
        Some(match c {
            'b' => Color::rgb(0, 0, 255),
            'g' => Color::rgb(0, 128, 0),
            'r' => Color::rgb(255, 0, 0),
            'c' => Color::rgb(0, 191, 191),
            'm' => Color::rgb(191, 0, 191),
            'y' => Color::rgb(191, 191, 0),
            'k' => Color::rgb(0, 0, 0),
            'w' => Color::rgb(255, 255, 255),
            _ => return None,
        })
    }

    fn from_hex(hex: &str) -> Option<Self> {
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        let parsed = if let Some(hex) = lower.strip_prefix('#') {
            Color::from_hex(hex)
        } else if let Some(idx) = lower.strip_prefix('c').and_then(|d| d.parse::<usize>().ok()) {
            Some(Color::cycle(idx))
        } else if let Ok(level) = lower.parse::<f64>() {
            // Gray level in [0, 1].
            (0.0..=1.0).contains(&level).then(|| {
                let v = (level * 255.0).round() as u8;
                Color::rgb(v, v, v)
            })
        } else if lower.chars().count() == 1 {
            lower.chars().next().and_then(Color::single_letter)
        } else {
            NAMED.iter().find(|(name, _)| *name == lower).map(|(_, c)| *c)
        };
        parsed.ok_or_else(|| PlotError::invalid("color", format!("unknown color `{s}`")))
    }
}

impl TryFrom<String> for Color {
    type Error = PlotError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_usual_spellings() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!("k".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("#00ff0080".parse::<Color>().unwrap(), Color::rgba(0, 255, 0, 128));
        assert_eq!("C1".parse::<Color>().unwrap(), CYCLE[1]);
        assert_eq!("0.5".parse::<Color>().unwrap(), Color::rgb(128, 128, 128));
        assert_eq!("Tab:Blue".parse::<Color>().unwrap(), CYCLE[0]);
        assert!("not-a-color".parse::<Color>().is_err());
    }

    #[test]
    fn display_round_trips_through_hex() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }
}
