// File: crates/prettyplot-render-skia/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; font family per figure, anchored and rotated text.

use prettyplot_core::FontFamily;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

/// Horizontal anchor of a text block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Baseline,
    Bottom,
}

pub struct TextShaper {
    fonts: FontCollection,
    family: FontFamily,
}

impl TextShaper {
    pub fn new(family: FontFamily) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, family }
    }

    fn families(&self) -> &'static [&'static str] {
        match self.family {
            FontFamily::Serif => &["DejaVu Serif", "Times New Roman", "Liberation Serif", "Georgia", "serif"],
            FontFamily::SansSerif => &["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"],
            FontFamily::Monospace => &["DejaVu Sans Mono", "Roboto Mono", "Consolas", "Menlo", "monospace"],
        }
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(self.families());
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width and height of `text` at `size` px.
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        let height = if p.height() > 0.0 { p.height() } else { size * 1.2 };
        (p.longest_line(), height)
    }

    /// Draw `text` so that the anchor point given by `h`/`v` sits at `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        h: HAlign,
        v: VAlign,
    ) {
        if text.is_empty() {
            return;
        }
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let ht = p.height();
        let left = match h {
            HAlign::Left => x,
            HAlign::Center => x - w / 2.0,
            HAlign::Right => x - w,
        };
        let top = match v {
            VAlign::Top => y,
            VAlign::Center => y - ht / 2.0,
            VAlign::Baseline => y - p.alphabetic_baseline(),
            VAlign::Bottom => y - ht,
        };
        p.paint(canvas, (left, top));
    }

    /// Draw `text` centered at `(x, y)`, rotated counter-clockwise by `degrees`.
    pub fn draw_rotated(&self, canvas: &skia::Canvas, text: &str, (x, y): (f32, f32), size: f32, color: skia::Color, degrees: f32) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-degrees, None);
        self.draw(canvas, text, (0.0, 0.0), size, color, HAlign::Center, VAlign::Center);
        canvas.restore();
    }
}
