// File: crates/prettyplot-render-skia/src/scene.rs
// Summary: Retained figure contents (marks, axis settings, legend, decorations) awaiting rasterization.

use std::collections::HashMap;

use prettyplot_core::render::{
    AxisId, AxisScale, AxisStyle, Colorbar, Decorations, FigureSpec, HistogramMark,
    ImageMark, Legend, LineMark, ReferenceLine,
};
use prettyplot_core::{AxisGroup, Color, ErrorBar};

use crate::scale::{Extent, Range};

/// Handle of a mark in the current scene; index into `Scene::items`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkId(pub usize);

#[derive(Clone, Debug)]
pub enum Item {
    /// Line/marker series with its final color.
    Line { group: AxisGroup, mark: LineMark, color: Color },
    Histogram { mark: HistogramMark, color: Color },
    Image(ImageMark),
    Reference(ReferenceLine),
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub spec: FigureSpec,
    pub items: Vec<Item>,
    pub axes: HashMap<AxisId, AxisStyle>,
    pub colorbar: Option<Colorbar>,
    pub legend: Option<Legend<MarkId>>,
    pub decorations: Option<Decorations>,
    // next color-cycle index per y-axis
    cycle: [usize; 2],
}

impl Scene {
    pub fn new(spec: FigureSpec) -> Self {
        Self {
            spec,
            items: Vec::new(),
            axes: HashMap::new(),
            colorbar: None,
            legend: None,
            decorations: None,
            cycle: [0, 0],
        }
    }

    /// `explicit`, or the next color of `group`'s cycle.
    pub fn color_for(&mut self, group: AxisGroup, explicit: Option<Color>) -> Color {
        if let Some(c) = explicit {
            return c;
        }
        let slot = match group {
            AxisGroup::Left => 0,
            AxisGroup::Right => 1,
        };
        let c = Color::cycle(self.cycle[slot]);
        self.cycle[slot] += 1;
        c
    }

    pub fn push(&mut self, item: Item) -> MarkId {
        self.items.push(item);
        MarkId(self.items.len() - 1)
    }

    pub fn item(&self, id: MarkId) -> Option<&Item> {
        self.items.get(id.0)
    }

    pub fn has_right_axis(&self) -> bool {
        self.axes.contains_key(&AxisId::Y(AxisGroup::Right))
            || self.items.iter().any(|i| matches!(i, Item::Line { group: AxisGroup::Right, .. }))
    }

    pub fn has_image(&self) -> bool {
        self.items.iter().any(|i| matches!(i, Item::Image(_)))
    }

    /// Configured style of `axis`, or the defaults.
    pub fn axis_style(&self, axis: AxisId) -> AxisStyle {
        self.axes.get(&axis).cloned().unwrap_or_default()
    }

    /// Data extent feeding `axis`'s autoscaling.
    pub fn extent(&self, axis: AxisId, scale: AxisScale) -> Extent {
        let mut e = Extent::default();
        for item in &self.items {
            match (item, axis) {
                (Item::Line { mark, .. }, AxisId::X) => {
                    let d = &mark.data;
                    push_with_errors(&mut e, d.x(), d.xerr(), scale);
                }
                (Item::Line { group, mark, .. }, AxisId::Y(g)) if *group == g => {
                    let d = &mark.data;
                    push_with_errors(&mut e, d.y(), d.yerr(), scale);
                }
                (Item::Histogram { mark, .. }, AxisId::X) => e.extend(mark.edges.iter().copied(), scale),
                (Item::Histogram { mark, .. }, AxisId::Y(AxisGroup::Left)) => {
                    // Bars and steps rise from zero.
                    e.extend(mark.heights.iter().copied(), scale);
                    e.push(0.0, scale);
                    e.sticky_zero = true;
                }
                (Item::Image(img), AxisId::X) => e.extend([-0.5, img.grid.cols() as f64 - 0.5], scale),
                (Item::Image(img), AxisId::Y(AxisGroup::Left)) => {
                    e.extend([-0.5, img.grid.rows() as f64 - 0.5], scale)
                }
                _ => {}
            }
        }
        e
    }

    /// Scale and visible range of `axis`; a mirrored right axis copies the left one.
    pub fn axis_range(&self, axis: AxisId) -> (AxisStyle, Range) {
        let style = self.axis_style(axis);
        if axis == AxisId::Y(AxisGroup::Right) && style.mirror_left {
            let (left, range) = self.axis_range(AxisId::Y(AxisGroup::Left));
            let style = AxisStyle { scale: left.scale, minor_ticks: left.minor_ticks, ..style };
            return (style, range);
        }
        let extent = self.extent(axis, style.scale);
        let range = Range::resolve(&extent, style.scale, style.limits);
        (style, range)
    }
}

fn push_with_errors(e: &mut Extent, values: &[f64], err: Option<&ErrorBar>, scale: AxisScale) {
    for (i, &v) in values.iter().enumerate() {
        match err {
            Some(bar) => {
                let (lo, hi) = bar.at(i);
                e.push(v - lo, scale);
                e.push(v + hi, scale);
                e.push(v, scale);
            }
            None => e.push(v, scale),
        }
    }
}
