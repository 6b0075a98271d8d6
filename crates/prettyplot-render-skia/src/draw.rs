// File: crates/prettyplot-render-skia/src/draw.rs
// Summary: Rasterizes a retained Scene onto any Skia canvas (CPU raster surface or SVG).
// Notes:
// - Two passes: ranges and ticks first (they size the margins), then pixels.
// - Sizes in marks are typographic points; everything here converts with `Ctx::px`.

use prettyplot_core::render::{
    AxisId, AxisScale, AxisStyle, Colorbar, ColorbarSide, Decorations, HistogramKind, HistogramMark,
    ImageMark, LabelAnchor, Legend, LineMark, Orientation, ReferenceLine, TickDirection,
};
use prettyplot_core::types::{pt_to_px, LAYOUT_PAD};
use prettyplot_core::{Aspect, AxisGroup, Color, Grid, Interpolation, LegendLoc, LegendPosition, LineStyle, Marker};
use skia_safe as skia;

use crate::layout::{self, Insets};
use crate::scale::{Range, ValueScale};
use crate::scene::{Item, MarkId, Scene};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::{self, faded, to_skia, Theme};
use crate::ticks::{self, Ticks};

/// Font size the layout padding is expressed in.
const BASE_FONT_PT: f64 = 10.0;
const TICK_PAD_PT: f64 = 3.5;
const LABEL_PAD_PT: f64 = 4.0;
const TITLE_PAD_PT: f64 = 6.0;

struct Ctx<'a> {
    canvas: &'a skia::Canvas,
    text: TextShaper,
    theme: Theme,
    dpi: f64,
}

impl Ctx<'_> {
    #[inline]
    fn px(&self, pt: f64) -> f32 {
        pt_to_px(pt, self.dpi) as f32
    }
}

/// Axis settings, visible range and ticks, known before the pixel layout.
struct AxisPlan {
    style: AxisStyle,
    range: Range,
    ticks: Ticks,
}

impl AxisPlan {
    fn new(scene: &Scene, axis: AxisId) -> Self {
        let (style, range) = scene.axis_range(axis);
        let ticks = ticks::locate(&style, range);
        Self { style, range, ticks }
    }

    fn scale(&self, px0: f32, px1: f32) -> ValueScale {
        ValueScale::new(self.style.scale, self.range, px0, px1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Bottom,
    Top,
    Left,
    Right,
}

impl Side {
    fn horizontal(self) -> bool {
        matches!(self, Side::Bottom | Side::Top)
    }

    /// Unit vector pointing out of the plot area.
    fn outward(self) -> (f32, f32) {
        match self {
            Side::Bottom => (0.0, 1.0),
            Side::Top => (0.0, -1.0),
            Side::Left => (-1.0, 0.0),
            Side::Right => (1.0, 0.0),
        }
    }
}

fn default_decorations() -> Decorations {
    Decorations {
        title: String::new(),
        title_size: 20.0,
        fig_label: None,
        grid: None,
        spine_width: 1.0,
        aspect: Aspect::Auto,
    }
}

/// Draw the whole figure onto `canvas`, which must be at least `spec` pixels large.
pub fn render(scene: &Scene, canvas: &skia::Canvas) {
    let spec = &scene.spec;
    let ctx = Ctx { canvas, text: TextShaper::new(spec.font_family), theme: Theme::paper(), dpi: spec.dpi };
    let (width, height) = (spec.width_px() as f32, spec.height_px() as f32);
    canvas.clear(to_skia(spec.background));

    let deco = scene.decorations.clone().unwrap_or_else(default_decorations);
    let x = AxisPlan::new(scene, AxisId::X);
    let yl = AxisPlan::new(scene, AxisId::Y(AxisGroup::Left));
    let yr = scene.has_right_axis().then(|| AxisPlan::new(scene, AxisId::Y(AxisGroup::Right)));
    let image = scene.items.iter().find_map(|i| match i {
        Item::Image(m) => Some(m),
        _ => None,
    });
    let colorbar = scene.colorbar.as_ref().zip(image);

    // Margins.
    let pad = ctx.px(LAYOUT_PAD * BASE_FONT_PT);
    let x_extent = axis_extent(&ctx, &x, Side::Bottom);
    let yl_extent = axis_extent(&ctx, &yl, Side::Left);
    let mut insets = Insets {
        left: pad + yl_extent,
        right: pad + yr.as_ref().map_or(0.0, |p| axis_extent(&ctx, p, Side::Right)),
        top: pad,
        bottom: pad + x_extent,
    };
    if !deco.title.is_empty() {
        insets.top += ctx.text.measure(&deco.title, ctx.px(deco.title_size)).1 + ctx.px(TITLE_PAD_PT);
    }
    if x.style.show_tick_labels {
        // The last x tick label hangs half outside the plot.
        let overhang = x.ticks.labels.last().map_or(0.0, |l| ctx.text.measure(l, ctx.px(x.style.tick_label_size)).0 / 2.0);
        insets.right = insets.right.max(pad + overhang);
    }
    let mut cb_inner = 0.0;
    if let Some((cb, img)) = colorbar {
        let outer = colorbar_extent(&ctx, cb, img);
        match cb.side {
            ColorbarSide::Right => insets.right += outer,
            ColorbarSide::Left => {
                insets.left += outer;
                cb_inner = yl_extent;
            }
            ColorbarSide::Top => insets.top += outer,
            ColorbarSide::Bottom => {
                insets.bottom += outer;
                cb_inner = x_extent;
            }
        }
    }

    // Plot and colorbar rectangles.
    let area = layout::plot_rect(width, height, &insets);
    let cb_gap = colorbar.map_or(0.0, |(cb, _)| (cb.pad * ctx.dpi) as f32);
    let axes_area = match colorbar {
        Some((cb, _)) => layout::reserve_colorbar(area, cb, cb_gap, cb_inner),
        None => area,
    };
    let plot = match deco.aspect.ratio() {
        Some(r) => layout::fit_aspect(axes_area, r, x.scale(0.0, 1.0).span(), yl.scale(0.0, 1.0).span()),
        None => axes_area,
    };
    let xs = x.scale(plot.left, plot.right);
    let yls = yl.scale(plot.bottom, plot.top);
    let yrs = yr.as_ref().map(|p| p.scale(plot.bottom, plot.top));

    if let Some(w) = deco.grid {
        draw_grid(&ctx, plot, w, &x.ticks, &xs, &yl.ticks, &yls);
    }

    // Data, clipped to the plot area.
    let mut points = Vec::new();
    canvas.save();
    canvas.clip_rect(plot, skia::ClipOp::Intersect, true);
    for item in &scene.items {
        match item {
            Item::Line { group, mark, color } => {
                let ys = match (group, &yrs) {
                    (AxisGroup::Right, Some(s)) => s,
                    _ => &yls,
                };
                draw_line(&ctx, mark, *color, &xs, ys, &mut points);
            }
            Item::Histogram { mark, color } => draw_histogram(&ctx, mark, *color, &xs, &yls, plot, &mut points),
            Item::Image(mark) => draw_image(&ctx, mark, &xs, &yls),
            Item::Reference(line) => draw_reference(&ctx, line, plot, &xs, &yls),
        }
    }
    canvas.restore();

    // Frame, ticks and axis labels.
    draw_spines(&ctx, plot, deco.spine_width);
    draw_axis(&ctx, plot, &x, &xs, Side::Bottom, true);
    if x.style.both_sides {
        draw_axis(&ctx, plot, &x, &xs, Side::Top, false);
    }
    draw_axis(&ctx, plot, &yl, &yls, Side::Left, true);
    match (&yr, &yrs) {
        (Some(p), Some(s)) => draw_axis(&ctx, plot, p, s, Side::Right, true),
        _ if yl.style.both_sides => draw_axis(&ctx, plot, &yl, &yls, Side::Right, false),
        _ => {}
    }

    let mut top_edge = plot.top;
    if let Some((cb, img)) = colorbar {
        let bar = layout::attach_colorbar(plot, cb, cb_gap, cb_inner);
        draw_colorbar(&ctx, bar, cb, img);
        if cb.side == ColorbarSide::Top {
            top_edge = bar.top - colorbar_extent(&ctx, cb, img);
        }
    }

    if let Some(legend) = &scene.legend {
        draw_legend(&ctx, scene, legend, plot, &points);
    }

    if !deco.title.is_empty() {
        let at = (plot.center_x(), top_edge - ctx.px(TITLE_PAD_PT));
        ctx.text.draw(canvas, &deco.title, at, ctx.px(deco.title_size), ctx.theme.text, HAlign::Center, VAlign::Bottom);
    }
    if let Some(label) = &deco.fig_label {
        let (fx, fy) = (label.position.0 as f32, label.position.1 as f32);
        let at = match label.anchor {
            LabelAnchor::Axes => (plot.left + fx * plot.width(), plot.bottom - fy * plot.height()),
            LabelAnchor::Figure => (fx * width, height - fy * height),
        };
        ctx.text.draw(canvas, &label.text, at, ctx.px(label.size), ctx.theme.text, HAlign::Center, VAlign::Center);
    }
}

/// Room an axis needs outside the plot area: outward ticks, tick labels and the axis label.
fn axis_extent(ctx: &Ctx<'_>, plan: &AxisPlan, side: Side) -> f32 {
    let style = &plan.style;
    let mut extent = tick_overhang(ctx, style);
    if style.show_tick_labels && !plan.ticks.labels.is_empty() {
        let size = ctx.px(style.tick_label_size);
        let biggest = plan
            .ticks
            .labels
            .iter()
            .map(|l| {
                let (w, h) = ctx.text.measure(l, size);
                if side.horizontal() {
                    h
                } else {
                    w
                }
            })
            .fold(0.0f32, f32::max);
        extent += biggest + ctx.px(TICK_PAD_PT);
    }
    if !style.label.is_empty() {
        extent += ctx.text.measure(&style.label, ctx.px(style.label_size)).1 + ctx.px(LABEL_PAD_PT);
    }
    extent
}

fn tick_overhang(ctx: &Ctx<'_>, style: &AxisStyle) -> f32 {
    match style.direction {
        TickDirection::Out => ctx.px(style.major_len.max(style.minor_len)),
        TickDirection::In => 0.0,
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// Stroke paint for a styled line; dash lengths scale with the width.
fn line_paint(color: skia::Color, width: f32, style: LineStyle) -> skia::Paint {
    let mut paint = stroke_paint(color, width);
    paint.set_stroke_join(skia::paint::Join::Round);
    if let Some(pattern) = style.dash_pattern() {
        let intervals: Vec<f32> = pattern.iter().map(|d| d * width.max(1.0)).collect();
        paint.set_path_effect(skia::PathEffect::dash(&intervals, 0.0));
    }
    paint
}

fn draw_grid(ctx: &Ctx<'_>, plot: skia::Rect, width: f64, xt: &Ticks, xs: &ValueScale, yt: &Ticks, ys: &ValueScale) {
    let paint = stroke_paint(ctx.theme.grid, ctx.px(width));
    for &v in xt.major.iter().filter(|v| xs.contains(**v)) {
        let px = xs.to_px(v);
        ctx.canvas.draw_line((px, plot.top), (px, plot.bottom), &paint);
    }
    for &v in yt.major.iter().filter(|v| ys.contains(**v)) {
        let py = ys.to_px(v);
        ctx.canvas.draw_line((plot.left, py), (plot.right, py), &paint);
    }
}

fn draw_line(ctx: &Ctx<'_>, mark: &LineMark, color: Color, xs: &ValueScale, ys: &ValueScale, points: &mut Vec<(f32, f32)>) {
    let data = &mark.data;
    let color_px = to_skia(color);
    let width = ctx.px(mark.line_width);
    let visible = |x: f64, y: f64| {
        x.is_finite()
            && y.is_finite()
            && (xs.scale == AxisScale::Linear || x > 0.0)
            && (ys.scale == AxisScale::Linear || y > 0.0)
    };

    // Error bars under the line.
    let cap = ctx.px(mark.marker_size) * 0.3;
    let err_paint = stroke_paint(color_px, width.max(1.0));
    for i in 0..data.len() {
        let (x, y) = (data.x()[i], data.y()[i]);
        if !visible(x, y) {
            continue;
        }
        let (px, py) = (xs.to_px(x), ys.to_px(y));
        if let Some(err) = data.yerr() {
            let (lo, hi) = err.at(i);
            let (y0, y1) = (ys.to_px(y - lo), ys.to_px(y + hi));
            ctx.canvas.draw_line((px, y0), (px, y1), &err_paint);
            ctx.canvas.draw_line((px - cap, y0), (px + cap, y0), &err_paint);
            ctx.canvas.draw_line((px - cap, y1), (px + cap, y1), &err_paint);
        }
        if let Some(err) = data.xerr() {
            let (lo, hi) = err.at(i);
            let (x0, x1) = (xs.to_px(x - lo), xs.to_px(x + hi));
            ctx.canvas.draw_line((x0, py), (x1, py), &err_paint);
            ctx.canvas.draw_line((x0, py - cap), (x0, py + cap), &err_paint);
            ctx.canvas.draw_line((x1, py - cap), (x1, py + cap), &err_paint);
        }
    }

    let mut path = skia::Path::new();
    let mut pen_down = false;
    for (&x, &y) in data.x().iter().zip(data.y()) {
        if !visible(x, y) {
            pen_down = false;
            continue;
        }
        let p = (xs.to_px(x), ys.to_px(y));
        points.push(p);
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    if mark.line_style != LineStyle::None {
        ctx.canvas.draw_path(&path, &line_paint(color_px, width, mark.line_style));
    }
    if mark.marker.is_visible() {
        let size = ctx.px(mark.marker_size);
        for (&x, &y) in data.x().iter().zip(data.y()) {
            if visible(x, y) {
                draw_marker(ctx.canvas, mark.marker, (xs.to_px(x), ys.to_px(y)), size, color_px);
            }
        }
    }
}

/// Marker of diameter `size` centered at `(x, y)`.
fn draw_marker(canvas: &skia::Canvas, marker: Marker, (x, y): (f32, f32), size: f32, color: skia::Color) {
    let r = size / 2.0;
    let fill = fill_paint(color);
    let mut path = skia::Path::new();
    match marker {
        Marker::None => return,
        Marker::Point => {
            canvas.draw_circle((x, y), r * 0.5, &fill);
            return;
        }
        Marker::Circle => {
            canvas.draw_circle((x, y), r, &fill);
            return;
        }
        Marker::Plus | Marker::Cross => {
            let stroke = stroke_paint(color, (size / 8.0).max(1.0));
            let d = if marker == Marker::Cross { r * std::f32::consts::FRAC_1_SQRT_2 } else { r };
            if marker == Marker::Plus {
                canvas.draw_line((x - d, y), (x + d, y), &stroke);
                canvas.draw_line((x, y - d), (x, y + d), &stroke);
            } else {
                canvas.draw_line((x - d, y - d), (x + d, y + d), &stroke);
                canvas.draw_line((x - d, y + d), (x + d, y - d), &stroke);
            }
            return;
        }
        Marker::Square => {
            let h = r * 0.8;
            canvas.draw_rect(skia::Rect::from_ltrb(x - h, y - h, x + h, y + h), &fill);
            return;
        }
        Marker::TriangleUp => {
            path.move_to((x, y - r));
            path.line_to((x + r * 0.866, y + r * 0.5));
            path.line_to((x - r * 0.866, y + r * 0.5));
        }
        Marker::TriangleDown => {
            path.move_to((x, y + r));
            path.line_to((x + r * 0.866, y - r * 0.5));
            path.line_to((x - r * 0.866, y - r * 0.5));
        }
        Marker::Diamond => {
            path.move_to((x, y - r));
            path.line_to((x + r * 0.7, y));
            path.line_to((x, y + r));
            path.line_to((x - r * 0.7, y));
        }
        Marker::Star => {
            let inner = r * 0.4;
            for k in 0..10 {
                let radius = if k % 2 == 0 { r } else { inner };
                let angle = -std::f32::consts::FRAC_PI_2 + k as f32 * std::f32::consts::PI / 5.0;
                let p = (x + radius * angle.cos(), y + radius * angle.sin());
                if k == 0 {
                    path.move_to(p);
                } else {
                    path.line_to(p);
                }
            }
        }
    }
    path.close();
    canvas.draw_path(&path, &fill);
}

fn draw_histogram(
    ctx: &Ctx<'_>,
    mark: &HistogramMark,
    color: Color,
    xs: &ValueScale,
    ys: &ValueScale,
    plot: skia::Rect,
    points: &mut Vec<(f32, f32)>,
) {
    let base = match ys.scale {
        AxisScale::Linear => ys.to_px(0.0),
        AxisScale::Log10 => plot.bottom.max(plot.top),
    };
    let top_of = |h: f64| if ys.scale == AxisScale::Log10 && h <= 0.0 { base } else { ys.to_px(h) };
    let bins = mark.edges.windows(2).zip(&mark.heights);
    match mark.kind {
        HistogramKind::Bar | HistogramKind::Outline => {
            let paint = if mark.kind == HistogramKind::Bar {
                fill_paint(faded(color, mark.alpha))
            } else {
                stroke_paint(faded(mark.edge_color, mark.alpha), ctx.px(mark.edge_width))
            };
            for (edge, &h) in bins {
                let (x0, x1) = (xs.to_px(edge[0]), xs.to_px(edge[1]));
                let top = top_of(h);
                points.push(((x0 + x1) / 2.0, top));
                if mark.kind == HistogramKind::Outline && mark.edge_width <= 0.0 {
                    continue;
                }
                let rect = skia::Rect::from_ltrb(x0.min(x1), top.min(base), x0.max(x1), top.max(base));
                ctx.canvas.draw_rect(rect, &paint);
            }
        }
        HistogramKind::Step => {
            let mut path = skia::Path::new();
            let Some(first) = mark.edges.first() else { return };
            path.move_to((xs.to_px(*first), base));
            for (edge, &h) in bins {
                let top = top_of(h);
                path.line_to((xs.to_px(edge[0]), top));
                path.line_to((xs.to_px(edge[1]), top));
                points.push((xs.to_px((edge[0] + edge[1]) / 2.0), top));
            }
            if let Some(last) = mark.edges.last() {
                path.line_to((xs.to_px(*last), base));
            }
            let mut paint = line_paint(faded(color, mark.alpha), ctx.px(mark.edge_width), LineStyle::Solid);
            paint.set_stroke_join(skia::paint::Join::Miter);
            ctx.canvas.draw_path(&path, &paint);
        }
    }
}

/// Value of the grid at fractional cell coordinates, interpolated between cell centers.
fn sample_bilinear(grid: &Grid, r: f64, c: f64) -> f64 {
    let r = r.clamp(0.0, (grid.rows() - 1) as f64);
    let c = c.clamp(0.0, (grid.cols() - 1) as f64);
    let (r0, c0) = (r.floor() as usize, c.floor() as usize);
    let (r1, c1) = ((r0 + 1).min(grid.rows() - 1), (c0 + 1).min(grid.cols() - 1));
    let (fr, fc) = (r - r0 as f64, c - c0 as f64);
    let top = grid.get(r0, c0) * (1.0 - fc) + grid.get(r0, c1) * fc;
    let bottom = grid.get(r1, c0) * (1.0 - fc) + grid.get(r1, c1) * fc;
    top * (1.0 - fr) + bottom * fr
}

/// Sub-cells per cell edge. Bilinear images always split cells so the blend
/// stays visible on large grids.
fn subdivisions(interpolation: Interpolation, rows: usize, cols: usize) -> usize {
    match interpolation {
        Interpolation::Nearest => 1,
        Interpolation::Bilinear => (256 / rows.max(cols).max(1)).clamp(2, 16),
    }
}

fn draw_image(ctx: &Ctx<'_>, mark: &ImageMark, xs: &ValueScale, ys: &ValueScale) {
    let grid = &mark.grid;
    if grid.is_empty() {
        return;
    }
    let sub = subdivisions(mark.interpolation, grid.rows(), grid.cols());
    let step = 1.0 / sub as f64;
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(false);
    paint.set_style(skia::paint::Style::Fill);
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            for i in 0..sub {
                for j in 0..sub {
                    let y0 = r as f64 - 0.5 + i as f64 * step;
                    let x0 = c as f64 - 0.5 + j as f64 * step;
                    let v = match mark.interpolation {
                        Interpolation::Nearest => grid.get(r, c),
                        Interpolation::Bilinear => sample_bilinear(grid, y0 + step / 2.0, x0 + step / 2.0),
                    };
                    let t = theme::normalize(v, mark.vmin, mark.vmax);
                    paint.set_color(theme::colormap(mark.colormap, t));
                    let (px0, px1) = (xs.to_px(x0), xs.to_px(x0 + step));
                    let (py0, py1) = (ys.to_px(y0), ys.to_px(y0 + step));
                    let rect = skia::Rect::from_ltrb(px0.min(px1), py0.min(py1), px0.max(px1), py0.max(py1));
                    ctx.canvas.draw_rect(rect, &paint);
                }
            }
        }
    }
}

fn draw_reference(ctx: &Ctx<'_>, line: &ReferenceLine, plot: skia::Rect, xs: &ValueScale, ys: &ValueScale) {
    let s = &line.style;
    let paint = line_paint(faded(s.color, s.alpha), ctx.px(s.linewidth), s.linestyle);
    if s.linestyle == LineStyle::None {
        return;
    }
    match line.orientation {
        Orientation::Vertical if xs.contains(line.position) => {
            let x = xs.to_px(line.position);
            ctx.canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
        }
        Orientation::Horizontal if ys.contains(line.position) => {
            let y = ys.to_px(line.position);
            ctx.canvas.draw_line((plot.left, y), (plot.right, y), &paint);
        }
        _ => {}
    }
}

fn draw_spines(ctx: &Ctx<'_>, plot: skia::Rect, width: f64) {
    let mut paint = stroke_paint(ctx.theme.axis_line, ctx.px(width));
    paint.set_stroke_join(skia::paint::Join::Miter);
    ctx.canvas.draw_rect(plot, &paint);
}

/// Ticks along one side of the plot; tick labels and the axis label only when `labelled`.
fn draw_axis(ctx: &Ctx<'_>, plot: skia::Rect, plan: &AxisPlan, scale: &ValueScale, side: Side, labelled: bool) {
    let style = &plan.style;
    let (ox, oy) = side.outward();
    let sign = match style.direction {
        TickDirection::In => -1.0,
        TickDirection::Out => 1.0,
    };
    let paint = stroke_paint(ctx.theme.axis_line, ctx.px(style.tick_width));
    let anchor = |pos: f32| match side {
        Side::Bottom => (pos, plot.bottom),
        Side::Top => (pos, plot.top),
        Side::Left => (plot.left, pos),
        Side::Right => (plot.right, pos),
    };
    let tick = |value: f64, len_pt: f64| {
        if !scale.contains(value) {
            return;
        }
        let (x, y) = anchor(scale.to_px(value));
        let len = ctx.px(len_pt) * sign;
        ctx.canvas.draw_line((x, y), (x + ox * len, y + oy * len), &paint);
    };
    for &m in &plan.ticks.minor {
        tick(m, style.minor_len);
    }
    for &m in &plan.ticks.major {
        tick(m, style.major_len);
    }
    if !labelled {
        return;
    }

    let mut offset = tick_overhang(ctx, style);
    if style.show_tick_labels {
        let size = ctx.px(style.tick_label_size);
        let gap = offset + ctx.px(TICK_PAD_PT);
        let mut biggest = 0.0f32;
        for (v, label) in plan.ticks.major.iter().zip(&plan.ticks.labels) {
            if !scale.contains(*v) || label.is_empty() {
                continue;
            }
            let (w, h) = ctx.text.measure(label, size);
            biggest = biggest.max(if side.horizontal() { h } else { w });
            let (x, y) = anchor(scale.to_px(*v));
            let (at, h_align, v_align) = match side {
                Side::Bottom => ((x, y + gap), HAlign::Center, VAlign::Top),
                Side::Top => ((x, y - gap), HAlign::Center, VAlign::Bottom),
                Side::Left => ((x - gap, y), HAlign::Right, VAlign::Center),
                Side::Right => ((x + gap, y), HAlign::Left, VAlign::Center),
            };
            ctx.text.draw(ctx.canvas, label, at, size, ctx.theme.text, h_align, v_align);
        }
        if biggest > 0.0 {
            offset = gap + biggest;
        }
    }
    if style.label.is_empty() {
        return;
    }
    let size = ctx.px(style.label_size);
    let (_, label_h) = ctx.text.measure(&style.label, size);
    let dist = offset + ctx.px(LABEL_PAD_PT) + label_h / 2.0;
    match side {
        Side::Bottom => ctx.text.draw(
            ctx.canvas,
            &style.label,
            (plot.center_x(), plot.bottom + dist),
            size,
            ctx.theme.text,
            HAlign::Center,
            VAlign::Center,
        ),
        Side::Top => ctx.text.draw(
            ctx.canvas,
            &style.label,
            (plot.center_x(), plot.top - dist),
            size,
            ctx.theme.text,
            HAlign::Center,
            VAlign::Center,
        ),
        Side::Left => ctx.text.draw_rotated(ctx.canvas, &style.label, (plot.left - dist, plot.center_y()), size, ctx.theme.text, 90.0),
        Side::Right => ctx.text.draw_rotated(ctx.canvas, &style.label, (plot.right + dist, plot.center_y()), size, ctx.theme.text, 90.0),
    }
}

/// Colorbar range and ticks, reusing the axis tick locator.
fn colorbar_plan(cb: &Colorbar, img: &ImageMark) -> AxisPlan {
    let style = AxisStyle {
        label: cb.label.clone(),
        label_size: cb.tick_label_size,
        ticks: cb.ticks.clone(),
        tick_labels: cb.tick_labels.clone(),
        tick_label_size: cb.tick_label_size,
        major_len: cb.tick_len,
        minor_len: cb.tick_len,
        tick_width: cb.tick_width,
        minor_ticks: false,
        direction: TickDirection::Out,
        ..AxisStyle::default()
    };
    let range = Range { lo: img.vmin, hi: img.vmax };
    let ticks = ticks::locate(&style, range);
    AxisPlan { style, range, ticks }
}

/// Room the colorbar's ticks, labels and title need beyond the bar itself.
fn colorbar_extent(ctx: &Ctx<'_>, cb: &Colorbar, img: &ImageMark) -> f32 {
    let side = match cb.side {
        ColorbarSide::Right => Side::Right,
        ColorbarSide::Left => Side::Left,
        ColorbarSide::Top => Side::Top,
        ColorbarSide::Bottom => Side::Bottom,
    };
    axis_extent(ctx, &colorbar_plan(cb, img), side)
}

fn draw_colorbar(ctx: &Ctx<'_>, bar: skia::Rect, cb: &Colorbar, img: &ImageMark) {
    let vertical = matches!(cb.side, ColorbarSide::Right | ColorbarSide::Left);
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(false);
    let strips = if vertical { bar.height() } else { bar.width() }.ceil().max(1.0) as usize;
    for i in 0..strips {
        let t0 = i as f32 / strips as f32;
        let t1 = (i + 1) as f32 / strips as f32;
        paint.set_color(theme::colormap(img.colormap, (i as f64 + 0.5) / strips as f64));
        let rect = if vertical {
            skia::Rect::from_ltrb(bar.left, bar.bottom - t1 * bar.height(), bar.right, bar.bottom - t0 * bar.height())
        } else {
            skia::Rect::from_ltrb(bar.left + t0 * bar.width(), bar.top, bar.left + t1 * bar.width(), bar.bottom)
        };
        ctx.canvas.draw_rect(rect, &paint);
    }

    let plan = colorbar_plan(cb, img);
    let (side, scale) = match cb.side {
        ColorbarSide::Right => (Side::Right, plan.scale(bar.bottom, bar.top)),
        ColorbarSide::Left => (Side::Left, plan.scale(bar.bottom, bar.top)),
        ColorbarSide::Top => (Side::Top, plan.scale(bar.left, bar.right)),
        ColorbarSide::Bottom => (Side::Bottom, plan.scale(bar.left, bar.right)),
    };
    draw_axis(ctx, bar, &plan, &scale, side, true);
    if cb.outline_width > 0.0 {
        draw_spines(ctx, bar, cb.outline_width);
    }
}

fn draw_legend(ctx: &Ctx<'_>, scene: &Scene, legend: &Legend<MarkId>, plot: skia::Rect, points: &[(f32, f32)]) {
    let rows: Vec<(&Item, &str)> = legend
        .entries
        .iter()
        .filter_map(|e| scene.item(e.handle).map(|item| (item, e.label.as_str())))
        .collect();
    if rows.is_empty() {
        return;
    }
    let fs = ctx.px(legend.font_size);
    let border = 0.4 * fs;
    let handle_len = 2.0 * fs;
    let handle_pad = 0.8 * fs;
    let spacing = 0.5 * fs;
    let sizes: Vec<(f32, f32)> = rows.iter().map(|(_, label)| ctx.text.measure(label, fs)).collect();
    let row_h = sizes.iter().map(|s| s.1).fold(fs, f32::max);
    let text_w = sizes.iter().map(|s| s.0).fold(0.0f32, f32::max);
    let n = rows.len() as f32;
    let size = (2.0 * border + handle_len + handle_pad + text_w, 2.0 * border + n * row_h + (n - 1.0) * spacing);

    let outer_pad = 0.5 * fs;
    let rect = match legend.loc {
        LegendLoc::Named(LegendPosition::Best) => layout::best_legend_rect(plot, size, outer_pad, points),
        LegendLoc::Named(pos) => layout::legend_rect(plot, size, pos, outer_pad),
        LegendLoc::Anchor(at) => layout::anchored_legend_rect(plot, size, at),
    };
    if legend.frame {
        let radius = 0.2 * fs;
        ctx.canvas.draw_round_rect(rect, radius, radius, &fill_paint(ctx.theme.legend_fill));
        ctx.canvas.draw_round_rect(rect, radius, radius, &stroke_paint(ctx.theme.legend_frame, 1.0));
    }

    for (i, (item, label)) in rows.iter().enumerate() {
        let cy = rect.top + border + i as f32 * (row_h + spacing) + row_h / 2.0;
        let x0 = rect.left + border;
        let x1 = x0 + handle_len;
        match item {
            Item::Line { mark, color, .. } => {
                let c = to_skia(*color);
                if mark.line_style != LineStyle::None {
                    let paint = line_paint(c, ctx.px(mark.line_width), mark.line_style);
                    ctx.canvas.draw_line((x0, cy), (x1, cy), &paint);
                }
                draw_marker(ctx.canvas, mark.marker, ((x0 + x1) / 2.0, cy), ctx.px(mark.marker_size), c);
            }
            Item::Histogram { mark, color } => {
                let patch = skia::Rect::from_ltrb(x0, cy - 0.35 * fs, x1, cy + 0.35 * fs);
                match mark.kind {
                    HistogramKind::Bar => ctx.canvas.draw_rect(patch, &fill_paint(faded(*color, mark.alpha))),
                    HistogramKind::Step => {
                        ctx.canvas.draw_rect(patch, &stroke_paint(faded(*color, mark.alpha), ctx.px(mark.edge_width)))
                    }
                    HistogramKind::Outline => {
                        ctx.canvas.draw_rect(patch, &stroke_paint(to_skia(mark.edge_color), ctx.px(mark.edge_width)))
                    }
                };
            }
            Item::Image(_) | Item::Reference(_) => {}
        }
        ctx.text.draw(ctx.canvas, label, (x1 + handle_pad, cy), fs, ctx.theme.text, HAlign::Left, VAlign::Center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bilinear_splits_cells_on_large_grids() {
        assert_eq!(subdivisions(Interpolation::Nearest, 8, 8), 1);
        assert_eq!(subdivisions(Interpolation::Bilinear, 8, 8), 16);
        assert_eq!(subdivisions(Interpolation::Bilinear, 100, 40), 2);
        assert_eq!(subdivisions(Interpolation::Bilinear, 300, 1000), 2);
    }

    #[test]
    fn bilinear_blends_between_cell_centers() {
        let grid = Grid::from_rows(vec![vec![0.0, 4.0], vec![8.0, 12.0]]).unwrap();
        assert_eq!(sample_bilinear(&grid, 0.0, 0.0), 0.0);
        assert_eq!(sample_bilinear(&grid, 0.0, 0.5), 2.0);
        assert_eq!(sample_bilinear(&grid, 0.5, 0.5), 6.0);
        // Outside the centers the edge values are held.
        assert_eq!(sample_bilinear(&grid, -0.25, 1.25), 4.0);
    }
}
