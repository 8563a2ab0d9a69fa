// File: crates/linechart-core/src/scene.rs
// Summary: Backend-agnostic render primitives assembled from a layout pass.

use crate::chart::{estimate_text_width, Layout, LineChart};
use crate::geometry::PointF;
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: PointF,
    pub to: PointF,
    pub color: Rgba,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: PointF,
    pub anchor: TextAnchor,
    pub color: Rgba,
    pub font_px: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<PointF>,
    pub color: Rgba,
    pub width: f64,
}

/// Closed filled shape; the last point connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<PointF>,
    pub fill: Rgba,
}

/// Data-point marker: an outer disc with a smaller colored disc centered in
/// it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub center: PointF,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub inner: Rgba,
    pub outer: Rgba,
}

/// Everything a backend needs to draw one frame, in draw order: grid, axes,
/// labels, then per-series areas, lines, and dots.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub background: Option<Rgba>,
    pub grid: Vec<Segment>,
    pub axes: Vec<Segment>,
    pub labels: Vec<TextLabel>,
    pub areas: Vec<Polygon>,
    pub lines: Vec<Polyline>,
    pub dots: Vec<Dot>,
}

/// Assemble the scene for one frame from the chart and a fresh layout.
pub fn build_scene(chart: &LineChart, layout: &Layout) -> Scene {
    let mut scene = Scene {
        background: Some(chart.theme.background),
        ..Scene::default()
    };

    if chart.x.grid.visible && chart.y.grid.visible {
        build_grid(chart, layout, &mut scene);
    }
    if chart.x.axis.visible && chart.y.axis.visible {
        build_axes(chart, layout, &mut scene);
    }
    if chart.x.labels.visible {
        build_x_labels(chart, layout, &mut scene);
    }
    if chart.y.labels.visible {
        build_y_labels(chart, layout, &mut scene);
    }

    for (line_index, values) in chart.data.lines().iter().enumerate() {
        if values.is_empty() {
            continue;
        }
        if chart.area {
            scene.areas.push(build_area(chart, layout, line_index, values));
        }
        scene.lines.push(build_line(chart, layout, line_index, values));
        if chart.dots.visible {
            build_dots(chart, layout, line_index, values, &mut scene);
        }
    }

    scene
}

/// One vertical segment per x tick and one horizontal segment per y tick.
fn build_grid(chart: &LineChart, layout: &Layout, scene: &mut Scene) {
    let top = layout.plot.top;
    let bottom = layout.plot.bottom;
    for tick in layout.x_ticks.iter() {
        let x = layout.to_screen_x(tick);
        scene.grid.push(Segment {
            from: PointF::new(x, bottom),
            to: PointF::new(x, top),
            color: chart.theme.grid,
            width: 1.0,
        });
    }
    let left = layout.plot.left;
    let right = layout.plot.right;
    for tick in layout.y_ticks.iter() {
        let y = layout.to_screen_y(tick);
        scene.grid.push(Segment {
            from: PointF::new(left, y),
            to: PointF::new(right, y),
            color: chart.theme.grid,
            width: 1.0,
        });
    }
}

/// X axis drawn at data value 0 (not the plot bottom), y axis at the left
/// margin.
fn build_axes(chart: &LineChart, layout: &Layout, scene: &mut Scene) {
    let y0 = layout.to_screen_y(0.0);
    scene.axes.push(Segment {
        from: PointF::new(layout.plot.left, y0),
        to: PointF::new(layout.plot.right, y0),
        color: chart.theme.axis_line,
        width: 1.0,
    });
    scene.axes.push(Segment {
        from: PointF::new(layout.plot.left, layout.plot.bottom),
        to: PointF::new(layout.plot.left, layout.plot.top),
        color: chart.theme.axis_line,
        width: 1.0,
    });
}

/// One label per data index, centered under its point. A label whose frame
/// would overlap the previous kept label is skipped.
fn build_x_labels(chart: &LineChart, layout: &Layout, scene: &mut Scene) {
    let n = chart.data.longest_len();
    let custom = &chart.x.labels.custom;
    let font_px = chart.x.labels.font_px;

    let mut label_w: f64 = 0.0;
    for i in 0..n {
        let text = x_label_text(custom, i);
        label_w = label_w.max(estimate_text_width(&text, font_px));
    }

    let y = layout.height - layout.margins.bottom;
    let mut prev_max_x: Option<f64> = None;
    for i in 0..n {
        let left = (layout.to_screen_x(i as f64) - label_w / 2.0).floor();
        if let Some(prev) = prev_max_x {
            if prev > left {
                continue;
            }
        }
        scene.labels.push(TextLabel {
            text: x_label_text(custom, i),
            pos: PointF::new(left + label_w / 2.0, y + font_px),
            anchor: TextAnchor::Middle,
            color: chart.theme.label,
            font_px,
        });
        prev_max_x = Some(left + label_w);
    }
}

fn x_label_text(custom: &[String], index: usize) -> String {
    custom
        .get(index)
        .cloned()
        .unwrap_or_else(|| index.to_string())
}

/// One rounded-integer label per y tick, right-aligned into the left margin.
fn build_y_labels(chart: &LineChart, layout: &Layout, scene: &mut Scene) {
    let font_px = chart.y.labels.font_px;
    for tick in layout.y_ticks.iter() {
        scene.labels.push(TextLabel {
            text: format!("{}", tick.round() as i64),
            pos: PointF::new(layout.margins.left - 8.0, layout.to_screen_y(tick)),
            anchor: TextAnchor::End,
            color: chart.theme.label,
            font_px,
        });
    }
}

fn build_line(chart: &LineChart, layout: &Layout, line_index: usize, values: &[f64]) -> Polyline {
    let points = values
        .iter()
        .enumerate()
        .map(|(i, &v)| PointF::new(layout.to_screen_x(i as f64), layout.to_screen_y(v)))
        .collect();
    Polyline {
        points,
        color: chart.theme.series_color(line_index),
        width: chart.line_width,
    }
}

/// Area polygon beneath a line, dropped to the y=0 baseline at both ends.
fn build_area(chart: &LineChart, layout: &Layout, line_index: usize, values: &[f64]) -> Polygon {
    let baseline = layout.to_screen_y(0.0);
    let mut points = Vec::with_capacity(values.len() + 2);
    points.push(PointF::new(layout.to_screen_x(0.0), baseline));
    for (i, &v) in values.iter().enumerate() {
        points.push(PointF::new(layout.to_screen_x(i as f64), layout.to_screen_y(v)));
    }
    points.push(PointF::new(
        layout.to_screen_x((values.len() - 1) as f64),
        baseline,
    ));
    Polygon {
        points,
        fill: chart.theme.area_fill(line_index),
    }
}

fn build_dots(
    chart: &LineChart,
    layout: &Layout,
    line_index: usize,
    values: &[f64],
    scene: &mut Scene,
) {
    for (i, &v) in values.iter().enumerate() {
        scene.dots.push(Dot {
            center: PointF::new(layout.to_screen_x(i as f64), layout.to_screen_y(v)),
            inner_radius: chart.dots.inner_radius,
            outer_radius: chart.dots.outer_radius,
            inner: chart.theme.series_color(line_index),
            outer: chart.theme.dot_fill,
        });
    }
}
