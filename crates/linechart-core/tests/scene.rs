// File: crates/linechart-core/tests/scene.rs
// Purpose: Validate scene assembly: grid counts, labels, areas, dots.

use approx::assert_relative_eq;
use linechart_core::scene::TextAnchor;
use linechart_core::{build_scene, LineChart};

fn sample_chart() -> LineChart {
    let mut chart = LineChart::new();
    chart.add_line(vec![3.0, 8.0, 2.0, 6.0, 4.0]);
    chart
}

#[test]
fn grid_has_one_segment_per_tick() {
    let chart = sample_chart();
    let layout = chart.layout(800.0, 400.0).unwrap();
    let scene = build_scene(&chart, &layout);
    assert_eq!(scene.grid.len(), layout.x_ticks.count() + layout.y_ticks.count());
}

#[test]
fn hidden_grid_and_axes_produce_no_segments() {
    let mut chart = sample_chart();
    chart.x.grid.visible = false;
    chart.y.axis.visible = false;
    let layout = chart.layout(800.0, 400.0).unwrap();
    let scene = build_scene(&chart, &layout);
    assert!(scene.grid.is_empty());
    assert!(scene.axes.is_empty());
}

#[test]
fn x_axis_sits_on_the_zero_line() {
    let chart = sample_chart();
    let layout = chart.layout(800.0, 400.0).unwrap();
    let scene = build_scene(&chart, &layout);
    let x_axis = &scene.axes[0];
    assert_relative_eq!(x_axis.from.y, layout.to_screen_y(0.0));
    assert_relative_eq!(x_axis.to.y, layout.to_screen_y(0.0));
}

#[test]
fn area_polygon_is_anchored_to_the_baseline() {
    let chart = sample_chart();
    let layout = chart.layout(800.0, 400.0).unwrap();
    let scene = build_scene(&chart, &layout);

    assert_eq!(scene.areas.len(), 1);
    let area = &scene.areas[0];
    let baseline = layout.to_screen_y(0.0);
    assert_relative_eq!(area.points.first().unwrap().y, baseline);
    assert_relative_eq!(area.points.last().unwrap().y, baseline);
    // baseline anchors plus one vertex per data point
    assert_eq!(area.points.len(), 5 + 2);
}

#[test]
fn disabling_area_and_dots_removes_them() {
    let mut chart = sample_chart();
    chart.area = false;
    chart.dots.visible = false;
    let layout = chart.layout(800.0, 400.0).unwrap();
    let scene = build_scene(&chart, &layout);
    assert!(scene.areas.is_empty());
    assert!(scene.dots.is_empty());
    assert_eq!(scene.lines.len(), 1);
    assert_eq!(scene.lines[0].points.len(), 5);
}

#[test]
fn dots_sit_on_the_line_vertices() {
    let chart = sample_chart();
    let layout = chart.layout(800.0, 400.0).unwrap();
    let scene = build_scene(&chart, &layout);
    assert_eq!(scene.dots.len(), 5);
    for (dot, vertex) in scene.dots.iter().zip(&scene.lines[0].points) {
        assert_relative_eq!(dot.center.x, vertex.x);
        assert_relative_eq!(dot.center.y, vertex.y);
    }
}

#[test]
fn y_labels_are_rounded_tick_values() {
    let chart = sample_chart();
    let layout = chart.layout(800.0, 400.0).unwrap();
    let scene = build_scene(&chart, &layout);

    let y_labels: Vec<&str> = scene
        .labels
        .iter()
        .filter(|l| l.anchor == TextAnchor::End)
        .map(|l| l.text.as_str())
        .collect();
    let expected: Vec<String> = layout
        .y_ticks
        .iter()
        .map(|v| format!("{}", v.round() as i64))
        .collect();
    assert_eq!(y_labels, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn wide_viewport_keeps_every_x_label() {
    let chart = sample_chart();
    let layout = chart.layout(800.0, 400.0).unwrap();
    let scene = build_scene(&chart, &layout);
    let x_labels: Vec<_> = scene
        .labels
        .iter()
        .filter(|l| l.anchor == TextAnchor::Middle)
        .collect();
    assert_eq!(x_labels.len(), 5);
    assert_eq!(x_labels[0].text, "0");
    assert_eq!(x_labels[4].text, "4");
}

#[test]
fn crowded_x_labels_are_thinned_without_overlap() {
    let mut chart = LineChart::new();
    chart.add_line((0..200).map(|i| (i as f64 * 0.1).sin() * 20.0).collect());
    let layout = chart.layout(400.0, 300.0).unwrap();
    let scene = build_scene(&chart, &layout);

    let xs: Vec<f64> = scene
        .labels
        .iter()
        .filter(|l| l.anchor == TextAnchor::Middle)
        .map(|l| l.pos.x)
        .collect();
    assert!(!xs.is_empty());
    assert!(xs.len() < 200);
    for pair in xs.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn custom_x_labels_replace_indices() {
    let mut chart = LineChart::new();
    chart.add_line(vec![1.0, 2.0, 3.0]);
    chart.x.labels.custom = vec!["Mon".into(), "Tue".into(), "Wed".into()];
    let layout = chart.layout(800.0, 400.0).unwrap();
    let scene = build_scene(&chart, &layout);
    let texts: Vec<_> = scene
        .labels
        .iter()
        .filter(|l| l.anchor == TextAnchor::Middle)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(texts, vec!["Mon", "Tue", "Wed"]);
}

#[test]
fn background_comes_from_the_theme() {
    let mut chart = sample_chart();
    chart.theme = linechart_core::theme::find("dark");
    let layout = chart.layout(800.0, 400.0).unwrap();
    let scene = build_scene(&chart, &layout);
    assert_eq!(scene.background, Some(chart.theme.background));
}
