// File: crates/linechart-core/tests/interaction.rs
// Purpose: Validate touch-to-index resolution and highlight clamping.

use linechart_core::{highlight_segment, highlighted_dots, resolve_touch, ChartError, LineChart};

fn sample_chart() -> LineChart {
    let mut chart = LineChart::new();
    chart.add_line(vec![3.0, 8.0, 2.0, 6.0, 4.0]);
    chart
}

#[test]
fn touch_on_a_point_selects_its_index() {
    let chart = sample_chart();
    let layout = chart.layout(800.0, 400.0).unwrap();
    for index in 0..5 {
        let touch_x = layout.to_screen_x(index as f64);
        let sel = resolve_touch(&chart, &layout, touch_x).unwrap();
        assert_eq!(sel.index, index);
        assert_eq!(sel.values, vec![chart.data.lines()[0][index]]);
    }
}

#[test]
fn midpoint_touch_rounds_away_from_zero() {
    let chart = sample_chart();
    let layout = chart.layout(800.0, 400.0).unwrap();
    // Exactly between indices 1 and 2 the fractional index is 1.5, which
    // rounds up to 2.
    let touch_x = (layout.to_screen_x(1.0) + layout.to_screen_x(2.0)) / 2.0;
    let sel = resolve_touch(&chart, &layout, touch_x).unwrap();
    assert_eq!(sel.index, 2);
}

#[test]
fn touches_outside_the_plot_clamp_to_the_ends() {
    let chart = sample_chart();
    let layout = chart.layout(800.0, 400.0).unwrap();

    let sel = resolve_touch(&chart, &layout, -50.0).unwrap();
    assert_eq!(sel.index, 0);
    assert_eq!(sel.highlight_x, layout.plot.left);

    let sel = resolve_touch(&chart, &layout, 10_000.0).unwrap();
    assert_eq!(sel.index, 4);
    assert_eq!(sel.highlight_x, layout.plot.right);
}

#[test]
fn empty_chart_reports_no_data() {
    let chart = LineChart::new();
    assert_eq!(chart.layout(800.0, 400.0).unwrap_err(), ChartError::NoData);
}

#[test]
fn negative_viewport_is_rejected() {
    let chart = sample_chart();
    let err = chart.layout(-1.0, 400.0).unwrap_err();
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn highlight_segment_spans_the_plot_height() {
    let mut chart = sample_chart();
    let layout = chart.layout(800.0, 400.0).unwrap();
    let sel = resolve_touch(&chart, &layout, layout.to_screen_x(3.0)).unwrap();

    let seg = highlight_segment(&chart, &layout, &sel).unwrap();
    assert_eq!(seg.from.x, sel.highlight_x);
    assert_eq!(seg.from.y, layout.plot.top);
    assert_eq!(seg.to.y, layout.plot.bottom);
    assert_eq!(seg.width, chart.highlight.line_width);

    chart.highlight.visible = false;
    assert!(highlight_segment(&chart, &layout, &sel).is_none());
}

#[test]
fn highlighted_dots_brighten_the_selected_point() {
    let mut chart = LineChart::new();
    chart.add_line(vec![3.0, 8.0, 2.0, 6.0, 4.0]);
    chart.add_line(vec![5.0, 7.0]);
    let layout = chart.layout(800.0, 400.0).unwrap();
    let sel = resolve_touch(&chart, &layout, layout.to_screen_x(3.0)).unwrap();

    let dots = highlighted_dots(&chart, &layout, &sel);
    assert_eq!(dots.len(), 2);
    assert_eq!(dots[0].center.x, layout.to_screen_x(3.0));
    assert_eq!(dots[0].outer, chart.theme.series_color(0).lighten());
    // The short line clamps to its last point.
    assert_eq!(dots[1].center.x, layout.to_screen_x(1.0));
    assert_eq!(dots[1].inner, chart.theme.series_color(1));
}

#[test]
fn uneven_lines_clamp_values_per_line() {
    let mut chart = LineChart::new();
    chart.add_line(vec![3.0, 8.0, 2.0, 6.0, 4.0]);
    chart.add_line(vec![5.0, 7.0]);
    let layout = chart.layout(800.0, 400.0).unwrap();

    let sel = resolve_touch(&chart, &layout, layout.to_screen_x(4.0)).unwrap();
    assert_eq!(sel.index, 4);
    // The short line clamps to its own last value.
    assert_eq!(sel.values, vec![4.0, 7.0]);
}
