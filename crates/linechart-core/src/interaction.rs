// File: crates/linechart-core/src/interaction.rs
// Summary: Touch/pointer resolution to data indices and the highlight line.

use tracing::debug;

use crate::chart::{Layout, LineChart};
use crate::error::{ChartError, ChartResult};
use crate::geometry::{clamp, PointF};
use crate::scene::{Dot, Segment};

/// Result of resolving one touch/pointer position.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Selected data index, clamped into `[0, longest_len - 1]`.
    pub index: usize,
    /// One value per non-empty line at `index` (edge-clamped per line).
    pub values: Vec<f64>,
    /// Touch x clamped into the plot rectangle, where the highlight line is
    /// drawn.
    pub highlight_x: f64,
}

/// Translate a horizontal touch coordinate into a data selection.
///
/// The pixel is inverted through the x scale to a fractional index, rounded
/// half away from zero, and clamped into the series bounds. Half-away
/// rounding matches the conventional touch behavior: a touch exactly between
/// two points selects the later one.
pub fn resolve_touch(chart: &LineChart, layout: &Layout, touch_x: f64) -> ChartResult<Selection> {
    if chart.data.is_empty() {
        return Err(ChartError::NoData);
    }
    let n = chart.data.longest_len();
    if n == 0 {
        return Err(ChartError::NoData);
    }

    let inverted = layout.from_screen_x(touch_x);
    let index = clamp(inverted.round(), 0.0, (n - 1) as f64) as usize;
    let values = chart.data.values_at(index);
    let highlight_x = clamp(touch_x, layout.plot.left, layout.plot.right);

    debug!(touch_x, inverted, index, "resolved touch");

    Ok(Selection { index, values, highlight_x })
}

/// Replacement dots for the selected index, one per non-empty line, with the
/// outer disc brightened to the line's color. Indices past a short line
/// clamp to its last point, matching [`resolve_touch`]'s value lookup.
pub fn highlighted_dots(chart: &LineChart, layout: &Layout, selection: &Selection) -> Vec<Dot> {
    let mut dots = Vec::new();
    for (line_index, values) in chart.data.lines().iter().enumerate() {
        if values.is_empty() {
            continue;
        }
        let i = selection.index.min(values.len() - 1);
        dots.push(Dot {
            center: PointF::new(layout.to_screen_x(i as f64), layout.to_screen_y(values[i])),
            inner_radius: chart.dots.inner_radius,
            outer_radius: chart.dots.outer_radius,
            inner: chart.theme.series_color(line_index),
            outer: chart.theme.series_color(line_index).lighten(),
        });
    }
    dots
}

/// Vertical highlight segment for a selection, spanning the plot height.
/// Returns `None` when the highlight line is disabled.
pub fn highlight_segment(chart: &LineChart, layout: &Layout, selection: &Selection) -> Option<Segment> {
    if !chart.highlight.visible {
        return None;
    }
    Some(Segment {
        from: PointF::new(selection.highlight_x, layout.plot.top),
        to: PointF::new(selection.highlight_x, layout.plot.bottom),
        color: chart.theme.highlight,
        width: chart.highlight.line_width,
    })
}
