// File: crates/linechart-core/src/chart.rs
// Summary: Chart configuration and the per-draw layout pass building scales.

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::geometry::RectF;
use crate::scale::{LinearScale, TickRange};
use crate::series::DataStore;
use crate::theme::Theme;
use crate::types::Insets;

/// Grid configuration; `count` is the target tick count for the axis.
#[derive(Clone, Copy, Debug)]
pub struct GridStyle {
    pub visible: bool,
    pub count: usize,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self { visible: true, count: 10 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AxisStyle {
    pub visible: bool,
    pub inset: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self { visible: true, inset: 15.0 }
    }
}

/// Axis label configuration. When `custom` is non-empty its entries replace
/// the default index labels on the x axis.
#[derive(Clone, Debug)]
pub struct LabelStyle {
    pub visible: bool,
    pub custom: Vec<String>,
    pub font_px: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self { visible: true, custom: Vec::new(), font_px: 11.0 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DotStyle {
    pub visible: bool,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self { visible: true, inner_radius: 8.0, outer_radius: 12.0 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HighlightStyle {
    pub visible: bool,
    pub line_width: f64,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self { visible: true, line_width: 0.5 }
    }
}

/// Per-axis bundle of labels, grid, and axis-line settings.
#[derive(Clone, Debug, Default)]
pub struct CoordinateConfig {
    pub labels: LabelStyle,
    pub grid: GridStyle,
    pub axis: AxisStyle,
}

/// Line chart model: data plus styling. Scales are not stored here; they are
/// derived per layout pass and discarded with the [`Layout`].
#[derive(Clone, Debug)]
pub struct LineChart {
    pub data: DataStore,
    pub x: CoordinateConfig,
    pub y: CoordinateConfig,
    pub dots: DotStyle,
    pub highlight: HighlightStyle,
    pub area: bool,
    pub line_width: f64,
    pub theme: Theme,
}

impl LineChart {
    pub fn new() -> Self {
        Self {
            data: DataStore::new(),
            x: CoordinateConfig::default(),
            y: CoordinateConfig::default(),
            dots: DotStyle::default(),
            highlight: HighlightStyle::default(),
            area: true,
            line_width: 2.0,
            theme: Theme::default(),
        }
    }

    pub fn add_line(&mut self, values: Vec<f64>) {
        self.data.push_line(values);
    }

    /// Remove all data but keep styling.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Compute margins, scales, and tick ranges for a viewport.
    ///
    /// Scales are rebuilt from scratch on every call; nothing is cached
    /// across passes. The left margin grows to fit the widest y tick label.
    pub fn layout(&self, width: f64, height: f64) -> ChartResult<Layout> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidViewport { width, height });
        }
        if self.data.is_empty() {
            return Err(ChartError::NoData);
        }

        let drawing_height = (height - 2.0 * self.y.axis.inset).max(0.0);
        let min = self.data.min_value();
        let max = self.data.max_value();
        let y_scale = LinearScale::new([min, max], [0.0, drawing_height]);
        let y_ticks = y_scale.ticks(self.y.grid.count.max(1));

        let mut label_w: f64 = 0.0;
        for v in y_ticks.iter() {
            let text = format!("{}", v.round() as i64);
            label_w = label_w.max(estimate_text_width(&text, self.y.labels.font_px));
        }
        let label_w = label_w.max(self.x.axis.inset);

        let margins = Insets::new(
            label_w + 8.0,
            self.x.axis.inset,
            self.y.axis.inset,
            self.y.axis.inset,
        );
        let drawing_width = (width - margins.hsum()).max(0.0);

        let n = self.data.longest_len();
        let x_max = n.saturating_sub(1) as f64;
        let x_scale = LinearScale::new([0.0, x_max], [0.0, drawing_width]);
        // A single-point line has a zero x span; ticks() requires a non-zero
        // span, so substitute the lone tick at 0 directly.
        let x_ticks = if n > 1 {
            x_scale.ticks(self.x.grid.count.max(1))
        } else {
            TickRange { start: 0.0, stop: 0.5, step: 1.0 }
        };

        debug!(
            width,
            height,
            left_margin = margins.left,
            y_min = min,
            y_max = max,
            points = n,
            "layout pass"
        );

        Ok(Layout {
            width,
            height,
            margins,
            plot: RectF::from_ltrb(
                margins.left,
                margins.top,
                width - margins.right,
                height - margins.bottom,
            ),
            x_scale,
            y_scale,
            x_ticks,
            y_ticks,
        })
    }
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of one layout pass: margins, plot rectangle, and the freshly built
/// scales and tick ranges for both axes.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margins: Insets,
    pub plot: RectF,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub x_ticks: TickRange,
    pub y_ticks: TickRange,
}

impl Layout {
    /// Screen x for a data index.
    #[inline]
    pub fn to_screen_x(&self, x: f64) -> f64 {
        self.x_scale.scale(x) + self.margins.left
    }

    /// Screen y for a data value. Screen y grows downward, so the scaled
    /// value is flipped against the viewport height.
    #[inline]
    pub fn to_screen_y(&self, v: f64) -> f64 {
        self.height - self.y_scale.scale(v) - self.margins.bottom
    }

    /// Fractional data index for a screen x.
    #[inline]
    pub fn from_screen_x(&self, px: f64) -> f64 {
        self.x_scale.invert(px - self.margins.left)
    }
}

/// Deterministic, backend-independent text width estimate in pixels.
pub(crate) fn estimate_text_width(text: &str, font_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    units * font_px
}
