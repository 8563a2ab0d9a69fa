// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart layout and scenes.

pub mod chart;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod scale;
pub mod scene;
pub mod series;
pub mod theme;
pub mod types;

pub use chart::{
    AxisStyle, CoordinateConfig, DotStyle, GridStyle, HighlightStyle, LabelStyle, Layout,
    LineChart,
};
pub use error::{ChartError, ChartResult};
pub use interaction::{highlight_segment, highlighted_dots, resolve_touch, Selection};
pub use scale::{LinearScale, TickRange, Ticks};
pub use scene::{build_scene, Scene};
pub use series::DataStore;
pub use theme::{Rgba, Theme};
