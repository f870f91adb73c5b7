//! chart_layout: pure geometry for bar, line and pie charts.
//!
//! Input records are normalised into a `Series`, a `LayoutEngine` turns the
//! series into rectangles, polylines or arcs, and the result flattens into
//! renderer-agnostic `Primitive`s. Nothing here paints pixels or keeps state
//! between calls.

pub mod axis;
pub mod chart;
pub mod data_types;
pub mod legend;
pub mod normalize;
pub mod plot_types;
#[cfg(feature = "polars")]
pub mod polars_source;
pub mod rendering;
pub mod scales;
pub mod theme;
pub mod utils;

pub use axis::AxisGenerator;
pub use chart::{ChartKind, ChartLayout};
pub use data_types::{ChartConfig, Color, DataPoint, Margins, Palette, Primitive, Series, Tick};
pub use legend::{build_legend, LegendEntry};
pub use normalize::{normalize, normalize_records, normalize_str};
pub use plot_types::{
    BarLayout, BarLayoutEngine, BarRect, LayoutEngine, LineLayout, LineLayoutEngine, LinePoint,
    PieLayout, PieLayoutEngine, Slice,
};
pub use rendering::{layout_chart, render_records, render_series, ChartOutput};
pub use scales::ChartScale;
