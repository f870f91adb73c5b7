// Plot types module

pub mod bar;
pub mod line;
pub mod pie;

pub use bar::{BarLayout, BarLayoutEngine, BarRect};
pub use line::{LineLayout, LineLayoutEngine, LinePoint};
pub use pie::{PieLayout, PieLayoutEngine, Slice};

use crate::chart::{ChartKind, ChartLayout};
use crate::data_types::{ChartConfig, Series};

/// A chart-kind strategy. Implementations are stateless, so one instance can
/// serve any number of charts concurrently.
pub trait LayoutEngine: Send + Sync {
    fn kind(&self) -> ChartKind;

    /// Computes the geometry for `series`. Never fails; degenerate input
    /// produces an empty layout.
    fn layout(&self, series: &Series, config: &ChartConfig) -> ChartLayout;
}
