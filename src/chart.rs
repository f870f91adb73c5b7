//! Chart model
//!
//! `ChartKind` picks a layout strategy once; `ChartLayout` is the result of
//! running it, tagged by kind so callers can match on the geometry they got
//! back without re-dispatching on strings.

use crate::data_types::{ChartConfig, Primitive};
use crate::plot_types::{
    BarLayout, BarLayoutEngine, LayoutEngine, LineLayout, LineLayoutEngine, PieLayout,
    PieLayoutEngine,
};
use eyre::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

static BAR_ENGINE: BarLayoutEngine = BarLayoutEngine;
static LINE_ENGINE: LineLayoutEngine = LineLayoutEngine;
static PIE_ENGINE: PieLayoutEngine = PieLayoutEngine;

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie];

    pub fn engine(self) -> &'static dyn LayoutEngine {
        match self {
            Self::Bar => &BAR_ENGINE,
            Self::Line => &LINE_ENGINE,
            Self::Pie => &PIE_ENGINE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            "pie" => Ok(Self::Pie),
            other => bail!("unknown chart kind {other:?}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartLayout {
    Bar(BarLayout),
    Line(LineLayout),
    Pie(PieLayout),
}

impl ChartLayout {
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Bar(_) => ChartKind::Bar,
            Self::Line(_) => ChartKind::Line,
            Self::Pie(_) => ChartKind::Pie,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bar(l) => l.is_empty(),
            Self::Line(l) => l.is_empty(),
            Self::Pie(l) => l.is_empty(),
        }
    }

    /// Flattens the layout into drawable primitives, axes first.
    pub fn to_primitives(&self, config: &ChartConfig) -> Vec<Primitive> {
        match self {
            Self::Bar(l) => l.to_primitives(config),
            Self::Line(l) => l.to_primitives(config),
            Self::Pie(l) => l.to_primitives(config),
        }
    }

    pub fn as_bar(&self) -> Option<&BarLayout> {
        match self {
            Self::Bar(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&LineLayout> {
        match self {
            Self::Line(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_pie(&self) -> Option<&PieLayout> {
        match self {
            Self::Pie(l) => Some(l),
            _ => None,
        }
    }
}
