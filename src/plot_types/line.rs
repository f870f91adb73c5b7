use super::LayoutEngine;
use crate::axis::AxisGenerator;
use crate::chart::{ChartKind, ChartLayout};
use crate::data_types::{ChartConfig, Primitive, ScaleOrientation, Series, Tick};
use crate::scales::ChartScale;
use glam::DVec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

impl From<DVec2> for LinePoint {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineLayout {
    /// Marker positions, one per data point.
    pub points: Vec<LinePoint>,
    /// The same positions as `"x,y"` pairs for a polyline.
    pub polyline: Vec<String>,
    pub labels: Vec<String>,
    pub ticks: Vec<Tick>,
}

impl LineLayout {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs; `N - 1` of them for `N` points.
    pub fn segments(&self) -> impl Iterator<Item = (LinePoint, LinePoint)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// The polyline as a single SVG `points` attribute.
    pub fn polyline_attr(&self) -> String {
        self.polyline.join(" ")
    }

    pub fn to_primitives(&self, config: &ChartConfig) -> Vec<Primitive> {
        if self.is_empty() {
            return Vec::new();
        }
        let color = config.palette.color_at(0);
        let mut out = AxisGenerator::value_axis_primitives(&self.ticks, config);
        out.reserve(self.points.len() * 3);
        for (a, b) in self.segments() {
            out.push(Primitive::Line {
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
                stroke_width: config.stroke_width,
                color,
            });
        }
        for (p, label) in self.points.iter().zip(&self.labels) {
            out.push(Primitive::Circle {
                cx: p.x,
                cy: p.y,
                r: config.marker_radius,
                color,
            });
            out.push(AxisGenerator::category_label(p.x, label, config));
        }
        out
    }
}

/// Value scale used by line charts: the actual data extent, top-origin
/// pixels. Zero is not forced into the domain.
pub fn line_scale(series: &Series, config: &ChartConfig) -> ChartScale {
    ChartScale::build(
        &series.values(),
        config.margins.top,
        config.baseline(),
        false,
    )
    .with_orientation(ScaleOrientation::Inverted)
}

/// Places one point per value, evenly spaced across the plot width.
///
/// A single point sits at the left margin and produces no segment.
pub fn layout_line(series: &Series, config: &ChartConfig) -> LineLayout {
    let n = series.len();
    if n == 0 {
        return LineLayout::default();
    }

    let scale = line_scale(series, config);
    let step_x = if n > 1 {
        config.plot_width() / (n - 1) as f64
    } else {
        0.0
    };

    let points: Vec<LinePoint> = series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            LinePoint::from(DVec2::new(
                config.margins.left + i as f64 * step_x,
                scale.map(p.value),
            ))
        })
        .collect();
    let polyline = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
    let labels = series.iter().map(|p| p.label.clone()).collect();

    LineLayout {
        points,
        polyline,
        labels,
        ticks: AxisGenerator::default_ticks(&scale),
    }
}

pub struct LineLayoutEngine;

impl LayoutEngine for LineLayoutEngine {
    fn kind(&self) -> ChartKind {
        ChartKind::Line
    }

    fn layout(&self, series: &Series, config: &ChartConfig) -> ChartLayout {
        let layout = layout_line(series, config);
        tracing::debug!(points = layout.points.len(), "line layout");
        ChartLayout::Line(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::{DataPoint, Margins};

    #[test]
    fn uses_actual_extent() {
        let cfg = ChartConfig::new(300.0, 120.0).with_margins(Margins {
            top: 10.0,
            bottom: 10.0,
            left: 0.0,
            right: 0.0,
        });
        let series = Series::new(vec![
            DataPoint::new("a", 50.0),
            DataPoint::new("b", 100.0),
            DataPoint::new("c", 75.0),
        ]);
        let layout = layout_line(&series, &cfg);
        assert_eq!(layout.points[0], LinePoint { x: 0.0, y: 110.0 });
        assert_eq!(layout.points[1], LinePoint { x: 150.0, y: 10.0 });
        assert_eq!(layout.points[2], LinePoint { x: 300.0, y: 60.0 });
        assert_eq!(layout.polyline[1], "150,10");
        assert_eq!(layout.segments().count(), 2);
    }
}
