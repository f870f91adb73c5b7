use super::LayoutEngine;
use crate::chart::{ChartKind, ChartLayout};
use crate::data_types::{
    to_svg_path, ChartConfig, Color, Palette, PathCommand, Primitive, Series, TextAnchor,
};
use crate::utils::number_formatter::format_percentage;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Slices start at 12 o'clock and advance clockwise.
pub const START_ANGLE_DEG: f64 = -90.0;

/// Fraction of the radius at which slice labels are anchored.
const LABEL_RADIUS_RATIO: f64 = 0.65;

const FULL_CIRCLE_EPSILON: f64 = 1e-9;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub path_commands: Vec<PathCommand>,
    pub color: Color,
    /// Share of the total, in `[0, 1]`.
    pub percentage: f64,
    pub label: String,
    pub value: f64,
    pub label_anchor: DVec2,
}

impl Slice {
    pub fn sweep_deg(&self) -> f64 {
        self.end_angle_deg - self.start_angle_deg
    }

    pub fn svg_path(&self) -> String {
        to_svg_path(&self.path_commands)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub slices: Vec<Slice>,
    pub total: f64,
    pub center: DVec2,
    pub radius: f64,
}

impl PieLayout {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn to_primitives(&self, config: &ChartConfig) -> Vec<Primitive> {
        let theme = &config.theme;
        let mut out = Vec::with_capacity(self.slices.len() * 2);
        for slice in &self.slices {
            out.push(Primitive::Path {
                commands: slice.path_commands.clone(),
                color: slice.color,
            });
        }
        for slice in self.slices.iter().filter(|s| s.percentage > 0.0) {
            out.push(Primitive::Text {
                x: slice.label_anchor.x,
                y: slice.label_anchor.y,
                text: format_percentage(slice.percentage),
                anchor: TextAnchor::Middle,
                size: theme.value_label_size,
                color: theme.slice_label,
            });
        }
        out
    }
}

/// Centre of the plot area and half its smaller side.
pub fn pie_geometry(config: &ChartConfig) -> (DVec2, f64) {
    let center = DVec2::new(
        config.margins.left + config.plot_width() / 2.0,
        config.margins.top + config.plot_height() / 2.0,
    );
    let radius = config.plot_width().min(config.plot_height()) / 2.0;
    (center, radius)
}

pub fn layout_pie(series: &Series, config: &ChartConfig) -> PieLayout {
    let (center, radius) = pie_geometry(config);
    layout_pie_at(series, &config.palette, center, radius)
}

/// Splits the circle proportionally to the values, in series order.
///
/// Negative values count as zero. A non-positive total yields an empty
/// layout.
pub fn layout_pie_at(
    series: &Series,
    palette: &Palette,
    center: DVec2,
    radius: f64,
) -> PieLayout {
    let total: f64 = series.iter().map(|p| p.value.max(0.0)).sum();
    if total <= 0.0 {
        if !series.is_empty() {
            tracing::warn!(points = series.len(), "pie series has no positive total");
        }
        return PieLayout {
            slices: Vec::new(),
            total: 0.0,
            center,
            radius,
        };
    }

    let mut cumulative = START_ANGLE_DEG;
    let slices = series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let percentage = point.value.max(0.0) / total;
            let sweep = percentage * 360.0;
            let start = cumulative;
            let end = cumulative + sweep;
            cumulative = end;

            let mid = (start + sweep / 2.0).to_radians();
            Slice {
                start_angle_deg: start,
                end_angle_deg: end,
                path_commands: arc_path(center, radius, start, end),
                color: palette.color_at(i),
                percentage,
                label: point.label.clone(),
                value: point.value,
                label_anchor: center + DVec2::from_angle(mid) * radius * LABEL_RADIUS_RATIO,
            }
        })
        .collect();

    PieLayout {
        slices,
        total,
        center,
        radius,
    }
}

fn point_at(center: DVec2, radius: f64, angle_deg: f64) -> DVec2 {
    center + DVec2::from_angle(angle_deg.to_radians()) * radius
}

/// Wedge from the centre: `M c L p1 A r r 0 large 1 p2 Z`.
///
/// A full circle has coincident endpoints, which an arc command cannot
/// express, so it is drawn as two half arcs.
pub fn arc_path(center: DVec2, radius: f64, start_deg: f64, end_deg: f64) -> Vec<PathCommand> {
    let sweep = end_deg - start_deg;
    let p1 = point_at(center, radius, start_deg);
    let arc_to = |large_arc: bool, p: DVec2| PathCommand::Arc {
        rx: radius,
        ry: radius,
        x_axis_rotation: 0.0,
        large_arc,
        sweep: true,
        x: p.x,
        y: p.y,
    };

    let mut commands = vec![
        PathCommand::MoveTo {
            x: center.x,
            y: center.y,
        },
        PathCommand::LineTo { x: p1.x, y: p1.y },
    ];
    if sweep >= 360.0 - FULL_CIRCLE_EPSILON {
        let half = point_at(center, radius, start_deg + 180.0);
        commands.push(arc_to(false, half));
        commands.push(arc_to(false, p1));
    } else {
        let p2 = point_at(center, radius, end_deg);
        commands.push(arc_to(sweep > 180.0, p2));
    }
    commands.push(PathCommand::Close);
    commands
}

pub struct PieLayoutEngine;

impl LayoutEngine for PieLayoutEngine {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn layout(&self, series: &Series, config: &ChartConfig) -> ChartLayout {
        let layout = layout_pie(series, config);
        tracing::debug!(slices = layout.slices.len(), total = layout.total, "pie layout");
        ChartLayout::Pie(layout)
    }
}
