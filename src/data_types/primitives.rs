use super::color::Color;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a text primitive relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

/// A single drawing instruction for an external rendering adapter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_width: f64,
        color: Color,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        color: Color,
    },
    Path {
        commands: Vec<PathCommand>,
        color: Color,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        anchor: TextAnchor,
        size: f64,
        color: Color,
    },
}

impl Primitive {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Line { .. } => "line",
            Self::Circle { .. } => "circle",
            Self::Path { .. } => "path",
            Self::Text { .. } => "text",
        }
    }
}

/// Vector path segment, mirroring the SVG path grammar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Arc {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

/// Serializes commands as an SVG `d` attribute, two decimals per coordinate.
pub fn to_svg_path(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(|cmd| match *cmd {
            PathCommand::MoveTo { x, y } => format!("M {x:.2} {y:.2}"),
            PathCommand::LineTo { x, y } => format!("L {x:.2} {y:.2}"),
            PathCommand::Arc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => format!(
                "A {rx:.2} {ry:.2} {x_axis_rotation} {} {} {x:.2} {y:.2}",
                u8::from(large_arc),
                u8::from(sweep)
            ),
            PathCommand::Close => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
