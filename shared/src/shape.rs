use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::geometry;

pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_DOT_INTERVAL: f64 = 5.0;

#[derive(Serialize, Deserialize, Encode, Decode, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Serialize, Deserialize, Encode, Decode, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Line,
    DottedLine,
    Circle,
    Rect,
    Curve,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Line,
        ShapeKind::DottedLine,
        ShapeKind::Circle,
        ShapeKind::Rect,
        ShapeKind::Curve,
    ];

    pub fn parse(value: &str) -> Option<ShapeKind> {
        match value {
            "line" => Some(ShapeKind::Line),
            "dotted_line" => Some(ShapeKind::DottedLine),
            "circle" => Some(ShapeKind::Circle),
            "rect" => Some(ShapeKind::Rect),
            "curve" => Some(ShapeKind::Curve),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::DottedLine => "dotted_line",
            ShapeKind::Circle => "circle",
            ShapeKind::Rect => "rect",
            ShapeKind::Curve => "curve",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finalized drawing primitive in canonical form: circle radius
/// resolved, rect corners normalized, curve points decoded. Constructors
/// perform the canonicalization, so a value of this type is always safe to
/// render, store, and put on the wire.
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Line {
        start: Point,
        end: Point,
        color: String,
    },
    DottedLine {
        start: Point,
        end: Point,
        color: String,
        dot_interval: f64,
    },
    Circle {
        start: Point,
        end: Point,
        color: String,
        radius: f64,
    },
    Rect {
        start: Point,
        end: Point,
        color: String,
    },
    Curve {
        points: Vec<Point>,
        color: String,
    },
}

impl Shape {
    pub fn line(start: Point, end: Point, color: impl Into<String>) -> Self {
        Shape::Line {
            start,
            end,
            color: color.into(),
        }
    }

    pub fn dotted_line(
        start: Point,
        end: Point,
        color: impl Into<String>,
        dot_interval: Option<f64>,
    ) -> Self {
        Shape::DottedLine {
            start,
            end,
            color: color.into(),
            dot_interval: dot_interval.unwrap_or(DEFAULT_DOT_INTERVAL),
        }
    }

    pub fn circle(start: Point, end: Point, color: impl Into<String>, radius: Option<f64>) -> Self {
        let radius = radius.unwrap_or_else(|| geometry::circle_radius(start, end));
        Shape::Circle {
            start,
            end,
            color: color.into(),
            radius,
        }
    }

    pub fn rect(start: Point, end: Point, color: impl Into<String>) -> Self {
        let bounds = geometry::rect_bounds(start, end);
        Shape::Rect {
            start: Point::new(bounds.x, bounds.y),
            end: Point::new(bounds.x + bounds.width, bounds.y + bounds.height),
            color: color.into(),
        }
    }

    pub fn curve(points: Vec<Point>, color: impl Into<String>) -> Self {
        Shape::Curve {
            points,
            color: color.into(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line { .. } => ShapeKind::Line,
            Shape::DottedLine { .. } => ShapeKind::DottedLine,
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rect { .. } => ShapeKind::Rect,
            Shape::Curve { .. } => ShapeKind::Curve,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Shape::Line { color, .. }
            | Shape::DottedLine { color, .. }
            | Shape::Circle { color, .. }
            | Shape::Rect { color, .. }
            | Shape::Curve { color, .. } => color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_derives_euclidean_radius() {
        let shape = Shape::circle(Point::new(0.0, 0.0), Point::new(3.0, 4.0), "#000000", None);
        match shape {
            Shape::Circle { radius, .. } => assert_eq!(radius, 5.0),
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn circle_keeps_explicit_radius() {
        let shape = Shape::circle(
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            "#000000",
            Some(7.5),
        );
        match shape {
            Shape::Circle { radius, .. } => assert_eq!(radius, 7.5),
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn rect_normalizes_any_drag_direction() {
        let shape = Shape::rect(Point::new(50.0, 50.0), Point::new(10.0, 20.0), "#000000");
        match shape {
            Shape::Rect { start, end, .. } => {
                assert_eq!(start, Point::new(10.0, 20.0));
                assert_eq!(end, Point::new(50.0, 50.0));
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn dotted_line_defaults_interval() {
        let shape = Shape::dotted_line(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            "#FF0000",
            None,
        );
        match shape {
            Shape::DottedLine { dot_interval, .. } => assert_eq!(dot_interval, 5.0),
            other => panic!("expected dotted line, got {other:?}"),
        }
    }

    #[test]
    fn kind_strings_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ShapeKind::parse("triangle"), None);
    }

    #[test]
    fn shape_serializes_with_kind_tag() {
        let shape = Shape::line(Point::new(1.0, 2.0), Point::new(3.0, 4.0), "#00FF00");
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["start"]["x"], 1.0);
        assert_eq!(json["color"], "#00FF00");

        let back: Shape = serde_json::from_value(json).unwrap();
        assert_eq!(back, shape);
    }
}
