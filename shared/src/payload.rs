use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shape::{Point, Shape, ShapeKind, DEFAULT_COLOR};

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("unknown shape kind `{0}`")]
    UnknownKind(String),
    #[error("{kind} shape is missing required field `{field}`")]
    MissingField { kind: ShapeKind, field: &'static str },
    #[error("curve points failed to decode: {0}")]
    UndecodablePoints(#[from] serde_json::Error),
    #[error("curve has no points")]
    EmptyPoints,
    #[error("coordinate is not finite")]
    NonFiniteCoordinate,
    #[error("circle radius {0} is invalid")]
    BadRadius(f64),
    #[error("dot interval {0} is invalid")]
    BadDotInterval(f64),
}

#[derive(Serialize, Deserialize, Encode, Decode, Clone, Copy, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawPoint {
    Object { x: f64, y: f64 },
    Pair(f64, f64),
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        match raw {
            RawPoint::Object { x, y } => Point::new(x, y),
            RawPoint::Pair(x, y) => Point::new(x, y),
        }
    }
}

impl From<Point> for RawPoint {
    fn from(point: Point) -> Self {
        RawPoint::Object {
            x: point.x,
            y: point.y,
        }
    }
}

#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug)]
#[serde(untagged)]
pub enum PointsField {
    Listed(Vec<RawPoint>),
    Encoded(String),
}

/// An inbound shape record before validation: every field optional, point
/// encodings loose, `points` possibly still a JSON string. `validate` is
/// the only way from here to a canonical [`Shape`].
#[derive(Serialize, Deserialize, Encode, Decode, Clone, Debug, Default)]
pub struct ShapePayload {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<RawPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<RawPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<PointsField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_interval: Option<f64>,
}

impl ShapePayload {
    pub fn validate(&self) -> Result<Shape, ValidationError> {
        let Some(kind) = ShapeKind::parse(&self.kind) else {
            return Err(ValidationError::UnknownKind(self.kind.clone()));
        };
        let color = self
            .color
            .clone()
            .unwrap_or_else(|| DEFAULT_COLOR.to_string());
        match kind {
            ShapeKind::Line => {
                let (start, end) = self.endpoints(kind)?;
                Ok(Shape::line(start, end, color))
            }
            ShapeKind::DottedLine => {
                let (start, end) = self.endpoints(kind)?;
                if let Some(interval) = self.dot_interval {
                    if !interval.is_finite() || interval <= 0.0 {
                        return Err(ValidationError::BadDotInterval(interval));
                    }
                }
                Ok(Shape::dotted_line(start, end, color, self.dot_interval))
            }
            ShapeKind::Circle => {
                let (start, end) = self.endpoints(kind)?;
                if let Some(radius) = self.radius {
                    if !radius.is_finite() || radius < 0.0 {
                        return Err(ValidationError::BadRadius(radius));
                    }
                }
                Ok(Shape::circle(start, end, color, self.radius))
            }
            ShapeKind::Rect => {
                let (start, end) = self.endpoints(kind)?;
                Ok(Shape::rect(start, end, color))
            }
            ShapeKind::Curve => {
                let field = self
                    .points
                    .as_ref()
                    .ok_or(ValidationError::MissingField {
                        kind,
                        field: "points",
                    })?;
                let points = decode_points(field)?;
                if points.is_empty() {
                    return Err(ValidationError::EmptyPoints);
                }
                if points.iter().any(|point| !point.is_finite()) {
                    return Err(ValidationError::NonFiniteCoordinate);
                }
                Ok(Shape::curve(points, color))
            }
        }
    }

    fn endpoints(&self, kind: ShapeKind) -> Result<(Point, Point), ValidationError> {
        let start: Point = self
            .start
            .ok_or(ValidationError::MissingField {
                kind,
                field: "start",
            })?
            .into();
        let end: Point = self
            .end
            .ok_or(ValidationError::MissingField { kind, field: "end" })?
            .into();
        if !start.is_finite() || !end.is_finite() {
            return Err(ValidationError::NonFiniteCoordinate);
        }
        Ok((start, end))
    }
}

fn decode_points(field: &PointsField) -> Result<Vec<Point>, ValidationError> {
    match field {
        PointsField::Listed(raw) => Ok(raw.iter().copied().map(Point::from).collect()),
        PointsField::Encoded(text) => {
            let raw: Vec<RawPoint> = serde_json::from_str(text)?;
            Ok(raw.into_iter().map(Point::from).collect())
        }
    }
}
