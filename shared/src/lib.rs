pub mod geometry;
pub mod payload;
pub mod protocol;
pub mod shape;

pub use geometry::{circle_bounds, circle_radius, rect_bounds, Bounds};
pub use payload::{PointsField, RawPoint, ShapePayload, ValidationError};
pub use protocol::{ClientMessage, ServerMessage};
pub use shape::{Point, Shape, ShapeKind, DEFAULT_COLOR, DEFAULT_DOT_INTERVAL};
