//! Drawing defaults shared by every embedder: the swatch row, the tool a
//! fresh board starts with, and the stroke width adapters give every
//! primitive.

use slateboard_shared::ShapeKind;

pub const PALETTE: [&str; 4] = ["#000000", "#FF0000", "#00FF00", "#0000FF"];
pub const DEFAULT_TOOL: ShapeKind = ShapeKind::Line;
pub const PEN_WIDTH: f64 = 2.0;
