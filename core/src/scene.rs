use slateboard_shared::{geometry, Shape};
use tracing::debug;

use crate::history::History;
use crate::surface::{DisplayList, Primitive, Surface};

/// The single entry point for finalized shapes, local or remote. Rendering
/// and the history append happen in one step so the log never diverges
/// from what is on the surface.
pub struct Scene<S: Surface = DisplayList> {
    surface: S,
    history: History,
}

impl Scene<DisplayList> {
    pub fn new() -> Self {
        Self::with_surface(DisplayList::new())
    }
}

impl Default for Scene<DisplayList> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> Scene<S> {
    pub fn with_surface(surface: S) -> Self {
        Self {
            surface,
            history: History::new(),
        }
    }

    pub fn apply(&mut self, shape: &Shape) {
        self.surface.add(primitive_for(shape));
        self.history.append(shape.clone());
        debug!(kind = %shape.kind(), total = self.history.len(), "shape applied");
    }

    pub fn clear(&mut self) {
        self.surface.clear();
        self.history.clear();
        debug!("scene cleared");
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

pub fn primitive_for(shape: &Shape) -> Primitive {
    match shape {
        Shape::Line { start, end, color } => Primitive::Segment {
            start: *start,
            end: *end,
            color: color.clone(),
        },
        Shape::DottedLine {
            start,
            end,
            color,
            dot_interval,
        } => Primitive::DashedSegment {
            start: *start,
            end: *end,
            gap: *dot_interval,
            color: color.clone(),
        },
        Shape::Circle {
            start,
            color,
            radius,
            ..
        } => Primitive::Ellipse {
            bounds: geometry::circle_bounds(*start, *radius),
            color: color.clone(),
        },
        Shape::Rect { start, end, color } => Primitive::Rect {
            bounds: geometry::rect_bounds(*start, *end),
            color: color.clone(),
        },
        Shape::Curve { points, color } => Primitive::Path {
            points: points.clone(),
            color: color.clone(),
        },
    }
}
