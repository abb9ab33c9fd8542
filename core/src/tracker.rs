use slateboard_shared::{geometry, Point, Shape, ShapeKind, DEFAULT_DOT_INTERVAL};
use tracing::debug;

use crate::surface::{ItemId, Primitive, Surface};

enum GestureState {
    Idle,
    Active {
        tool: ShapeKind,
        color: String,
        start: Point,
        points: Vec<Point>,
        preview: ItemId,
    },
}

/// Turns one pointer-down → move* → up sequence into a finalized shape,
/// keeping a live preview on the surface while the gesture runs. Stray
/// events outside a gesture are ignored, never errors.
pub struct GestureTracker {
    state: GestureState,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, GestureState::Active { .. })
    }

    pub fn pointer_down<S: Surface>(
        &mut self,
        tool: ShapeKind,
        color: &str,
        point: Point,
        surface: &mut S,
    ) {
        if !point.is_finite() {
            return;
        }
        if self.is_active() {
            self.cancel(surface);
        }
        let points = if tool == ShapeKind::Curve {
            vec![point]
        } else {
            Vec::new()
        };
        let preview = surface.add(preview_primitive(tool, color, point, point, &points));
        self.state = GestureState::Active {
            tool,
            color: color.to_string(),
            start: point,
            points,
            preview,
        };
    }

    pub fn pointer_move<S: Surface>(&mut self, point: Point, surface: &mut S) {
        if !point.is_finite() {
            return;
        }
        let GestureState::Active {
            tool,
            color,
            start,
            points,
            preview,
        } = &mut self.state
        else {
            return;
        };
        if *tool == ShapeKind::Curve {
            points.push(point);
        }
        surface.update(*preview, preview_primitive(*tool, color, *start, point, points));
    }

    pub fn pointer_up<S: Surface>(&mut self, point: Point, surface: &mut S) -> Option<Shape> {
        let GestureState::Active {
            tool,
            color,
            start,
            points,
            preview,
        } = std::mem::replace(&mut self.state, GestureState::Idle)
        else {
            return None;
        };
        surface.remove(preview);
        let end = if point.is_finite() { point } else { start };
        let shape = match tool {
            ShapeKind::Line => Shape::line(start, end, color),
            ShapeKind::DottedLine => Shape::dotted_line(start, end, color, None),
            ShapeKind::Circle => Shape::circle(start, end, color, None),
            ShapeKind::Rect => Shape::rect(start, end, color),
            ShapeKind::Curve => Shape::curve(points, color),
        };
        debug!(kind = %shape.kind(), "gesture finalized");
        Some(shape)
    }

    pub fn cancel<S: Surface>(&mut self, surface: &mut S) {
        if let GestureState::Active { preview, .. } =
            std::mem::replace(&mut self.state, GestureState::Idle)
        {
            surface.remove(preview);
            debug!("gesture discarded");
        }
    }

    /// Drop gesture state without touching the surface. For use when the
    /// surface is being cleared wholesale and the preview item is already
    /// gone.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }
}

fn preview_primitive(
    tool: ShapeKind,
    color: &str,
    start: Point,
    current: Point,
    points: &[Point],
) -> Primitive {
    match tool {
        ShapeKind::Line => Primitive::Segment {
            start,
            end: current,
            color: color.to_string(),
        },
        ShapeKind::DottedLine => Primitive::DashedSegment {
            start,
            end: current,
            gap: DEFAULT_DOT_INTERVAL,
            color: color.to_string(),
        },
        ShapeKind::Circle => Primitive::Ellipse {
            bounds: geometry::circle_bounds(start, geometry::circle_radius(start, current)),
            color: color.to_string(),
        },
        ShapeKind::Rect => Primitive::Rect {
            bounds: geometry::rect_bounds(start, current),
            color: color.to_string(),
        },
        ShapeKind::Curve => Primitive::Path {
            points: points.to_vec(),
            color: color.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DisplayList;

    #[test]
    fn stray_events_are_ignored() {
        let mut tracker = GestureTracker::new();
        let mut surface = DisplayList::new();
        tracker.pointer_move(Point::new(1.0, 1.0), &mut surface);
        let finalized = tracker.pointer_up(Point::new(1.0, 1.0), &mut surface);
        assert!(finalized.is_none());
        assert!(surface.is_empty());
        assert!(!tracker.is_active());
    }

    #[test]
    fn line_gesture_previews_then_finalizes() {
        let mut tracker = GestureTracker::new();
        let mut surface = DisplayList::new();
        tracker.pointer_down(ShapeKind::Line, "#000000", Point::new(0.0, 0.0), &mut surface);
        assert!(tracker.is_active());
        assert_eq!(surface.len(), 1);

        tracker.pointer_move(Point::new(5.0, 5.0), &mut surface);
        match surface.last() {
            Some(Primitive::Segment { end, .. }) => assert_eq!(*end, Point::new(5.0, 5.0)),
            other => panic!("expected segment preview, got {other:?}"),
        }

        let shape = tracker
            .pointer_up(Point::new(8.0, 6.0), &mut surface)
            .unwrap();
        assert_eq!(
            shape,
            Shape::line(Point::new(0.0, 0.0), Point::new(8.0, 6.0), "#000000")
        );
        assert!(surface.is_empty());
        assert!(!tracker.is_active());
    }

    #[test]
    fn circle_preview_uses_euclidean_radius() {
        let mut tracker = GestureTracker::new();
        let mut surface = DisplayList::new();
        tracker.pointer_down(
            ShapeKind::Circle,
            "#000000",
            Point::new(0.0, 0.0),
            &mut surface,
        );
        tracker.pointer_move(Point::new(3.0, 4.0), &mut surface);
        match surface.last() {
            Some(Primitive::Ellipse { bounds, .. }) => {
                assert_eq!(bounds.x, -5.0);
                assert_eq!(bounds.y, -5.0);
                assert_eq!(bounds.width, 10.0);
            }
            other => panic!("expected ellipse preview, got {other:?}"),
        }

        let shape = tracker
            .pointer_up(Point::new(3.0, 4.0), &mut surface)
            .unwrap();
        match shape {
            Shape::Circle { radius, .. } => assert_eq!(radius, 5.0),
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn rect_preview_normalizes_while_dragging() {
        let mut tracker = GestureTracker::new();
        let mut surface = DisplayList::new();
        tracker.pointer_down(
            ShapeKind::Rect,
            "#000000",
            Point::new(50.0, 50.0),
            &mut surface,
        );
        tracker.pointer_move(Point::new(10.0, 20.0), &mut surface);
        match surface.last() {
            Some(Primitive::Rect { bounds, .. }) => {
                assert_eq!(bounds.x, 10.0);
                assert_eq!(bounds.y, 20.0);
                assert_eq!(bounds.width, 40.0);
                assert_eq!(bounds.height, 30.0);
            }
            other => panic!("expected rect preview, got {other:?}"),
        }
    }

    #[test]
    fn curve_records_every_move_vertex() {
        let mut tracker = GestureTracker::new();
        let mut surface = DisplayList::new();
        tracker.pointer_down(
            ShapeKind::Curve,
            "#FF0000",
            Point::new(0.0, 0.0),
            &mut surface,
        );
        tracker.pointer_move(Point::new(1.0, 1.0), &mut surface);
        tracker.pointer_move(Point::new(1.0, 1.0), &mut surface);
        tracker.pointer_move(Point::new(2.0, 0.0), &mut surface);

        let shape = tracker
            .pointer_up(Point::new(2.0, 0.0), &mut surface)
            .unwrap();
        match shape {
            Shape::Curve { points, .. } => {
                assert_eq!(
                    points,
                    vec![
                        Point::new(0.0, 0.0),
                        Point::new(1.0, 1.0),
                        Point::new(1.0, 1.0),
                        Point::new(2.0, 0.0),
                    ]
                );
            }
            other => panic!("expected curve, got {other:?}"),
        }
    }

    #[test]
    fn cancel_removes_the_preview() {
        let mut tracker = GestureTracker::new();
        let mut surface = DisplayList::new();
        tracker.pointer_down(ShapeKind::Line, "#000000", Point::new(0.0, 0.0), &mut surface);
        tracker.cancel(&mut surface);
        assert!(surface.is_empty());
        assert!(!tracker.is_active());
        assert!(tracker
            .pointer_up(Point::new(1.0, 1.0), &mut surface)
            .is_none());
    }

    #[test]
    fn pointer_up_tolerates_missing_preview() {
        let mut tracker = GestureTracker::new();
        let mut surface = DisplayList::new();
        tracker.pointer_down(ShapeKind::Line, "#000000", Point::new(0.0, 0.0), &mut surface);
        surface.clear();
        let shape = tracker.pointer_up(Point::new(1.0, 0.0), &mut surface);
        assert!(shape.is_some());
        assert!(surface.is_empty());
    }

    #[test]
    fn second_pointer_down_restarts_the_gesture() {
        let mut tracker = GestureTracker::new();
        let mut surface = DisplayList::new();
        tracker.pointer_down(ShapeKind::Line, "#000000", Point::new(0.0, 0.0), &mut surface);
        tracker.pointer_down(ShapeKind::Line, "#000000", Point::new(9.0, 9.0), &mut surface);
        assert_eq!(surface.len(), 1);
        let shape = tracker
            .pointer_up(Point::new(10.0, 9.0), &mut surface)
            .unwrap();
        assert_eq!(
            shape,
            Shape::line(Point::new(9.0, 9.0), Point::new(10.0, 9.0), "#000000")
        );
    }
}
