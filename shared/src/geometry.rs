use crate::shape::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Euclidean distance from the gesture anchor to the pointer. Previews and
/// finalized circles both resolve radius through here, so the two can never
/// disagree about a circle's size.
pub fn circle_radius(start: Point, end: Point) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    (dx * dx + dy * dy).sqrt()
}

/// Axis-aligned box with the top-left at the component-wise minimum,
/// whichever corner the drag started from.
pub fn rect_bounds(start: Point, end: Point) -> Bounds {
    Bounds {
        x: start.x.min(end.x),
        y: start.y.min(end.y),
        width: (end.x - start.x).abs(),
        height: (end.y - start.y).abs(),
    }
}

pub fn circle_bounds(center: Point, radius: f64) -> Bounds {
    Bounds {
        x: center.x - radius,
        y: center.y - radius,
        width: radius * 2.0,
        height: radius * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_of_three_four_five_triangle() {
        let radius = circle_radius(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(radius, 5.0);
    }

    #[test]
    fn radius_is_direction_independent() {
        let forward = circle_radius(Point::new(10.0, 10.0), Point::new(13.0, 14.0));
        let backward = circle_radius(Point::new(13.0, 14.0), Point::new(10.0, 10.0));
        assert_eq!(forward, backward);
        assert_eq!(forward, 5.0);
    }

    #[test]
    fn rect_bounds_ignores_drag_direction() {
        let corners = [
            (Point::new(10.0, 20.0), Point::new(50.0, 50.0)),
            (Point::new(50.0, 50.0), Point::new(10.0, 20.0)),
            (Point::new(10.0, 50.0), Point::new(50.0, 20.0)),
            (Point::new(50.0, 20.0), Point::new(10.0, 50.0)),
        ];
        for (start, end) in corners {
            let bounds = rect_bounds(start, end);
            assert_eq!(bounds.x, 10.0);
            assert_eq!(bounds.y, 20.0);
            assert_eq!(bounds.width, 40.0);
            assert_eq!(bounds.height, 30.0);
        }
    }

    #[test]
    fn circle_bounds_center_the_box() {
        let bounds = circle_bounds(Point::new(0.0, 0.0), 5.0);
        assert_eq!(bounds.x, -5.0);
        assert_eq!(bounds.y, -5.0);
        assert_eq!(bounds.width, 10.0);
        assert_eq!(bounds.height, 10.0);
    }
}
