// Copyright 2025 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inclusive point-in-rectangle containment for drop-zone hit testing.

use kurbo::{Point, Rect};

/// Returns `true` if `point` lies inside `rect`, counting the boundary.
///
/// Drop zones treat an edge touch as a hit: a position exactly on a
/// rectangle's maximum edge still selects that zone. This differs from
/// [`Rect::contains`], which is half-open on the maximum edges.
///
/// ```
/// use dragline_session::hit::contains_inclusive;
/// use kurbo::{Point, Rect};
///
/// let zone = Rect::new(0.0, 0.0, 50.0, 50.0);
/// assert!(contains_inclusive(zone, Point::new(50.0, 50.0)));
/// assert!(!contains_inclusive(zone, Point::new(50.1, 50.0)));
/// ```
pub fn contains_inclusive(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.y >= rect.y0 && point.x <= rect.x1 && point.y <= rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONE: Rect = Rect::new(100.0, 100.0, 150.0, 150.0);

    #[test]
    fn interior_point_is_inside() {
        assert!(contains_inclusive(ZONE, Point::new(125.0, 125.0)));
    }

    #[test]
    fn all_four_edges_are_inside() {
        assert!(contains_inclusive(ZONE, Point::new(100.0, 125.0)));
        assert!(contains_inclusive(ZONE, Point::new(150.0, 125.0)));
        assert!(contains_inclusive(ZONE, Point::new(125.0, 100.0)));
        assert!(contains_inclusive(ZONE, Point::new(125.0, 150.0)));
    }

    #[test]
    fn corners_are_inside() {
        assert!(contains_inclusive(ZONE, Point::new(100.0, 100.0)));
        assert!(contains_inclusive(ZONE, Point::new(150.0, 150.0)));
    }

    #[test]
    fn outside_points_miss() {
        assert!(!contains_inclusive(ZONE, Point::new(99.999, 125.0)));
        assert!(!contains_inclusive(ZONE, Point::new(150.001, 125.0)));
        assert!(!contains_inclusive(ZONE, Point::new(125.0, 99.999)));
        assert!(!contains_inclusive(ZONE, Point::new(125.0, 150.001)));
    }

    #[test]
    fn zero_area_rect_contains_exactly_its_point() {
        let dot = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(contains_inclusive(dot, Point::new(10.0, 10.0)));
        assert!(!contains_inclusive(dot, Point::new(10.0, 10.5)));
    }
}
