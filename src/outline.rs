//! The bubble's outline: a rounded rectangle with a triangular notch cut into its top or bottom edge.
//!
//! The outline lives in the bubble's own coordinate space, `(0, 0)` to `(width, height)`, with y growing
//! downward. The notch takes `arrow_height` out of the body: with the arrow on top, the apex touches `y = 0`
//! and the body's top edge sits at `y = arrow_height`.
//!
//! The contour is traversed clockwise, starting just right of the top-left corner. When the arrow is so close
//! to a corner that one of its base points falls inside the corner's radius, the straight run between the
//! corner and the notch is dropped and the arrow leg meets the arc directly.
use core::f32::consts::{FRAC_PI_2, PI};
use core::hash::{Hash, Hasher};

use crate::base_types::*;
use crate::instrumenting::*;
use crate::placement::Side;

/// Tolerance (px) when comparing outline points.
pub const POINT_TOLERANCE: f32 = 1e-3; // px

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    /// A circular arc. Angles are in radians, measured from the positive x axis; since y grows downward,
    /// going from `start_angle` to a larger `end_angle` turns clockwise on screen.
    /// If the current point is not the arc's start, a straight line joins them first.
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    Close,
}

impl Segment {
    fn arc_point(center: Point, radius: f32, angle: f32) -> Point {
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }

    /// Where the pen is after this segment, if it moves.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) => Some(p),
            Segment::Arc {
                center,
                radius,
                end_angle,
                ..
            } => Some(Self::arc_point(center, radius, end_angle)),
            Segment::Close => None,
        }
    }

    /// Where an arc begins.
    pub fn start_point(&self) -> Option<Point> {
        match *self {
            Segment::Arc {
                center,
                radius,
                start_angle,
                ..
            } => Some(Self::arc_point(center, radius, start_angle)),
            _ => self.end_point(),
        }
    }
}

/// Everything that determines an outline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OutlineSpec {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub arrow_width: f32,
    pub arrow_height: f32,
    pub arrow_ratio: f32,
    pub side: Side,
}

impl Default for OutlineSpec {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            corner_radius: 8.0,
            arrow_width: 18.0,
            arrow_height: 9.0,
            arrow_ratio: 0.5,
            side: Side::Top,
        }
    }
}

impl Hash for OutlineSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.to_bits().hash(state);
        self.height.to_bits().hash(state);
        self.corner_radius.to_bits().hash(state);
        self.arrow_width.to_bits().hash(state);
        self.arrow_height.to_bits().hash(state);
        self.arrow_ratio.to_bits().hash(state);
        self.side.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutlinePath {
    pub segments: Vec<Segment>,
}

impl OutlinePath {
    fn move_to(&mut self, x: f32, y: f32) {
        self.segments.push(Segment::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.segments.push(Segment::LineTo(Point::new(x, y)));
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start_angle: f32, end_angle: f32) {
        self.segments.push(Segment::Arc {
            center: Point::new(cx, cy),
            radius,
            start_angle,
            end_angle,
        });
    }

    fn close(&mut self) {
        self.segments.push(Segment::Close);
    }

    pub fn start(&self) -> Option<Point> {
        self.segments.first().and_then(|s| match s {
            Segment::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Where the pen ends up before the contour is closed.
    pub fn end_point(&self) -> Option<Point> {
        self.segments.iter().rev().find_map(|s| s.end_point())
    }

    /// The contour returns to its starting point and is explicitly closed.
    pub fn is_closed(&self) -> bool {
        match (self.start(), self.end_point(), self.segments.last()) {
            (Some(start), Some(end), Some(Segment::Close)) => {
                start.distance(end) <= POINT_TOLERANCE
            }
            _ => false,
        }
    }

    /// Every point the pen passes through, arc endpoints included, in drawing order.
    pub fn points(&self) -> Vec<Point> {
        let mut points = vec![];
        for s in self.segments.iter() {
            if let Segment::Arc { .. } = s {
                points.extend(s.start_point());
            }
            points.extend(s.end_point());
        }
        points
    }
}

/// Build the outline described by `spec`.
pub fn build_outline(spec: &OutlineSpec) -> OutlinePath {
    inst("build_outline");
    let mut path = OutlinePath::default();
    let OutlineSpec {
        width: w,
        height: h,
        corner_radius: r,
        arrow_width: aw,
        arrow_height: ah,
        arrow_ratio,
        side,
    } = *spec;

    let arrow_x = arrow_ratio * w;
    let arrow_left = arrow_x - aw / 2.0;
    let arrow_right = arrow_x + aw / 2.0;

    match side {
        Side::Top => {
            path.move_to(r, ah);
            if arrow_left > r {
                path.line_to(arrow_left, ah);
            }
            path.line_to(arrow_x, 0.0);
            path.line_to(arrow_right, ah);
            if arrow_right < w - r {
                path.line_to(w - r, ah);
            }
            path.arc(w - r, ah + r, r, -FRAC_PI_2, 0.0);

            path.line_to(w, h - r);
            path.arc(w - r, h - r, r, 0.0, FRAC_PI_2);

            path.line_to(r, h);
            path.arc(r, h - r, r, FRAC_PI_2, PI);

            path.line_to(0.0, ah + r);
            path.arc(r, ah + r, r, PI, PI + FRAC_PI_2);
        }
        Side::Bottom => {
            let body_bottom = h - ah;

            path.move_to(r, 0.0);
            path.line_to(w - r, 0.0);
            path.arc(w - r, r, r, -FRAC_PI_2, 0.0);

            path.line_to(w, body_bottom - r);
            path.arc(w - r, body_bottom - r, r, 0.0, FRAC_PI_2);

            if arrow_right < w - r {
                path.line_to(arrow_right, body_bottom);
            }
            path.line_to(arrow_x, h);
            path.line_to(arrow_left, body_bottom);
            if arrow_left > r {
                path.line_to(r, body_bottom);
            }
            path.arc(r, body_bottom - r, r, FRAC_PI_2, PI);

            path.line_to(0.0, r);
            path.arc(r, r, r, PI, PI + FRAC_PI_2);
        }
    }
    path.close();

    inst_end();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(ratio: f32, side: Side) -> OutlineSpec {
        OutlineSpec {
            width: 200.0,
            height: 100.0,
            arrow_ratio: ratio,
            side,
            ..Default::default()
        }
    }

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) <= POINT_TOLERANCE
    }

    #[test]
    fn test_centered_top_arrow() {
        let path = build_outline(&spec(0.5, Side::Top));
        assert_eq!(
            &path.segments[..4],
            &[
                Segment::MoveTo(Point::new(8.0, 9.0)),
                Segment::LineTo(Point::new(91.0, 9.0)),
                Segment::LineTo(Point::new(100.0, 0.0)),
                Segment::LineTo(Point::new(109.0, 9.0)),
            ]
        );
        assert_eq!(path.segments[4], Segment::LineTo(Point::new(192.0, 9.0)));
        assert!(path.is_closed());
    }

    #[test]
    fn test_centered_bottom_arrow() {
        let path = build_outline(&spec(0.5, Side::Bottom));
        assert_eq!(path.start(), Some(Point::new(8.0, 0.0)));
        let points = path.points();
        assert!(points.iter().any(|p| close(*p, Point::new(100.0, 100.0))));
        assert!(points.iter().any(|p| close(*p, Point::new(109.0, 91.0))));
        assert!(points.iter().any(|p| close(*p, Point::new(91.0, 91.0))));
        assert!(path.is_closed());
    }

    #[test]
    fn test_arrow_in_left_corner_drops_connector() {
        let path = build_outline(&spec(0.0, Side::Top));
        assert_eq!(
            &path.segments[..3],
            &[
                Segment::MoveTo(Point::new(8.0, 9.0)),
                Segment::LineTo(Point::new(0.0, 0.0)),
                Segment::LineTo(Point::new(9.0, 9.0)),
            ]
        );
        assert!(path.is_closed());
    }

    #[test]
    fn test_arrow_in_right_corner_drops_connector() {
        let path = build_outline(&spec(1.0, Side::Top));
        // Right leg runs straight into the top-right arc
        assert_eq!(path.segments[3], Segment::LineTo(Point::new(209.0, 9.0)));
        assert!(matches!(path.segments[4], Segment::Arc { .. }));
        assert!(path.is_closed());

        let path = build_outline(&spec(1.0, Side::Bottom));
        assert_eq!(path.segments[5], Segment::LineTo(Point::new(200.0, 100.0)));
        assert!(path.is_closed());
    }

    #[test]
    fn test_apex_on_edge_base_inside() {
        for ratio in [0.0, 0.1, 0.5, 0.9, 1.0] {
            let top = build_outline(&spec(ratio, Side::Top)).points();
            let apex = Point::new(ratio * 200.0, 0.0);
            assert!(top.iter().any(|p| close(*p, apex)));
            assert!(top.iter().all(|p| p.y >= -POINT_TOLERANCE));

            let bottom = build_outline(&spec(ratio, Side::Bottom)).points();
            let apex = Point::new(ratio * 200.0, 100.0);
            assert!(bottom.iter().any(|p| close(*p, apex)));
            assert!(bottom.iter().all(|p| p.y <= 100.0 + POINT_TOLERANCE));
        }
    }

    #[test]
    fn test_sharp_corners() {
        let path = build_outline(&OutlineSpec {
            corner_radius: 0.0,
            ..spec(0.5, Side::Top)
        });
        assert!(path.is_closed());
        assert!(path.points().iter().any(|p| close(*p, Point::new(200.0, 100.0))));
    }
}
