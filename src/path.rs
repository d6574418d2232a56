//! Turning an [`OutlinePath`] into something a renderer can fill.
//!
//! Arcs are emitted as cubic béziers by kurbo. With the `lyon` feature the same path can be handed to lyon's
//! tessellators.
use kurbo::{Arc, BezPath, ParamCurve, Shape, Vec2};

use crate::base_types::*;
use crate::outline::{OutlinePath, Segment};

/// Maximum distance (px) between an arc and its bézier approximation.
pub const ARC_TOLERANCE: f64 = 0.1; // px

impl OutlinePath {
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut current: Option<kurbo::Point> = None;

        for s in self.segments.iter() {
            match *s {
                Segment::MoveTo(p) => {
                    path.move_to(p);
                    current = Some(p.into());
                }
                Segment::LineTo(p) => {
                    path.line_to(p);
                    current = Some(p.into());
                }
                Segment::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => {
                    let start: kurbo::Point = s.start_point().unwrap_or(center).into();
                    if current.is_none_or(|c| c.distance(start) > f64::EPSILON) {
                        path.line_to(start);
                    }
                    if radius > 0.0 {
                        let arc = Arc {
                            center: center.into(),
                            radii: Vec2::new(radius as f64, radius as f64),
                            start_angle: start_angle as f64,
                            sweep_angle: (end_angle - start_angle) as f64,
                            x_rotation: 0.0,
                        };
                        path.extend(arc.append_iter(ARC_TOLERANCE));
                    }
                    current = s.end_point().map(Into::into);
                }
                Segment::Close => {
                    path.close_path();
                    current = None;
                }
            }
        }
        path
    }

    /// Signed area of the outline. Positive for a clockwise contour, since y grows downward.
    pub fn area(&self) -> f32 {
        self.to_bez_path().area() as f32
    }

    pub fn is_clockwise(&self) -> bool {
        self.area() > 0.0
    }

    pub fn bounding_box(&self) -> Rect {
        let b = self.to_bez_path().bounding_box();
        Rect {
            pos: Point::new(b.x0 as f32, b.y0 as f32),
            bottom_right: Point::new(b.x1 as f32, b.y1 as f32),
        }
    }

    #[cfg(feature = "lyon")]
    pub fn to_lyon_path(&self) -> lyon::path::Path {
        use kurbo::PathEl;
        use lyon::math::point;

        fn pt(p: kurbo::Point) -> lyon::math::Point {
            point(p.x as f32, p.y as f32)
        }

        let mut builder = lyon::path::Path::builder();
        let mut open = false;
        for el in self.to_bez_path().elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(pt(p));
                    open = true;
                }
                PathEl::LineTo(p) => {
                    builder.line_to(pt(p));
                }
                PathEl::QuadTo(c, p) => {
                    builder.quadratic_bezier_to(pt(c), pt(p));
                }
                PathEl::CurveTo(c1, c2, p) => {
                    builder.cubic_bezier_to(pt(c1), pt(c2), pt(p));
                }
                PathEl::ClosePath => {
                    builder.end(true);
                    open = false;
                }
            }
        }
        if open {
            builder.end(false);
        }
        builder.build()
    }
}

/// The path a renderer fills to dim everything but `cutout`: the container's rectangle followed by the
/// cutout traversed the other way, so the non-zero and even-odd rules both leave a hole.
pub fn dim_path(container: Size, cutout: Rect, corner_radius: f32) -> BezPath {
    let mut path = kurbo::Rect::new(0.0, 0.0, container.width as f64, container.height as f64)
        .to_path(ARC_TOLERANCE);
    let hole = kurbo::Rect::from(cutout)
        .to_rounded_rect(corner_radius as f64)
        .to_path(ARC_TOLERANCE);
    let hole = if hole.area().signum() == path.area().signum() {
        reverse_subpath(&hole)
    } else {
        hole
    };
    path.extend(hole.elements().iter().copied());
    path
}

fn reverse_subpath(path: &BezPath) -> BezPath {
    let mut reversed = BezPath::new();
    let segments: Vec<_> = path.segments().collect();
    if let Some(last) = segments.last() {
        reversed.move_to(last.end());
        for seg in segments.iter().rev() {
            match seg.reverse() {
                kurbo::PathSeg::Line(l) => reversed.line_to(l.p1),
                kurbo::PathSeg::Quad(q) => reversed.quad_to(q.p1, q.p2),
                kurbo::PathSeg::Cubic(c) => reversed.curve_to(c.p1, c.p2, c.p3),
            }
        }
        reversed.close_path();
    }
    reversed
}
