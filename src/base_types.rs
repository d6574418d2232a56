use core::ops::Sub;

use serde::{Deserialize, Serialize};

pub(crate) fn clamp(x: f32, min: f32, max: f32) -> f32 {
    if x < min {
        min
    } else if x > max {
        max
    } else {
        x
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let d = self - other;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        kurbo::Point::new(p.x as f64, p.y as f64)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle, stored as its top-left and bottom-right corners.
/// y grows downward.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Point,
    pub bottom_right: Point,
}

impl Rect {
    pub fn new(pos: Point, size: Size) -> Self {
        Self {
            pos,
            bottom_right: Point {
                x: pos.x + size.width,
                y: pos.y + size.height,
            },
        }
    }

    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    pub fn width(&self) -> f32 {
        self.bottom_right.x - self.pos.x
    }

    pub fn height(&self) -> f32 {
        self.bottom_right.y - self.pos.y
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    pub fn min_x(&self) -> f32 {
        self.pos.x
    }

    pub fn max_x(&self) -> f32 {
        self.bottom_right.x
    }

    pub fn mid_x(&self) -> f32 {
        (self.pos.x + self.bottom_right.x) / 2.0
    }

    pub fn min_y(&self) -> f32 {
        self.pos.y
    }

    pub fn max_y(&self) -> f32 {
        self.bottom_right.y
    }

    pub fn mid_y(&self) -> f32 {
        (self.pos.y + self.bottom_right.y) / 2.0
    }

    pub fn is_under(&self, p: Point) -> bool {
        p.x >= self.pos.x
            && p.x <= self.bottom_right.x
            && p.y >= self.pos.y
            && p.y <= self.bottom_right.y
    }

    pub fn translate(self, x: f32, y: f32) -> Self {
        Self {
            pos: Point::new(self.pos.x + x, self.pos.y + y),
            bottom_right: Point::new(self.bottom_right.x + x, self.bottom_right.y + y),
        }
    }

    /// Shrink by `insets`. Never produces a negative width or height.
    pub fn inset(self, insets: EdgeInsets) -> Self {
        let x = self.pos.x + insets.left;
        let y = self.pos.y + insets.top;
        Self {
            pos: Point::new(x, y),
            bottom_right: Point::new(
                (self.bottom_right.x - insets.right).max(x),
                (self.bottom_right.y - insets.bottom).max(y),
            ),
        }
    }

    pub fn round(self) -> Self {
        Self {
            pos: Point::new(self.pos.x.round(), self.pos.y.round()),
            bottom_right: Point::new(self.bottom_right.x.round(), self.bottom_right.y.round()),
        }
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        kurbo::Rect::new(
            r.pos.x as f64,
            r.pos.y as f64,
            r.bottom_right.x as f64,
            r.bottom_right.y as f64,
        )
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn all(d: f32) -> Self {
        Self::new(d, d, d, d)
    }

    /// Left + right.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Top + bottom.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const GRAY: Self = Self {
        r: 0.5,
        g: 0.5,
        b: 0.5,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

fn u8_to_norm(x: u8) -> f32 {
    x as f32 / 255.0
}

impl From<u32> for Color {
    fn from(c: u32) -> Self {
        let a = u8_to_norm(c as u8);
        let b = u8_to_norm((c >> 8) as u8);
        let g = u8_to_norm((c >> 16) as u8);
        let r = u8_to_norm((c >> 24) as u8);
        Color::new(r, g, b, a)
    }
}

#[macro_export]
macro_rules! color {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::Color {
            r: $r as f32 / 255.0,
            g: $g as f32 / 255.0,
            b: $b as f32 / 255.0,
            a: 1.0,
        }
    };
    ($r:expr, $g:expr, $b:expr, $a:expr) => {
        $crate::Color {
            r: $r as f32 / 255.0,
            g: $g as f32 / 255.0,
            b: $b as f32 / 255.0,
            a: $a as f32 / 255.0,
        }
    };
}
