//! Tooltip styling.
//!
//! A [`TooltipStyle`] is a plain record; nothing in it is derived. The host either builds one and passes it
//! to [`Overlay::new`][crate::Overlay::new], or replaces the thread-local default with [`set_default_style`]
//! before any tooltip is shown. [`default_style`] hands out a clone, so a placement that has already been
//! resolved never sees a later change.
//!
//! Individual parameters can be overridden by name through a [`StyleOverride`]:
//!
//! ```
//! use tipkit::{Color, StyleOverride, TooltipStyle};
//!
//! let style = TooltipStyle::default()
//!     .apply(
//!         &StyleOverride::new()
//!             .set("corner_radius", 12.0)
//!             .set("background_color", Color::BLACK),
//!     )
//!     .unwrap();
//! assert_eq!(style.corner_radius, 12.0);
//! ```
use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::base_types::*;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipStyle {
    /// Preferred width of the bubble. The rendered width may be narrower to fit the container.
    pub width: f32,
    pub corner_radius: f32,
    pub arrow_width: f32,
    pub arrow_height: f32,
    /// Vertical distance between the target and the arrow tip.
    pub gap: f32,
    /// Minimum distance kept between the bubble and the container's left and right edges.
    pub margin: f32,
    /// Space below the target needed before the bubble is placed underneath it.
    pub side_threshold: f32,

    pub font: Option<String>,
    pub title_font_size: f32,
    pub description_font_size: f32,
    pub title_color: Color,
    pub description_color: Color,
    /// Vertical space between title and description.
    pub spacing: f32,
    pub title_padding: EdgeInsets,
    pub description_padding: EdgeInsets,

    pub background_color: Color,
    /// Blur radius of the bubble's shadow. 0 disables it.
    pub shadow_radius: f32,

    /// Dim the rest of the container and cut out the target.
    pub highlight: bool,
    pub highlight_corner_radius: f32,
    pub dim_color: Color,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            width: 350.0,
            corner_radius: 8.0,
            arrow_width: 18.0,
            arrow_height: 9.0,
            gap: 10.0,
            margin: 8.0,
            side_threshold: 200.0,
            font: None,
            title_font_size: 12.0,
            description_font_size: 12.0,
            title_color: Color::BLACK,
            description_color: Color::GRAY,
            spacing: 16.0,
            title_padding: EdgeInsets::new(16.0, 16.0, 0.0, 16.0),
            description_padding: EdgeInsets::new(0.0, 32.0, 32.0, 32.0),
            background_color: Color::WHITE,
            shadow_radius: 10.0,
            highlight: true,
            highlight_corner_radius: 8.0,
            dim_color: Color::GRAY.with_alpha(0.8),
        }
    }
}

impl TooltipStyle {
    pub fn new() -> Self {
        Default::default()
    }

    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    #[must_use]
    pub fn arrow(mut self, width: f32, height: f32) -> Self {
        self.arrow_width = width;
        self.arrow_height = height;
        self
    }

    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Return a copy of this style with every parameter in `overrides` replaced.
    pub fn apply(&self, overrides: &StyleOverride) -> Result<Self> {
        let mut style = self.clone();
        for (param, val) in overrides.0.iter() {
            style.set_param(param, val.clone())?;
        }
        Ok(style)
    }

    fn set_param(&mut self, param: &str, val: StyleVal) -> Result<()> {
        match param {
            "width" => self.width = val.float("width")?,
            "corner_radius" => self.corner_radius = val.float("corner_radius")?,
            "arrow_width" => self.arrow_width = val.float("arrow_width")?,
            "arrow_height" => self.arrow_height = val.float("arrow_height")?,
            "gap" => self.gap = val.float("gap")?,
            "margin" => self.margin = val.float("margin")?,
            "side_threshold" => self.side_threshold = val.float("side_threshold")?,
            "font" => self.font = Some(val.string("font")?),
            "title_font_size" => self.title_font_size = val.float("title_font_size")?,
            "description_font_size" => {
                self.description_font_size = val.float("description_font_size")?
            }
            "title_color" => self.title_color = val.color("title_color")?,
            "description_color" => self.description_color = val.color("description_color")?,
            "spacing" => self.spacing = val.float("spacing")?,
            "title_padding" => self.title_padding = val.insets("title_padding")?,
            "description_padding" => self.description_padding = val.insets("description_padding")?,
            "background_color" => self.background_color = val.color("background_color")?,
            "shadow_radius" => self.shadow_radius = val.float("shadow_radius")?,
            "highlight" => self.highlight = val.bool("highlight")?,
            "highlight_corner_radius" => {
                self.highlight_corner_radius = val.float("highlight_corner_radius")?
            }
            "dim_color" => self.dim_color = val.color("dim_color")?,
            _ => return Err(Error::UnknownStyle(param.to_string())),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StyleVal {
    Float(f32),
    Bool(bool),
    Color(Color),
    Insets(EdgeInsets),
    String(String),
} // Impls below

impl StyleVal {
    fn float(self, parameter: &'static str) -> Result<f32> {
        match self {
            Self::Float(f) => Ok(f),
            _ => Err(Error::StyleType {
                parameter,
                expected: "float",
            }),
        }
    }

    fn bool(self, parameter: &'static str) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(b),
            _ => Err(Error::StyleType {
                parameter,
                expected: "bool",
            }),
        }
    }

    fn color(self, parameter: &'static str) -> Result<Color> {
        match self {
            Self::Color(c) => Ok(c),
            _ => Err(Error::StyleType {
                parameter,
                expected: "color",
            }),
        }
    }

    fn insets(self, parameter: &'static str) -> Result<EdgeInsets> {
        match self {
            Self::Insets(i) => Ok(i),
            Self::Float(f) => Ok(EdgeInsets::all(f)),
            _ => Err(Error::StyleType {
                parameter,
                expected: "edge insets",
            }),
        }
    }

    fn string(self, parameter: &'static str) -> Result<String> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(Error::StyleType {
                parameter,
                expected: "string",
            }),
        }
    }
}

/// Named parameter overrides, applied on top of a [`TooltipStyle`] with [`TooltipStyle::apply`].
#[derive(Clone, Default, Debug)]
pub struct StyleOverride(HashMap<&'static str, StyleVal>);

impl StyleOverride {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set(mut self, parameter: &'static str, val: impl Into<StyleVal>) -> Self {
        self.0.insert(parameter, val.into());
        self
    }

    pub fn get(&self, parameter: &str) -> Option<&StyleVal> {
        self.0.get(parameter)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

thread_local!(
    static DEFAULT_STYLE: RefCell<TooltipStyle> = RefCell::new(TooltipStyle::default())
);

/// A snapshot of the current default style.
pub fn default_style() -> TooltipStyle {
    DEFAULT_STYLE.with(|s| s.borrow().clone())
}

/// Replace the default style. Only tooltips created afterwards pick it up.
pub fn set_default_style(s: TooltipStyle) {
    DEFAULT_STYLE.with(|c| *c.borrow_mut() = s)
}

// StyleVal Froms
impl From<f32> for StyleVal {
    fn from(c: f32) -> Self {
        Self::Float(c)
    }
}
impl From<f64> for StyleVal {
    fn from(c: f64) -> Self {
        Self::Float(c as f32)
    }
}
impl From<bool> for StyleVal {
    fn from(c: bool) -> Self {
        Self::Bool(c)
    }
}
impl From<Color> for StyleVal {
    fn from(c: Color) -> Self {
        Self::Color(c)
    }
}
impl From<EdgeInsets> for StyleVal {
    fn from(c: EdgeInsets) -> Self {
        Self::Insets(c)
    }
}
impl From<&str> for StyleVal {
    fn from(c: &str) -> Self {
        Self::String(c.to_string())
    }
}
impl From<String> for StyleVal {
    fn from(c: String) -> Self {
        Self::String(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = TooltipStyle::default();
        assert_eq!(s.width, 350.0);
        assert_eq!(s.corner_radius, 8.0);
        assert_eq!((s.arrow_width, s.arrow_height), (18.0, 9.0));
        assert_eq!(s.title_padding, EdgeInsets::new(16.0, 16.0, 0.0, 16.0));
        assert_eq!(s.description_padding, EdgeInsets::new(0.0, 32.0, 32.0, 32.0));
    }

    #[test]
    fn test_apply_overrides() {
        let s = TooltipStyle::default()
            .apply(
                &StyleOverride::new()
                    .set("width", 200.0)
                    .set("highlight", false)
                    .set("title_padding", 4.0)
                    .set("font", "Inter"),
            )
            .unwrap();
        assert_eq!(s.width, 200.0);
        assert!(!s.highlight);
        assert_eq!(s.title_padding, EdgeInsets::all(4.0));
        assert_eq!(s.font.as_deref(), Some("Inter"));
    }

    #[test]
    fn test_apply_type_mismatch() {
        let err = TooltipStyle::default()
            .apply(&StyleOverride::new().set("background_color", 1.0))
            .unwrap_err();
        assert_eq!(
            err,
            Error::StyleType {
                parameter: "background_color",
                expected: "color"
            }
        );
    }

    #[test]
    fn test_apply_unknown() {
        let err = TooltipStyle::default()
            .apply(&StyleOverride::new().set("colour", Color::BLACK))
            .unwrap_err();
        assert_eq!(err, Error::UnknownStyle("colour".to_string()));
    }

    #[test]
    fn test_default_style_is_a_snapshot() {
        let before = default_style();
        set_default_style(TooltipStyle::default().width(120.0));
        assert_eq!(before.width, 350.0);
        assert_eq!(default_style().width, 120.0);
        set_default_style(TooltipStyle::default());
    }

    #[test]
    fn test_deserialize_partial() {
        let s: TooltipStyle = serde_json::from_str(r#"{"width": 280.0, "highlight": false}"#).unwrap();
        assert_eq!(s.width, 280.0);
        assert!(!s.highlight);
        assert_eq!(s.corner_radius, 8.0);
    }
}
