//! A single tooltip on screen.
//!
//! An [`Overlay`] walks through the two placement passes for one [`TooltipRequest`]. It starts out
//! [`Phase::Measuring`]: the side, width and arrow position are known, but not the height, so nothing is drawn
//! yet and the bubble can't flash at the top of the screen. Once the host has laid out the text at
//! [`text_widths`][Overlay::text_widths] it reports the heights with [`measured`][Overlay::measured], and the
//! overlay becomes [`Phase::Visible`] and can produce an [`OverlayFrame`].
use core::hash::{Hash, Hasher};

use ahash::AHasher;
use kurbo::BezPath;
use log::{debug, warn};

use crate::base_types::*;
use crate::error::Result;
use crate::instrumenting::*;
use crate::outline::{build_outline, OutlinePath, OutlineSpec};
use crate::path::dim_path;
use crate::placement::{PlacementDecision, Placer, Side};
use crate::style::{StyleOverride, StyleVal, TooltipStyle};

#[derive(Debug, Clone, Default)]
pub struct TooltipRequest {
    pub title: String,
    pub description: String,
    /// The target's frame, in the container's coordinates.
    pub target: Rect,
    pub hint: Option<Side>,
    pub style_overrides: StyleOverride,
}

impl TooltipRequest {
    pub fn new(title: impl Into<String>, description: impl Into<String>, target: Rect) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            target,
            hint: None,
            style_overrides: Default::default(),
        }
    }

    /// Always put the arrow on `side`.
    pub fn side(mut self, side: Side) -> Self {
        self.hint = Some(side);
        self
    }

    pub fn style(mut self, parameter: &'static str, val: impl Into<StyleVal>) -> Self {
        self.style_overrides = self.style_overrides.set(parameter, val);
        self
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Nothing to draw: dismissed, or the container is too small.
    Hidden,
    /// Waiting for the host to measure the content.
    Measuring,
    Visible,
}

/// What a tap landed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HitRegion {
    Bubble,
    Target,
    Backdrop,
}

/// Where the text goes, in container coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ContentLayout {
    pub title: Rect,
    pub description: Option<Rect>,
}

/// Dims the container everywhere but a rounded cutout around the target.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DimMask {
    pub container: Size,
    pub cutout: Rect,
    pub corner_radius: f32,
    pub color: Color,
}

impl DimMask {
    pub fn to_bez_path(&self) -> BezPath {
        dim_path(self.container, self.cutout, self.corner_radius)
    }
}

/// Everything a renderer needs to draw one tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayFrame {
    /// The bubble's frame, arrow included.
    pub body: Rect,
    /// The bubble's outline, relative to `body`'s top-left corner.
    pub outline: OutlinePath,
    pub arrow_tip: Point,
    pub content: ContentLayout,
    pub dim: Option<DimMask>,
    pub background_color: Color,
    pub shadow_radius: f32,
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
struct Measured {
    title: f32,
    description: f32,
}

#[derive(Debug)]
pub struct Overlay {
    request: TooltipRequest,
    style: TooltipStyle,
    container: Size,
    phase: Phase,
    dismissed: bool,
    decision: Option<PlacementDecision>,
    measured: Option<Measured>,
    center_y: f32,
    outline: OutlinePath,
    outline_hash: u64,
}

impl Overlay {
    /// Resolve the horizontal placement of `request` in `container`. `style` is copied, overrides from the
    /// request applied on top.
    pub fn new(request: TooltipRequest, container: Size, style: &TooltipStyle) -> Result<Self> {
        let style = style.apply(&request.style_overrides)?;
        let mut overlay = Self {
            request,
            style,
            container,
            phase: Phase::Hidden,
            dismissed: false,
            decision: None,
            measured: None,
            center_y: 0.0,
            outline: OutlinePath::default(),
            outline_hash: 0,
        };
        overlay.resolve();
        Ok(overlay)
    }

    fn placer(&self) -> Placer {
        Placer::new(self.style.margin, self.style.side_threshold, self.style.gap)
    }

    fn resolve(&mut self) {
        match self.placer().resolve(
            self.request.target,
            self.container,
            self.style.width,
            self.request.hint,
        ) {
            Ok(decision) => {
                self.decision = Some(decision);
                if self.measured.is_some() {
                    self.layout();
                } else {
                    self.phase = Phase::Measuring;
                }
            }
            Err(e) => {
                warn!("Hiding tooltip {:?}: {}", self.request.title, e);
                self.decision = None;
                self.phase = Phase::Hidden;
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn decision(&self) -> Option<&PlacementDecision> {
        self.decision.as_ref()
    }

    pub fn style(&self) -> &TooltipStyle {
        &self.style
    }

    pub fn request(&self) -> &TooltipRequest {
        &self.request
    }

    /// The bubble's rendered width.
    pub fn content_width(&self) -> Option<f32> {
        self.decision.map(|d| d.effective_width)
    }

    /// The widths the title and description should wrap at, once placement is resolved.
    pub fn text_widths(&self) -> Option<(f32, f32)> {
        let w = self.decision?.effective_width;
        Some((
            (w - self.style.title_padding.horizontal()).max(0.0),
            (w - self.style.description_padding.horizontal()).max(0.0),
        ))
    }

    /// The host reports the laid out text heights. Can be called again whenever they change.
    pub fn measured(&mut self, title_height: f32, description_height: f32) {
        if self.dismissed {
            return;
        }
        self.measured = Some(Measured {
            title: title_height,
            description: description_height,
        });
        self.layout();
    }

    /// The container changed size. Placement is resolved again; the last measurement is kept.
    pub fn set_container(&mut self, container: Size) {
        if self.dismissed {
            return;
        }
        self.container = container;
        self.resolve();
    }

    /// The target moved.
    pub fn set_target(&mut self, target: Rect) {
        if self.dismissed {
            return;
        }
        self.request.target = target;
        self.resolve();
    }

    fn has_description(&self) -> bool {
        !self.request.description.is_empty()
    }

    fn content_height(&self, m: Measured) -> f32 {
        let s = &self.style;
        let title = s.title_padding.vertical() + m.title;
        if self.has_description() {
            title + s.spacing + s.description_padding.vertical() + m.description
        } else {
            title
        }
    }

    /// The bubble's height, arrow included.
    pub fn body_height(&self) -> Option<f32> {
        self.measured
            .map(|m| self.content_height(m) + self.style.arrow_height)
    }

    fn layout(&mut self) {
        let (Some(decision), Some(height)) = (self.decision, self.body_height()) else {
            return;
        };
        inst("Overlay::layout");
        self.center_y = self
            .placer()
            .finalize_vertical(&decision, height, self.request.target);

        let spec = OutlineSpec {
            width: decision.effective_width,
            height,
            corner_radius: self.style.corner_radius,
            arrow_width: self.style.arrow_width,
            arrow_height: self.style.arrow_height,
            arrow_ratio: decision.arrow_ratio,
            side: decision.side,
        };
        let mut hasher = AHasher::default();
        spec.hash(&mut hasher);
        let hash = hasher.finish();
        if hash != self.outline_hash || self.outline.segments.is_empty() {
            self.outline = build_outline(&spec);
            self.outline_hash = hash;
        }

        if self.phase != Phase::Visible {
            evt("Overlay visible");
            debug!("Showing tooltip {:?} at y {}", self.request.title, self.center_y);
        }
        self.phase = Phase::Visible;
        inst_end();
    }

    fn body(&self, decision: &PlacementDecision) -> Option<Rect> {
        Some(decision.body_rect(self.center_y, self.body_height()?))
    }

    fn content(&self, decision: &PlacementDecision, body: Rect, m: Measured) -> ContentLayout {
        let s = &self.style;
        let top = match decision.side {
            Side::Top => body.min_y() + s.arrow_height,
            Side::Bottom => body.min_y(),
        };
        let title = Rect::from_xywh(
            body.min_x() + s.title_padding.left,
            top + s.title_padding.top,
            (body.width() - s.title_padding.horizontal()).max(0.0),
            m.title,
        );
        let description = self.has_description().then(|| {
            Rect::from_xywh(
                body.min_x() + s.description_padding.left,
                title.max_y() + s.title_padding.bottom + s.spacing + s.description_padding.top,
                (body.width() - s.description_padding.horizontal()).max(0.0),
                m.description,
            )
        });
        ContentLayout { title, description }
    }

    /// What to draw, or `None` while there is nothing to draw yet.
    pub fn frame(&self) -> Option<OverlayFrame> {
        if self.phase != Phase::Visible {
            return None;
        }
        let decision = self.decision?;
        let measured = self.measured?;
        let body = self.body(&decision)?;
        let arrow_tip = Point::new(
            decision.arrow_tip_x(),
            match decision.side {
                Side::Top => body.min_y(),
                Side::Bottom => body.max_y(),
            },
        );
        let dim = self.style.highlight.then_some(DimMask {
            container: self.container,
            cutout: self.request.target,
            corner_radius: self.style.highlight_corner_radius,
            color: self.style.dim_color,
        });

        Some(OverlayFrame {
            body,
            outline: self.outline.clone(),
            arrow_tip,
            content: self.content(&decision, body, measured),
            dim,
            background_color: self.style.background_color,
            shadow_radius: self.style.shadow_radius,
        })
    }

    /// What lies under `p`. Taps anywhere dismiss a visible tooltip; `None` means there is nothing to tap.
    pub fn hit(&self, p: Point) -> Option<HitRegion> {
        if self.phase != Phase::Visible {
            return None;
        }
        let decision = self.decision?;
        if self.body(&decision).is_some_and(|b| b.is_under(p)) {
            Some(HitRegion::Bubble)
        } else if self.request.target.is_under(p) {
            Some(HitRegion::Target)
        } else {
            Some(HitRegion::Backdrop)
        }
    }

    /// Take the tooltip down. Returns whether anything was showing; calling it again is harmless.
    pub fn dismiss(&mut self) -> bool {
        let was_showing = self.phase != Phase::Hidden;
        if was_showing {
            debug!("Dismissing tooltip {:?}", self.request.title);
        }
        self.dismissed = true;
        self.phase = Phase::Hidden;
        was_showing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TooltipRequest {
        TooltipRequest::new(
            "Welcome",
            "This is a helpful tooltip",
            Rect::from_xywh(150.0, 100.0, 100.0, 40.0),
        )
    }

    fn container() -> Size {
        Size::new(400.0, 800.0)
    }

    #[test]
    fn test_hidden_until_measured() {
        let overlay = Overlay::new(request(), container(), &TooltipStyle::default()).unwrap();
        assert_eq!(overlay.phase(), Phase::Measuring);
        assert!(overlay.frame().is_none());
        assert!(overlay.hit(Point::new(10.0, 10.0)).is_none());
        assert_eq!(overlay.content_width(), Some(350.0));
        assert_eq!(overlay.text_widths(), Some((318.0, 286.0)));
    }

    #[test]
    fn test_frame_below_target() {
        let mut overlay = Overlay::new(request(), container(), &TooltipStyle::default()).unwrap();
        overlay.measured(15.0, 30.0);
        assert_eq!(overlay.phase(), Phase::Visible);

        // 16 + 15 + 0 title, 16 spacing, 0 + 30 + 32 description, 9 arrow
        assert_eq!(overlay.body_height(), Some(118.0));
        let frame = overlay.frame().unwrap();
        assert_eq!(frame.body, Rect::from_xywh(25.0, 150.0, 350.0, 118.0));
        assert_eq!(frame.arrow_tip, Point::new(200.0, 150.0));
        assert!(frame.outline.is_closed());

        assert_eq!(frame.content.title, Rect::from_xywh(41.0, 175.0, 318.0, 15.0));
        assert_eq!(
            frame.content.description,
            Some(Rect::from_xywh(57.0, 206.0, 286.0, 30.0))
        );

        let dim = frame.dim.unwrap();
        assert_eq!(dim.cutout, request().target);
        assert_eq!(dim.corner_radius, 8.0);
    }

    #[test]
    fn test_frame_above_target() {
        let req = TooltipRequest::new("Title", "", Rect::from_xywh(150.0, 700.0, 100.0, 40.0));
        let mut overlay = Overlay::new(req, container(), &TooltipStyle::default()).unwrap();
        overlay.measured(20.0, 0.0);
        let frame = overlay.frame().unwrap();
        // 16 + 20 title, 9 arrow
        assert_eq!(frame.body.height(), 45.0);
        assert_eq!(frame.body.max_y(), 690.0);
        assert_eq!(frame.arrow_tip, Point::new(200.0, 690.0));
        assert_eq!(frame.content.title.min_y(), 645.0 + 16.0);
        assert!(frame.content.description.is_none());
    }

    #[test]
    fn test_invalid_layout_hides() {
        let mut overlay =
            Overlay::new(request(), Size::new(10.0, 800.0), &TooltipStyle::default()).unwrap();
        assert_eq!(overlay.phase(), Phase::Hidden);
        overlay.measured(15.0, 30.0);
        assert!(overlay.frame().is_none());
        assert!(overlay.text_widths().is_none());

        // Recovers once there is room
        overlay.set_container(container());
        assert_eq!(overlay.phase(), Phase::Visible);
    }

    #[test]
    fn test_request_overrides() {
        let req = request().style("width", 200.0).style("highlight", false);
        let mut overlay = Overlay::new(req, container(), &TooltipStyle::default()).unwrap();
        overlay.measured(15.0, 30.0);
        let frame = overlay.frame().unwrap();
        assert_eq!(frame.body.width(), 200.0);
        assert!(frame.dim.is_none());

        let bad = request().style("width", Color::BLACK);
        assert!(Overlay::new(bad, container(), &TooltipStyle::default()).is_err());
    }

    #[test]
    fn test_resize_keeps_arrow_on_target() {
        let mut overlay = Overlay::new(request(), container(), &TooltipStyle::default()).unwrap();
        overlay.measured(15.0, 30.0);
        overlay.set_container(Size::new(250.0, 800.0));
        let frame = overlay.frame().unwrap();
        assert_eq!(frame.body.width(), 234.0);
        assert!((frame.arrow_tip.x - 200.0).abs() < 1e-4);
    }

    #[test]
    fn test_hit_and_dismiss() {
        let mut overlay = Overlay::new(request(), container(), &TooltipStyle::default()).unwrap();
        overlay.measured(15.0, 30.0);
        assert_eq!(overlay.hit(Point::new(200.0, 200.0)), Some(HitRegion::Bubble));
        assert_eq!(overlay.hit(Point::new(160.0, 110.0)), Some(HitRegion::Target));
        assert_eq!(overlay.hit(Point::new(5.0, 700.0)), Some(HitRegion::Backdrop));

        assert!(overlay.dismiss());
        assert!(!overlay.dismiss());
        assert!(overlay.frame().is_none());
        overlay.set_container(container());
        assert_eq!(overlay.phase(), Phase::Hidden);
    }

    #[test]
    fn test_style_snapshot() {
        let mut style = TooltipStyle::default();
        let mut overlay = Overlay::new(request(), container(), &style).unwrap();
        style.width = 100.0;
        overlay.measured(15.0, 30.0);
        assert_eq!(overlay.frame().unwrap().body.width(), 350.0);
    }
}
