//! Deciding where a tooltip goes.
//!
//! Placement runs in two passes. [`Placer::resolve`] only needs the target, the container and the preferred
//! width: it picks the side, the rendered width, the left edge and the arrow position. The vertical position
//! depends on the height of the laid-out content, so it comes later from [`Placer::finalize_vertical`], once
//! the host has measured it.
use log::debug;

use crate::base_types::*;
use crate::error::{Error, Result};
use crate::instrumenting::*;

/// Minimum distance (px) between the bubble and the container's left/right edges
pub const DEFAULT_MARGIN: f32 = 8.0; // px
/// Space (px) below the target above which the bubble is placed underneath it
pub const DEFAULT_SIDE_THRESHOLD: f32 = 200.0; // px
/// Distance (px) between the target and the arrow tip
pub const DEFAULT_GAP: f32 = 10.0; // px

/// The edge of the bubble that carries the arrow, not where the bubble sits.
///
/// A target with plenty of room underneath gets `Side::Top`: the bubble renders below it, arrow pointing up.
/// [`PlacementDecision::renders_below`] answers the placement question directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Arrow on the top edge, pointing up: the bubble sits below the target.
    #[default]
    Top,
    /// Arrow on the bottom edge, pointing down: the bubble sits above the target.
    Bottom,
}

impl Side {
    pub fn flip(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlacementDecision {
    pub side: Side,
    pub effective_width: f32,
    /// Left edge of the bubble, in container coordinates.
    pub anchor_x: f32,
    /// Position of the arrow tip along the bubble's width, 0 being the left edge.
    pub arrow_ratio: f32,
}

impl PlacementDecision {
    /// The bubble renders below the target.
    pub fn renders_below(&self) -> bool {
        self.side == Side::Top
    }

    pub fn center_x(&self) -> f32 {
        self.anchor_x + self.effective_width / 2.0
    }

    /// Absolute x of the arrow tip.
    pub fn arrow_tip_x(&self) -> f32 {
        self.anchor_x + self.arrow_ratio * self.effective_width
    }

    /// The bubble's frame, given the vertical center from [`Placer::finalize_vertical`].
    pub fn body_rect(&self, center_y: f32, height: f32) -> Rect {
        Rect::from_xywh(
            self.anchor_x,
            center_y - height / 2.0,
            self.effective_width,
            height,
        )
    }
}

/// The constants placement depends on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placer {
    pub margin: f32,
    pub side_threshold: f32,
    pub gap: f32,
}

impl Default for Placer {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            side_threshold: DEFAULT_SIDE_THRESHOLD,
            gap: DEFAULT_GAP,
        }
    }
}

impl Placer {
    pub fn new(margin: f32, side_threshold: f32, gap: f32) -> Self {
        Self {
            margin,
            side_threshold,
            gap,
        }
    }

    /// First pass. A `hint` forces the arrow side; without one the bubble goes below the target whenever
    /// more than `side_threshold` is left underneath it, and above otherwise. The space above is never
    /// consulted.
    pub fn resolve(
        &self,
        target: Rect,
        container: Size,
        preferred_width: f32,
        hint: Option<Side>,
    ) -> Result<PlacementDecision> {
        inst("Placer::resolve");
        let decision = self.resolve_inner(target, container, preferred_width, hint);
        inst_end();
        decision
    }

    fn resolve_inner(
        &self,
        target: Rect,
        container: Size,
        preferred_width: f32,
        hint: Option<Side>,
    ) -> Result<PlacementDecision> {
        let max_width = container.width - self.margin * 2.0;
        let effective_width = preferred_width.min(max_width);
        if max_width <= 0.0 || effective_width <= 0.0 {
            return Err(Error::InvalidLayout {
                container_width: container.width,
                margin: self.margin,
            });
        }

        let side = hint.unwrap_or_else(|| {
            let space_below = container.height - target.max_y();
            if space_below > self.side_threshold {
                Side::Top
            } else {
                Side::Bottom
            }
        });

        let max_x = container.width - effective_width - self.margin;
        let anchor_x = clamp(target.mid_x() - effective_width / 2.0, self.margin, max_x);
        let arrow_ratio = (target.mid_x() - anchor_x) / effective_width;

        let decision = PlacementDecision {
            side,
            effective_width,
            anchor_x,
            arrow_ratio,
        };
        debug!("Resolved tooltip placement {:?} for target {:?}", decision, target);
        Ok(decision)
    }

    /// Second pass: the y of the bubble's center once its height is known.
    pub fn finalize_vertical(
        &self,
        decision: &PlacementDecision,
        measured_height: f32,
        target: Rect,
    ) -> f32 {
        finalize_vertical(decision, measured_height, target, self.gap)
    }
}

/// [`Placer::resolve`] with the default side threshold.
pub fn resolve(
    target: Rect,
    container: Size,
    preferred_width: f32,
    margin: f32,
    hint: Option<Side>,
) -> Result<PlacementDecision> {
    Placer {
        margin,
        ..Default::default()
    }
    .resolve(target, container, preferred_width, hint)
}

/// The y of the bubble's center, `gap` away from the target.
pub fn finalize_vertical(
    decision: &PlacementDecision,
    measured_height: f32,
    target: Rect,
    gap: f32,
) -> f32 {
    match decision.side {
        Side::Top => target.max_y() + gap + measured_height / 2.0,
        Side::Bottom => target.min_y() - gap - measured_height / 2.0,
    }
}
