//! Property-based invariant tests for tooltip placement.
//!
//! 1. The arrow tip sits over the target's horizontal center.
//! 2. The bubble stays within the container's margins.
//! 3. The rendered width never exceeds the preferred width or the container.
//! 4. The side follows the space below the target, unless a hint forces it.
//! 5. The bubble keeps `gap` between itself and the target.
//! 6. A container no wider than its margins is rejected.

use proptest::prelude::*;
use tipkit::{Error, Placer, Rect, Side, Size};

const EPS: f32 = 1e-2;

// ── Helpers ─────────────────────────────────────────────────────────────

fn container_strategy() -> impl Strategy<Value = Size> {
    (50.0f32..1200.0, 100.0f32..2000.0).prop_map(|(w, h)| Size::new(w, h))
}

/// Targets anywhere near the container, including partly or fully outside it.
fn target_strategy() -> impl Strategy<Value = Rect> {
    (-200.0f32..1400.0, -200.0f32..2200.0, 0.0f32..300.0, 0.0f32..200.0)
        .prop_map(|(x, y, w, h)| Rect::from_xywh(x, y, w, h))
}

fn hint_strategy() -> impl Strategy<Value = Option<Side>> {
    prop_oneof![Just(None), Just(Some(Side::Top)), Just(Some(Side::Bottom))]
}

fn placer_strategy() -> impl Strategy<Value = Placer> {
    (0.0f32..20.0, 0.0f32..400.0, 0.0f32..30.0)
        .prop_map(|(margin, threshold, gap)| Placer::new(margin, threshold, gap))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Arrow over the target
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arrow_tip_over_target_center(
        placer in placer_strategy(),
        container in container_strategy(),
        target in target_strategy(),
        width in 1.0f32..600.0,
    ) {
        let d = placer.resolve(target, container, width, None).unwrap();
        prop_assert!(
            (d.arrow_tip_x() - target.mid_x()).abs() < EPS,
            "arrow tip {} is not over target center {}: {:?}",
            d.arrow_tip_x(), target.mid_x(), d
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Within the margins
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn anchor_within_margins(
        placer in placer_strategy(),
        container in container_strategy(),
        target in target_strategy(),
        width in 1.0f32..600.0,
    ) {
        let d = placer.resolve(target, container, width, None).unwrap();
        prop_assert!(d.anchor_x >= placer.margin - EPS, "{:?} left of margin", d);
        prop_assert!(
            d.anchor_x + d.effective_width <= container.width - placer.margin + EPS,
            "{:?} right of margin in {:?}", d, container
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Width
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn width_fits(
        placer in placer_strategy(),
        container in container_strategy(),
        target in target_strategy(),
        width in 1.0f32..600.0,
    ) {
        let d = placer.resolve(target, container, width, None).unwrap();
        prop_assert!(d.effective_width > 0.0);
        prop_assert!(d.effective_width <= width);
        prop_assert!(d.effective_width <= container.width - placer.margin * 2.0 + EPS);
        if width <= container.width - placer.margin * 2.0 {
            prop_assert_eq!(d.effective_width, width);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Side
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn side_follows_space_below(
        placer in placer_strategy(),
        container in container_strategy(),
        target in target_strategy(),
        hint in hint_strategy(),
    ) {
        let d = placer.resolve(target, container, 350.0, hint).unwrap();
        match hint {
            Some(side) => prop_assert_eq!(d.side, side),
            None => {
                let below = container.height - target.max_y() > placer.side_threshold;
                prop_assert_eq!(d.renders_below(), below);
                prop_assert_eq!(d.side == Side::Top, below);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Gap
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn gap_between_target_and_bubble(
        placer in placer_strategy(),
        container in container_strategy(),
        target in target_strategy(),
        height in 1.0f32..500.0,
        hint in hint_strategy(),
    ) {
        let d = placer.resolve(target, container, 350.0, hint).unwrap();
        let body = d.body_rect(placer.finalize_vertical(&d, height, target), height);
        prop_assert!((body.height() - height).abs() < EPS);
        let gap = match d.side {
            Side::Top => body.min_y() - target.max_y(),
            Side::Bottom => target.min_y() - body.max_y(),
        };
        prop_assert!((gap - placer.gap).abs() < EPS, "gap {} for {:?}", gap, d);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Invalid layout
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn narrow_container_rejected(
        margin in 1.0f32..50.0,
        fraction in 0.0f32..=1.0,
        target in target_strategy(),
    ) {
        let placer = Placer::new(margin, 200.0, 10.0);
        let container = Size::new(margin * 2.0 * fraction, 800.0);
        let err = placer.resolve(target, container, 350.0, None).unwrap_err();
        let is_invalid_layout = matches!(err, Error::InvalidLayout { .. });
        prop_assert!(is_invalid_layout);
    }
}
