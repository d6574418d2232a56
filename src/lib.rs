#![doc = include_str!("doc.md")]

pub mod instrumenting;

#[macro_use]
mod base_types;
pub use base_types::*;

mod error;
pub use error::{Error, Result};

pub mod placement;
pub use placement::{PlacementDecision, Placer, Side};

pub mod outline;
pub use outline::{build_outline, OutlinePath, OutlineSpec, Segment};

pub mod path;
pub use path::dim_path;

pub mod style;
pub use style::{default_style, set_default_style, StyleOverride, StyleVal, TooltipStyle};

pub mod queue;
pub use queue::{PresentationId, PresentationQueue, Presenter};

pub mod overlay;
pub use overlay::{
    ContentLayout, DimMask, HitRegion, Overlay, OverlayFrame, Phase, TooltipRequest,
};
