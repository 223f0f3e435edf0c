//! Skeleton loading placeholders shaped from real content.
//!
//! A [`Shimmer`](shimmer::Shimmer) lays its content out invisibly, measures
//! where the content's leaves (images, text, controls) end up, and paints an
//! animated placeholder box over each of them until loading finishes.
//!
//! The measuring core only needs a [`LayoutHost`](shimmer::LayoutHost). The
//! crate ships a small reference host ([`Document`](host::Document)) with a
//! block/flex layout and a CPU rasterizer so frames can be rendered to PNG.

pub mod animation;
pub mod color;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod scene;
pub mod shimmer;
pub mod tree;
pub mod view;
pub mod visual;

// Public for callers that want to drive painting themselves
pub mod renderer;

pub mod prelude {
    pub use crate::animation::{Sweep, TimingFunction};
    pub use crate::color::Color;
    pub use crate::geometry::{Padding, Rect};
    pub use crate::host::{Document, MountMode};
    pub use crate::layout::{Constraints, Size};
    pub use crate::renderer::{rasterize, save_png, DrawCommand, PaintContext};
    pub use crate::scene::{Frame, Scene};
    pub use crate::shimmer::{
        ElementInfo, LayoutHost, MeasureTrigger, MountError, PassOutcome, Shimmer, ShimmerConfig,
        ShimmerHost,
    };
    pub use crate::view::{button, div, el, h1, h2, h3, img, p, span, Content, View};
    pub use crate::visual::{NodeRef, VisualNode};
}
