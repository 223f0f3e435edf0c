//! Shimmer placeholders shaped from the real content's layout.
//!
//! While loading, the content is committed invisibly so the host lays it out
//! for real. Its content leaves are then measured relative to the container
//! and painted as animated placeholder boxes. Once loading finishes the
//! content is shown as-is.
//!
//! ```ignore
//! let card = div().padding(16.0).child(img(80.0, 80.0)).child(h2("Jane Doe"));
//! let mut shimmer = Shimmer::new(card.into_content()).border_radius(8.0);
//! let mut doc = Document::new(360.0);
//!
//! shimmer.layout(&mut doc);
//! let mut ctx = PaintContext::new();
//! shimmer.paint(&doc, &mut ctx, elapsed);
//! ```

pub mod classify;
pub mod extract;
pub mod lifecycle;
pub mod overlay;

pub use classify::{is_atomic_kind, is_leaf, ALWAYS_LEAF};
pub use extract::{extract, measure, ElementInfo};
pub use lifecycle::{LayoutHost, MeasureTrigger, Measurement, MountError, PassOutcome};
pub use overlay::paint_overlay;

use std::rc::Rc;
use std::time::Duration;

use crate::animation::{Sweep, TimingFunction};
use crate::color::Color;
use crate::renderer::PaintContext;
use crate::view::Content;
use crate::visual::VisualNode;

/// A host that can also show content normally once loading is over.
pub trait ShimmerHost: LayoutHost {
    /// Mount `content` visibly and lay it out.
    fn commit_visible(&mut self, content: &Content) -> Result<(), MountError>;

    /// Paint the visibly mounted content.
    fn paint_content(&self, ctx: &mut PaintContext);
}

/// Per-instance options.
#[derive(Clone, Debug)]
pub struct ShimmerConfig {
    /// Show placeholders instead of the content
    pub loading: bool,
    /// Highlight color of the moving band
    pub shimmer_color: Color,
    /// Base fill of each placeholder
    pub background_color: Color,
    /// One sweep across a placeholder
    pub duration: Duration,
    /// Corner rounding of each placeholder in logical pixels
    pub border_radius: f32,
    /// Easing within each sweep
    pub timing: TimingFunction,
}

impl Default for ShimmerConfig {
    fn default() -> Self {
        Self {
            loading: true,
            shimmer_color: Color::from_hex(0xE0E0E0),
            background_color: Color::from_hex(0xF0F0F0),
            duration: Duration::from_millis(1500),
            border_radius: 4.0,
            timing: TimingFunction::Ease,
        }
    }
}

impl ShimmerConfig {
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn shimmer_color(mut self, color: Color) -> Self {
        self.shimmer_color = color;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sweep period in seconds. Negative or non-finite values stop the sweep.
    pub fn duration_secs(self, secs: f32) -> Self {
        self.duration(Duration::try_from_secs_f32(secs).unwrap_or(Duration::ZERO))
    }

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn sweep(&self) -> Sweep {
        Sweep::new(self.duration).timing(self.timing.clone())
    }
}

/// Loading placeholder for one piece of content.
pub struct Shimmer {
    config: ShimmerConfig,
    content: Content,
    measurement: Measurement,
}

impl Shimmer {
    pub fn new(content: Content) -> Self {
        Self::with_config(content, ShimmerConfig::default())
    }

    pub fn with_config(content: Content, config: ShimmerConfig) -> Self {
        Self {
            config,
            content,
            measurement: Measurement::new(),
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.config.loading = loading;
        self
    }

    pub fn shimmer_color(mut self, color: Color) -> Self {
        self.config.shimmer_color = color;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.config.background_color = color;
        self
    }

    pub fn duration_secs(mut self, secs: f32) -> Self {
        self.config = self.config.duration_secs(secs);
        self
    }

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.config.border_radius = radius;
        self
    }

    pub fn config(&self) -> &ShimmerConfig {
        &self.config
    }

    pub fn is_loading(&self) -> bool {
        self.config.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.config.loading = loading;
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Replace the content. Only a different handle counts as new content.
    pub fn set_content(&mut self, content: Content) {
        self.content = content;
    }

    /// Rectangles from the last successful measurement pass.
    pub fn rects(&self) -> Rc<[ElementInfo]> {
        self.measurement.current()
    }

    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// Layout step: measure while loading, otherwise mount the content visibly.
    ///
    /// Must run before [`Shimmer::paint`] in the same frame.
    pub fn layout<H: ShimmerHost>(&mut self, host: &mut H) -> PassOutcome {
        if !self.config.loading {
            if let Err(err) = host.commit_visible(&self.content) {
                log::debug!("visible commit skipped: {}", err);
            }
        }
        self.measurement
            .sync(self.config.loading, &self.content, host)
    }

    /// Paint step: placeholders over the container while loading, the content
    /// itself otherwise.
    pub fn paint<H: ShimmerHost>(&self, host: &H, ctx: &mut PaintContext, elapsed: Duration) {
        if !self.config.loading {
            host.paint_content(ctx);
            return;
        }
        let Some(container) = host.container() else {
            return;
        };
        paint_overlay(
            ctx,
            container.bounds(),
            self.measurement.rects(),
            &self.config,
            elapsed,
        );
    }
}
