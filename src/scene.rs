//! One shimmer instance mounted in a [`Document`], driven frame by frame.

use std::time::Duration;

use image::RgbaImage;

use crate::color::Color;
use crate::host::Document;
use crate::renderer::{rasterize, DrawCommand, PaintContext};
use crate::shimmer::{PassOutcome, Shimmer};

/// Output of [`Scene::frame`].
#[derive(Debug)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    /// What the layout step did with the measurement
    pub outcome: PassOutcome,
}

pub struct Scene {
    document: Document,
    shimmer: Shimmer,
    clear: Color,
}

impl Scene {
    pub fn new(document: Document, shimmer: Shimmer) -> Self {
        Self {
            document,
            shimmer,
            clear: Color::WHITE,
        }
    }

    /// Canvas color behind everything the frame paints.
    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear = color;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn shimmer(&self) -> &Shimmer {
        &self.shimmer
    }

    pub fn shimmer_mut(&mut self) -> &mut Shimmer {
        &mut self.shimmer
    }

    /// Layout then paint. A measurement triggered by this frame's inputs is
    /// already reflected in the commands it returns.
    pub fn frame(&mut self, elapsed: Duration) -> Frame {
        let outcome = self.shimmer.layout(&mut self.document);
        let mut ctx = PaintContext::new();
        self.shimmer.paint(&self.document, &mut ctx, elapsed);
        log::trace!(
            "frame at {:?}: {:?}, {} commands",
            elapsed,
            outcome,
            ctx.commands().len()
        );
        Frame {
            commands: ctx.into_commands(),
            outcome,
        }
    }

    /// Run a frame and rasterize it onto a canvas covering the container.
    pub fn render(&mut self, elapsed: Duration) -> RgbaImage {
        let frame = self.frame(elapsed);
        let (width, height) = self
            .document
            .container_bounds()
            .map_or((self.document.width(), 0.0), |b| (b.right(), b.bottom()));
        rasterize(
            &frame.commands,
            width.ceil().max(1.0) as u32,
            height.ceil().max(1.0) as u32,
            self.clear,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shimmer::{LayoutHost, MeasureTrigger};
    use crate::view::{div, img, p};

    fn scene() -> Scene {
        let content = div()
            .padding(10.0)
            .spacing(10.0)
            .child(img(100.0, 50.0))
            .child(p("hello").size(200.0, 20.0))
            .into_content();
        Scene::new(Document::new(300.0), Shimmer::new(content))
    }

    #[test]
    fn test_first_frame_measures_and_paints_placeholders() {
        let mut scene = scene();
        let frame = scene.frame(Duration::ZERO);

        assert_eq!(
            frame.outcome,
            PassOutcome::Measured {
                trigger: MeasureTrigger::LOADING_STARTED | MeasureTrigger::CONTENT_CHANGED,
                count: 2
            }
        );
        // Background plus band per placeholder
        assert_eq!(frame.commands.len(), 4);
        assert!(scene.document().container().is_some());
    }

    #[test]
    fn test_later_frames_only_repaint() {
        let mut scene = scene();
        scene.frame(Duration::ZERO);
        let frame = scene.frame(Duration::from_millis(500));
        assert_eq!(frame.outcome, PassOutcome::Idle);
        assert_eq!(frame.commands.len(), 4);
    }

    #[test]
    fn test_render_covers_the_container() {
        let mut scene = scene().clear_color(Color::BLACK);
        let img = scene.render(Duration::ZERO);

        assert_eq!(img.dimensions(), (300, 100));
        // Placeholder background at the image's top-left inner corner
        assert_eq!(img.get_pixel(20, 20).0, [0xF0, 0xF0, 0xF0, 0xFF]);
        // Padding stays clear
        assert_eq!(img.get_pixel(5, 5).0, [0, 0, 0, 0xFF]);
    }
}
