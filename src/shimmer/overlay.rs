use std::time::Duration;

use crate::geometry::{clamp_radius, Rect};
use crate::renderer::{Gradient, PaintContext};

use super::extract::ElementInfo;
use super::ShimmerConfig;

/// Paint one animated placeholder per rectangle over `container`.
///
/// Rectangles are relative to the container's top-left corner. Each
/// placeholder is filled with the background color, then a
/// `transparent -> shimmer -> transparent` band one placeholder wide slides
/// across it, clipped to the placeholder's rounded bounds. Nothing escapes
/// the container.
pub fn paint_overlay(
    ctx: &mut PaintContext,
    container: Rect,
    rects: &[ElementInfo],
    config: &ShimmerConfig,
    elapsed: Duration,
) {
    let sweep = config.sweep();
    let band = Gradient::even(&[
        config.shimmer_color.with_alpha(0.0),
        config.shimmer_color,
        config.shimmer_color.with_alpha(0.0),
    ]);

    ctx.push_clip(container, 0.0);
    for info in rects {
        let rect = info.rect().offset(container.x, container.y);
        let radius = clamp_radius(rect, config.border_radius);

        ctx.draw_rounded_rect(rect, config.background_color, radius);

        ctx.push_clip(rect, radius);
        ctx.draw_gradient_rect(
            rect.offset(sweep.offset(rect.width, elapsed), 0.0),
            band.clone(),
        );
        ctx.pop_clip();
    }
    ctx.pop_clip();
}
