pub mod commands;
pub mod raster;

pub use commands::{ClipRegion, DrawCommand, Gradient, GradientStop};
pub use raster::{rasterize, save_png};

use crate::color::Color;
use crate::geometry::Rect;

/// Collects draw commands for one frame.
///
/// Clips pushed with [`PaintContext::push_clip`] apply to every command
/// recorded until the matching [`PaintContext::pop_clip`].
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<ClipRegion>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_clip(&mut self, rect: Rect, corner_radius: f32) {
        self.clip_stack.push(ClipRegion::new(rect, corner_radius));
    }

    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    /// Record `command` under the current clip stack.
    pub fn draw(&mut self, mut command: DrawCommand) {
        match &mut command {
            DrawCommand::RoundedRect { clips, .. } => {
                clips.extend(self.clip_stack.iter().copied());
            }
        }
        self.commands.push(command);
    }

    pub fn draw_rounded_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        self.draw(DrawCommand::rounded_rect(rect, color, radius));
    }

    pub fn draw_gradient_rect(&mut self, rect: Rect, gradient: Gradient) {
        self.draw(DrawCommand::gradient_rect(rect, gradient));
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_stack_applies_to_recorded_commands() {
        let mut ctx = PaintContext::new();
        ctx.draw_rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK, 0.0);
        ctx.push_clip(Rect::new(0.0, 0.0, 5.0, 5.0), 2.0);
        ctx.draw_rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE, 0.0);
        ctx.pop_clip();
        ctx.draw_rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE, 0.0);

        let clips: Vec<usize> = ctx.commands().iter().map(|c| c.clips().len()).collect();
        assert_eq!(clips, vec![0, 1, 0]);
        assert_eq!(ctx.commands()[1].clips()[0].corner_radius, 2.0);
    }
}
