//! CPU rasterizer for draw commands.
//!
//! Coverage is sampled once at each pixel center (no anti-aliasing) and colors
//! are composited source-over in straight alpha. Output is deterministic,
//! which is what the snapshot tests rely on.

use std::path::Path;

use image::{Rgba, RgbaImage};

use super::commands::DrawCommand;
use crate::color::Color;
use crate::geometry::Rect;

/// Paint `commands` in order onto a `width` x `height` canvas cleared to `clear`.
pub fn rasterize(commands: &[DrawCommand], width: u32, height: u32, clear: Color) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba(clear.to_rgba8()));
    let canvas = Rect::new(0.0, 0.0, width as f32, height as f32);

    for command in commands {
        match command {
            DrawCommand::RoundedRect {
                rect,
                color,
                radius,
                gradient,
                clips,
            } => {
                let Some(area) = clips
                    .iter()
                    .try_fold(*rect, |area, clip| area.intersect(&clip.rect))
                    .and_then(|area| area.intersect(&canvas))
                else {
                    continue;
                };

                let x0 = area.x.floor().max(0.0) as u32;
                let y0 = area.y.floor().max(0.0) as u32;
                let x1 = (area.right().ceil() as u32).min(width);
                let y1 = (area.bottom().ceil() as u32).min(height);

                for py in y0..y1 {
                    for px in x0..x1 {
                        let cx = px as f32 + 0.5;
                        let cy = py as f32 + 0.5;
                        if !rect.contains_rounded(cx, cy, *radius) {
                            continue;
                        }
                        if !clips.iter().all(|clip| clip.contains(cx, cy)) {
                            continue;
                        }

                        let src = match gradient {
                            Some(g) => g.sample((cx - rect.x) / rect.width),
                            None => *color,
                        };
                        let dst = img.get_pixel_mut(px, py);
                        *dst = Rgba(blend_over(Color::from_rgba8(dst.0), src).to_rgba8());
                    }
                }
            }
        }
    }

    img
}

/// Write a rasterized frame as PNG.
pub fn save_png(img: &RgbaImage, path: impl AsRef<Path>) -> image::ImageResult<()> {
    img.save(path)
}

fn blend_over(dst: Color, src: Color) -> Color {
    let a = src.a + dst.a * (1.0 - src.a);
    if a <= 0.0 {
        return Color::TRANSPARENT;
    }
    let mix = |s: f32, d: f32| (s * src.a + d * dst.a * (1.0 - src.a)) / a;
    Color::rgba(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{ClipRegion, Gradient};

    #[test]
    fn test_solid_rect_fills_its_pixels_only() {
        let cmd = DrawCommand::rounded_rect(Rect::new(2.0, 2.0, 4.0, 4.0), Color::BLACK, 0.0);
        let img = rasterize(&[cmd], 10, 10, Color::WHITE);

        assert_eq!(img.get_pixel(2, 2).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(5, 5).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(6, 6).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(1, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_rounded_corners_are_skipped() {
        let cmd = DrawCommand::rounded_rect(Rect::new(0.0, 0.0, 20.0, 20.0), Color::BLACK, 8.0);
        let img = rasterize(&[cmd], 20, 20, Color::WHITE);

        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(10, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(10, 10).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_clip_limits_drawing() {
        let cmd = DrawCommand::RoundedRect {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            color: Color::BLACK,
            radius: 0.0,
            gradient: None,
            clips: vec![ClipRegion::new(Rect::new(0.0, 0.0, 5.0, 10.0), 0.0)],
        };
        let img = rasterize(&[cmd], 10, 10, Color::WHITE);

        assert_eq!(img.get_pixel(4, 4).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(5, 4).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_gradient_is_sampled_across_the_rect() {
        let cmd = DrawCommand::gradient_rect(
            Rect::new(0.0, 0.0, 10.0, 1.0),
            Gradient::even(&[Color::BLACK, Color::WHITE]),
        );
        let img = rasterize(&[cmd], 10, 1, Color::TRANSPARENT);

        assert!(img.get_pixel(0, 0).0[0] < 20);
        assert!(img.get_pixel(9, 0).0[0] > 235);
        assert!(img.get_pixel(0, 0).0[0] < img.get_pixel(5, 0).0[0]);
    }

    #[test]
    fn test_translucent_source_blends() {
        let cmd = DrawCommand::rounded_rect(
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Color::BLACK.with_alpha(0.5),
            0.0,
        );
        let img = rasterize(&[cmd], 1, 1, Color::WHITE);
        assert_eq!(img.get_pixel(0, 0).0, [128, 128, 128, 255]);
    }

    #[test]
    fn test_offscreen_commands_are_ignored() {
        let cmd = DrawCommand::rounded_rect(Rect::new(-50.0, -50.0, 10.0, 10.0), Color::BLACK, 0.0);
        let img = rasterize(&[cmd], 4, 4, Color::WHITE);
        assert!(img.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }
}
