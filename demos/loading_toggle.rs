//! Flips a card between loading and loaded, swapping its content halfway
//! through, and logs what each frame's layout step did.
//!
//! Run with `RUST_LOG=shimmer=debug cargo run --example loading_toggle`.

use std::time::Duration;

use shimmer::prelude::*;

const FRAME: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir = std::path::Path::new("loading_toggle");
    std::fs::create_dir_all(out_dir)?;

    let mut scene = Scene::new(Document::new(320.0), Shimmer::new(profile("Ada Lovelace")));

    for frame in 0u32..40 {
        match frame {
            10 => scene.shimmer_mut().set_loading(false),
            20 => scene.shimmer_mut().set_loading(true),
            // New content while loading is measured in the frame it arrives
            30 => scene
                .shimmer_mut()
                .set_content(profile("Grace Hopper, rear admiral and compiler pioneer")),
            _ => {}
        }

        let elapsed = FRAME * frame;
        let image = scene.render(elapsed);
        if frame % 5 == 0 {
            let path = out_dir.join(format!("frame_{frame:02}.png"));
            save_png(&image, &path)?;
        }

        log::info!(
            "frame {frame:02}: loading={} placeholders={} passes={}",
            scene.shimmer().is_loading(),
            scene.shimmer().rects().len(),
            scene.shimmer().measurement().passes()
        );
    }

    Ok(())
}

fn profile(name: &str) -> Content {
    div()
        .padding(12.0)
        .spacing(8.0)
        .background(Color::from_hex(0xF7F7FA))
        .child(div().row().spacing(12.0).child(img(48.0, 48.0)).child(h3(name).width(220.0)))
        .child(p("Joined 1843 - 12 posts"))
        .child(div().row().spacing(8.0).child(button("Follow")).child(button("Message")))
        .into_content()
}
