use crate::{Result, VisualTestError};
use image::RgbaImage;
use shimmer::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

/// Every scene the harness knows how to render.
pub const FIXTURES: &[&str] = &[
    "flat_card",
    "nested_card",
    "sweep_midway",
    "tinted_rounded",
    "hidden_children",
    "loaded_content",
];

/// Configuration for rendering one fixture to disk
pub struct CaptureConfig {
    /// Name of the fixture scene
    pub fixture_name: String,
    /// Path where the frame will be saved
    pub output_path: PathBuf,
    /// Animation clock for the captured frame
    pub elapsed: Duration,
}

/// Build a fresh scene by name.
pub fn fixture(name: &str) -> Option<Scene> {
    let scene = match name {
        "flat_card" => Scene::new(Document::new(320.0), Shimmer::new(flat_card())),
        "nested_card" => Scene::new(Document::new(360.0), Shimmer::new(nested_card())),
        "sweep_midway" => Scene::new(
            Document::new(320.0),
            Shimmer::with_config(
                flat_card(),
                ShimmerConfig::default()
                    .timing(TimingFunction::Linear)
                    .shimmer_color(Color::from_hex(0x9E9E9E)),
            ),
        ),
        "tinted_rounded" => Scene::new(
            Document::new(320.0),
            Shimmer::new(nested_card())
                .shimmer_color(Color::from_hex(0xFFE0B2))
                .background_color(Color::from_hex(0xFFF3E0))
                .duration_secs(2.0)
                .border_radius(8.0),
        ),
        "hidden_children" => Scene::new(
            Document::new(240.0),
            Shimmer::new(
                div()
                    .padding(12.0)
                    .spacing(8.0)
                    .child(img(60.0, 60.0).hidden(true))
                    .child(p("Visible line").height(18.0))
                    .child(span(""))
                    .child(p("Second visible line").height(18.0))
                    .into_content(),
            ),
        ),
        "loaded_content" => Scene::new(
            Document::new(320.0),
            Shimmer::new(
                div()
                    .padding(16.0)
                    .spacing(12.0)
                    .background(Color::from_hex(0x263238))
                    .child(div().height(80.0).background(Color::from_hex(0x4FC3F7)))
                    .child(div().height(24.0).background(Color::from_hex(0x81C784)))
                    .into_content(),
            )
            .loading(false),
        ),
        _ => return None,
    };
    Some(scene)
}

/// Render the fixture's frame at `elapsed`.
pub fn render_fixture(name: &str, elapsed: Duration) -> Result<RgbaImage> {
    let mut scene = fixture(name)
        .ok_or_else(|| VisualTestError::Capture(format!("unknown fixture '{}'", name)))?;
    Ok(scene.render(elapsed))
}

/// Render a fixture and write it as PNG
pub fn capture_fixture(config: &CaptureConfig) -> Result<()> {
    let frame = render_fixture(&config.fixture_name, config.elapsed)?;
    if let Some(parent) = config.output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    save_png(&frame, &config.output_path)?;
    Ok(())
}

fn flat_card() -> Content {
    div()
        .padding(16.0)
        .spacing(12.0)
        .child(img(120.0, 80.0))
        .child(h3("Awesome Product"))
        .child(p("$99.99").width(90.0))
        .child(button("Add to Cart"))
        .into_content()
}

fn nested_card() -> Content {
    div()
        .row()
        .padding(16.0)
        .spacing(16.0)
        .child(img(80.0, 80.0))
        .child(
            div()
                .width(200.0)
                .spacing(6.0)
                .child(h2("John Doe"))
                .child(p("Software Engineer"))
                .child(p("San Francisco, CA")),
        )
        .into_content()
}
