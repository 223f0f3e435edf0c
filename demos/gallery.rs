//! Renders the four demo cards as shimmer placeholders and as loaded content.
//!
//! Run with `RUST_LOG=debug cargo run --example gallery [output-dir]`.

use std::path::PathBuf;
use std::time::Duration;

use shimmer::prelude::*;

const CARD_WIDTH: f32 = 360.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("gallery"));
    std::fs::create_dir_all(&out_dir)?;

    let cards: [(&str, Content, ShimmerConfig); 4] = [
        ("user_card", user_card(), ShimmerConfig::default()),
        (
            "article_preview",
            article_preview(),
            ShimmerConfig::default()
                .shimmer_color(Color::from_hex(0xD0D0FF))
                .background_color(Color::from_hex(0xE8E8FF)),
        ),
        (
            "product_card",
            product_card(),
            ShimmerConfig::default()
                .shimmer_color(Color::from_hex(0xFFE0B2))
                .background_color(Color::from_hex(0xFFF3E0))
                .duration_secs(2.0)
                .border_radius(8.0),
        ),
        (
            "data_table",
            data_table(),
            ShimmerConfig::default()
                .shimmer_color(Color::from_hex(0xC8E6C9))
                .background_color(Color::from_hex(0xE8F5E9))
                .duration_secs(1.8),
        ),
    ];

    for (name, content, config) in cards {
        let mut scene = Scene::new(
            Document::new(CARD_WIDTH),
            Shimmer::with_config(content, config),
        );

        for ms in [0u64, 400, 800, 1200] {
            let path = out_dir.join(format!("{name}_{ms:04}ms.png"));
            save_png(&scene.render(Duration::from_millis(ms)), &path)?;
            log::info!("wrote {}", path.display());
        }

        log::info!(
            "{name}: {} placeholders",
            scene.shimmer().rects().len()
        );

        scene.shimmer_mut().set_loading(false);
        let path = out_dir.join(format!("{name}_loaded.png"));
        save_png(&scene.render(Duration::ZERO), &path)?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}

fn user_card() -> Content {
    div()
        .row()
        .padding(16.0)
        .spacing(16.0)
        .background(Color::from_hex(0xFAFAFA))
        .child(img(80.0, 80.0))
        .child(
            div()
                .width(232.0)
                .spacing(6.0)
                .child(h2("John Doe"))
                .child(p("Software Engineer"))
                .child(p("San Francisco, CA")),
        )
        .into_content()
}

fn article_preview() -> Content {
    el("article")
        .padding(20.0)
        .spacing(10.0)
        .align_start()
        .background(Color::from_hex(0xFFFFFF))
        .child(h1("Understanding React Hooks"))
        .child(p("By Jane Smith - 5 min read").font_size(12.0))
        .child(p(
            "React Hooks revolutionized the way we write React components. In this \
             article, we'll explore the most commonly used hooks and their best practices.",
        ))
        .child(button("Read More"))
        .into_content()
}

fn product_card() -> Content {
    div()
        .background(Color::from_hex(0xFFFFFF))
        .child(img(CARD_WIDTH, 200.0))
        .child(
            div()
                .padding(16.0)
                .spacing(8.0)
                .align_start()
                .child(h3("Awesome Product"))
                .child(div().text("$99.99").font_size(20.0))
                .child(div().text("*****"))
                .child(button("Add to Cart")),
        )
        .into_content()
}

fn data_table() -> Content {
    let row = |cells: [&str; 4], kind: &str| {
        el("tr")
            .row()
            .spacing(8.0)
            .children(cells.into_iter().zip([80.0, 120.0, 70.0, 50.0]).map(
                |(text, width)| el(kind).text(text).width(width).font_size(12.0),
            ))
    };

    div()
        .padding(12.0)
        .background(Color::from_hex(0xFFFFFF))
        .child(
            el("table")
                .spacing(6.0)
                .child(el("thead").child(row(["Name", "Email", "Role", "Status"], "th")))
                .child(el("tbody").spacing(6.0).children([
                    row(["Alice Johnson", "alice@example.com", "Engineer", "Active"], "td"),
                    row(["Bob Smith", "bob@example.com", "Designer", "Active"], "td"),
                    row(["Carol Williams", "carol@example.com", "Manager", "Away"], "td"),
                    row(["David Brown", "david@example.com", "Developer", "Active"], "td"),
                ])),
        )
        .into_content()
}
