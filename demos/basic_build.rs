//! Basic Book Build
//!
//! The minimal example: build a tiny book into a scratch directory and show
//! what was written.
//!
//! ```bash
//! cargo run --example basic_build
//! ```

use leaves::{BookBuilder, BuildConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = std::env::temp_dir().join("leaves-demo");
    let mut config = BuildConfig::defaults()?.resolve(&root);
    config.chunk_size = 4;

    let pages: Vec<_> = (1..=10)
        .map(|n| {
            serde_json::json!({
                "text": format!("<span class=\"verse\">Verse {n}</span> and its commentary."),
                "vol": "1",
                "page": n,
            })
        })
        .collect();
    let index = serde_json::json!({
        "meta": { "name": "Demo Tafsir" },
        "indexes": {
            "volumes": [1],
            "headings": [
                { "title": "Opening", "level": 1, "page": 1 },
                { "title": "Second part", "level": 1, "page": 6 },
            ],
        },
    });

    for (path, value) in [
        (&config.paths.raw, serde_json::json!({ "pages": pages })),
        (&config.paths.index, index),
    ] {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_vec(&value)?)?;
    }

    let report = BookBuilder::new(config)?.run()?;

    println!("Index: {} ({} bytes)", report.index.path.display(), report.index.bytes);
    for chunk in &report.chunks {
        println!(
            "[{}] pages {}..={} -> {}",
            chunk.index,
            chunk.first_page,
            chunk.last_page,
            chunk.file.path.display()
        );
    }

    // A client showing page 6 fetches chunk 6 / 4 = 1, element 6 % 4 = 2.
    Ok(())
}
