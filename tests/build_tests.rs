//! End-to-end builds against a scratch directory.
//!
//! Each test lays out an export in the conventional places under a temporary
//! root, runs the full pipeline and inspects the files it leaves behind.

use std::path::Path;

use leaves::{BookBuilder, BookIndex, BuildConfig, Error, Loader, Page};
use serde_json::{json, Value};
use tempfile::TempDir;

fn write_json(path: &Path, value: &Value) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_vec(value).unwrap()).unwrap();
}

/// Lay out `page_count` pages and the given headings under a fresh root.
fn fixture(page_count: usize, headings: Value) -> (TempDir, BuildConfig) {
    let root = TempDir::new().unwrap();
    let config = BuildConfig::defaults().unwrap().resolve(root.path());

    let pages: Vec<Value> = (0..page_count)
        .map(|i| {
            json!({
                "text": format!("<span class=\"title\">عنوان {i}</span> نص الصفحة"),
                "vol": format!("{}", i / 60 + 1),
                "page": i % 60 + 1,
            })
        })
        .collect();
    write_json(&config.paths.raw, &json!({ "pages": pages }));
    write_json(
        &config.paths.index,
        &json!({
            "meta": { "name": "صفوة التفاسير", "id": 8967 },
            "indexes": { "volumes": [1, 2], "headings": headings }
        }),
    );

    (root, config)
}

fn read_json(path: &Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

#[test]
fn test_full_build() {
    let headings = json!([
        { "title": "الفاتحة", "level": 1, "page": 1 },
        { "title": "البقرة", "level": 1, "page": 61 },
        { "title": "past the end", "level": 2, "page": 125 },
        { "title": "zero", "level": 2, "page": 0 }
    ]);
    let (_root, config) = fixture(120, headings);
    let out = config.paths.output_dir.clone();

    let report = BookBuilder::new(config).unwrap().run().unwrap();
    assert_eq!(report.chunks.len(), 3);

    let index: BookIndex =
        serde_json::from_slice(&std::fs::read(out.join("index.json")).unwrap()).unwrap();
    assert_eq!(index.id, "safwat-al-tafasir");
    assert_eq!(index.title, "صفوة التفاسير");
    assert_eq!(index.author, "محمد علي الصابوني");
    assert_eq!(index.volumes, 2);
    assert_eq!(index.total_pages, 120);
    assert_eq!(index.chunk_size, 50);
    assert_eq!(index.total_chunks, 3);
    let pages: Vec<usize> = index.headings.iter().map(|h| h.page).collect();
    assert_eq!(pages, vec![0, 60, 119, 0]);

    let mut all = Vec::new();
    for (i, expected_len) in [50, 50, 20].into_iter().enumerate() {
        let chunk: Vec<Page> =
            serde_json::from_value(read_json(&out.join(format!("pages/{i}.json")))).unwrap();
        assert_eq!(chunk.len(), expected_len);
        all.extend(chunk);
    }
    assert!(!out.join("pages/3.json").exists());

    assert_eq!(all.len(), 120);
    assert_eq!(all[0].text, "عنوان 0 نص الصفحة");
    assert_eq!(all[61].vol, json!("2"));
    assert_eq!(all[61].page, json!(2));
}

#[test]
fn test_index_key_order() {
    let (_root, config) = fixture(3, json!([]));
    let out = config.paths.output_dir.clone();
    BookBuilder::new(config).unwrap().run().unwrap();

    let raw = std::fs::read_to_string(out.join("index.json")).unwrap();
    assert!(raw.starts_with(
        r#"{"id":"safwat-al-tafasir","title":"صفوة التفاسير","author":"محمد علي الصابوني","volumes":2,"totalPages":3,"chunkSize":50,"totalChunks":1,"headings":[]}"#
    ));
}

#[test]
fn test_rerun_overwrites() {
    let (_root, config) = fixture(70, json!([]));
    let out = config.paths.output_dir.clone();
    std::fs::create_dir_all(out.join("pages")).unwrap();
    std::fs::write(out.join("pages/0.json"), "stale").unwrap();

    let builder = BookBuilder::new(config).unwrap();
    builder.run().unwrap();
    let first = std::fs::read(out.join("pages/1.json")).unwrap();
    builder.run().unwrap();
    let second = std::fs::read(out.join("pages/1.json")).unwrap();

    assert_eq!(first, second);
    assert!(read_json(&out.join("pages/0.json")).is_array());
}

#[test]
fn test_custom_chunk_size() {
    let (root, _) = fixture(10, json!([]));
    let config = Loader::new()
        .set_override("chunk_size", 4_i64)
        .unwrap()
        .build()
        .unwrap()
        .resolve(root.path());
    let out = config.paths.output_dir.clone();

    let report = BookBuilder::new(config).unwrap().run().unwrap();
    let lens: Vec<usize> = report
        .chunks
        .iter()
        .map(|c| c.last_page - c.first_page + 1)
        .collect();
    assert_eq!(lens, vec![4, 4, 2]);
    assert_eq!(read_json(&out.join("index.json"))["totalChunks"], json!(3));
}

#[test]
fn test_missing_input() {
    let root = TempDir::new().unwrap();
    let config = BuildConfig::defaults().unwrap().resolve(root.path());
    let raw = config.paths.raw.clone();

    let err = BookBuilder::new(config).unwrap().run().unwrap_err();
    match err {
        Error::NotFound { path, .. } => assert_eq!(path, raw),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_malformed_input() {
    let (_root, config) = fixture(5, json!([]));
    std::fs::write(&config.paths.index, "{\"meta\":").unwrap();

    let err = BookBuilder::new(config).unwrap().run().unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_zero_pages_writes_nothing() {
    let (_root, config) = fixture(0, json!([{ "title": "x", "level": 1, "page": 1 }]));
    let out = config.paths.output_dir.clone();

    let err = BookBuilder::new(config).unwrap().run().unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(!out.join("index.json").exists());
}
