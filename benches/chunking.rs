//! Benchmarks for page cleaning and partitioning.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use leaves::{strip_spans, FixedChunker, MarkupStripper, Page};

fn sample_text(size: usize) -> String {
    // Mix of marked-up and plain runs, as exported
    let runs = [
        "<span class=\"title\">قال تعالى</span> ",
        "﴿الحمد لله رب العالمين﴾ ",
        "<span data-type=\"footnote\">(١)</span> ",
        "plain commentary text follows here. ",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(runs[i % runs.len()]);
        i += 1;
    }
    text
}

fn bench_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_spans");

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("marked", size), &text, |b, text| {
            b.iter(|| strip_spans(black_box(text)))
        });
    }

    let plain = "plain commentary text follows here. ".repeat(300);
    group.bench_function("plain", |b| b.iter(|| strip_spans(black_box(&plain))));

    group.finish();
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    let stripper = MarkupStripper::default();

    for pages in [100, 1_000, 10_000] {
        let corpus: Vec<Page> = (0..pages)
            .map(|i| Page::new(sample_text(2_000), "1", i + 1))
            .collect();
        let chunker = FixedChunker::default();

        group.throughput(Throughput::Elements(pages as u64));
        group.bench_with_input(BenchmarkId::new("chunk", pages), &corpus, |b, corpus| {
            b.iter(|| chunker.chunk(black_box(corpus)))
        });
        group.bench_with_input(BenchmarkId::new("clean", pages), &corpus, |b, corpus| {
            b.iter(|| {
                corpus
                    .iter()
                    .map(|p| stripper.clean_page(p))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strip, bench_partition);
criterion_main!(benches);
