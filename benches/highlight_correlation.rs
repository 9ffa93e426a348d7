//! Benchmarks for per-page highlight correlation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pdf_highlights::{Annotation, HighlightCorrelator, Point, TextFragment};

/// A page of `lines` text lines with `words` fragments each.
fn page_fragments(lines: usize, words: usize) -> Vec<TextFragment> {
    let mut fragments = Vec::with_capacity(lines * words);
    for line in 0..lines {
        let y = 750.0 - line as f64 * 14.0;
        for word in 0..words {
            let x = 72.0 + word as f64 * 45.0;
            fragments.push(TextFragment::new(format!("word{}", word), Point::new(x, y), 40.0, 12.0));
        }
    }
    fragments
}

fn highlights(count: usize) -> Vec<Annotation> {
    (0..count)
        .map(|i| {
            let y = 750.0 - i as f64 * 14.0;
            Annotation::highlight([72.0, y, 400.0, y + 12.0])
        })
        .collect()
}

fn bench_correlate_page(c: &mut Criterion) {
    let correlator = HighlightCorrelator::new();
    let mut group = c.benchmark_group("correlate_page");

    for &(lines, annots) in &[(10, 2), (50, 10), (200, 40)] {
        let fragments = page_fragments(lines, 10);
        let annotations = highlights(annots);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", lines * 10, annots)),
            &(annotations, fragments),
            |b, (annotations, fragments)| {
                b.iter(|| correlator.correlate_page(1, black_box(annotations), black_box(fragments)))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_correlate_page);
criterion_main!(benches);
