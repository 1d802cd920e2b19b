//! Throughput of the built-in rules and of a per-call custom pattern
//!
//! Run with: cargo bench --bench rule_benchmarks

use blast_core::{segment, DelimiterRule};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base_sentence = "Lorem ipsum dolor sit amet, voluptua. At et ea rebum! ";
    let repeat_count = size / base_sentence.len() + 1;

    let mut text = base_sentence.repeat(repeat_count);
    text.truncate(size);
    text
}

fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");

    let rules = [
        DelimiterRule::All,
        DelimiterRule::Character,
        DelimiterRule::Word,
        DelimiterRule::Sentence,
        DelimiterRule::custom("(um)"),
    ];

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(size as u64));

        for rule in &rules {
            group.bench_with_input(BenchmarkId::new(rule.name(), size), &text, |b, text| {
                b.iter(|| segment(black_box(text), rule).unwrap());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_rules);
criterion_main!(benches);
