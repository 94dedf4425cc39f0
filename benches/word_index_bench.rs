//! Benchmark for tokenizing and indexing text.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wordtree::index::{CaseFolding, Tokenizer, index_lines};

const WORDS: [&str; 12] = [
    "The", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog", "Again", "and", "again",
];

fn generate_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|line| {
            (0..10)
                .map(|offset| WORDS[(line * 7 + offset * 3) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
                + &format!(" word{}", line % 500)
        })
        .collect()
}

fn benchmark_index_lines(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("index_lines");

    for count in [100, 1000, 10000] {
        let lines = generate_lines(count);
        group.throughput(Throughput::Elements(count as u64));

        for case_folding in [CaseFolding::Lowercase, CaseFolding::Preserve] {
            let tokenizer = Tokenizer::new(case_folding);
            group.bench_with_input(
                BenchmarkId::new(format!("{case_folding:?}"), count),
                &lines,
                |bencher, lines| {
                    bencher.iter(|| black_box(index_lines(lines.clone(), &tokenizer)));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_tokenize(criterion: &mut Criterion) {
    let tokenizer = Tokenizer::default();
    let line = generate_lines(1).remove(0);

    criterion.bench_function("tokenize_line", |bencher| {
        bencher.iter(|| black_box(tokenizer.tokenize(black_box(&line))));
    });
}

criterion_group!(benches, benchmark_index_lines, benchmark_tokenize);
criterion_main!(benches);
