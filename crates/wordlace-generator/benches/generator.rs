//! Benchmarks for word-search board generation.
//!
//! This benchmark suite measures complete board generation on the reference
//! configuration: a 10x10 grid and the six-word reference list.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple cases:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! Each seed produces a different board, allowing measurement across various
//! placement orders while maintaining reproducibility.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use wordlace_generator::{BoardGenerator, BoardSeed, GeneratorConfig};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const WORDS: [&str; 6] = ["swift", "kotlin", "objectivec", "variable", "java", "mobile"];

fn bench_generator_reference_board(c: &mut Criterion) {
    let words = WORDS.iter().map(|word| word.parse().unwrap()).collect();
    let config = GeneratorConfig::new(10, words).unwrap();
    let generator = BoardGenerator::new(config);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = BoardSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_reference_board", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_reference_board
);
criterion_main!(benches);
