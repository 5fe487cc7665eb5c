//! Normalization throughput across input sizes and policies.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use eartag_bench::{SizeTier, generate_candidates};
use eartag_core::{LegacySplit, Normalizer, NormalizerConfig, PrefixPolicy};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let fixed = Normalizer::new(NormalizerConfig {
        prefix_policy: PrefixPolicy::Fixed,
        ..NormalizerConfig::default()
    });
    let provincial = Normalizer::new(NormalizerConfig {
        legacy_split: LegacySplit::Provincial,
        ..NormalizerConfig::default()
    });

    for (name, tier) in [
        ("S", SizeTier::Small),
        ("M", SizeTier::Medium),
        ("L", SizeTier::Large),
    ] {
        let candidates = generate_candidates(&tier.config(42));
        group.throughput(Throughput::Elements(candidates.len() as u64));

        for (label, normalizer) in [
            ("default", Normalizer::default()),
            ("fixed_prefix", fixed.clone()),
            ("provincial", provincial.clone()),
        ] {
            group.bench_with_input(BenchmarkId::new(label, name), &candidates, |b, all| {
                b.iter(|| {
                    for candidate in all {
                        black_box(normalizer.normalize(black_box(&candidate.text)));
                    }
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
