//! Criterion benchmarks for the encoder, decoder and syntax validator.
//!
//! Inputs are short phrases, which is the only workload the translator is
//! built for; every call should stay a single linear pass.
//!
//! Run with:
//! ```bash
//! cargo bench --package morse-core --bench translate_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use morse_core::{is_valid_morse, MorseTranslator};

const PHRASES: &[&str] = &[
    "E",
    "HELLO",
    "HELLO, WORLD!",
    "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG 1234567890",
];

fn bench_to_morse(c: &mut Criterion) {
    let translator = MorseTranslator::latin().expect("bundled dictionary");
    let mut group = c.benchmark_group("to_morse");
    for phrase in PHRASES {
        group.bench_with_input(BenchmarkId::from_parameter(phrase.len()), phrase, |b, p| {
            b.iter(|| translator.to_morse(black_box(p)))
        });
    }
    group.finish();
}

fn bench_from_morse(c: &mut Criterion) {
    let translator = MorseTranslator::latin().expect("bundled dictionary");
    let encoded: Vec<String> = PHRASES
        .iter()
        .map(|p| translator.to_morse(p).expect("phrase is encodable"))
        .collect();

    let mut group = c.benchmark_group("from_morse");
    for morse in &encoded {
        group.bench_with_input(BenchmarkId::from_parameter(morse.len()), morse, |b, m| {
            b.iter(|| translator.from_morse(black_box(m)))
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let valid = ".... . .-.. .-.. --- --..--  .-- --- .-. .-.. -.. -.-.--";
    let invalid = ".... . .-.. .-.. test  .-- --- .-. .-.. -.. -.-.--";
    c.bench_function("is_valid_morse/valid", |b| {
        b.iter(|| is_valid_morse(black_box(valid)))
    });
    c.bench_function("is_valid_morse/invalid", |b| {
        b.iter(|| is_valid_morse(black_box(invalid)))
    });
}

criterion_group!(benches, bench_to_morse, bench_from_morse, bench_validate);
criterion_main!(benches);
