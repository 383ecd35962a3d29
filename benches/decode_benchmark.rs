use bchdec::{
    BchCode, ChaseDecoder, FieldRegistry, GaloisField, HardDecoder, Reliability, SUPPORTED_CODES,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn word_with_errors(n: usize, positions: &[usize]) -> Vec<u8> {
    let mut r = vec![0u8; n];
    for &p in positions {
        r[p] ^= 1;
    }
    r
}

/// t errors spread across the word
fn spread_errors(code: &BchCode) -> Vec<usize> {
    (0..code.t).map(|i| 3 + i * (code.n / code.t)).collect()
}

/// Benchmark field table construction for each supported size
fn bench_field_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_tables");
    for code in SUPPORTED_CODES {
        group.bench_with_input(BenchmarkId::from_parameter(code.m), &code, |b, code| {
            b.iter(|| GaloisField::for_code(black_box(code)))
        });
    }
    group.finish();
}

/// Benchmark hard decoding of a word with t errors
fn bench_hard_decode(c: &mut Criterion) {
    let registry = FieldRegistry::new();
    let mut group = c.benchmark_group("hard_decode");

    for code in SUPPORTED_CODES {
        let field = registry.field(&code).unwrap();
        let decoder = HardDecoder::for_code(field, &code).unwrap();
        let received = word_with_errors(code.n, &spread_errors(&code));

        group.bench_with_input(BenchmarkId::new("t_errors", code.n), &received, |b, r| {
            b.iter(|| decoder.decode(black_box(r)).unwrap())
        });
    }

    let code = SUPPORTED_CODES[2];
    let field = registry.field(&code).unwrap();
    let decoder = HardDecoder::for_code(field, &code).unwrap();
    let clean = vec![0u8; code.n];
    group.bench_function("clean_1023", |b| {
        b.iter(|| decoder.decode(black_box(&clean)).unwrap())
    });

    group.finish();
}

/// Benchmark Chase decoding, sequential vs parallel trials
fn bench_chase_decode(c: &mut Criterion) {
    let registry = FieldRegistry::new();
    let code = SUPPORTED_CODES[1];
    let field = registry.field(&code).unwrap();
    let hard = HardDecoder::for_code(field, &code).unwrap();

    let mut errors = spread_errors(&code);
    errors.push(200);
    let received = word_with_errors(code.n, &errors);
    let mut by_position: Vec<i8> = received
        .iter()
        .map(|&bit| if bit == 1 { -40 } else { 40 })
        .collect();
    by_position[200] = -2;
    let reliability = Reliability::from_positions(&by_position);

    let mut group = c.benchmark_group("chase_decode_255");
    for flips in [2usize, 4, 8] {
        for parallel in [false, true] {
            let decoder = ChaseDecoder::new(hard)
                .with_flips(flips)
                .unwrap()
                .with_parallel(parallel);
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, flips), &flips, |b, _| {
                b.iter(|| {
                    decoder
                        .decode(black_box(&received), black_box(&reliability))
                        .unwrap()
                })
            });
        }
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_field_tables,
    bench_hard_decode,
    bench_chase_decode
);
criterion_main!(benches);
