use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poker_classify::deck::sample_hand_seeded;
use poker_classify::evaluator::{classify, evaluate};
use poker_classify::hand::validate;

fn bench_validate(c: &mut Criterion) {
    let mut g = c.benchmark_group("validate");
    for raw in ["Ah Kh Qh Jh Th", "Ah Kd 10d 5c 2h", "4d 4d 5c 2h 8s"] {
        g.bench_with_input(BenchmarkId::from_parameter(raw), raw, |b, input| {
            b.iter(|| validate(black_box(input)))
        });
    }
    g.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let royal = validate("Ah Kh Qh Jh Th").unwrap();
    let high = validate("Ah Kd 7s 5c 2d").unwrap();
    let sampled: Vec<_> = (0..64).map(sample_hand_seeded).collect();

    let mut g = c.benchmark_group("evaluate");
    g.bench_with_input(BenchmarkId::new("royal_flush", "AKQJT"), &royal, |b, input| {
        b.iter(|| evaluate(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("high_card", "AK752"), &high, |b, input| {
        b.iter(|| evaluate(black_box(input)))
    });
    g.bench_function("sampled_64", |b| {
        b.iter(|| sampled.iter().map(|h| evaluate(black_box(h))).count())
    });
    g.finish();
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify", |b| b.iter(|| classify(black_box("4h 5s 6d 7c 8h"))));
}

criterion_group!(benches, bench_validate, bench_evaluate, bench_classify);
criterion_main!(benches);
