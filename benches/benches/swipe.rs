// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Vec2};
use understory_gesture::{
    CommitPolicy, GestureEngine, NoActuator, Sample, SwipeConfig, SwipeOverlay, SwipeSurface,
    classify_delta,
};

/// Leftward swipes that wobble vertically; every `gesture_len`th sample
/// starts a new gesture.
fn sample_stream(len: usize, gesture_len: usize) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(len);
    let mut i = 0;
    while samples.len() < len {
        let step = i % gesture_len;
        let t = step as f64;
        let point = Point::new(400.0 - t * 3.0, 300.0 + (t * 0.7).sin() * 8.0);
        let sample = match step {
            0 => Sample::Begin(point),
            s if s + 1 == gesture_len => Sample::End(Some(point)),
            _ => Sample::Update(point),
        };
        samples.push(sample);
        i += 1;
    }
    samples
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe/classify");

    let deltas: Vec<Vec2> = (0..1_024)
        .map(|i| {
            let a = f64::from(i) * 0.37;
            Vec2::new(a.cos() * 80.0, a.sin() * 80.0)
        })
        .collect();
    group.throughput(Throughput::Elements(deltas.len() as u64));

    group.bench_function("preview", |b| {
        b.iter(|| {
            for &delta in &deltas {
                black_box(classify_delta(black_box(delta), 50.0));
            }
        });
    });

    let config = SwipeConfig::headless();
    for policy in [CommitPolicy::Loose, CommitPolicy::Strict] {
        group.bench_with_input(
            BenchmarkId::new("commit", format!("{policy:?}")),
            &policy,
            |b, &policy| {
                b.iter(|| {
                    for &delta in &deltas {
                        black_box(policy.evaluate(black_box(delta), &config));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_sample_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe/stream");

    for gesture_len in [8usize, 32, 128] {
        let samples = sample_stream(4_096, gesture_len);
        group.throughput(Throughput::Elements(samples.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("engine", gesture_len),
            &samples,
            |b, samples| {
                b.iter_batched(
                    || GestureEngine::new(SwipeConfig::headless(), CommitPolicy::Strict, NoActuator),
                    |mut engine| {
                        for &sample in samples {
                            black_box(engine.apply(sample));
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("overlay", gesture_len),
            &samples,
            |b, samples| {
                b.iter_batched(
                    || SwipeOverlay::new(SwipeConfig::overlay(), NoActuator),
                    |mut overlay| {
                        for &sample in samples {
                            black_box(overlay.apply(sample));
                            black_box(overlay.state());
                        }
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_sample_stream);
criterion_main!(benches);
