// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for TONEGEN
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Synthesis engine throughput at representative note durations
//! - Oscillator and envelope costs in isolation
//! - Pitch resolution overhead

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tonegen::music::NoteName;
use tonegen::synth::{self, envelope, oscillator};
use tonegen::RenderConfig;

/// Benchmark full note synthesis (the per-clip render cost)
fn bench_synthesize(c: &mut Criterion) {
    let config = RenderConfig::default();
    let mut group = c.benchmark_group("synthesize");

    for duration in [0.05, 0.35, 1.0].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(duration),
            duration,
            |b, &duration| {
                b.iter(|| synth::synthesize(black_box(440.0), black_box(duration), &config))
            },
        );
    }

    group.finish();
}

/// Benchmark the raw oscillator mix without envelope or quantization
fn bench_oscillator_mix(c: &mut Criterion) {
    c.bench_function("oscillator_mix", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for i in 0..15435 {
                let t = i as f64 / 44100.0;
                acc += oscillator::mixed(black_box(440.0), t);
            }
            black_box(acc)
        })
    });
}

/// Benchmark ADSR envelope construction
fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("adsr");

    for samples in [2205usize, 15435, 44100].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(samples),
            samples,
            |b, &samples| b.iter(|| envelope::adsr(black_box(samples), 44100)),
        );
    }

    group.finish();
}

/// Benchmark note-name parsing and frequency resolution
fn bench_pitch_resolution(c: &mut Criterion) {
    let tokens = ["C4", "C#5", "A#3", "G#4", "E6", "B3", "F#4", "D5"];

    c.bench_function("pitch_resolution", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for token in &tokens {
                let note: NoteName = black_box(token).parse().unwrap();
                acc += note.frequency();
            }
            black_box(acc)
        })
    });
}

criterion_group!(
    benches,
    bench_synthesize,
    bench_oscillator_mix,
    bench_envelope,
    bench_pitch_resolution,
);

criterion_main!(benches);
