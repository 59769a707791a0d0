// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Sound synthesis engine for TONEGEN.
//!
//! This module turns a frequency and a duration into a quantized
//! waveform:
//! - Three-oscillator mix (sine/square/sawtooth, fixed weights)
//! - ADSR envelope shaping
//! - Peak normalization
//! - 16-bit fixed-point quantization
//!
//! The engine is a pure function of its inputs and the render
//! configuration: identical calls produce bit-identical samples, which
//! the asset pipeline relies on for caching and reproducible builds.

pub mod envelope;
pub mod oscillator;

use crate::config::RenderConfig;

/// Synthesize one note as signed 16-bit mono samples.
///
/// The output has exactly `round(sample_rate * duration_sec)` samples.
/// A zero (or negligible) duration yields an empty waveform; the
/// normalization step skips silent signals rather than dividing by a
/// zero peak.
pub fn synthesize(frequency_hz: f64, duration_sec: f64, config: &RenderConfig) -> Vec<i16> {
    let total_samples = (config.sample_rate as f64 * duration_sec).round() as usize;
    if total_samples == 0 {
        return Vec::new();
    }

    // Sample times evenly spaced over [0, duration)
    let mut wave: Vec<f64> = (0..total_samples)
        .map(|i| {
            let t = i as f64 * duration_sec / total_samples as f64;
            oscillator::mixed(frequency_hz, t)
        })
        .collect();

    let env = envelope::adsr(total_samples, config.sample_rate);
    for (sample, gain) in wave.iter_mut().zip(&env) {
        *sample *= gain;
    }

    let peak = wave.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()));
    if peak > 0.0 {
        for sample in &mut wave {
            *sample /= peak;
        }
    }

    let ceiling = config.amplitude_ceiling as f64;
    wave.iter().map(|&s| (s * ceiling) as i16).collect()
}
