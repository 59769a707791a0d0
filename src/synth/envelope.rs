// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! ADSR amplitude envelope.
//!
//! Attack, decay and release have fixed lengths in seconds; sustain
//! fills whatever remains of the note. For notes shorter than the
//! fixed segments the sustain clamps to zero and the tail of the
//! concatenated envelope is truncated so the envelope always has
//! exactly as many samples as the waveform.

/// Attack length in seconds (ramp 0 -> 1)
pub const ATTACK_SEC: f64 = 0.01;

/// Decay length in seconds (ramp 1 -> sustain level)
pub const DECAY_SEC: f64 = 0.1;

/// Release length in seconds (ramp sustain level -> 0)
pub const RELEASE_SEC: f64 = 0.1;

/// Sustain amplitude
pub const SUSTAIN_LEVEL: f64 = 0.7;

/// Endpoint-inclusive linear ramp of `len` samples from `start` to `end`.
///
/// A single-sample ramp holds `start`; longer ramps hit `end` exactly
/// on the final sample.
fn ramp(out: &mut Vec<f64>, start: f64, end: f64, len: usize) {
    if len == 0 {
        return;
    }
    if len == 1 {
        out.push(start);
        return;
    }
    let span = (len - 1) as f64;
    for i in 0..len {
        out.push(start + (end - start) * (i as f64 / span));
    }
}

/// Build the ADSR envelope for a note of `total_samples` samples.
///
/// The returned vector has length exactly `total_samples`.
pub fn adsr(total_samples: usize, sample_rate: u32) -> Vec<f64> {
    let attack_len = (sample_rate as f64 * ATTACK_SEC) as usize;
    let decay_len = (sample_rate as f64 * DECAY_SEC) as usize;
    let release_len = (sample_rate as f64 * RELEASE_SEC) as usize;
    let sustain_len = total_samples.saturating_sub(attack_len + decay_len + release_len);

    let mut envelope = Vec::with_capacity(attack_len + decay_len + sustain_len + release_len);
    ramp(&mut envelope, 0.0, 1.0, attack_len);
    ramp(&mut envelope, 1.0, SUSTAIN_LEVEL, decay_len);
    envelope.resize(envelope.len() + sustain_len, SUSTAIN_LEVEL);
    ramp(&mut envelope, SUSTAIN_LEVEL, 0.0, release_len);

    envelope.truncate(total_samples);
    envelope
}
