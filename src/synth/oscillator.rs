// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Oscillator bank for the analog-style instrument voice.
//!
//! Three band-distinct waveforms are mixed with fixed weights. The
//! weights define the instrument's timbre and are part of the asset
//! format: changing them changes every generated clip, so they stay
//! exactly as written.

use std::f64::consts::TAU;

/// Mix weight of the sine oscillator (fundamental body)
pub const SINE_WEIGHT: f64 = 0.5;

/// Mix weight of the square oscillator (thickness)
pub const SQUARE_WEIGHT: f64 = 0.3;

/// Mix weight of the sawtooth oscillator (edge)
pub const SAWTOOTH_WEIGHT: f64 = 0.2;

/// Sine wave at frequency `freq` evaluated at time `t`
pub fn sine(freq: f64, t: f64) -> f64 {
    (TAU * freq * t).sin()
}

/// Square wave derived from the sine's sign.
///
/// An exactly-zero sine sample maps to 0, not ±1. `f64::signum`
/// returns 1.0 for +0.0, so the zero case is handled explicitly.
pub fn square(freq: f64, t: f64) -> f64 {
    let s = sine(freq, t);
    if s == 0.0 {
        0.0
    } else {
        s.signum()
    }
}

/// Unit-amplitude sawtooth ramp repeating at period `1/freq`
pub fn sawtooth(freq: f64, t: f64) -> f64 {
    let phase = freq * t;
    2.0 * (phase - (phase + 0.5).floor())
}

/// Weighted three-oscillator mix at time `t`
pub fn mixed(freq: f64, t: f64) -> f64 {
    SINE_WEIGHT * sine(freq, t) + SQUARE_WEIGHT * square(freq, t) + SAWTOOTH_WEIGHT * sawtooth(freq, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert_eq!(SINE_WEIGHT + SQUARE_WEIGHT + SAWTOOTH_WEIGHT, 1.0);
    }

    #[test]
    fn test_sine_bounds() {
        for i in 0..1000 {
            let t = i as f64 / 44100.0;
            let s = sine(440.0, t);
            assert!((-1.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn test_square_zero_maps_to_zero() {
        // sin(0) == 0 exactly, so the square wave starts at 0
        assert_eq!(square(440.0, 0.0), 0.0);
    }

    #[test]
    fn test_square_is_sign_of_sine() {
        for i in 1..1000 {
            let t = i as f64 / 44100.0;
            let s = sine(440.0, t);
            let q = square(440.0, t);
            if s > 0.0 {
                assert_eq!(q, 1.0);
            } else if s < 0.0 {
                assert_eq!(q, -1.0);
            } else {
                assert_eq!(q, 0.0);
            }
        }
    }

    #[test]
    fn test_sawtooth_range_and_period() {
        let f = 100.0;
        for i in 0..2000 {
            let t = i as f64 / 44100.0;
            let s = sawtooth(f, t);
            assert!((-1.0..=1.0).contains(&s));
        }
        // One full period apart gives the same sample
        let a = sawtooth(f, 0.0021);
        let b = sawtooth(f, 0.0021 + 1.0 / f);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_bounded_by_weight_sum() {
        for i in 0..5000 {
            let t = i as f64 / 44100.0;
            let m = mixed(261.63, t);
            assert!(m.abs() <= SINE_WEIGHT + SQUARE_WEIGHT + SAWTOOTH_WEIGHT + 1e-12);
        }
    }
}
