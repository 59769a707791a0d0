// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note names and frequency resolution.
//!
//! A note name is a pitch class plus an octave digit ("C4", "A#5").
//! Resolution to Hz uses 12-tone equal temperament anchored at
//! A4 = 440 Hz = MIDI note 69.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TonegenError;

/// Reference pitch: A4 in Hz
pub const A4_FREQ_HZ: f64 = 440.0;

/// MIDI note number of A4
pub const A4_MIDI: u8 = 69;

/// Pitch classes in sharp spelling.
///
/// Flat spellings ("Bb", "Db", ...) are deliberately not accepted
/// anywhere; song data is assumed to use sharps, and a flat token is a
/// parse error rather than a silent remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Cs, // C#
    D,
    Ds, // D#
    E,
    F,
    Fs, // F#
    G,
    Gs, // G#
    A,
    As, // A#
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order starting at C
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Zero-based index in the chromatic ordering (C = 0, B = 11)
    pub fn chromatic_index(self) -> u8 {
        match self {
            PitchClass::C => 0,
            PitchClass::Cs => 1,
            PitchClass::D => 2,
            PitchClass::Ds => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::Fs => 6,
            PitchClass::G => 7,
            PitchClass::Gs => 8,
            PitchClass::A => 9,
            PitchClass::As => 10,
            PitchClass::B => 11,
        }
    }

    /// Parse a pitch-class token ("C", "C#", ... sharps only)
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "C" => Some(PitchClass::C),
            "C#" => Some(PitchClass::Cs),
            "D" => Some(PitchClass::D),
            "D#" => Some(PitchClass::Ds),
            "E" => Some(PitchClass::E),
            "F" => Some(PitchClass::F),
            "F#" => Some(PitchClass::Fs),
            "G" => Some(PitchClass::G),
            "G#" => Some(PitchClass::Gs),
            "A" => Some(PitchClass::A),
            "A#" => Some(PitchClass::As),
            "B" => Some(PitchClass::B),
            _ => None,
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        };
        write!(f, "{}", name)
    }
}

/// A concrete musical note: pitch class plus octave digit.
///
/// The textual form is `<PitchClass><Octave>` with a single octave
/// digit ("C4", "A#5"). `Display` round-trips the canonical spelling,
/// which is also the clip filename stem used by the batch renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteName {
    pub pitch_class: PitchClass,
    pub octave: u8,
}

impl NoteName {
    /// Create a note from pitch class and octave
    pub fn new(pitch_class: PitchClass, octave: u8) -> Self {
        Self {
            pitch_class,
            octave,
        }
    }

    /// MIDI note number: `12 + octave*12 + chromatic_index`
    pub fn midi_number(self) -> u8 {
        12 + self.octave * 12 + self.pitch_class.chromatic_index()
    }

    /// Fundamental frequency in Hz (equal temperament, A4 = 440 Hz)
    pub fn frequency(self) -> f64 {
        let semitones = self.midi_number() as f64 - A4_MIDI as f64;
        A4_FREQ_HZ * 2.0_f64.powf(semitones / 12.0)
    }
}

impl FromStr for NoteName {
    type Err = TonegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TonegenError::InvalidNoteName(s.to_string());

        let mut chars = s.chars();
        let octave_char = chars.next_back().ok_or_else(invalid)?;
        let octave = octave_char.to_digit(10).ok_or_else(invalid)? as u8;

        let pitch_class = PitchClass::from_token(chars.as_str()).ok_or_else(invalid)?;

        Ok(NoteName {
            pitch_class,
            octave,
        })
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}
