// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for TONEGEN.

use thiserror::Error;

/// Errors raised while resolving notes or rendering songs.
///
/// `InvalidNoteName` and `InvalidSong` are fatal for the song being
/// rendered but recoverable at the batch level; the batch logs the
/// failure and moves on to the next song.
#[derive(Debug, Error)]
pub enum TonegenError {
    /// Note token does not parse to a known pitch class and octave.
    /// Flat spellings (e.g. "Bb4") are unsupported by design.
    #[error("invalid note name: {0:?}")]
    InvalidNoteName(String),

    /// Song violates a catalog invariant (empty sequence, zero tempo
    /// or subdivision).
    #[error("invalid song {name:?}: {reason}")]
    InvalidSong { name: String, reason: String },

    /// Directory or file write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// WAV encoding failure.
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// Manifest serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TonegenError>;
