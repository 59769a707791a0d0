// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! TONEGEN - offline game music asset generator.
//!
//! Synthesizes short analog-style instrument tones for the notes of a
//! song catalog, writes each unique note as a standalone WAV clip, and
//! emits a per-song JSON playback manifest (tempo, beat subdivision,
//! ordered clip sequence) for the game's audio sequencer.

pub mod catalog;
pub mod config;
pub mod error;
pub mod music;
pub mod render;
pub mod synth;

pub use catalog::{Catalog, Song};
pub use config::RenderConfig;
pub use error::{Result, TonegenError};
pub use music::{NoteName, PitchClass};
pub use render::{BatchRenderer, BatchSummary, Manifest};
