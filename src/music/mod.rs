// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Musical pitch system for TONEGEN.
//!
//! This module provides note-name parsing and the 12-tone equal
//! temperament mapping from note names to fundamental frequencies.

pub mod pitch;

pub use pitch::{NoteName, PitchClass};
