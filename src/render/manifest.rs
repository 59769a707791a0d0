// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Playback manifest emission.
//!
//! The manifest is a read-only projection of a song consumed by the
//! game's audio sequencer: tempo, beat subdivision, and the ordered
//! clip filenames (repeats included). Field names are part of the
//! external JSON contract and must not change.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Song;
use crate::error::Result;

/// JSON playback manifest for one song
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Song name
    pub song_name: String,
    /// Tempo in beats per minute
    pub bpm: u32,
    /// Clip slots per beat
    pub division: u32,
    /// Clip filenames in performance order, one per sequence entry
    pub clip_sequence: Vec<String>,
}

impl Manifest {
    /// Build the manifest for a song, referencing `<note>.wav` clips
    /// in the song's original sequence order.
    pub fn for_song(song: &Song) -> Self {
        Self {
            song_name: song.name.clone(),
            bpm: song.bpm,
            division: song.division,
            clip_sequence: song.notes.iter().map(|n| format!("{}.wav", n)).collect(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a manifest from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the manifest to a file
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
