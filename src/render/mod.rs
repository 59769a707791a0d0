// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Batch renderer for TONEGEN.
//!
//! Turns catalog songs into on-disk assets: one WAV clip per unique
//! note plus a JSON playback manifest per song. Processing is a
//! sequential, bounded batch; a failed song is reported and skipped
//! so the rest of the batch still completes.

pub mod manifest;
pub mod wav;

pub use manifest::Manifest;

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::{error, info};

use crate::catalog::{Catalog, Song};
use crate::config::RenderConfig;
use crate::error::{Result, TonegenError};
use crate::music::NoteName;
use crate::synth;

/// Result of rendering one song
#[derive(Debug)]
pub struct RenderedSong {
    /// Song name
    pub name: String,
    /// Number of unique-note clips written
    pub clips_written: usize,
    /// Path of the emitted manifest
    pub manifest_path: PathBuf,
}

/// Outcome of a whole batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Songs rendered successfully
    pub rendered: Vec<RenderedSong>,
    /// Failed songs with their causes
    pub failures: Vec<(String, TonegenError)>,
}

impl BatchSummary {
    /// Total clips written across the batch
    pub fn total_clips(&self) -> usize {
        self.rendered.iter().map(|r| r.clips_written).sum()
    }
}

/// Renders songs to WAV clips and manifests under the output root
pub struct BatchRenderer {
    config: RenderConfig,
}

impl BatchRenderer {
    /// Create a renderer with the given settings
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The renderer's settings
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one song: clips for each unique note plus the manifest.
    ///
    /// The whole sequence is parsed before anything is written, so an
    /// unresolvable note aborts the song without leaving a manifest
    /// that references missing clips.
    pub fn render_song(&self, song: &Song) -> Result<RenderedSong> {
        song.validate()?;

        // Parse up front; dedup in sorted order for deterministic
        // processing. The map key is the canonical token, which is
        // also the clip filename stem.
        let mut unique: BTreeMap<String, NoteName> = BTreeMap::new();
        for token in &song.notes {
            let note: NoteName = token.parse()?;
            unique.insert(note.to_string(), note);
        }

        let song_dir = self.config.output_root.join(&song.name);
        fs::create_dir_all(&song_dir)?;

        for (token, note) in &unique {
            let samples = synth::synthesize(note.frequency(), self.config.note_duration_sec, &self.config);
            wav::write_clip(song_dir.join(format!("{}.wav", token)), &samples, self.config.sample_rate)?;
        }

        let manifest_path = song_dir.join(format!("{}_Sequence.json", song.name));
        Manifest::for_song(song).write(&manifest_path)?;

        info!(
            song = %song.name,
            bpm = song.bpm,
            unique_notes = unique.len(),
            "rendered song"
        );

        Ok(RenderedSong {
            name: song.name.clone(),
            clips_written: unique.len(),
            manifest_path,
        })
    }

    /// Render every song in the catalog sequentially.
    ///
    /// Failures are logged and collected; they never abort the batch.
    /// No retries: all work is local and deterministic, so a retry
    /// would reproduce the identical error.
    pub fn render_all(&self, catalog: &Catalog) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for song in catalog.songs() {
            match self.render_song(song) {
                Ok(rendered) => summary.rendered.push(rendered),
                Err(e) => {
                    error!(song = %song.name, error = %e, "song failed to render");
                    summary.failures.push((song.name.clone(), e));
                }
            }
        }

        summary
    }
}
