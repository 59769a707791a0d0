// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song catalog for TONEGEN.
//!
//! A song is a named note sequence plus playback timing (BPM and beat
//! subdivision). The builtin catalog embeds the reference song library
//! as read-only data; additional catalogs can be loaded from YAML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::TonegenError;

/// One song: timing plus the performed note sequence.
///
/// `division` is the beat subdivision: how many clip slots occupy one
/// beat at `bpm`. Notes are stored as raw tokens and parsed at render
/// time so that a bad token surfaces as a per-song error instead of
/// poisoning catalog construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Song {
    /// Song name; unique key and output directory name
    pub name: String,
    /// Tempo in beats per minute
    pub bpm: u32,
    /// Clip slots per beat
    pub division: u32,
    /// Performance sequence of note names, repeats included
    pub notes: Vec<String>,
}

impl Song {
    /// Check the catalog invariants: non-empty sequence, positive
    /// tempo and subdivision.
    pub fn validate(&self) -> Result<(), TonegenError> {
        let fail = |reason: &str| TonegenError::InvalidSong {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.notes.is_empty() {
            return Err(fail("note sequence is empty"));
        }
        if self.bpm == 0 {
            return Err(fail("bpm must be positive"));
        }
        if self.division == 0 {
            return Err(fail("division must be positive"));
        }
        Ok(())
    }
}

/// YAML file shape for user-supplied catalogs
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    songs: Vec<Song>,
}

/// Read-only collection of songs
#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Load a catalog from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read song file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a catalog from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml).context("Failed to parse song file")?;
        Ok(Self { songs: file.songs })
    }

    /// All songs in catalog order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Look up a song by name
    pub fn get(&self, name: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.name == name)
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the catalog has no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// The builtin song library.
    ///
    /// Note data is reference material for the game's sequencer; the
    /// sequences and timing values are fixed.
    pub fn builtin() -> Self {
        fn song(name: &str, bpm: u32, division: u32, notes: &[&str]) -> Song {
            Song {
                name: name.to_string(),
                bpm,
                division,
                notes: notes.iter().map(|n| n.to_string()).collect(),
            }
        }

        let songs = vec![
            song(
                "Astronomia_CoffinDance",
                132,
                2,
                &[
                    "F4", "F4", "F4", "F4", "C5", "A#4", "A4", "G4", "F4", "C5", "A#4", "A4",
                    "G4", "F4", "C5", "A#4", "A4", "G4", "E4", "E4", "D4", "D4", "C4", "C4",
                    "F4", "F4", "F4", "F4", "C5", "A#4", "A4", "G4", "F4", "C5", "A#4", "A4",
                    "G4", "F4", "C5", "A#4", "A4", "G4", "E4", "E4", "D4", "D4", "C4", "G4",
                ],
            ),
            song(
                "Megalovania",
                120,
                4,
                &[
                    "D4", "D4", "D5", "A4", "G#4", "G4", "F4", "D4", "F4", "G4", "C4", "C4",
                    "D5", "A4", "G#4", "G4", "F4", "D4", "F4", "G4", "B3", "B3", "D5", "A4",
                    "G#4", "G4", "F4", "D4", "F4", "G4", "A#3", "A#3", "D5", "A4", "G#4", "G4",
                    "F4", "D4", "F4", "G4",
                ],
            ),
            song(
                "Tetris_Korobeiniki",
                140,
                2,
                &[
                    "E5", "B4", "C5", "D5", "C5", "B4", "A4", "A4", "C5", "E5", "D5", "C5",
                    "B4", "B4", "C5", "D5", "E5", "C5", "A4", "A4", "D5", "F5", "A5", "G5",
                    "F5", "E5", "C5", "E5", "D5", "C5", "B4", "B4", "C5", "D5", "E5", "C5",
                    "A4", "A4",
                ],
            ),
            song(
                "Sandstorm",
                136,
                4,
                &[
                    "B4", "B4", "B4", "B4", "B4", "B4", "B4", "B4", "B4", "B4", "B4", "B4",
                    "E4", "E4", "E4", "E4", "E4", "E4", "E4", "D4", "D4", "D4", "D4", "D4",
                    "D4", "D4", "A4", "A4", "B4", "B4", "B4", "B4", "B4",
                ],
            ),
            song(
                "Running_In_The_90s",
                158,
                2,
                &[
                    "C#5", "C#5", "C#5", "B4", "A4", "G#4", "A4", "B4", "C#5", "C#5", "C#5",
                    "B4", "A4", "G#4", "F#4", "F#4", "C#5", "C#5", "C#5", "B4", "A4", "G#4",
                    "A4", "B4", "C#5", "B4", "C#5", "E5", "F#5", "E5", "F#5", "G#5",
                ],
            ),
            song(
                "Blue_DaBaDee",
                128,
                2,
                &[
                    "G4", "A#4", "G4", "D5", "C5", "C5", "G4", "F4", "G4", "A#4", "G4", "C#5",
                    "C5", "A#4", "G4", "F4", "G4", "A#4", "G4", "A#4", "G4", "D5", "C5", "C5",
                    "G4", "F4", "G4", "A#4",
                ],
            ),
            song(
                "Crab_Rave",
                125,
                4,
                &[
                    "D4", "A#4", "G4", "G4", "D4", "D4", "D4", "A#4", "G4", "G4", "D4", "D4",
                    "D4", "A#4", "G4", "G4", "D4", "F4", "F4", "F4", "F4", "D#4", "D#4",
                    "D#4", "D#4", "D4", "A#4", "G4", "G4",
                ],
            ),
            song(
                "WilliamTell_Finale",
                150,
                2,
                &[
                    "B3", "B3", "B3", "B3", "B3", "B3", "G#4", "B4", "G#4", "B4", "G#4", "E4",
                    "D#4", "F#4", "B4", "F#4", "B4", "F#4", "D#4", "B4", "G#4", "B4", "G#4",
                    "E4", "G#4", "B4", "E5", "B4", "G#4", "E4", "B4", "E4",
                ],
            ),
            song(
                "NyanCat",
                144,
                2,
                &[
                    "F#4", "G#4", "D#4", "D#4", "B3", "D4", "C#4", "B3", "B3", "C#4", "D4",
                    "D4", "C#4", "B3", "C#4", "D#4", "F#4", "G#4", "D#4", "F#4", "C#4", "D#4",
                    "B3", "C#4", "B3", "D#5", "E5", "F#5", "C#6", "D#6", "E6", "D#6", "C#6",
                    "C#6", "B5", "C#6", "D#6", "F#6", "C#6", "D#6", "C#6", "B5", "C#6", "D#6",
                    "F#6",
                ],
            ),
            song(
                "SuperMario_Theme",
                100,
                2,
                &[
                    "E5", "E5", "E5", "C5", "E5", "G5", "G4", "C5", "G4", "E4", "A4", "B4",
                    "A#4", "A4", "G4", "E5", "G5", "A5", "F5", "G5", "E5", "C5", "D5", "B4",
                    "C5", "G4", "C5",
                ],
            ),
        ];

        Self { songs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 10);
        for song in catalog.songs() {
            assert!(song.validate().is_ok(), "builtin song {:?}", song.name);
        }
    }

    #[test]
    fn test_builtin_lookup() {
        let catalog = Catalog::builtin();
        let tetris = catalog.get("Tetris_Korobeiniki").unwrap();
        assert_eq!(tetris.bpm, 140);
        assert_eq!(tetris.division, 2);
        assert_eq!(tetris.notes.len(), 38);
        assert!(catalog.get("NoSuchSong").is_none());
    }

    #[test]
    fn test_builtin_notes_all_parse() {
        use crate::music::NoteName;

        let catalog = Catalog::builtin();
        for song in catalog.songs() {
            for token in &song.notes {
                assert!(
                    token.parse::<NoteName>().is_ok(),
                    "song {:?} token {:?}",
                    song.name,
                    token
                );
            }
        }
    }

    #[test]
    fn test_validate_rejects_empty_sequence() {
        let song = Song {
            name: "Empty".to_string(),
            bpm: 120,
            division: 2,
            notes: vec![],
        };
        assert!(song.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timing() {
        let song = Song {
            name: "NoTempo".to_string(),
            bpm: 0,
            division: 2,
            notes: vec!["C4".to_string()],
        };
        assert!(song.validate().is_err());

        let song = Song {
            name: "NoDivision".to_string(),
            bpm: 120,
            division: 0,
            notes: vec!["C4".to_string()],
        };
        assert!(song.validate().is_err());
    }

    #[test]
    fn test_yaml_catalog() {
        let yaml = r#"
songs:
  - name: Scale_Test
    bpm: 90
    division: 2
    notes: [C4, D4, E4, F4]
  - name: One_Note
    bpm: 60
    division: 1
    notes: [A4]
"#;
        let catalog = Catalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.len(), 2);
        let song = catalog.get("Scale_Test").unwrap();
        assert_eq!(song.bpm, 90);
        assert_eq!(song.notes, vec!["C4", "D4", "E4", "F4"]);
    }

    #[test]
    fn test_yaml_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songs.yaml");
        fs::write(
            &path,
            "songs:\n  - name: X\n    bpm: 100\n    division: 2\n    notes: [C4]\n",
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
