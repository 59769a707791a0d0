// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Render configuration for TONEGEN.
//!
//! All process-wide synthesis constants live in an explicit
//! [`RenderConfig`] passed into the engine and the batch renderer,
//! never in mutable globals. Settings can be loaded from a TOML file;
//! missing fields fall back to the reference defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Render settings shared by the synthesis engine and batch renderer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Output sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Peak amplitude of quantized clips (signed 16-bit headroom)
    #[serde(default = "default_amplitude_ceiling")]
    pub amplitude_ceiling: i16,
    /// Length of every rendered note in seconds
    #[serde(default = "default_note_duration_sec")]
    pub note_duration_sec: f64,
    /// Directory that receives one subdirectory per song
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
}

fn default_sample_rate() -> u32 {
    44100
}
fn default_amplitude_ceiling() -> i16 {
    20000
}
fn default_note_duration_sec() -> f64 {
    0.35
}
fn default_output_root() -> PathBuf {
    PathBuf::from("GeneratedMusic")
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            amplitude_ceiling: default_amplitude_ceiling(),
            note_duration_sec: default_note_duration_sec(),
            output_root: default_output_root(),
        }
    }
}

impl RenderConfig {
    /// Load render settings from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse render settings from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("Failed to parse TOML configuration")
    }

    /// Check that the settings describe a renderable configuration
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            bail!("sample_rate must be positive");
        }
        if self.amplitude_ceiling <= 0 {
            bail!("amplitude_ceiling must be positive");
        }
        if self.note_duration_sec <= 0.0 {
            bail!("note_duration_sec must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.amplitude_ceiling, 20000);
        assert_eq!(config.note_duration_sec, 0.35);
        assert_eq!(config.output_root, PathBuf::from("GeneratedMusic"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = RenderConfig::from_toml("sample_rate = 22050\n").unwrap();
        assert_eq!(config.sample_rate, 22050);
        assert_eq!(config.amplitude_ceiling, 20000);
        assert_eq!(config.note_duration_sec, 0.35);
    }

    #[test]
    fn test_full_toml() {
        let toml_str = r#"
            sample_rate = 48000
            amplitude_ceiling = 16000
            note_duration_sec = 0.5
            output_root = "out/music"
        "#;
        let config = RenderConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.sample_rate, 48000);
        assert_eq!(config.amplitude_ceiling, 16000);
        assert_eq!(config.note_duration_sec, 0.5);
        assert_eq!(config.output_root, PathBuf::from("out/music"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = RenderConfig {
            sample_rate: 0,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RenderConfig {
            note_duration_sec: 0.0,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RenderConfig {
            amplitude_ceiling: 0,
            ..RenderConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tonegen.toml");
        fs::write(&path, "note_duration_sec = 0.25\n").unwrap();

        let config = RenderConfig::load(&path).unwrap();
        assert_eq!(config.note_duration_sec, 0.25);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RenderConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed = RenderConfig::from_toml(&serialized).unwrap();
        assert_eq!(parsed, config);
    }
}
