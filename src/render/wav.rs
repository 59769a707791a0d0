// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! WAV clip output.
//!
//! Clips are single-channel, signed 16-bit PCM at the configured
//! sample rate, written with hound.

use std::path::Path;

use crate::error::Result;

/// Write mono 16-bit samples to a WAV file
pub fn write_clip<P: AsRef<Path>>(path: P, samples: &[i16], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}
