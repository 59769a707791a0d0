// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tonegen::{BatchRenderer, Catalog, RenderConfig};

fn print_usage() {
    println!("TONEGEN - Game Music Asset Generator");
    println!();
    println!("Usage: tonegen [OPTIONS]");
    println!();
    println!("Renders every song in the catalog to WAV clips plus a JSON");
    println!("playback manifest under the output root.");
    println!();
    println!("Options:");
    println!("  --list-songs       List the songs in the catalog");
    println!("  --song <NAME>      Render a single song by name");
    println!("  --songs <FILE>     Use a YAML song file instead of the builtin catalog");
    println!("  --config <FILE>    Load render settings from a TOML file");
    println!("  --output <DIR>     Override the output root directory");
    println!("  --help             Show this help message");
}

struct Options {
    list_songs: bool,
    song: Option<String>,
    songs_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        list_songs: false,
        song: None,
        songs_file: None,
        config_file: None,
        output: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list-songs" => options.list_songs = true,
            "--song" => {
                i += 1;
                let name = args.get(i).ok_or_else(|| {
                    anyhow::anyhow!("--song requires a song name (use --list-songs)")
                })?;
                options.song = Some(name.clone());
            }
            "--songs" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--songs requires a file path"))?;
                options.songs_file = Some(PathBuf::from(path));
            }
            "--config" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_file = Some(PathBuf::from(path));
            }
            "--output" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--output requires a directory"))?;
                options.output = Some(PathBuf::from(path));
            }
            other => bail!("Unknown option: {}", other),
        }
        i += 1;
    }

    Ok(options)
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    let mut config = match &options.config_file {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if let Some(output) = options.output {
        config.output_root = output;
    }

    let catalog = match &options.songs_file {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    if options.list_songs {
        println!("Songs ({}):", catalog.len());
        for song in catalog.songs() {
            println!(
                "  {:<25} {:>3} BPM  div {}  {} notes",
                song.name,
                song.bpm,
                song.division,
                song.notes.len()
            );
        }
        return Ok(());
    }

    let renderer = BatchRenderer::new(config);

    if let Some(name) = &options.song {
        let Some(song) = catalog.get(name) else {
            bail!("Song not found: {} (use --list-songs)", name);
        };
        let rendered = renderer.render_song(song)?;
        println!(
            "Rendered {} ({} clips) -> {}",
            rendered.name,
            rendered.clips_written,
            rendered.manifest_path.display()
        );
        return Ok(());
    }

    let summary = renderer.render_all(&catalog);

    println!(
        "Done: {} songs rendered, {} clips written, {} failed",
        summary.rendered.len(),
        summary.total_clips(),
        summary.failures.len()
    );
    for (name, error) in &summary.failures {
        eprintln!("  FAILED {}: {}", name, error);
    }

    if summary.rendered.is_empty() && !summary.failures.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
