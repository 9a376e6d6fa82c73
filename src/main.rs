#![warn(non_snake_case)]
//! # level_gen
//!
//! Writes a procedurally generated platformer level as a Tiled TMX map. The
//! obstacle track is random; everything else comes from the configuration
//! (built-in defaults, optionally overridden by a JSON file and flags).
//!
//! Set `RUST_LOG=debug` to see every placed obstacle.

use clap::Parser;
use level_gen::{generate, GeneratorConfig, LevelError};
use log::{error, info};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

/// Procedural level generator for the platformer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file overriding any subset of the generator settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed; a fresh one is picked and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Destination map file. Its directory must already exist
    #[arg(long, short, default_value = "assets/maps/level1.tmx")]
    output: PathBuf,

    /// Override the levelName map property
    #[arg(long)]
    level_name: Option<String>,

    /// Write the map to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn load_config(args: &Args) -> Result<GeneratorConfig, LevelError> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_json_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(name) = &args.level_name {
        config.level_name = name.clone();
    }
    Ok(config)
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(&args)?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let text = generate(args.seed, &config)?;
    if args.stdout {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
    } else {
        level_gen::document::write_level_text(&args.output, &text)?;
    }
    Ok(())
}

fn main() {
    // Initialize logging.
    env_logger::init();
    info!("level_gen starting...");

    if let Err(e) = run(Args::parse()) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
