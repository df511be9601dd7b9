#![deny(unsafe_code)]
//! CLI binary for the chroma-trial perceptual difference engine.
//!
//! Subcommands:
//! - `diff <color>` — perturb a base color in a chosen model
//! - `round` — generate a full game round for a level
//! - `volumes` — re-derive the gamut-volume constants by Monte-Carlo
//! - `list` — print available color models

mod error;

use chroma_trial_core::{Rgb8, Xorshift64};
use chroma_trial_engine::{
    estimate_gamut_volume, perceptual_difference_detailed, ColorModel, Round, GRID_SIZE,
    MAX_ATTEMPTS,
};
use clap::{Parser, Subcommand};
use error::CliError;
use std::process;

#[derive(Parser)]
#[command(name = "chroma-trial", about = "Perceptual color difference CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Perturb a base color by a difficulty step in a color model.
    Diff {
        /// Base color as a hex string (e.g. "#808080").
        color: String,

        /// Color model name (RGB, CIELAB, Oklab, JzAzBz).
        #[arg(short, long, default_value = "CIELAB")]
        model: String,

        /// Difficulty in (0, 1].
        #[arg(short, long, default_value_t = 0.5)]
        difficulty: f64,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Generate a game round for a level.
    Round {
        /// 1-based game level.
        #[arg(short, long, default_value_t = 1)]
        level: u32,

        /// Fix the color model instead of drawing one at random.
        #[arg(short, long)]
        model: Option<String>,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Estimate each model's sRGB gamut volume by Monte-Carlo integration.
    Volumes {
        /// Samples per model.
        #[arg(short, long, default_value_t = 1_000_000)]
        samples: u64,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// List available color models.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let models = ColorModel::list_names();
            if cli.json {
                let info = serde_json::json!({ "models": models });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Models:");
                for name in models {
                    println!("  {name}");
                }
            }
        }
        Command::Diff {
            color,
            model,
            difficulty,
            seed,
        } => {
            let base = Rgb8::from_hex(&color).map_err(|e| CliError::Input(e.to_string()))?;
            let model = ColorModel::from_name(&model)?;
            if !(difficulty > 0.0 && difficulty <= 1.0) {
                return Err(CliError::Input(format!(
                    "difficulty must be in (0, 1], got {difficulty}"
                )));
            }

            let mut rng = Xorshift64::new(seed);
            let detail =
                perceptual_difference_detailed(base, model, difficulty, &mut rng, MAX_ATTEMPTS);

            if cli.json {
                let info = serde_json::json!({
                    "base": base.to_hex(),
                    "changed": detail.color.to_hex(),
                    "model": model.name(),
                    "difficulty": difficulty,
                    "seed": seed,
                    "attempts": detail.attempts,
                    "fallback": detail.fallback,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{} -> {} ({model}, difficulty {difficulty}, {} attempts{})",
                    base.to_hex(),
                    detail.color.to_hex(),
                    detail.attempts,
                    if detail.fallback { ", fallback" } else { "" }
                );
            }
        }
        Command::Round { level, model, seed } => {
            let mut rng = Xorshift64::new(seed);
            let round = match model {
                Some(name) => {
                    let model = ColorModel::from_name(&name)?;
                    Round::generate_with_model(level, model, &mut rng)
                }
                None => Round::generate(level, &mut rng),
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&round)?);
            } else {
                println!(
                    "level {level} ({}, difficulty {}): {} vs {} at ({}, {}) on a {GRID_SIZE}x{GRID_SIZE} grid",
                    round.color_model,
                    round.difficulty,
                    round.base_color.to_hex(),
                    round.changed_color.to_hex(),
                    round.changed_position.0,
                    round.changed_position.1,
                );
            }
        }
        Command::Volumes { samples, seed } => {
            let mut results = Vec::new();
            for model in ColorModel::ALL {
                let mut rng = Xorshift64::new(seed);
                let estimate = estimate_gamut_volume(model, samples, &mut rng);
                results.push((model, estimate));
            }

            if cli.json {
                let info: serde_json::Map<String, serde_json::Value> = results
                    .iter()
                    .map(|(m, v)| (m.name().to_string(), serde_json::json!(v)))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Gamut volumes ({samples} samples, seed {seed}):");
                for (model, estimate) in results {
                    println!(
                        "  {:<8} {estimate:>14.9}  (reference {:.9})",
                        model.name(),
                        model.gamut_volume()
                    );
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
