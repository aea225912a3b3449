// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Result};
use pitchcore::music::notation::mode_names;
use pitchcore::{
    KeySignature, PitchConfig, PitchNotation, Recover, StandardTemperament, Temperament,
};
use std::env;
use tracing::Level;

const NOTATIONS: [PitchNotation; 4] = [
    PitchNotation::Letter,
    PitchNotation::Solfege,
    PitchNotation::EastIndianSolfege,
    PitchNotation::ScalarModeNumber,
];

fn print_usage() {
    println!("PITCHCORE - Pitch notation and tuning toolkit");
    println!();
    println!("Usage: pitchcore [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --scale <KEY> [MODE]               Print the key signature (default mode: major)");
    println!("  --convert <NAME> [KEY] [MODE]      Print the generic name and frequency at octave 4");
    println!("  --transpose <NAME> <STEPS> [KEY] [MODE] [--scalar]");
    println!("                                     Transpose by semitones, or scale degrees with --scalar");
    println!("  --config <FILE>                    Load a YAML or TOML session and print its pitch");
    println!("  --modes                            List the known mode names");
    println!("  --verbose                          Enable debug logging");
    println!("  --help                             Show this help message");
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Key and mode from the trailing arguments; a mode may span several words
fn key_signature_from(args: &[String]) -> KeySignature {
    let key = args.first().map(String::as_str).unwrap_or("c");
    let mode = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "major".to_string()
    };
    KeySignature::new(mode, key, 12)
}

fn show_scale(args: &[String]) {
    let key_signature = key_signature_from(args);
    println!("{}", key_signature);
    println!("Generic:  {}", key_signature.generic_scale().join(" "));
    println!("Solfege:  {}", key_signature.solfege_notes().join(" "));
    println!("Sargam:   {}", key_signature.east_indian_solfege_notes().join(" "));
    println!("Degrees:  {}", key_signature.scalar_mode_numbers().join(" "));
}

fn show_conversion(name: &str, args: &[String]) -> Result<()> {
    let key_signature = key_signature_from(args);
    let generic = key_signature
        .convert_to_generic_note_name(name)
        .map_err(|e| anyhow!("Cannot convert {}: {}", name, e))?;
    let temperament = StandardTemperament::default();
    let freq = temperament.freq_by_generic_note_name_and_octave(&generic, 4);

    println!("{} ({}) in {}", name, key_signature.pitch_name_type(name), key_signature);
    println!("  generic: {}", generic);
    for notation in NOTATIONS {
        let rendered = key_signature.generic_note_name_convert_to_type(&generic, notation, true);
        println!("  {}: {}", notation, rendered);
    }
    println!("  frequency at octave 4: {:.2} Hz", freq);
    Ok(())
}

fn show_transposition(name: &str, steps: &str, args: &[String], scalar: bool) -> Result<()> {
    let steps: i32 = steps
        .parse()
        .map_err(|_| anyhow!("Invalid step count: {}", steps))?;
    let key_signature = key_signature_from(args);
    let (pitch, delta_octave) = if scalar {
        key_signature.scalar_transform(name, steps)
    } else {
        key_signature.semitone_transform(name, steps).recover()
    };
    let kind = if scalar { "scale degrees" } else { "semitones" };
    println!(
        "{} moved {} {} in {}: {} (octave {:+})",
        name, steps, kind, key_signature, pitch, delta_octave
    );
    Ok(())
}

fn show_config(path: &str) -> Result<()> {
    let config = PitchConfig::load(path)?;
    config.validate()?;
    let pitch = config.build_current_pitch()?;
    println!("{}", pitch.key_signature());
    println!(
        "Temperament: {} ({} notes per octave)",
        pitch.temperament().name(),
        pitch.temperament().number_of_semitones_in_octave()
    );
    println!(
        "Current pitch: {} octave {} number {} ({:.2} Hz)",
        pitch.generic_name(),
        pitch.octave(),
        pitch.number(),
        pitch.freq()
    );
    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().collect();

    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    args.retain(|a| a != "--verbose" && a != "-v");
    init_logging(verbose);

    if args.len() < 2 {
        println!("PITCHCORE - Pitch notation and tuning toolkit");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--scale" => {
            if args.len() < 3 {
                eprintln!("Error: --scale requires a key");
                std::process::exit(1);
            }
            show_scale(&args[2..]);
        }
        "--convert" => {
            if args.len() < 3 {
                eprintln!("Error: --convert requires a pitch name");
                std::process::exit(1);
            }
            show_conversion(&args[2], &args[3..])?;
        }
        "--transpose" => {
            let scalar = args.iter().any(|a| a == "--scalar");
            args.retain(|a| a != "--scalar");
            if args.len() < 4 {
                eprintln!("Error: --transpose requires a pitch name and a step count");
                std::process::exit(1);
            }
            show_transposition(&args[2], &args[3], &args[4..], scalar)?;
        }
        "--config" => {
            if args.len() < 3 {
                eprintln!("Error: --config requires a file path");
                std::process::exit(1);
            }
            show_config(&args[2])?;
        }
        "--modes" => {
            for name in mode_names() {
                println!("{}", name);
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
