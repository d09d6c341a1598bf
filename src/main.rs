//! drumgen: procedural drum kit sample generator.
//!
//! Generates a set of short percussive WAV samples from a voice table,
//! either the built-in ten-piece kit or a user-supplied JSON kit file.

use drumgen::cli::Cli;
use drumgen::error::{GenError, Result};
use drumgen::kit::{generate_kit, Kit};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let kit = cli.resolve_kit()?;
    let format = cli.format();
    format.validate()?;

    if cli.list {
        print_kit(&kit);
        return Ok(());
    }

    let out_dir = cli.output_dir();

    eprintln!("Generating {} voice(s) to {}...", kit.len(), out_dir.display());

    let report = generate_kit(&kit, &format, &out_dir)?;

    for voice in &report.written {
        let descriptor = &kit[&voice.name];
        eprintln!(
            "  Generated {}.wav ({}ms @ {}Hz, {} samples)",
            voice.name, descriptor.duration_ms, descriptor.start_frequency_hz, voice.sample_count
        );
    }

    for (name, err) in &report.failures {
        eprintln!("  Failed {}: {}", name, err);
    }

    eprintln!();
    if report.all_succeeded() {
        eprintln!(
            "Kit generation complete. {} file(s) in {}",
            report.written.len(),
            out_dir.display()
        );
        Ok(())
    } else {
        // Exit with the code of the first failure; details were already
        // printed per voice.
        let code = report.failures[0].1.code;
        Err(GenError::new(
            code,
            format!("{} of {} voice(s) failed", report.failures.len(), kit.len()),
        ))
    }
}

/// Prints the effective kit table to stderr.
fn print_kit(kit: &Kit) {
    eprintln!("{} voice(s):", kit.len());
    for (name, v) in kit {
        if v.is_swept() {
            eprintln!(
                "  {:<14} {} -> {}Hz, {}ms, decay={}, amplitude={}",
                name,
                v.start_frequency_hz,
                v.end_frequency(),
                v.duration_ms,
                v.decay,
                v.amplitude
            );
        } else {
            eprintln!(
                "  {:<14} {}Hz, {}ms, decay={}, amplitude={}",
                name, v.start_frequency_hz, v.duration_ms, v.decay, v.amplitude
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drumgen::kit::builtin_kit;

    #[test]
    fn print_kit_doesnt_panic() {
        print_kit(&builtin_kit());
    }

    #[test]
    fn default_format_is_valid() {
        drumgen::types::AudioFormat::default().validate().unwrap();
    }
}
