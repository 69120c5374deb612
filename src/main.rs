use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

use temperaments::carlos::{CarlosScale, CarlosVariant, CarlosWeights};
use temperaments::catalogue::ReferenceCatalogue;
use temperaments::equal::EqualDivision;
use temperaments::generator::Generator;
use temperaments::helpers::ScaleError;
use temperaments::orwell::{Orwell, OrwellGenerator};
use temperaments::report;

/// Generate tempered scales and fit just intervals onto them
#[derive(Parser)]
#[command(version)]
struct MainOptions {
    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = Format::Table)]
    format: Format,

    #[command(subcommand)]
    command: MainCommand,
}

#[derive(Subcommand)]
enum MainCommand {
    /// Equal division of the octave into N steps
    Edo {
        divisions: u32,
        /// Frequency of the root in Hz
        #[arg(long, default_value_t = 261.625)]
        reference_hz: f64,
    },
    /// One of Wendy Carlos's scales: a | b | g | d | pq41 | pq53 | pq65
    Carlos { variant: CarlosVariant },
    /// A Carlos scale with custom fifth, major third and minor third weights
    CarlosCustom {
        fifths: u32,
        major_thirds: u32,
        minor_thirds: u32,
        nb_steps: u32,
    },
    /// Orwell scale of N notes; method is calc or <generator steps>-<edo>, e.g. 7-31
    Orwell {
        nb_steps: u32,
        method: OrwellGenerator,
    },
    /// Harry Partch's 43-tone just scale
    Partch,
    /// Read the scale request from a JSON file
    Request { file: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Full table, top step first
    Table,
    /// Placed ratios only
    Placed,
    /// Step cents only
    Cents,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Scale(#[from] ScaleError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl MainCommand {
    fn to_generator(&self) -> Result<Generator, CliError> {
        Ok(match *self {
            MainCommand::Edo {
                divisions,
                reference_hz,
            } => Generator::EqualDivision(EqualDivision::new(divisions, reference_hz)),
            MainCommand::Carlos { variant } => Generator::CarlosVariant { variant },
            MainCommand::CarlosCustom {
                fifths,
                major_thirds,
                minor_thirds,
                nb_steps,
            } => Generator::Carlos(CarlosScale::new(
                CarlosWeights::new(fifths, major_thirds, minor_thirds),
                nb_steps,
            )),
            MainCommand::Orwell { nb_steps, method } => {
                Generator::Orwell(Orwell::new(nb_steps, method))
            }
            MainCommand::Partch => Generator::Partch,
            MainCommand::Request { ref file } => {
                serde_json::from_reader(BufReader::new(File::open(file)?))?
            }
        })
    }
}

impl MainOptions {
    fn run(self, output: &mut impl Write) -> Result<(), CliError> {
        let generator = self.command.to_generator()?;
        log::info!("running {}", generator.name());
        let catalogue = ReferenceCatalogue::default();
        let annotated = generator.annotate(&catalogue)?;
        let rows = report::rows(&annotated);
        match self.format {
            Format::Table => report::write_table(output, &rows)?,
            Format::Placed => report::write_placed(output, &rows)?,
            Format::Cents => report::write_cents(output, &rows)?,
            Format::Json => {
                report::write_json(output, &rows)?;
                writeln!(output)?;
            }
        }
        Ok(())
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let options = MainOptions::parse();
    let stdout = io::stdout();
    if let Err(err) = options.run(&mut stdout.lock()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String, CliError> {
        let options = MainOptions::try_parse_from(args).unwrap();
        let mut output = vec![];
        options.run(&mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_edo_table() {
        let output = run(&["temperaments", "edo", "12"]).unwrap();
        assert_eq!(output.lines().count(), 14);
        assert!(output.lines().nth(6).unwrap().starts_with("7\tG\t 700.00\tP5\t3:2"));
    }

    #[test]
    fn test_formats() {
        let cents = run(&["temperaments", "orwell", "9", "7-31", "--format", "cents"]).unwrap();
        assert_eq!(cents.lines().count(), 10);
        assert_eq!(cents.lines().last(), Some("1200.00"));

        let placed = run(&["temperaments", "--format", "placed", "carlos", "a"]).unwrap();
        assert!(placed.lines().any(|l| l.starts_with("P5\t3:2\t")));

        let json = run(&["temperaments", "partch", "--format", "json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(44));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            run(&["temperaments", "edo", "0"]),
            Err(CliError::Scale(ScaleError::ZeroDivisions))
        ));
        assert!(matches!(
            run(&["temperaments", "request", "/nonexistent/request.json"]),
            Err(CliError::Io(_))
        ));
        assert!(MainOptions::try_parse_from(["temperaments", "carlos", "alpha"]).is_err());
        assert!(MainOptions::try_parse_from(["temperaments", "orwell", "9", "7/31"]).is_err());
    }
}
