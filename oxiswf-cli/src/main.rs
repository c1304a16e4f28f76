//! OxiSWF CLI - SWF structure dissector
//!
//! Decodes matrices, style tables and shape outlines from raw SWF bytes and
//! shows every field with its bit position and length.

mod commands;
mod decode;
mod input;
mod logger;
mod tree;
mod utils;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use commands::{cmd_check, cmd_completions, cmd_dissect};
use decode::{DecodeRequest, Structure};
use oxiswf_shape::{DecodeLimits, ShapeVersion};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxiswf")]
#[command(author, version, about = "Bit-precise SWF structure dissector")]
#[command(long_about = "
OxiSWF decodes the vector structures of the DefineShape tag family and
reports every field with its exact bit position and length.
Structures: matrix, shape, shape-with-style, fill-styles, line-styles

Examples:
  oxiswf dissect shape.bin --structure shape-with-style --shape-version 3
  oxiswf dissect tag.bin --structure matrix --offset 0x12
  oxiswf dissect shape.bin -s shape --json
  oxiswf check *.bin --structure shape --shape-version 2 --progress
  oxiswf completions bash
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where and what to decode.
#[derive(Args)]
struct TargetArgs {
    /// Structure to decode
    #[arg(short, long, value_enum)]
    structure: Structure,

    /// DefineShape version (1-4) deciding colours and record layouts
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=4))]
    shape_version: u8,

    /// Byte offset of the structure (decimal or 0x-prefixed hex)
    #[arg(short, long, default_value = "0", value_parser = parse_offset)]
    offset: usize,

    /// Maximum shape records per outline, end-of-shape record included
    #[arg(long)]
    max_records: Option<usize>,
}

impl TargetArgs {
    fn request(&self) -> Result<DecodeRequest, Box<dyn std::error::Error>> {
        let limits = self
            .max_records
            .map_or(DecodeLimits::DEFAULT, DecodeLimits::new);

        Ok(DecodeRequest {
            structure: self.structure,
            version: ShapeVersion::from_number(self.shape_version)?,
            offset: self.offset,
            limits,
        })
    }
}

fn parse_offset(value: &str) -> Result<usize, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| format!("invalid offset `{}`: {}", value, e))
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one structure and print its field tree
    #[command(alias = "d")]
    Dissect {
        /// Input file
        file: PathBuf,

        #[command(flatten)]
        target: TargetArgs,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Decode a structure from many files in parallel
    #[command(alias = "c")]
    Check {
        /// Input files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        target: TargetArgs,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let result = match cli.command {
        Commands::Dissect { file, target, json } => {
            target.request().and_then(|request| cmd_dissect(&file, &request, json))
        }
        Commands::Check {
            files,
            target,
            progress,
        } => target
            .request()
            .and_then(|request| cmd_check(&files, &request, progress)),
        Commands::Completions { shell } => cmd_completions(shell),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("18"), Ok(18));
        assert_eq!(parse_offset("0x12"), Ok(18));
        assert_eq!(parse_offset("0X1f"), Ok(31));
        assert!(parse_offset("0xZZ").is_err());
        assert!(parse_offset("-1").is_err());
    }

    #[test]
    fn test_dissect_arguments() {
        let cli = Cli::try_parse_from([
            "oxiswf",
            "dissect",
            "shape.bin",
            "--structure",
            "shape-with-style",
            "--shape-version",
            "4",
            "--offset",
            "0x10",
            "--max-records",
            "64",
            "-vv",
        ])
        .expect("arguments parse");

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Dissect { target, json, .. } => {
                assert!(!json);
                let request = target.request().expect("valid request");
                assert_eq!(request.structure, Structure::ShapeWithStyle);
                assert_eq!(request.version, ShapeVersion::Shape4);
                assert_eq!(request.offset, 16);
                assert_eq!(request.limits.max_shape_records, 64);
            }
            _ => panic!("expected dissect"),
        }
    }

    #[test]
    fn test_shape_version_range() {
        let result = Cli::try_parse_from([
            "oxiswf",
            "dissect",
            "shape.bin",
            "-s",
            "shape",
            "--shape-version",
            "5",
        ]);
        assert!(result.is_err());
    }
}
