#![deny(missing_docs)]

//! # Bootgen CLI
//!
//! Command Line Interface for the JSON-example driven Spring Boot scaffolder.
//!
//! Supported Commands:
//! - `generate`: turns paired request/response JSON examples into model
//!   classes, a create-endpoint controller, and a round-trip test inside an
//!   existing project tree.

use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod error;
mod generate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Spring Boot scaffolding from JSON examples")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generates model/controller/test sources from example JSON pairs.
    Generate(generate::GenerateArgs),
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
    }

    Ok(())
}
