#![deny(missing_docs)]

//! # tsgen CLI
//!
//! Generates TypeScript interface files from a Swagger document whose
//! definition titles use the springfox `«…»` generic notation.

use clap::Parser;

use crate::error::CliResult;

mod error;
mod generate;

/// Generate TypeScript interfaces from a Swagger JSON document.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[clap(flatten)]
    args: generate::GenerateArgs,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    generate::execute(&cli.args)
}
