//! Folio CLI
//!
//! Command-line interface for the Folio content pipeline.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use folio_cli::{CliArgs, FolioCli};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    let cli = FolioCli::from_args("folio", &args)?;
    cli.run(args).await?;
    Ok(())
}
