//! Main entry point for the zshsetup binary.
//!
//! Runs the whole setup as one linear sequence: copy the embedded oh-my-zsh
//! archive into the user's home directory, then extract it next to the copy.
//! The first I/O failure unwinds out of `main`, printing the error chain to
//! stderr and exiting non-zero.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use zshsetup::{Cli, LocalFileReader, ZipExtractor, resource};

/// Directory under the home directory that receives the extracted tree.
const EXTRACT_DIR: &str = "ohmyzsh";

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    println!("Copying resources...");
    let archive =
        resource::copy_to_home(resource::OHMYZSH_ARCHIVE, resource::OHMYZSH_ARCHIVE).await?;
    println!("{} copied to {}", resource::OHMYZSH_ARCHIVE, archive.display());

    let target = resource::home_dir()?.join(EXTRACT_DIR);
    let reader = Arc::new(LocalFileReader::new(&archive)?);
    let extractor = ZipExtractor::new(reader);
    extractor.extract_all(&target).await?;
    println!("'{}' unzipped to '{}'", archive.display(), target.display());

    Ok(())
}
