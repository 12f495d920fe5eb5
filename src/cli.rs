use clap::Parser;

/// Command-line surface.
///
/// The program is deliberately non-configurable: the payload, the copy
/// destination and the extraction target are all fixed. Parsing still runs
/// so that `-h`/`-V` work and unexpected arguments are rejected instead of
/// silently ignored.
#[derive(Parser, Debug)]
#[command(name = "zshsetup")]
#[command(version)]
#[command(about = "Install the bundled oh-my-zsh configuration into your home directory", long_about = None)]
pub struct Cli {}
