//! # zshsetup
//!
//! Installs a bundled oh-my-zsh configuration into the user's home directory.
//!
//! The configuration archive is embedded into the binary at build time. At
//! runtime the program copies it to the home directory and extracts it there,
//! decoding entry names that historical Chinese ZIP tools wrote in GBK/GB18030
//! alongside modern UTF-8 names (signalled per entry by general-purpose flag
//! bit 11).
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use zshsetup::{LocalFileReader, ZipExtractor};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Open an archive copied to disk earlier
//!     let reader = Arc::new(LocalFileReader::new("ohmyzsh.zip".as_ref())?);
//!
//!     // Extract everything into a target directory
//!     let extractor = ZipExtractor::new(reader);
//!     extractor.extract_all("ohmyzsh".as_ref()).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod io;
pub mod resource;
pub mod zip;

pub use cli::Cli;
pub use io::{LocalFileReader, ReadAt};
pub use zip::{ZipEntry, ZipExtractor};
