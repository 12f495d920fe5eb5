//! Embedded resources and the copy step.
//!
//! The configuration archive is compiled into the binary with
//! [`include_bytes!`], so the program has no install-time file dependencies.
//! Resources are looked up by name from a static registry and streamed to
//! their destination; a failed copy leaves whatever was already flushed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Name of the bundled oh-my-zsh configuration archive.
pub const OHMYZSH_ARCHIVE: &str = "ohmyzsh.zip";

/// Everything bundled into the binary, keyed by resource name.
static RESOURCES: &[(&str, &[u8])] = &[(OHMYZSH_ARCHIVE, include_bytes!("../assets/ohmyzsh.zip"))];

/// Look up an embedded resource by name.
pub fn find(name: &str) -> Result<&'static [u8]> {
    match RESOURCES.iter().find(|(n, _)| *n == name) {
        Some(&(_, data)) => Ok(data),
        None => bail!("No embedded resource named '{name}'"),
    }
}

/// Resolve the invoking user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    home::home_dir().context("Failed to resolve the user home directory")
}

/// Copy an embedded resource to `dir/save_path`.
///
/// The destination file is created (truncating any existing one); parent
/// directories are expected to exist already. Returns the written path.
pub async fn copy_to(name: &str, dir: &Path, save_path: &str) -> Result<PathBuf> {
    let data = find(name)?;
    let dst = dir.join(save_path);

    let mut file = fs::File::create(&dst)
        .await
        .with_context(|| format!("Failed to create {}", dst.display()))?;
    file.write_all(data)
        .await
        .with_context(|| format!("Failed to write {}", dst.display()))?;
    file.flush().await?;

    Ok(dst)
}

/// Copy an embedded resource into the user's home directory.
pub async fn copy_to_home(name: &str, save_path: &str) -> Result<PathBuf> {
    let home = home_dir()?;
    copy_to(name, &home, save_path).await
}
