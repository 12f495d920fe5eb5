use std::io::Read;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use flate2::read::DeflateDecoder;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipEntry};
use crate::io::ReadAt;

/// ZIP file extractor
pub struct ZipExtractor<R: ReadAt> {
    parser: ZipParser<R>,
}

impl<R: ReadAt> ZipExtractor<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            parser: ZipParser::new(reader),
        }
    }

    /// List all entries in the archive
    pub async fn list_entries(&self) -> Result<Vec<ZipEntry>> {
        self.parser.list_entries().await
    }

    /// Read one entry's content into memory, inflating it if needed.
    pub async fn read_entry(&self, entry: &ZipEntry) -> Result<Vec<u8>> {
        let data_offset = self.parser.get_data_offset(entry).await?;

        let mut compressed = vec![0u8; entry.compressed_size as usize];
        self.parser
            .reader()
            .read_at(data_offset, &mut compressed)
            .await?;

        match entry.compression_method {
            CompressionMethod::Stored => Ok(compressed),
            CompressionMethod::Deflate => {
                let mut data = Vec::with_capacity(entry.uncompressed_size as usize);
                DeflateDecoder::new(compressed.as_slice())
                    .read_to_end(&mut data)
                    .with_context(|| format!("Failed to inflate '{}'", entry.file_name))?;
                Ok(data)
            }
            CompressionMethod::Unknown(method) => {
                bail!(
                    "Unsupported compression method {} for '{}'",
                    method,
                    entry.file_name
                )
            }
        }
    }

    /// Extract one entry to the given path.
    ///
    /// Missing parent directories are created; an existing file at the path
    /// is overwritten.
    pub async fn extract_entry(&self, entry: &ZipEntry, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let data = self.read_entry(entry).await?;

        let mut file = fs::File::create(output_path)
            .await
            .with_context(|| format!("Failed to create {}", output_path.display()))?;
        file.write_all(&data).await?;
        file.flush().await?;

        Ok(())
    }

    /// Extract every entry of the archive into `target_dir`.
    ///
    /// Directory entries become (possibly empty) directories; file entries
    /// are written through [`extract_entry`](Self::extract_entry). An entry
    /// whose decoded name would land outside `target_dir` aborts extraction.
    pub async fn extract_all(&self, target_dir: &Path) -> Result<()> {
        let entries = self.list_entries().await?;

        for entry in &entries {
            let dest = join_entry_path(target_dir, &entry.file_name)?;

            if entry.is_directory {
                fs::create_dir_all(&dest).await?;
                continue;
            }

            self.extract_entry(entry, &dest).await?;
        }

        Ok(())
    }
}

/// Join a decoded entry name onto the extraction target.
///
/// Only plain path segments are accepted: `..`, absolute paths and drive
/// prefixes would let a crafted archive write outside the target directory,
/// so such names are an error rather than a path.
fn join_entry_path(target_dir: &Path, entry_name: &str) -> Result<PathBuf> {
    let mut path = target_dir.to_path_buf();

    for component in Path::new(entry_name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                bail!("Entry name '{entry_name}' escapes the extraction directory")
            }
        }
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_nested_entry_names() {
        let joined = join_entry_path(Path::new("/tmp/out"), "plugins/git/git.plugin.zsh").unwrap();
        assert_eq!(joined, Path::new("/tmp/out/plugins/git/git.plugin.zsh"));
    }

    #[test]
    fn ignores_current_dir_segments() {
        let joined = join_entry_path(Path::new("/tmp/out"), "./custom/./aliases.zsh").unwrap();
        assert_eq!(joined, Path::new("/tmp/out/custom/aliases.zsh"));
    }

    #[test]
    fn rejects_parent_dir_segments() {
        assert!(join_entry_path(Path::new("/tmp/out"), "../evil.sh").is_err());
        assert!(join_entry_path(Path::new("/tmp/out"), "a/../../evil.sh").is_err());
    }

    #[test]
    fn rejects_absolute_entry_names() {
        assert!(join_entry_path(Path::new("/tmp/out"), "/etc/passwd").is_err());
    }
}
