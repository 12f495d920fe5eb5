//! ZIP archive parsing and extraction.
//!
//! The module is organized into four components:
//!
//! - [`structures`]: ZIP format records (EOCD, central directory entries, ...)
//! - [`encoding`]: entry-name decoding (UTF-8 or legacy GB18030)
//! - [`parser`]: low-level parsing of ZIP records from raw bytes
//! - [`extractor`]: high-level extraction API
//!
//! ## ZIP format overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and compressed data for each file
//! 2. Central Directory with metadata for all files
//! 3. End of Central Directory (EOCD) record at the end
//!
//! This implementation reads the EOCD first (from the end of the file), then
//! walks the Central Directory to enumerate entries before touching any file
//! data.
//!
//! ## Supported features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - ZIP64 extensions for archives > 4GB
//! - STORED (no compression) and DEFLATE methods
//! - Entry names in UTF-8 (general-purpose flag bit 11) or GB18030
//!
//! ## Limitations
//!
//! - No encryption support
//! - No multi-disk archive support
//! - No BZIP2, LZMA, or other compression methods
//! - No CRC-32 verification of extracted data

pub mod encoding;
mod extractor;
mod parser;
mod structures;

pub use extractor::ZipExtractor;
pub use parser::ZipParser;
pub use structures::*;
