//! Provides a general interface to a physical OPC package (ZIP file).
//!
//! Handles the low-level reading and writing of OPC packages as ZIP
//! archives. Part contents are decompressed on demand; writing assembles
//! the whole archive in memory and flushes it in one blocking write.

use crate::common::error::{Error, Result};
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Physical package reader that provides access to parts in a ZIP-based
/// OPC package.
pub struct PhysPkgReader {
    /// The underlying ZIP archive over the owned package bytes
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl PhysPkgReader {
    /// Open an OPC package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(data)
    }

    /// Create a reader from owned package bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// Get the binary content for a part by its member name
    /// (e.g., `ppt/slides/slide1.xml`, without a leading slash).
    pub fn blob_for(&mut self, membername: &str) -> Result<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(membername)
            .map_err(|_| Error::PartNotFound(membername.to_string()))?;

        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }

    /// Check if a specific member exists in the package.
    pub fn contains(&self, membername: &str) -> bool {
        self.archive.index_for_name(membername).is_some()
    }
}

/// Physical package writer for creating OPC packages.
///
/// Parts are written with Deflate compression in the order they are added.
pub struct PhysPkgWriter {
    /// The underlying ZIP archive writer
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a part to the package with Deflate compression.
    pub fn write(&mut self, membername: &str, blob: &[u8]) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.archive.start_file(membername, options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        writer.write("test.txt", b"Hello, World!").unwrap();
        let zip_data = writer.finish().unwrap();

        let mut reader = PhysPkgReader::from_bytes(zip_data).unwrap();
        assert_eq!(reader.blob_for("test.txt").unwrap(), b"Hello, World!");
    }

    #[test]
    fn test_multiple_parts() {
        let mut writer = PhysPkgWriter::new();
        writer.write("[Content_Types].xml", b"<Types/>").unwrap();
        writer.write("_rels/.rels", b"<Relationships/>").unwrap();
        writer.write("ppt/presentation.xml", b"<presentation/>").unwrap();

        let mut reader = PhysPkgReader::from_bytes(writer.finish().unwrap()).unwrap();
        assert!(reader.contains("[Content_Types].xml"));
        assert!(reader.contains("ppt/presentation.xml"));
        assert!(!reader.contains("ppt/slides/slide1.xml"));
        assert_eq!(
            reader.blob_for("ppt/presentation.xml").unwrap(),
            b"<presentation/>"
        );
    }

    #[test]
    fn test_missing_part() {
        let mut writer = PhysPkgWriter::new();
        writer.write("a.xml", b"<a/>").unwrap();
        let mut reader = PhysPkgReader::from_bytes(writer.finish().unwrap()).unwrap();

        assert!(matches!(
            reader.blob_for("b.xml").unwrap_err(),
            Error::PartNotFound(_)
        ));
    }
}
