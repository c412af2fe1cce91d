//! Physical (ZIP) layer of an OPC package.
//!
//! The writer streams parts into an in-memory ZIP archive; the reader opens a
//! finished archive and hands out part blobs by part name.
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PackURI};
use std::cell::RefCell;
use std::io::{Cursor, Read, Write};
use zip::ZipArchive;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Upper bound on the buffer reserved up front for a part. Larger parts
/// still read in full, growing as they go.
const MAX_PREALLOC: usize = 1 << 20;

/// Initial buffer size for a member whose header declares `declared` bytes.
#[inline]
fn prealloc_len(declared: u64) -> usize {
    usize::try_from(declared).map_or(MAX_PREALLOC, |n| n.min(MAX_PREALLOC))
}

/// Reads parts out of a ZIP-based OPC package held in memory.
pub struct PhysPkgReader<'data> {
    archive: RefCell<ZipArchive<Cursor<&'data [u8]>>>,
}

impl<'data> PhysPkgReader<'data> {
    /// Open a package from its bytes.
    pub fn new(data: &'data [u8]) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Decompressed content of the part at `pack_uri`.
    pub fn blob_for(&self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(pack_uri.membername())
            .map_err(|_| OpcError::PartNotFound(pack_uri.to_string()))?;

        let mut blob = Vec::with_capacity(prealloc_len(file.size()));
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }

    /// The `[Content_Types].xml` part every package carries.
    pub fn content_types_xml(&self) -> Result<Vec<u8>> {
        let uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        self.blob_for(&uri)
    }

    /// Relationships XML for `source_uri`, or `None` if it has none.
    pub fn rels_xml_for(&self, source_uri: &PackURI) -> Result<Option<Vec<u8>>> {
        let rels_uri = source_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;

        match self.blob_for(&rels_uri) {
            Ok(blob) => Ok(Some(blob)),
            Err(OpcError::PartNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Whether a member exists for `pack_uri`.
    pub fn contains(&self, pack_uri: &PackURI) -> bool {
        self.archive
            .borrow()
            .file_names()
            .any(|name| name == pack_uri.membername())
    }

    /// All member names in archive order.
    pub fn member_names(&self) -> Vec<String> {
        self.archive
            .borrow()
            .file_names()
            .map(String::from)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.archive.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Writes parts into an in-memory ZIP archive.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
    method: zip::CompressionMethod,
}

impl PhysPkgWriter {
    /// Create a writer that deflates every member.
    pub fn new() -> Self {
        Self::with_compression(true)
    }

    /// Create a writer; `compress = false` stores members uncompressed.
    pub fn with_compression(compress: bool) -> Self {
        let method = if compress {
            zip::CompressionMethod::Deflated
        } else {
            zip::CompressionMethod::Stored
        };
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
            method,
        }
    }

    /// Write one part.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(self.method);
        self.archive.start_file(pack_uri.membername(), options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish the central directory and return the archive bytes.
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
        let pack_uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        writer.write(&pack_uri, b"<p:sld/>").unwrap();
        let zip_data = writer.finish().unwrap();

        let reader = PhysPkgReader::new(&zip_data).unwrap();
        assert_eq!(reader.blob_for(&pack_uri).unwrap(), b"<p:sld/>");
        assert!(reader.contains(&pack_uri));
        assert_eq!(reader.len(), 1);
    }

    #[test]
    fn test_missing_rels_is_none() {
        let mut writer = PhysPkgWriter::with_compression(false);
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        writer.write(&pres, b"<p:presentation/>").unwrap();
        let zip_data = writer.finish().unwrap();

        let reader = PhysPkgReader::new(&zip_data).unwrap();
        assert!(reader.rels_xml_for(&pres).unwrap().is_none());
        assert!(matches!(
            reader.content_types_xml(),
            Err(OpcError::PartNotFound(_))
        ));
    }

    #[test]
    fn test_prealloc_is_capped() {
        assert_eq!(prealloc_len(0), 0);
        assert_eq!(prealloc_len(4096), 4096);
        assert_eq!(prealloc_len(u64::MAX), MAX_PREALLOC);
        assert_eq!(prealloc_len(0xFFFF_FFFF), MAX_PREALLOC);
    }

    #[test]
    fn test_part_larger_than_prealloc_reads_in_full() {
        let data = vec![b'x'; MAX_PREALLOC * 2 + 7];
        let mut writer = PhysPkgWriter::new();
        let pack_uri = PackURI::new("/ppt/media/image1.bin").unwrap();
        writer.write(&pack_uri, &data).unwrap();
        let zip_data = writer.finish().unwrap();

        let reader = PhysPkgReader::new(&zip_data).unwrap();
        assert_eq!(reader.blob_for(&pack_uri).unwrap(), data);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(PhysPkgReader::new(b"not a zip archive").is_err());
    }
}
