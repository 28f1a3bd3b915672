//! Tar extractor implementation

use super::extractor::Extractor;
use crate::Result;
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tar::Archive;
use tracing::debug;
use xz2::read::XzDecoder;
use zstd::stream::read::Decoder as ZstdDecoder;

/// Compression layer wrapped around a tar stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TarCompression {
    None,
    Gzip,
    Bzip2,
    Xz,
    Zstd,
}

impl TarCompression {
    /// Detect the compression layer from the first bytes of a stream
    pub fn detect(magic: &[u8]) -> Self {
        match magic {
            [0x1f, 0x8b, ..] => TarCompression::Gzip,
            [b'B', b'Z', b'h', ..] => TarCompression::Bzip2,
            [0xfd, b'7', b'z', b'X', b'Z', 0x00, ..] => TarCompression::Xz,
            [0x28, 0xb5, 0x2f, 0xfd, ..] => TarCompression::Zstd,
            _ => TarCompression::None,
        }
    }
}

/// Tar extractor
///
/// The compression layer named by the file suffix is only a hint; the stream
/// itself decides which decoder is used.
pub struct TarExtractor {
    hint: TarCompression,
}

impl Default for TarExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TarExtractor {
    /// Create a new tar extractor
    pub fn new() -> Self {
        Self {
            hint: TarCompression::None,
        }
    }

    /// Create a tar extractor for a suffix that names a compression layer
    pub fn with_compression(hint: TarCompression) -> Self {
        Self { hint }
    }

    /// Create the decoding reader for whatever compression the stream carries
    fn create_reader(&self, file: File) -> Result<Box<dyn Read>> {
        let mut reader = BufReader::new(file);
        let compression = TarCompression::detect(reader.fill_buf()?);

        if compression != self.hint {
            debug!(
                "Tar stream compression {:?} differs from suffix hint {:?}",
                compression, self.hint
            );
        }

        Ok(match compression {
            TarCompression::None => Box::new(reader),
            TarCompression::Gzip => Box::new(GzDecoder::new(reader)),
            TarCompression::Bzip2 => Box::new(BzDecoder::new(reader)),
            TarCompression::Xz => Box::new(XzDecoder::new(reader)),
            TarCompression::Zstd => Box::new(ZstdDecoder::with_buffer(reader)?),
        })
    }
}

impl Extractor for TarExtractor {
    fn extract(&self, source: &Path, destination: &Path) -> Result<()> {
        let file = File::open(source)?;
        let reader = self.create_reader(file)?;
        let mut archive = Archive::new(reader);

        // unpack refuses entries that would land outside the destination
        archive.unpack(destination)?;
        Ok(())
    }

    fn format_name(&self) -> &'static str {
        match self.hint {
            TarCompression::None => "tar",
            TarCompression::Gzip => "tar.gz",
            TarCompression::Bzip2 => "tar.bz2",
            TarCompression::Xz => "tar.xz",
            TarCompression::Zstd => "tar.zst",
        }
    }
}
