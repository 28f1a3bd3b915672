//! Archive operations module

pub mod batch;
pub mod extractor;
pub mod gzip_extractor;
pub mod rar_extractor;
pub mod sevenz_extractor;
pub mod tar_extractor;
pub mod zip_extractor;

pub use batch::{extract_all, BatchSummary, Failure};
pub use tar_extractor::TarCompression;

use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Archive formats arcscan knows how to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    SevenZ,
    Rar,
    /// Tar with the compression layer named by the suffix
    Tar(TarCompression),
    /// A single gzip-compressed file
    Gzip,
}

impl ArchiveFormat {
    /// Detect the format from the file name (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_lowercase();

        let format = if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            ArchiveFormat::Tar(TarCompression::Gzip)
        } else if name.ends_with(".tar.bz2") || name.ends_with(".tbz2") {
            ArchiveFormat::Tar(TarCompression::Bzip2)
        } else if name.ends_with(".tar.xz") || name.ends_with(".txz") {
            ArchiveFormat::Tar(TarCompression::Xz)
        } else if name.ends_with(".tar.zst") {
            ArchiveFormat::Tar(TarCompression::Zstd)
        } else if name.ends_with(".tar") {
            ArchiveFormat::Tar(TarCompression::None)
        } else if name.ends_with(".gz") {
            ArchiveFormat::Gzip
        } else if name.ends_with(".zip") {
            ArchiveFormat::Zip
        } else if name.ends_with(".7z") {
            ArchiveFormat::SevenZ
        } else if name.ends_with(".rar") {
            ArchiveFormat::Rar
        } else {
            return None;
        };

        Some(format)
    }
}

/// Create an extractor for the given format
pub fn create_extractor(format: ArchiveFormat) -> Box<dyn extractor::Extractor> {
    match format {
        ArchiveFormat::Zip => Box::new(zip_extractor::ZipExtractor::new()),
        ArchiveFormat::SevenZ => Box::new(sevenz_extractor::SevenZExtractor::new()),
        ArchiveFormat::Rar => Box::new(rar_extractor::RarExtractor::new()),
        ArchiveFormat::Tar(compression) => {
            Box::new(tar_extractor::TarExtractor::with_compression(compression))
        }
        ArchiveFormat::Gzip => Box::new(gzip_extractor::GzipExtractor::new()),
    }
}

/// Where an archive is extracted when no destination is given.
///
/// A sibling folder named after the archive's stem (`a/b.zip` → `a/b`,
/// `a/c.tar.gz` → `a/c.tar`). Single gzip files decompress next to the archive.
pub fn default_destination(archive: &Path, format: ArchiveFormat) -> PathBuf {
    let parent = archive.parent().unwrap_or_else(|| Path::new(""));
    match format {
        ArchiveFormat::Gzip => parent.to_path_buf(),
        _ => match archive.file_stem() {
            Some(stem) => parent.join(stem),
            None => parent.to_path_buf(),
        },
    }
}

/// What happened to a single archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// The archive was extracted into `destination`
    Extracted {
        format: &'static str,
        destination: PathBuf,
    },
    /// The file name matches no extractable format; nothing was touched
    Unsupported { path: PathBuf },
}

/// Extract a single archive.
///
/// Without a destination the archive goes to [`default_destination`]. The
/// destination directory is created if absent. A file whose suffix matches
/// no known format yields [`ExtractOutcome::Unsupported`] rather than an error.
pub fn extract_archive<P: AsRef<Path>>(
    archive: P,
    destination: Option<&Path>,
) -> Result<ExtractOutcome> {
    let archive = archive.as_ref();

    let format = match ArchiveFormat::from_path(archive) {
        Some(format) => format,
        None => {
            warn!("Unsupported archive format: {:?}", archive);
            return Ok(ExtractOutcome::Unsupported {
                path: archive.to_path_buf(),
            });
        }
    };

    let destination = destination
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_destination(archive, format));

    fs::create_dir_all(&destination)?;

    let extractor = create_extractor(format);
    info!(
        "Extracting {} archive {:?} into {:?}",
        extractor.format_name(),
        archive,
        destination
    );
    extractor.extract(archive, &destination)?;

    Ok(ExtractOutcome::Extracted {
        format: extractor.format_name(),
        destination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_detection() {
        let cases = [
            ("a.zip", ArchiveFormat::Zip),
            ("a.ZIP", ArchiveFormat::Zip),
            ("a.7z", ArchiveFormat::SevenZ),
            ("a.rar", ArchiveFormat::Rar),
            ("a.tar", ArchiveFormat::Tar(TarCompression::None)),
            ("a.tar.gz", ArchiveFormat::Tar(TarCompression::Gzip)),
            ("a.tgz", ArchiveFormat::Tar(TarCompression::Gzip)),
            ("a.tar.bz2", ArchiveFormat::Tar(TarCompression::Bzip2)),
            ("a.tbz2", ArchiveFormat::Tar(TarCompression::Bzip2)),
            ("a.tar.xz", ArchiveFormat::Tar(TarCompression::Xz)),
            ("a.txz", ArchiveFormat::Tar(TarCompression::Xz)),
            ("a.tar.zst", ArchiveFormat::Tar(TarCompression::Zstd)),
            ("a.txt.gz", ArchiveFormat::Gzip),
        ];
        for (name, expected) in cases {
            assert_eq!(ArchiveFormat::from_path(Path::new(name)), Some(expected), "{}", name);
        }
        assert_eq!(ArchiveFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(ArchiveFormat::from_path(Path::new("a.bz2")), None);
    }

    #[test]
    fn test_default_destination() {
        let zip = Path::new("/data/b.zip");
        assert_eq!(
            default_destination(zip, ArchiveFormat::Zip),
            PathBuf::from("/data/b")
        );

        let tgz = Path::new("/data/c.tar.gz");
        assert_eq!(
            default_destination(tgz, ArchiveFormat::Tar(TarCompression::Gzip)),
            PathBuf::from("/data/c.tar")
        );

        let gz = Path::new("/data/log.txt.gz");
        assert_eq!(
            default_destination(gz, ArchiveFormat::Gzip),
            PathBuf::from("/data")
        );
    }

    #[test]
    fn test_unsupported_suffix_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("document.pdf");
        fs::write(&file, "pdf").unwrap();

        let outcome = extract_archive(&file, None).unwrap();
        assert_eq!(outcome, ExtractOutcome::Unsupported { path: file });
        assert!(!temp_dir.path().join("document").exists());
    }

    #[test]
    fn test_missing_archive_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = extract_archive(temp_dir.path().join("gone.zip"), None);
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
