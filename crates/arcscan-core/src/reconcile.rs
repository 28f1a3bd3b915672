//! Reconciliation of archives against the entries that surround them

use crate::scan::{NameIndex, ScanIndex};
use serde::{Deserialize, Serialize};

/// The two result sets of a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Archives with no more entries sharing their base name than archives
    #[serde(rename = "未解压的压缩包")]
    pub not_extracted: NameIndex,
    /// Base names with no archive at all
    #[serde(rename = "没有对应压缩包的文件")]
    pub no_archive: NameIndex,
}

impl ScanReport {
    /// Number of archive paths flagged as not extracted
    pub fn pending_archives(&self) -> usize {
        self.not_extracted.path_count()
    }
}

/// Compute the not-extracted and no-archive sets.
///
/// An archive counts as not extracted when the total number of entries with
/// its base name does not exceed the number of archives with that base name.
/// Archives are part of the total, so an archive alone is always pending and
/// archives sharing a base name can hide each other.
pub fn reconcile(index: &ScanIndex) -> ScanReport {
    let not_extracted: NameIndex = index
        .archives
        .iter()
        .filter(|(name, paths)| index.all.count(name) <= paths.len())
        .flat_map(|(name, paths)| paths.iter().map(move |p| (name.clone(), p.clone())))
        .collect();

    let no_archive: NameIndex = index
        .all
        .iter()
        .filter(|(name, _)| !index.archives.contains(name))
        .flat_map(|(name, paths)| paths.iter().map(move |p| (name.clone(), p.clone())))
        .collect();

    ScanReport {
        not_extracted,
        no_archive,
    }
}
