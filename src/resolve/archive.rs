//! Streaming scan of one data pack archive.
//!
//! Archives are read in a single forward pass, in archive-native entry
//! order. Matching entries must be drained into an owned buffer before
//! the stream advances, which is why archive-sourced items are always
//! buffered.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use zip::read::read_zipfile_from_stream;

use crate::identifier::Identifier;
use crate::item::StaticDataItem;
use crate::resolve::matcher::QueryKind;
use crate::resolve::DATA_DIR_NAME;

/// Entries larger than this are skipped rather than buffered.
const MAX_ENTRY_SIZE: u64 = i32::MAX as u64;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Scans `archive_path` for entries under the internal `staticdata/`
/// root that satisfy the query, appending a buffered item per match.
///
/// Matches found before a mid-scan error stay in `results`; the caller
/// decides whether the error itself is worth reporting.
pub(crate) fn scan_archive(
    source_id: &str,
    resource_id: &Identifier,
    archive_path: &Path,
    kind: QueryKind,
    results: &mut Vec<StaticDataItem>,
) -> Result<(), ArchiveError> {
    let mut reader = BufReader::new(File::open(archive_path)?);

    while let Some(mut entry) = read_zipfile_from_stream(&mut reader)? {
        if entry.is_dir() || entry.size() > MAX_ENTRY_SIZE {
            continue;
        }

        let name = entry.name().to_string();
        let name = name.strip_prefix(['/', '\\']).unwrap_or(&name);
        let Some(candidate) = name.strip_prefix(DATA_DIR_NAME).and_then(|n| n.strip_prefix('/'))
        else {
            continue;
        };

        if !kind.matches(candidate, resource_id) {
            continue;
        }

        // Matched paths always begin with "<namespace>/"; everything
        // after it is the found resource's own path.
        let Some(found_path) = candidate.get(resource_id.namespace().len() + 1..) else {
            continue;
        };

        let mut data = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut data)?;

        results.push(StaticDataItem::buffered(
            source_id,
            Identifier::new(resource_id.namespace(), found_path),
            data,
        ));
    }

    Ok(())
}
