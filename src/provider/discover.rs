//! Filesystem-based source discovery for hosts without their own module
//! registry: every immediate subdirectory of a mods folder becomes one
//! source, identified by its directory name.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::provider::ModSource;

#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("Invalid mods directory: {0}")]
    InvalidRoot(PathBuf),

    #[error("Failed to scan directory at {path}: {source}")]
    DirectoryScanError {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// Enumerates the sources under `mods_dir`, sorted by id so repeated
/// discovery yields a stable scan order.
pub fn discover_sources(mods_dir: &Path) -> Result<Vec<ModSource>, DiscoverError> {
    if !mods_dir.is_dir() {
        return Err(DiscoverError::InvalidRoot(mods_dir.to_path_buf()));
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(mods_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| DiscoverError::DirectoryScanError {
            path: mods_dir.to_path_buf(),
            source: e,
        })?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        sources.push(ModSource::new(name.as_str(), vec![entry.into_path()]));
    }

    sources.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(sources)
}
