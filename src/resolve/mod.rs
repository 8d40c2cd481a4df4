//! The resolution engine: merges static data from every declared mod
//! source and the user override folder into one ordered result list.

mod archive;
mod dir;
mod matcher;

pub use matcher::{matches_directory_contents, matches_exact_file, QueryKind};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, trace, warn};

use crate::identifier::Identifier;
use crate::item::StaticDataItem;
use crate::provider::SourceProvider;

/// Name of the data folder looked up inside every source root, of the
/// user override folder, and of the internal root folder inside data
/// pack archives.
pub const DATA_DIR_NAME: &str = "staticdata";

/// Source id attached to items found in the user override folder.
pub const FILE_SOURCE_ID: &str = "file";

/// Sources that must never contribute static data: the host platform
/// itself and its runtime.
const RESERVED_SOURCE_IDS: &[&str] = &["minecraft", "java"];

/// Every resolution call runs under this lock. The engine holds no
/// mutable state between calls; the lock exists so that concurrent
/// callers can never observe a half-created override folder.
static GLOBAL_LOCK: Mutex<()> = Mutex::new(());

/// How scan failures inside one source are treated. Mod-declared sources
/// may ship imperfect archives and fail silently; the override folder is
/// user-edited, so its failures are at least worth a log line.
#[derive(Debug, Clone, Copy)]
enum ErrorPolicy {
    Silent,
    Logged,
}

/// Access point for static data queries.
///
/// Holds the provider enumerating mod sources and the base directory
/// whose `staticdata/` subfolder users may edit directly. The provider
/// is consulted fresh on every query; nothing is cached in between.
pub struct StaticData<P> {
    provider: P,
    base_dir: PathBuf,
}

impl<P: SourceProvider> StaticData<P> {
    pub fn new(provider: P, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            base_dir: base_dir.into(),
        }
    }

    /// The user override folder. Contents placed here resolve after all
    /// mod sources, under the source id [`FILE_SOURCE_ID`].
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join(DATA_DIR_NAME)
    }

    /// Resolves data exactly matching `resource_id`, which must name a
    /// file such as `examplemod:configs/config.json`. An identifier that
    /// names a directory yields an empty list.
    pub fn exact(&self, resource_id: &Identifier) -> Vec<StaticDataItem> {
        self.resolve(resource_id, QueryKind::Exact)
    }

    /// Resolves all data inside the directory `resource_id` names, such
    /// as `examplemod:configs` or the namespace root `examplemod:`.
    /// With `recursive`, subfolders are searched too.
    pub fn in_directory(&self, resource_id: &Identifier, recursive: bool) -> Vec<StaticDataItem> {
        self.resolve(resource_id, QueryKind::Directory { recursive })
    }

    fn resolve(&self, resource_id: &Identifier, kind: QueryKind) -> Vec<StaticDataItem> {
        let _guard = GLOBAL_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        let mut results = Vec::new();

        for source in self.provider.sources() {
            if RESERVED_SOURCE_IDS.contains(&source.id.as_str()) {
                continue;
            }
            for root in &source.roots {
                scan_source(
                    &source.id,
                    resource_id,
                    &root.join(DATA_DIR_NAME),
                    kind,
                    ErrorPolicy::Silent,
                    &mut results,
                );
            }
        }

        // The override folder always resolves last. If it is missing we
        // create it for next time, but skip its loose-file phase for the
        // current call.
        let data_dir = self.data_dir();
        let mut search_files = true;
        if !data_dir.exists() {
            search_files = false;
            if let Err(err) = fs::create_dir(&data_dir) {
                debug!(path = %data_dir.display(), "could not create the override folder: {err}");
            }
        }
        if search_files {
            scan_source(
                FILE_SOURCE_ID,
                resource_id,
                &data_dir,
                kind,
                ErrorPolicy::Logged,
                &mut results,
            );
        }

        debug!(
            resource = %resource_id,
            count = results.len(),
            "resolved static data"
        );
        results
    }
}

/// Two-phase scan of one data folder: archives sitting directly inside
/// it first, loose files second.
fn scan_source(
    source_id: &str,
    resource_id: &Identifier,
    data_root: &Path,
    kind: QueryKind,
    policy: ErrorPolicy,
    results: &mut Vec<StaticDataItem>,
) {
    match fs::read_dir(data_root) {
        Ok(entries) => {
            for entry in entries.flatten() {
                let path = entry.path();
                if !path.is_file() || !has_zip_extension(&path) {
                    continue;
                }
                trace!(source = source_id, archive = %path.display(), "scanning data pack");
                if let Err(err) =
                    archive::scan_archive(source_id, resource_id, &path, kind, results)
                {
                    if let ErrorPolicy::Logged = policy {
                        warn!(archive = %path.display(), "error while scanning data pack: {err}");
                    }
                }
            }
        }
        Err(err) => {
            // Usually just means this source ships no data folder.
            if let ErrorPolicy::Logged = policy {
                warn!(path = %data_root.display(), "cannot list data folder: {err}");
            }
        }
    }

    let namespace_root = data_root.join(resource_id.namespace());
    let requested = namespace_root.join(resource_id.path());

    match kind {
        QueryKind::Exact => {
            if requested.is_file() {
                results.push(StaticDataItem::on_disk(
                    source_id,
                    resource_id.clone(),
                    requested,
                ));
            }
        }
        QueryKind::Directory { recursive } => {
            if !requested.is_dir() {
                return;
            }
            for file in dir::list_files(&requested, recursive) {
                let Ok(relative) = file.strip_prefix(&namespace_root) else {
                    continue;
                };
                // Identifier::new turns any platform separators back
                // into forward slashes.
                let relative = relative.to_string_lossy();
                let relative = relative.strip_prefix('/').unwrap_or(&relative);
                let found_id = Identifier::new(resource_id.namespace(), relative);
                results.push(StaticDataItem::on_disk(source_id, found_id, file));
            }
        }
    }
}

fn has_zip_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".zip"))
}
