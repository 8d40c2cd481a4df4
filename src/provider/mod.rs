pub mod discover;

pub use discover::{discover_sources, DiscoverError};

use std::path::PathBuf;

/// One declared source of static data: a mod id and the root paths it
/// contributes. Each root is expected to carry its data inside a
/// `staticdata/` subfolder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModSource {
    pub id: String,
    pub roots: Vec<PathBuf>,
}

impl ModSource {
    pub fn new(id: impl Into<String>, roots: Vec<PathBuf>) -> Self {
        Self {
            id: id.into(),
            roots,
        }
    }
}

/// Supplies the ordered list of sources to scan. Owned by the host
/// environment; the engine re-enumerates on every query and never caches
/// the result.
pub trait SourceProvider {
    fn sources(&self) -> Vec<ModSource>;
}

/// A fixed list of sources is itself a provider. Handy for hosts that
/// know their module set up front, and for tests.
impl SourceProvider for Vec<ModSource> {
    fn sources(&self) -> Vec<ModSource> {
        self.clone()
    }
}
