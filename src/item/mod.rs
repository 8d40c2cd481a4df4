use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::identifier::Identifier;

/// Errors surfaced when reading an already-resolved item. Resolution
/// itself never fails; by the time a read is attempted the engine can no
/// longer compensate, so these propagate.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{id}: content is not valid UTF-8")]
    NonUtf8 { id: Identifier },
}

/// One resolved piece of static data.
///
/// Identity (source id and resource id) and content are fixed at
/// construction. Items are safe to hand across threads; nothing in here
/// is mutable and no open handle outlives a read call.
#[derive(Debug)]
pub struct StaticDataItem {
    source_id: String,
    resource_id: Identifier,
    contents: Contents,
}

/// Closed set of content variants. Archive entries must be drained while
/// the archive stream is still open, so they arrive pre-buffered; loose
/// files are re-read from disk on every access instead of holding a
/// handle open.
#[derive(Debug)]
enum Contents {
    Buffered(Vec<u8>),
    OnDisk(PathBuf),
}

impl StaticDataItem {
    pub(crate) fn buffered(
        source_id: impl Into<String>,
        resource_id: Identifier,
        data: Vec<u8>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            resource_id,
            contents: Contents::Buffered(data),
        }
    }

    pub(crate) fn on_disk(
        source_id: impl Into<String>,
        resource_id: Identifier,
        path: PathBuf,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            resource_id,
            contents: Contents::OnDisk(path),
        }
    }

    /// Id of the mod that supplied the data, or [`FILE_SOURCE_ID`] for
    /// data found in the user override folder.
    ///
    /// [`FILE_SOURCE_ID`]: crate::resolve::FILE_SOURCE_ID
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Where the item sat inside its data folder, as a namespace-qualified
    /// identifier. For directory queries this is the reconstructed id of
    /// the individual match, not the id that was queried.
    pub fn resource_id(&self) -> &Identifier {
        &self.resource_id
    }

    /// Opens the content as a fresh reader.
    pub fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        match &self.contents {
            Contents::Buffered(data) => Ok(Box::new(data.as_slice())),
            Contents::OnDisk(path) => Ok(Box::new(fs::File::open(path)?)),
        }
    }

    /// Reads the full content. Buffered items return a copy, never a view
    /// of the internal buffer.
    pub fn read_bytes(&self) -> Result<Vec<u8>, ItemError> {
        match &self.contents {
            Contents::Buffered(data) => Ok(data.clone()),
            Contents::OnDisk(path) => Ok(fs::read(path)?),
        }
    }

    /// Reads the full content as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String, ItemError> {
        String::from_utf8(self.read_bytes()?).map_err(|_| ItemError::NonUtf8 {
            id: self.resource_id.clone(),
        })
    }

    /// Reads the full content as UTF-8 text, split into lines.
    pub fn read_lines(&self) -> Result<Vec<String>, ItemError> {
        Ok(self.read_to_string()?.lines().map(str::to_owned).collect())
    }
}

impl fmt::Display for StaticDataItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.contents {
            Contents::Buffered(data) => {
                write!(f, "{}:{} ({} bytes)", self.source_id, self.resource_id, data.len())
            }
            Contents::OnDisk(path) => {
                write!(f, "{}:{} > {}", self.source_id, self.resource_id, path.display())
            }
        }
    }
}
