//! Static data resolution for modded hosts.
//!
//! Static data is configuration-like content that mods and users ship in
//! a `staticdata/` folder, either as loose files or inside `.zip` data
//! packs. Queries name a resource by `namespace:path` identifier and
//! receive every match across all sources, in source order, with the
//! user override folder always last.

pub mod cli;
pub mod identifier;
pub mod item;
pub mod logging;
pub mod provider;
pub mod resolve;

pub use identifier::{Identifier, ParseIdentifierError};
pub use item::{ItemError, StaticDataItem};
pub use provider::{ModSource, SourceProvider};
pub use resolve::{QueryKind, StaticData, DATA_DIR_NAME, FILE_SOURCE_ID};
