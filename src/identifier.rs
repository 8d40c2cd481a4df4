use std::fmt;
use std::str::FromStr;

/// Names one logical resource independently of where its bytes live: a
/// namespace (usually the id of the mod that owns the data) plus a
/// slash-separated path below it.
///
/// An empty path names the namespace root, which is only meaningful for
/// directory queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Builds an identifier, normalizing separators: backslashes are
    /// stripped from the namespace and converted to forward slashes in
    /// the path.
    pub fn new(namespace: impl AsRef<str>, path: impl AsRef<str>) -> Self {
        Self {
            namespace: namespace.as_ref().replace('\\', ""),
            path: path.as_ref().replace('\\', "/"),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// True for identifiers naming the namespace root ("everything under
    /// this namespace" in a directory query).
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseIdentifierError {
    #[error("missing ':' separator in identifier {0:?}")]
    MissingSeparator(String),

    #[error("empty namespace in identifier {0:?}")]
    EmptyNamespace(String),
}

impl FromStr for Identifier {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = s
            .split_once(':')
            .ok_or_else(|| ParseIdentifierError::MissingSeparator(s.to_string()))?;
        if namespace.is_empty() {
            return Err(ParseIdentifierError::EmptyNamespace(s.to_string()));
        }
        Ok(Self::new(namespace, path))
    }
}
