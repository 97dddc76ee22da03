use std::io;
use std::path::Path;

use thiserror::Error;

/// All errors produced by the scaffolder.
///
/// The generators themselves are infallible — a malformed scene name flows
/// straight through into malformed output. Errors only arise at the
/// boundaries: vetting caller-supplied names and reading request files.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A scene name that cannot serve as an import binding and path segment.
    #[error("invalid scene name '{name}': {reason}")]
    InvalidSceneName { name: String, reason: String },

    /// Filesystem access on behalf of the CLI failed.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The upstream request payload did not parse.
    #[error("malformed scaffold request: {0}")]
    BadRequest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Shorthand constructors.
impl ScaffoldError {
    pub fn invalid_name(name: &str, reason: &str) -> Self {
        Self::InvalidSceneName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
