//! Font loading and parsing errors.

use std::path::PathBuf;

/// Errors that can occur when loading or querying fonts.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// The font data could not be parsed.
    #[error("font parse error: {0}")]
    Parse(String),
    /// The font file could not be read.
    #[error("cannot read font {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
