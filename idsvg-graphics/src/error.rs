/// Errors returned by path operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// SVG path data could not be parsed.
    #[error("invalid path data: {0}")]
    InvalidData(String),
}
