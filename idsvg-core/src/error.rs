//! Error types for IDS decomposition.

use idsvg_graphics::PathError;

/// Why a token sequence could not be decomposed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    /// Nothing to render.
    #[error("empty sequence")]
    Empty,
    /// An operator ran out of tokens before all of its operands were read.
    #[error("{operator} expects {expected} operands, found {found}")]
    MissingOperand {
        operator: char,
        expected: usize,
        found: usize,
    },
    /// Tokens were left over after the root expression was complete.
    #[error("{count} unconsumed trailing token(s)")]
    TrailingTokens { count: usize },
}

/// An error produced while turning an IDS into path fragments.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdsError {
    /// The sequence under- or over-supplies operands.
    ///
    /// `position` is the code-point index at which the problem was detected.
    #[error("malformed sequence at {position}: {reason}")]
    MalformedSequence {
        position: usize,
        reason: MalformedReason,
    },
    /// A leaf has no glyph in the font and no variant override.
    #[error("unsupported character {0:?} ({cp})", cp = code_point(.0))]
    UnsupportedCharacter(char),
    /// Nesting is deeper than the configured bound.
    #[error("nesting exceeds the maximum depth of {limit}")]
    StackDepthExceeded { limit: usize },
    /// Stored or produced path data could not be parsed.
    #[error(transparent)]
    Path(#[from] PathError),
}

fn code_point(ch: &char) -> String {
    format!("U+{:04X}", u32::from(*ch))
}

impl IdsError {
    #[must_use]
    pub const fn malformed(position: usize, reason: MalformedReason) -> Self {
        Self::MalformedSequence { position, reason }
    }
}

/// Convenience type alias for results using [`IdsError`].
pub type IdsResult<T> = Result<T, IdsError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
