//! The recursive decomposition engine.
//!
//! [`Decomposer::decompose`] reads one expression from the front of a token
//! sequence: a leaf becomes a single glyph (or variant) path, an operator
//! lays out its operands, renders each one on the tokens the previous one
//! left over, and composes the results.

use idsvg_graphics::{DEFAULT_DIGITS, Placement, transform, transform_path};
use tracing::{debug, trace};

use crate::compose::{PathLayer, compose};
use crate::error::{IdsError, IdsResult, MalformedReason};
use crate::layout::layout;
use crate::operator::Operator;
use crate::outline::GlyphOutlineProvider;
use crate::tables::{PartTables, Position, VARIANT_REFERENCE_SIZE};

/// Side of the output box when none is configured.
pub const DEFAULT_FONT_SIZE: f64 = 72.0;

/// Deepest operator nesting accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Fragments produced for one expression plus the tokens after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered<'t> {
    pub paths: Vec<String>,
    pub remaining: &'t [char],
}

/// Split an IDS string into code-point tokens.
#[must_use]
pub fn tokenize(ids: &str) -> Vec<char> {
    ids.chars().collect()
}

/// Turns token sequences into placed path fragments.
///
/// Holds only shared references, so one decomposer can serve any number of
/// calls, and independent decomposers can run on different threads.
pub struct Decomposer<'a, P: ?Sized> {
    provider: &'a P,
    tables: &'a PartTables,
    max_depth: usize,
}

impl<'a, P: GlyphOutlineProvider + ?Sized> Decomposer<'a, P> {
    /// A decomposer over `provider` using the built-in part tables.
    #[must_use]
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            tables: PartTables::builtin(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Use `tables` instead of the built-in classification data.
    #[must_use]
    pub const fn with_tables(mut self, tables: &'a PartTables) -> Self {
        self.tables = tables;
        self
    }

    /// Reject sequences nested deeper than `max_depth` operators.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Render a complete IDS string into fragments for a `font_size` box.
    ///
    /// # Errors
    ///
    /// Returns [`IdsError::MalformedSequence`] for empty input, missing
    /// operands or trailing tokens, and propagates provider and depth errors.
    pub fn render(&self, ids: &str, font_size: f64) -> IdsResult<Vec<String>> {
        debug!(ids, font_size, "decomposing");
        let tokens = tokenize(ids);
        if tokens.is_empty() {
            return Err(IdsError::malformed(0, MalformedReason::Empty));
        }
        let rendered = self.decompose(&tokens, font_size, None)?;
        if !rendered.remaining.is_empty() {
            return Err(IdsError::malformed(
                tokens.len() - rendered.remaining.len(),
                MalformedReason::TrailingTokens {
                    count: rendered.remaining.len(),
                },
            ));
        }
        debug!(fragments = rendered.paths.len(), "decomposed");
        Ok(rendered.paths)
    }

    /// Render the first expression of `tokens`.
    ///
    /// Returns the fragments and the unconsumed remainder; error positions
    /// are code-point indices into `tokens`.
    ///
    /// # Errors
    ///
    /// See [`Self::render`].
    pub fn decompose<'t>(
        &self,
        tokens: &'t [char],
        font_size: f64,
        position: Option<Position>,
    ) -> IdsResult<Rendered<'t>> {
        let frame = Frame {
            total: tokens.len(),
            font_size,
        };
        self.decompose_at(&frame, tokens, position, 0)
    }

    fn decompose_at<'t>(
        &self,
        frame: &Frame,
        tokens: &'t [char],
        position: Option<Position>,
        depth: usize,
    ) -> IdsResult<Rendered<'t>> {
        if depth > self.max_depth {
            return Err(IdsError::StackDepthExceeded {
                limit: self.max_depth,
            });
        }
        let Some((&head, rest)) = tokens.split_first() else {
            return Err(IdsError::malformed(frame.total, MalformedReason::Empty));
        };

        let Some(op) = Operator::from_char(head) else {
            return Ok(Rendered {
                paths: self.render_leaf(head, frame.font_size, position)?,
                remaining: rest,
            });
        };

        let profiles = layout(op, rest, frame.font_size, self.tables);
        trace!(operator = %op, depth, ?profiles, "composing");

        let mut layers = Vec::with_capacity(profiles.len());
        let mut remaining = rest;
        for (found, profile) in profiles.into_iter().enumerate() {
            if remaining.is_empty() {
                return Err(IdsError::malformed(
                    frame.total,
                    MalformedReason::MissingOperand {
                        operator: head,
                        expected: op.arity(),
                        found,
                    },
                ));
            }
            let child = self.decompose_at(frame, remaining, profile.position, depth + 1)?;
            layers.push(PathLayer {
                paths: child.paths,
                profile,
            });
            remaining = child.remaining;
        }

        Ok(Rendered {
            paths: compose(&layers)?,
            remaining,
        })
    }

    /// Render a single leaf character into one fragment.
    ///
    /// A positional variant wins over the font glyph.
    ///
    /// # Errors
    ///
    /// Returns [`IdsError::UnsupportedCharacter`] if the provider has no glyph.
    pub fn render_leaf(
        &self,
        ch: char,
        font_size: f64,
        position: Option<Position>,
    ) -> IdsResult<Vec<String>> {
        if let Some((pos, d)) =
            position.and_then(|pos| self.tables.variant(pos, ch).map(|d| (pos, d)))
        {
            trace!(%ch, position = %pos, "variant leaf");
            let factor = font_size / VARIANT_REFERENCE_SIZE;
            return Ok(vec![transform(d, &Placement::scaled(factor), DEFAULT_DIGITS)?]);
        }

        trace!(%ch, "glyph leaf");
        let outline = self.provider.glyph_outline(ch, font_size)?;
        let baseline = outline.baseline(font_size);
        Ok(vec![transform_path(
            &outline.path,
            &Placement::new(1.0, -1.0, 0.0, baseline),
            DEFAULT_DIGITS,
        )])
    }
}

impl<P: ?Sized> Clone for Decomposer<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for Decomposer<'_, P> {}

/// Per-call constants threaded through the recursion.
struct Frame {
    /// Length of the sequence the call started from, for error positions.
    total: usize,
    font_size: f64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
