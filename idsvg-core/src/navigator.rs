//! Lookahead over unevaluated sub-expressions.
//!
//! The split operators need to know which character follows their first
//! operand before they render anything. [`skip`] walks past one complete
//! sub-expression using the same [`Operator::arity`] the engine uses.

use crate::operator::Operator;

/// Return `tokens` with exactly one complete sub-expression removed.
///
/// A leaf removes one token; an operator removes itself plus as many
/// sub-expressions as its arity. Truncated input yields an empty remainder;
/// reporting the missing operand is left to the engine, which reads it.
///
/// Runs in a loop over a pending-operand counter, so arbitrarily deep input
/// cannot exhaust the stack here.
#[must_use]
pub fn skip(tokens: &[char]) -> &[char] {
    let mut pending = 1usize;
    let mut consumed = 0usize;
    while pending > 0 {
        let Some(&ch) = tokens.get(consumed) else {
            return &[];
        };
        consumed += 1;
        pending -= 1;
        if let Some(op) = Operator::from_char(ch) {
            pending += op.arity();
        }
    }
    &tokens[consumed..]
}

/// The token right after the first operand in `operands`, if any.
///
/// For `⿰王⿱丿…` the operands are `王⿱丿…` and this returns `⿱`.
#[must_use]
pub fn after_first_operand(operands: &[char]) -> Option<char> {
    skip(operands).first().copied()
}
