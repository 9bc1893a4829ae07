//! Placement of path data: scale, translate, round.
//!
//! These are the two entry points the composition pipeline uses:
//! - [`transform`] for path data that is already a string (variant paths,
//!   previously composed fragments);
//! - [`transform_path`] for outlines that arrive as a [`BezPath`] (glyphs
//!   coming straight from a font).

use kurbo::BezPath;

use crate::error::PathError;
use crate::svg_path::{parse_path, write_path};
use crate::types::Placement;

/// Parse `d`, apply `placement`, and write it back rounded to `digits`.
///
/// # Errors
///
/// Returns [`PathError::InvalidData`] if `d` is not valid path data.
pub fn transform(d: &str, placement: &Placement, digits: usize) -> Result<String, PathError> {
    let path = parse_path(d)?;
    Ok(transform_path(&path, placement, digits))
}

/// Apply `placement` to `path` and write the result rounded to `digits`.
#[must_use]
pub fn transform_path(path: &BezPath, placement: &Placement, digits: usize) -> String {
    if *placement == Placement::IDENTITY {
        return write_path(path, digits);
    }
    let mut placed = path.clone();
    placed.apply_affine(placement.to_affine());
    write_path(&placed, digits)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
