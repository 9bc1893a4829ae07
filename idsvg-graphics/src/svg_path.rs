//! SVG path data ↔ `kurbo::BezPath`.
//!
//! Parsing accepts the full SVG path grammar (relative commands, `H`/`V`,
//! smooth curves and arcs) via `kurbo`. Writing always emits absolute
//! `M`/`L`/`Q`/`C`/`Z` commands with coordinates rounded to a fixed number
//! of decimals, which keeps output compact and deterministic.

use std::fmt::Write;

use kurbo::{BezPath, PathEl, Point};

use crate::error::PathError;
use crate::types::Scalar;

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse SVG path data into a [`BezPath`].
///
/// Blank input yields an empty path (glyphs such as spaces have no outline).
///
/// # Errors
///
/// Returns [`PathError::InvalidData`] if `d` is not valid path data.
pub fn parse_path(d: &str) -> Result<BezPath, PathError> {
    if d.trim().is_empty() {
        return Ok(BezPath::new());
    }
    BezPath::from_svg(d).map_err(|e| PathError::InvalidData(format!("{e} in {d:?}")))
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Convert a [`BezPath`] to an SVG path data string.
///
/// Coordinates are rounded to `digits` decimal places with trailing zeros
/// stripped, so `12.50` is written as `12.5` and `3.00` as `3`.
#[must_use]
pub fn write_path(path: &BezPath, digits: usize) -> String {
    let mut d = String::with_capacity(path.elements().len() * 16);
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                d.push('M');
                write_point(&mut d, p, digits);
            }
            PathEl::LineTo(p) => {
                d.push('L');
                write_point(&mut d, p, digits);
            }
            PathEl::QuadTo(p1, p2) => {
                d.push('Q');
                write_point(&mut d, p1, digits);
                d.push(' ');
                write_point(&mut d, p2, digits);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                d.push('C');
                write_point(&mut d, p1, digits);
                d.push(' ');
                write_point(&mut d, p2, digits);
                d.push(' ');
                write_point(&mut d, p3, digits);
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

/// Write "x y" to the string.
fn write_point(d: &mut String, p: Point, digits: usize) {
    let _ = write!(d, "{} {}", fmt_scalar(p.x, digits), fmt_scalar(p.y, digits));
}

/// Most decimals that still round-trip through an `f64` scale factor.
const MAX_DIGITS: usize = 15;

/// Format a scalar to the given precision, stripping trailing zeros.
///
/// Negative zero (including values that round to zero) is written as `0`.
#[must_use]
pub fn fmt_scalar(v: Scalar, digits: usize) -> String {
    // Ties round away from zero; `format!` alone would round them to even.
    let factor = 10f64.powi(i32::try_from(digits.min(MAX_DIGITS)).unwrap_or(0));
    let v = (v * factor).round() / factor;
    let s = format!("{v:.digits$}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s
    };
    if s == "-0" { "0".to_owned() } else { s }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
