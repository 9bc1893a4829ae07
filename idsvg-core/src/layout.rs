//! Dimension profiles: where each operand of an operator goes.

use idsvg_graphics::Placement;

use crate::navigator::after_first_operand;
use crate::operator::{Axis, LayoutRule, NEST_SCALE, Operator};
use crate::tables::{PartTables, Position};

const THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;
/// Width of a shrunk small part on the left; slightly wider than a third.
const NARROW_LEFT: f64 = 1.2 / 3.0;

/// Placement of one operand relative to its parent's `font_size` box.
///
/// Offsets are absolute (already multiplied by the font size); scales are
/// fractions of the parent box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionProfile {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub position: Option<Position>,
}

impl DimensionProfile {
    /// Full size at the origin.
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(offset_x: f64, offset_y: f64, scale_x: f64, scale_y: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            scale_x,
            scale_y,
            position: None,
        }
    }

    /// The scale + translate applied to this operand's paths.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        Placement::new(self.scale_x, self.scale_y, self.offset_x, self.offset_y)
    }
}

/// Compute the profiles for `op`'s operands.
///
/// `operands` are the tokens following the operator; only the split
/// operators look at them, to decide whether a small part is involved.
#[must_use]
pub fn layout(
    op: Operator,
    operands: &[char],
    font_size: f64,
    tables: &PartTables,
) -> Vec<DimensionProfile> {
    match op.layout_rule() {
        LayoutRule::Split(axis) => {
            let first = operands.first().copied();
            let second = after_first_operand(operands);
            split(axis, first, second, font_size, tables).to_vec()
        }
        LayoutRule::Thirds(axis) => (0..3)
            .map(|i| along(axis, font_size * f64::from(i) / 3.0, THIRD, None))
            .collect(),
        LayoutRule::Nest { dx, dy } => vec![
            DimensionProfile::FULL,
            DimensionProfile::new(dx * font_size, dy * font_size, NEST_SCALE, NEST_SCALE),
        ],
        LayoutRule::Overlay => vec![DimensionProfile::FULL, DimensionProfile::FULL],
    }
}

/// Two-way split with small-part shrinking.
///
/// A small part next to a regular one takes the narrow slot (or a
/// two-thirds slot if it is an unshrink part); otherwise the box is halved.
/// A missing lookahead character counts as not small.
fn split(
    axis: Axis,
    first: Option<char>,
    second: Option<char>,
    font_size: f64,
    tables: &PartTables,
) -> [DimensionProfile; 2] {
    let small = |ch: Option<char>| ch.is_some_and(|c| tables.is_small(c));
    let unshrink = |ch: Option<char>| ch.is_some_and(|c| tables.is_unshrink(c));
    let (lead, trail) = match axis {
        Axis::Horizontal => (Position::Left, Position::Right),
        Axis::Vertical => (Position::Up, Position::Down),
    };
    let narrow_lead = match axis {
        Axis::Horizontal => NARROW_LEFT,
        Axis::Vertical => THIRD,
    };

    let third = font_size / 3.0;
    let two_thirds = font_size * 2.0 / 3.0;
    let half = font_size / 2.0;

    // (offset, extent) for each side; offsets are absolute, extents fractions.
    let ((o1, e1), (o2, e2)) = match (small(first), small(second)) {
        (true, false) if unshrink(first) => ((0.0, TWO_THIRDS), (third, TWO_THIRDS)),
        (true, false) => ((0.0, narrow_lead), (third, TWO_THIRDS)),
        (false, true) if unshrink(second) => ((0.0, TWO_THIRDS), (third, TWO_THIRDS)),
        (false, true) => ((0.0, TWO_THIRDS), (two_thirds, THIRD)),
        _ => ((0.0, 0.5), (half, 0.5)),
    };

    [
        along(axis, o1, e1, Some(lead)),
        along(axis, o2, e2, Some(trail)),
    ]
}

/// A profile that is offset and shrunk along `axis` and full size across it.
const fn along(axis: Axis, offset: f64, extent: f64, position: Option<Position>) -> DimensionProfile {
    let mut profile = match axis {
        Axis::Horizontal => DimensionProfile::new(offset, 0.0, extent, 1.0),
        Axis::Vertical => DimensionProfile::new(0.0, offset, 1.0, extent),
    };
    profile.position = position;
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    const FS: f64 = 72.0;
    const EPS: f64 = 1e-9;

    fn profiles(ids: &str) -> Vec<DimensionProfile> {
        let tokens: Vec<char> = ids.chars().collect();
        let op = Operator::from_char(tokens[0]).unwrap_or_else(|| panic!("{ids} has no operator"));
        layout(op, &tokens[1..], FS, PartTables::builtin())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn small_left_part_is_narrow() {
        let p = profiles("⿰王丁");
        assert!(close(p[0].scale_x, 0.4));
        assert!(p[0].scale_x * FS < FS / 2.0);
        assert!(close(p[1].offset_x, 24.0));
        assert!(p[1].scale_x * FS > FS / 2.0);
        assert_eq!(p[0].position, Some(Position::Left));
        assert_eq!(p[1].position, Some(Position::Right));
    }

    #[test]
    fn small_right_part_mirrors() {
        let p = profiles("⿰丁王");
        assert!(close(p[0].scale_x, TWO_THIRDS));
        assert!(close(p[1].offset_x, 48.0));
        assert!(close(p[1].scale_x, THIRD));
    }

    #[test]
    fn unshrink_parts_keep_two_thirds() {
        let left = profiles("⿰木丁");
        assert!(close(left[0].scale_x, TWO_THIRDS));
        let right = profiles("⿰丁木");
        assert!(close(right[1].offset_x, 24.0));
        assert!(close(right[1].scale_x, TWO_THIRDS));
    }

    #[test]
    fn both_or_neither_small_halves() {
        for ids in ["⿰王口", "⿰光军"] {
            let p = profiles(ids);
            assert!(close(p[0].scale_x, 0.5), "{ids}");
            assert!(close(p[1].offset_x, 36.0), "{ids}");
            assert!(close(p[1].scale_x, 0.5), "{ids}");
        }
    }

    #[test]
    fn lookahead_skips_nested_first_operand() {
        // First operand is an operator, so it is never small; the lookahead
        // lands on 王 after the whole ⿱ subtree.
        let p = profiles("⿰⿱丁口王");
        assert!(close(p[0].scale_x, TWO_THIRDS));
        assert!(close(p[1].scale_x, THIRD));
    }

    #[test]
    fn missing_lookahead_counts_as_not_small() {
        let p = profiles("⿰王");
        assert!(close(p[0].scale_x, 0.4));
        let p = profiles("⿰丁");
        assert!(close(p[0].scale_x, 0.5));
    }

    #[test]
    fn vertical_split_uses_thirds() {
        let p = profiles("⿱丿⿻乚龷");
        assert!(close(p[0].scale_y, THIRD));
        assert!(close(p[0].scale_x, 1.0));
        assert!(close(p[1].offset_y, 24.0));
        assert!(close(p[1].scale_y, TWO_THIRDS));
        assert_eq!(p[0].position, Some(Position::Up));
        assert_eq!(p[1].position, Some(Position::Down));

        let p = profiles("⿱丁丶");
        assert!(close(p[1].offset_y, 48.0));
        assert!(close(p[1].scale_y, THIRD));
    }

    #[test]
    fn thirds_tile_the_box() {
        let p = profiles("⿲木木木");
        let xs: Vec<f64> = p.iter().map(|d| d.offset_x).collect();
        assert!(close(xs[0], 0.0) && close(xs[1], 24.0) && close(xs[2], 48.0));
        assert!(p.iter().all(|d| close(d.scale_x, THIRD) && d.position.is_none()));
        let covered: f64 = p.iter().map(|d| d.scale_x).sum();
        assert!(close(covered, 1.0));

        let p = profiles("⿳口口口");
        assert!(close(p[2].offset_y, 48.0));
        assert!(p.iter().all(|d| close(d.scale_y, THIRD)));
    }

    #[test]
    fn even_split_covers_box() {
        let p = profiles("⿰丁可");
        assert!(close(p[0].offset_x + p[0].scale_x * FS, p[1].offset_x));
        assert!(close(p[1].offset_x + p[1].scale_x * FS, FS));
    }

    #[test]
    fn surrounds_nest_second_part() {
        let cases = [
            ("⿸广木", 24.0, 24.0),
            ("⿺辶木", 24.0, 0.0),
            ("⿹勹木", 0.0, 24.0),
            ("⿽匚木", 0.0, 0.0),
            ("⿵门木", 0.17 * FS, 0.19 * FS),
            ("⿷匚木", 0.19 * FS, 0.17 * FS),
            ("⿶凵木", 0.17 * FS, 0.1 * FS),
            ("⿼丁木", 0.1 * FS, 0.17 * FS),
            ("⿴囗木", 0.175 * FS, 0.16 * FS),
        ];
        for (ids, x, y) in cases {
            let p = profiles(ids);
            assert_eq!(p[0], DimensionProfile::FULL, "{ids}");
            assert!(close(p[1].offset_x, x) && close(p[1].offset_y, y), "{ids}");
            assert!(close(p[1].scale_x, 0.65) && close(p[1].scale_y, 0.65), "{ids}");
            assert!(p[1].position.is_none(), "{ids}");
        }
    }

    #[test]
    fn overlay_is_two_full_layers() {
        assert_eq!(
            profiles("⿻乚龷"),
            vec![DimensionProfile::FULL, DimensionProfile::FULL]
        );
    }

    #[test]
    fn every_operator_yields_arity_profiles() {
        for op in Operator::ALL {
            assert_eq!(layout(op, &[], FS, PartTables::builtin()).len(), op.arity(), "{op}");
        }
    }
}
