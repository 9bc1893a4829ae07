//! Glyph outline provider boundary.
//!
//! The engine asks a [`GlyphOutlineProvider`] for the outline of each leaf
//! character. [`FontData`] is the production provider; tests plug in fakes.

use idsvg_fonts::{FontData, OutlineSink};
use kurbo::BezPath;

use crate::error::{IdsError, IdsResult};

/// One glyph's outline plus the vertical metrics needed to place it.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphOutline {
    /// Outline in font orientation (Y-up, origin on the baseline), already
    /// scaled to the requested font size.
    pub path: BezPath,
    /// Font ascender in design units.
    pub ascender: f64,
    /// Font units per em.
    pub units_per_em: f64,
}

impl GlyphOutline {
    /// Baseline position (SVG Y) that aligns the font's ascender with the
    /// top of a `font_size` box.
    #[must_use]
    pub fn baseline(&self, font_size: f64) -> f64 {
        let scale = font_size / self.units_per_em;
        font_size - self.ascender.mul_add(scale, -font_size)
    }
}

/// Source of leaf glyph outlines.
pub trait GlyphOutlineProvider {
    /// Outline of `ch` at `font_size`, with no kerning or tracking applied.
    ///
    /// # Errors
    ///
    /// Returns [`IdsError::UnsupportedCharacter`] if `ch` has no glyph.
    fn glyph_outline(&self, ch: char, font_size: f64) -> IdsResult<GlyphOutline>;
}

impl<P: GlyphOutlineProvider + ?Sized> GlyphOutlineProvider for &P {
    fn glyph_outline(&self, ch: char, font_size: f64) -> IdsResult<GlyphOutline> {
        (**self).glyph_outline(ch, font_size)
    }
}

impl GlyphOutlineProvider for FontData {
    fn glyph_outline(&self, ch: char, font_size: f64) -> IdsResult<GlyphOutline> {
        let gid = self
            .glyph_id(ch)
            .ok_or(IdsError::UnsupportedCharacter(ch))?;
        let mut sink = BezPathSink::default();
        // Glyphs without contours (spaces) leave the path empty.
        self.outline(gid, font_size, &mut sink);
        Ok(GlyphOutline {
            path: sink.path,
            ascender: f64::from(self.ascender()),
            units_per_em: f64::from(self.units_per_em()),
        })
    }
}

/// Collects outline commands into a [`BezPath`].
#[derive(Debug, Default)]
pub struct BezPathSink {
    pub path: BezPath,
}

impl OutlineSink for BezPathSink {
    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x, y));
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.path.quad_to((x1, y1), (x, y));
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.path.curve_to((x1, y1), (x2, y2), (x, y));
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests may panic")]
mod tests {
    use super::*;
    use crate::testing::test_font;
    use kurbo::Shape;

    #[test]
    fn font_outline_is_scaled_in_font_orientation() {
        let outline = test_font().glyph_outline('王', 72.0).unwrap();
        assert!((outline.ascender - 900.0).abs() < f64::EPSILON);
        assert!((outline.units_per_em - 1000.0).abs() < f64::EPSILON);
        let b = outline.path.bounding_box();
        for (got, want) in [(b.x0, 7.2), (b.y0, 7.2), (b.x1, 64.8), (b.y1, 72.0)] {
            assert!((got - want).abs() < 1e-4, "{b:?}");
        }
    }

    #[test]
    fn font_baseline_uses_real_metrics() {
        let outline = test_font().glyph_outline('口', 72.0).unwrap();
        // 72 - (900 * 0.072 - 72)
        assert!((outline.baseline(72.0) - 79.2).abs() < 1e-9);
    }

    #[test]
    fn font_cmap_miss_is_unsupported() {
        assert_eq!(
            test_font().glyph_outline('☒', 72.0).unwrap_err(),
            IdsError::UnsupportedCharacter('☒')
        );
        assert_eq!(
            test_font().glyph_outline('A', 72.0).unwrap_err(),
            IdsError::UnsupportedCharacter('A')
        );
    }

    #[test]
    fn baseline_aligns_ascender_with_top() {
        // Source Han Serif-like metrics: ascender 1151 / 1000 upem.
        let outline = GlyphOutline {
            path: BezPath::new(),
            ascender: 1151.0,
            units_per_em: 1000.0,
        };
        let baseline = outline.baseline(72.0);
        assert!((baseline - (72.0 - (1151.0 * 0.072 - 72.0))).abs() < 1e-9);
    }

    #[test]
    fn baseline_equals_size_when_ascender_is_one_em() {
        let outline = GlyphOutline {
            path: BezPath::new(),
            ascender: 2048.0,
            units_per_em: 2048.0,
        };
        assert!((outline.baseline(64.0) - 64.0).abs() < 1e-9);
    }

    #[test]
    fn sink_builds_bez_path() {
        let mut sink = BezPathSink::default();
        sink.move_to(0.0, 0.0);
        sink.line_to(10.0, 0.0);
        sink.quad_to(10.0, 5.0, 5.0, 10.0);
        sink.curve_to(3.0, 10.0, 0.0, 8.0, 0.0, 5.0);
        sink.close();
        assert_eq!(
            idsvg_graphics::write_path(&sink.path, 2),
            "M0 0L10 0Q10 5 5 10C3 10 0 8 0 5Z"
        );
    }
}
