//! Test doubles and fixtures for the outline provider.

use std::cell::RefCell;

use idsvg_fonts::FontData;
use kurbo::{BezPath, Rect, Shape};

use crate::error::{IdsError, IdsResult};
use crate::outline::{GlyphOutline, GlyphOutlineProvider};

/// Character the fake provider has no glyph for.
pub const MISSING: char = '☒';

/// Renders every character as a square filling the em box, and records
/// which characters were requested.
#[derive(Debug, Default)]
pub struct SquareProvider {
    requests: RefCell<Vec<char>>,
}

impl SquareProvider {
    pub fn requests(&self) -> Vec<char> {
        self.requests.borrow().clone()
    }
}

impl GlyphOutlineProvider for SquareProvider {
    fn glyph_outline(&self, ch: char, font_size: f64) -> IdsResult<GlyphOutline> {
        self.requests.borrow_mut().push(ch);
        if ch == MISSING {
            return Err(IdsError::UnsupportedCharacter(ch));
        }
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((font_size, 0.0));
        path.line_to((font_size, font_size));
        path.line_to((0.0, font_size));
        path.close_path();
        Ok(GlyphOutline {
            path,
            ascender: 1000.0,
            units_per_em: 1000.0,
        })
    }
}

/// Bounding box of a path fragment.
pub fn bounds(d: &str) -> Rect {
    idsvg_graphics::parse_path(d)
        .unwrap_or_else(|e| panic!("bad fragment {d:?}: {e}"))
        .bounding_box()
}

/// The bundled TrueType fixture: one L-shaped glyph (stem on the left, foot
/// along the bottom) for a dozen CJK characters, 1000 upem, ascender 900.
pub fn test_font() -> FontData {
    static BYTES: &[u8] = include_bytes!("../../idsvg-fonts/fonts/IdsTest-Regular.ttf");
    FontData::from_vec(BYTES.to_vec()).unwrap_or_else(|e| panic!("bad test font: {e}"))
}
