//! Font data wrapper around `ttf-parser`.

use std::path::Path;
use std::sync::Arc;

use crate::error::FontError;
use crate::outline::OutlineSink;

/// Parsed font data.
///
/// Stores owned font bytes and cached global metrics. Creates a
/// `ttf_parser::Face` on demand for individual queries; parsing is
/// sub-microsecond (no allocation, just header validation and offset
/// table construction).
#[derive(Clone)]
pub struct FontData {
    bytes: Arc<[u8]>,
    /// Font units per em (design coordinate space).
    units_per_em: u16,
    /// Global ascender in design units (positive).
    ascender: i16,
}

impl FontData {
    /// Parse font data from an owned byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the data is not a valid
    /// OpenType/TrueType font.
    pub fn from_bytes(bytes: Arc<[u8]>) -> Result<Self, FontError> {
        let face =
            ttf_parser::Face::parse(&bytes, 0).map_err(|e| FontError::Parse(e.to_string()))?;
        Ok(Self {
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            bytes,
        })
    }

    /// Parse font data from a byte vector (e.g. handed over from JavaScript).
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the data is not a valid font.
    pub fn from_vec(bytes: Vec<u8>) -> Result<Self, FontError> {
        Self::from_bytes(Arc::from(bytes.into_boxed_slice()))
    }

    /// Read and parse a font file.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Io`] if the file cannot be read and
    /// [`FontError::Parse`] if its contents are not a valid font.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_vec(bytes)
    }

    /// Create a temporary `Face` reference for queries.
    fn face(&self) -> ttf_parser::Face<'_> {
        #[expect(clippy::expect_used, reason = "bytes were validated at construction")]
        ttf_parser::Face::parse(&self.bytes, 0).expect("font bytes validated at construction")
    }

    /// Font units per em (design coordinate space).
    #[must_use]
    pub const fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Global ascender in design units.
    #[must_use]
    pub const fn ascender(&self) -> i16 {
        self.ascender
    }

    /// Scale factor from design units to the given font size.
    #[must_use]
    pub fn scale(&self, font_size: f64) -> f64 {
        font_size / f64::from(self.units_per_em)
    }

    /// Map a character to its glyph ID. Returns `None` if not in the cmap.
    #[must_use]
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|g| g.0)
    }

    /// Extract the outline of a glyph into the given sink.
    ///
    /// Coordinates are pre-scaled from design units to the given font size.
    /// Returns `false` if the glyph has no outline (e.g., a space).
    pub fn outline(&self, glyph_id: u16, font_size: f64, sink: &mut dyn OutlineSink) -> bool {
        let face = self.face();
        let scale = self.scale(font_size);
        let mut adapter = OutlineAdapter { sink, scale };
        face.outline_glyph(ttf_parser::GlyphId(glyph_id), &mut adapter)
            .is_some()
    }
}

/// Adapter from [`OutlineSink`] to `ttf_parser::OutlineBuilder`.
struct OutlineAdapter<'a> {
    sink: &'a mut dyn OutlineSink,
    scale: f64,
}

impl ttf_parser::OutlineBuilder for OutlineAdapter<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.sink
            .move_to(f64::from(x) * self.scale, f64::from(y) * self.scale);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.sink
            .line_to(f64::from(x) * self.scale, f64::from(y) * self.scale);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.sink.quad_to(
            f64::from(x1) * self.scale,
            f64::from(y1) * self.scale,
            f64::from(x) * self.scale,
            f64::from(y) * self.scale,
        );
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.sink.curve_to(
            f64::from(x1) * self.scale,
            f64::from(y1) * self.scale,
            f64::from(x2) * self.scale,
            f64::from(y2) * self.scale,
            f64::from(x) * self.scale,
            f64::from(y) * self.scale,
        );
    }

    fn close(&mut self) {
        self.sink.close();
    }
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("units_per_em", &self.units_per_em)
            .field("ascender", &self.ascender)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests may panic")]
mod tests {
    use super::*;

    /// One L-shaped glyph shared by a dozen CJK characters; 1000 upem,
    /// ascender 900.
    static TEST_FONT: &[u8] = include_bytes!("../fonts/IdsTest-Regular.ttf");

    #[derive(Default)]
    struct Recorder(Vec<(f64, f64)>);

    impl OutlineSink for Recorder {
        fn move_to(&mut self, x: f64, y: f64) {
            self.0.push((x, y));
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.0.push((x, y));
        }
        fn quad_to(&mut self, _: f64, _: f64, x: f64, y: f64) {
            self.0.push((x, y));
        }
        fn curve_to(&mut self, _: f64, _: f64, _: f64, _: f64, x: f64, y: f64) {
            self.0.push((x, y));
        }
        fn close(&mut self) {}
    }

    #[test]
    fn fixture_metrics() {
        let font = FontData::from_bytes(Arc::from(TEST_FONT)).unwrap();
        assert_eq!(font.units_per_em(), 1000);
        assert_eq!(font.ascender(), 900);
        assert!((font.scale(72.0) - 0.072).abs() < 1e-12);
    }

    #[test]
    fn fixture_cmap() {
        let font = FontData::from_vec(TEST_FONT.to_vec()).unwrap();
        for ch in ['王', '丿', '乚', '龷', '口'] {
            assert_eq!(font.glyph_id(ch), Some(1), "{ch}");
        }
        assert_eq!(font.glyph_id('A'), None);
        assert_eq!(font.glyph_id('☒'), None);
    }

    #[test]
    fn fixture_outline_is_scaled_and_y_up() {
        let font = FontData::from_vec(TEST_FONT.to_vec()).unwrap();
        let mut rec = Recorder::default();
        assert!(font.outline(1, 1000.0, &mut rec));
        assert_eq!(rec.0[..6], [
            (100.0, 100.0),
            (100.0, 1000.0),
            (300.0, 1000.0),
            (300.0, 300.0),
            (900.0, 300.0),
            (900.0, 100.0),
        ]);

        let mut rec = Recorder::default();
        assert!(font.outline(1, 500.0, &mut rec));
        assert_eq!(rec.0[1], (50.0, 500.0));
    }

    #[test]
    fn fixture_notdef_has_no_outline() {
        let font = FontData::from_vec(TEST_FONT.to_vec()).unwrap();
        let mut rec = Recorder::default();
        assert!(!font.outline(0, 72.0, &mut rec));
        assert!(rec.0.is_empty());
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = FontData::from_vec(b"definitely not a font".to_vec()).unwrap_err();
        assert!(matches!(err, FontError::Parse(_)), "unexpected error: {err}");
        assert!(err.to_string().starts_with("font parse error"));
    }

    #[test]
    fn empty_buffer_is_rejected() {
        assert!(FontData::from_vec(Vec::new()).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let path = std::env::temp_dir().join("idsvg_no_such_font_file.otf");
        let err = FontData::load(&path).unwrap_err();
        assert!(matches!(err, FontError::Io { .. }), "unexpected error: {err}");
        assert!(
            err.to_string().contains("idsvg_no_such_font_file.otf"),
            "missing path in message: {err}"
        );
    }

    #[test]
    fn outline_adapter_scales_coordinates() {
        use ttf_parser::OutlineBuilder;
        let mut rec = Recorder::default();
        let mut adapter = OutlineAdapter {
            sink: &mut rec,
            scale: 0.5,
        };
        adapter.move_to(100.0, 200.0);
        adapter.line_to(-40.0, 0.0);
        adapter.close();
        assert_eq!(rec.0, vec![(50.0, 100.0), (-20.0, 0.0)]);
    }
}
