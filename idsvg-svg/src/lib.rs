//! SVG document assembly for rendered IDS outlines.
//!
//! [`Renderer`] runs the decomposition engine over an IDS string and wraps
//! the resulting fragments in an SVG [`Document`]:
//!
//! - The document is a `font_size` × `font_size` square with no `viewBox`;
//!   fragments are already in that coordinate space.
//! - Each fragment becomes one `<path>` element, in paint order.
//! - Path data is passed through as raw `d` strings so the two-decimal
//!   rounding done by the engine survives (the `svg` crate's `Data`
//!   builder would go through `f32`).

use idsvg_core::{
    DEFAULT_FONT_SIZE, DEFAULT_MAX_DEPTH, Decomposer, GlyphOutlineProvider, IdsResult, PartTables,
};
use idsvg_graphics::DEFAULT_DIGITS;
use idsvg_graphics::svg_path::fmt_scalar;
use svg::Document;
use svg::node::element::Path;
use tracing::debug;

/// Fill applied to every fragment.
pub const FILL: &str = "black";

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Options controlling SVG output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Side of the square output box. Default: 72.
    pub font_size: f64,
    /// Requested fill colour. Recorded but not applied yet: fragments are
    /// always filled with [`FILL`]. Default: `"black"`.
    pub color: String,
    /// Deepest operator nesting accepted. Default: 32.
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            color: FILL.to_owned(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders IDS strings to SVG documents with one glyph source.
#[derive(Debug)]
pub struct Renderer<'a, P: ?Sized> {
    provider: &'a P,
    tables: &'a PartTables,
    options: RenderOptions,
}

impl<'a, P: GlyphOutlineProvider + ?Sized> Renderer<'a, P> {
    #[must_use]
    pub fn new(provider: &'a P, options: RenderOptions) -> Self {
        Self {
            provider,
            tables: PartTables::builtin(),
            options,
        }
    }

    /// Use `tables` instead of the built-in classification data.
    #[must_use]
    pub const fn with_tables(mut self, tables: &'a PartTables) -> Self {
        self.tables = tables;
        self
    }

    /// Render `ids` to an SVG [`Document`].
    ///
    /// # Errors
    ///
    /// Propagates every [`idsvg_core::IdsError`] from decomposition; no
    /// partial document is produced.
    pub fn render(&self, ids: &str) -> IdsResult<Document> {
        let paths = Decomposer::new(self.provider)
            .with_tables(self.tables)
            .with_max_depth(self.options.max_depth)
            .render(ids, self.options.font_size)?;
        if self.options.color != FILL {
            debug!(color = %self.options.color, "fill colour is not applied; using {FILL}");
        }
        Ok(build_document(&paths, self.options.font_size))
    }

    /// Render `ids` to an SVG string.
    ///
    /// # Errors
    ///
    /// See [`Self::render`].
    pub fn render_to_string(&self, ids: &str) -> IdsResult<String> {
        self.render(ids).map(|doc| doc.to_string())
    }
}

// ---------------------------------------------------------------------------
// Document assembly
// ---------------------------------------------------------------------------

/// Wrap placed fragments in a `font_size` square document.
#[must_use]
pub fn build_document(paths: &[String], font_size: f64) -> Document {
    let side = fmt_scalar(font_size, DEFAULT_DIGITS);
    paths.iter().fold(
        Document::new()
            .set("xmlns", SVG_NS)
            .set("xmlns:xlink", XLINK_NS)
            .set("width", side.as_str())
            .set("height", side.as_str()),
        |doc, d| doc.add(Path::new().set("fill", FILL).set("d", d.as_str())),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
