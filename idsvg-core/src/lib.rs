//! Ideographic Description Sequence decomposition.
//!
//! Turns an IDS such as `⿰王⿱丿⿻乚龷` into an ordered list of SVG path
//! fragments, each already scaled and moved into place inside a square box.
//!
//! ```no_run
//! use idsvg_core::Decomposer;
//! use idsvg_fonts::FontData;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let font = FontData::load("SourceHanSerifCN-Regular.otf")?;
//! let paths = Decomposer::new(&font).render("⿰王⿱丿⿻乚龷", 72.0)?;
//! # let _ = paths;
//! # Ok(())
//! # }
//! ```

pub mod compose;
pub mod engine;
pub mod error;
pub mod layout;
pub mod navigator;
pub mod operator;
pub mod outline;
pub mod tables;

#[cfg(test)]
mod testing;

pub use compose::{PathLayer, compose};
pub use engine::{DEFAULT_FONT_SIZE, DEFAULT_MAX_DEPTH, Decomposer, Rendered, tokenize};
pub use error::{IdsError, IdsResult, MalformedReason};
pub use layout::{DimensionProfile, layout};
pub use navigator::skip;
pub use operator::{Axis, LayoutRule, Operator};
pub use outline::{GlyphOutline, GlyphOutlineProvider};
pub use tables::{PartTables, Position};
