//! Font loading and glyph outline extraction for `idsvg`.
//!
//! This crate wraps `ttf-parser` to provide OpenType font support.
//! It is intentionally independent of `idsvg-graphics`: all types are plain
//! `f64`/`u16` values. Bridging to path types happens in `idsvg-core`.

pub mod data;
pub mod error;
pub mod outline;

pub use data::FontData;
pub use error::FontError;
pub use outline::OutlineSink;
