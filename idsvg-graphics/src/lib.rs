//! Path geometry for `idsvg`: parsing SVG path data into `kurbo` paths,
//! placing them with a scale + translate, and writing them back with
//! rounded coordinates.

pub mod error;
pub mod svg_path;
pub mod transform;
pub mod types;

pub use error::PathError;
pub use svg_path::{parse_path, write_path};
pub use transform::{transform, transform_path};
pub use types::{DEFAULT_DIGITS, Placement, Scalar};
