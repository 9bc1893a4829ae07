//! Path composition: place each child's fragments and flatten them.

use idsvg_graphics::{DEFAULT_DIGITS, transform};

use crate::error::IdsResult;
use crate::layout::DimensionProfile;

/// A rendered child paired with where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct PathLayer {
    pub paths: Vec<String>,
    pub profile: DimensionProfile,
}

/// Place every fragment of every layer and concatenate them in layer order.
///
/// Layer order is paint order: fragments of later layers are drawn over
/// earlier ones, which overlay and surround layouts rely on.
///
/// # Errors
///
/// Returns [`crate::IdsError::Path`] if a fragment is not valid path data.
pub fn compose(layers: &[PathLayer]) -> IdsResult<Vec<String>> {
    let mut out = Vec::with_capacity(layers.iter().map(|l| l.paths.len()).sum());
    for layer in layers {
        let placement = layer.profile.placement();
        for d in &layer.paths {
            out.push(transform(d, &placement, DEFAULT_DIGITS)?);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests may panic")]
mod tests {
    use super::*;

    fn layer(paths: &[&str], profile: DimensionProfile) -> PathLayer {
        PathLayer {
            paths: paths.iter().map(|&p| p.to_owned()).collect(),
            profile,
        }
    }

    #[test]
    fn layers_keep_order() {
        let layers = [
            layer(&["M0 0L72 72", "M1 1"], DimensionProfile::FULL),
            layer(&["M0 0L72 72"], DimensionProfile::new(36.0, 0.0, 0.5, 1.0)),
        ];
        let out = compose(&layers).unwrap();
        assert_eq!(out, vec!["M0 0L72 72", "M1 1", "M36 0L72 72"]);
    }

    #[test]
    fn nested_scaling_rounds_to_two_digits() {
        let layers = [layer(&["M0 0L72 72"], DimensionProfile::new(0.0, 24.0, 1.0, 2.0 / 3.0))];
        assert_eq!(compose(&layers).unwrap(), vec!["M0 24L72 72"]);
        let layers = [layer(&["M10 10"], DimensionProfile::new(0.0, 0.0, 0.65, 0.65))];
        assert_eq!(compose(&layers).unwrap(), vec!["M6.5 6.5"]);
    }

    #[test]
    fn empty_layers() {
        assert!(compose(&[]).unwrap().is_empty());
        let layers = [layer(&[], DimensionProfile::FULL)];
        assert!(compose(&layers).unwrap().is_empty());
    }

    #[test]
    fn invalid_fragment_is_an_error() {
        let layers = [layer(&["not a path"], DimensionProfile::FULL)];
        assert!(compose(&layers).is_err());
    }
}
