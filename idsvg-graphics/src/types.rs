//! Core types shared across the path pipeline.

use kurbo::Affine;

/// Convenience alias for coordinates and factors.
pub type Scalar = f64;

/// Number of decimal places kept in emitted path data.
pub const DEFAULT_DIGITS: usize = 2;

/// A scale about the origin followed by a translation.
///
/// This is the only transform shape the composition pipeline needs: every
/// part is shrunk (or flipped) in place and then moved into its slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub scale_x: Scalar,
    pub scale_y: Scalar,
    pub translate_x: Scalar,
    pub translate_y: Scalar,
}

impl Placement {
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    #[inline]
    #[must_use]
    pub const fn new(scale_x: Scalar, scale_y: Scalar, translate_x: Scalar, translate_y: Scalar) -> Self {
        Self {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }

    /// Uniform scale, no translation.
    #[must_use]
    pub const fn scaled(factor: Scalar) -> Self {
        Self {
            scale_x: factor,
            scale_y: factor,
            ..Self::IDENTITY
        }
    }

    /// The equivalent `kurbo` affine: `(x, y) → (sx·x + tx, sy·y + ty)`.
    #[must_use]
    pub const fn to_affine(&self) -> Affine {
        Affine::new([
            self.scale_x,
            0.0,
            0.0,
            self.scale_y,
            self.translate_x,
            self.translate_y,
        ])
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}
