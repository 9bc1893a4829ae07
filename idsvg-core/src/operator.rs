//! Ideographic description operators.
//!
//! Each operator carries two fixed facts: how many operands it takes and
//! which layout rule places them. Both the lookahead navigator and the
//! decomposition engine read arity from here, so skipping a sub-expression
//! and rendering it always consume the same tokens.

use std::fmt;

/// Direction along which a split or thirds layout divides the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// How an operator arranges its operands inside the parent box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutRule {
    /// Two parts side by side (or stacked), with small-part shrinking.
    Split(Axis),
    /// Three equal parts.
    Thirds(Axis),
    /// First part full size; second part shrunk to [`NEST_SCALE`] and moved
    /// by the given fractions of the font size.
    Nest { dx: f64, dy: f64 },
    /// Both parts full size at the origin, second painted on top.
    Overlay,
}

/// Scale applied to the enclosed part of a surround operator.
pub const NEST_SCALE: f64 = 0.65;

/// One of the fourteen structural operators (U+2FF0..=U+2FFD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// ⿰
    LeftToRight,
    /// ⿱
    AboveToBelow,
    /// ⿲
    LeftToMiddleToRight,
    /// ⿳
    AboveToMiddleToBelow,
    /// ⿴
    FullSurround,
    /// ⿵
    SurroundFromAbove,
    /// ⿶
    SurroundFromBelow,
    /// ⿷
    SurroundFromLeft,
    /// ⿸
    SurroundFromUpperLeft,
    /// ⿹
    SurroundFromUpperRight,
    /// ⿺
    SurroundFromLowerLeft,
    /// ⿻
    Overlaid,
    /// ⿼
    SurroundFromRight,
    /// ⿽
    SurroundFromLowerRight,
}

impl Operator {
    pub const ALL: [Self; 14] = [
        Self::LeftToRight,
        Self::AboveToBelow,
        Self::LeftToMiddleToRight,
        Self::AboveToMiddleToBelow,
        Self::FullSurround,
        Self::SurroundFromAbove,
        Self::SurroundFromBelow,
        Self::SurroundFromLeft,
        Self::SurroundFromUpperLeft,
        Self::SurroundFromUpperRight,
        Self::SurroundFromLowerLeft,
        Self::Overlaid,
        Self::SurroundFromRight,
        Self::SurroundFromLowerRight,
    ];

    /// Classify a token. Returns `None` for leaf characters.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        Some(match ch {
            '⿰' => Self::LeftToRight,
            '⿱' => Self::AboveToBelow,
            '⿲' => Self::LeftToMiddleToRight,
            '⿳' => Self::AboveToMiddleToBelow,
            '⿴' => Self::FullSurround,
            '⿵' => Self::SurroundFromAbove,
            '⿶' => Self::SurroundFromBelow,
            '⿷' => Self::SurroundFromLeft,
            '⿸' => Self::SurroundFromUpperLeft,
            '⿹' => Self::SurroundFromUpperRight,
            '⿺' => Self::SurroundFromLowerLeft,
            '⿻' => Self::Overlaid,
            '⿼' => Self::SurroundFromRight,
            '⿽' => Self::SurroundFromLowerRight,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::LeftToRight => '⿰',
            Self::AboveToBelow => '⿱',
            Self::LeftToMiddleToRight => '⿲',
            Self::AboveToMiddleToBelow => '⿳',
            Self::FullSurround => '⿴',
            Self::SurroundFromAbove => '⿵',
            Self::SurroundFromBelow => '⿶',
            Self::SurroundFromLeft => '⿷',
            Self::SurroundFromUpperLeft => '⿸',
            Self::SurroundFromUpperRight => '⿹',
            Self::SurroundFromLowerLeft => '⿺',
            Self::Overlaid => '⿻',
            Self::SurroundFromRight => '⿼',
            Self::SurroundFromLowerRight => '⿽',
        }
    }

    /// Number of operands this operator consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::LeftToMiddleToRight | Self::AboveToMiddleToBelow => 3,
            _ => 2,
        }
    }

    /// The layout rule placing this operator's operands.
    #[must_use]
    pub const fn layout_rule(self) -> LayoutRule {
        const THIRD: f64 = 1.0 / 3.0;
        match self {
            Self::LeftToRight => LayoutRule::Split(Axis::Horizontal),
            Self::AboveToBelow => LayoutRule::Split(Axis::Vertical),
            Self::LeftToMiddleToRight => LayoutRule::Thirds(Axis::Horizontal),
            Self::AboveToMiddleToBelow => LayoutRule::Thirds(Axis::Vertical),
            Self::SurroundFromUpperLeft => LayoutRule::Nest {
                dx: THIRD,
                dy: THIRD,
            },
            Self::SurroundFromLowerLeft => LayoutRule::Nest { dx: THIRD, dy: 0.0 },
            Self::SurroundFromUpperRight => LayoutRule::Nest { dx: 0.0, dy: THIRD },
            Self::SurroundFromLowerRight => LayoutRule::Nest { dx: 0.0, dy: 0.0 },
            Self::SurroundFromAbove => LayoutRule::Nest { dx: 0.17, dy: 0.19 },
            Self::SurroundFromLeft => LayoutRule::Nest { dx: 0.19, dy: 0.17 },
            Self::SurroundFromBelow => LayoutRule::Nest { dx: 0.17, dy: 0.1 },
            Self::SurroundFromRight => LayoutRule::Nest { dx: 0.1, dy: 0.17 },
            Self::FullSurround => LayoutRule::Nest {
                dx: 0.175,
                dy: 0.16,
            },
            Self::Overlaid => LayoutRule::Overlay,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch).ok_or(ch)
    }
}
