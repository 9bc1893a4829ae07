//! Part classification and positional variant tables.
//!
//! Three pieces of static data steer layout:
//! - **small parts**: radicals that take a narrow slot beside a wider
//!   sibling (王 in 玩, 氵 in 河);
//! - **unshrink parts**: small parts that still keep a two-thirds slot;
//! - **variants**: hand-drawn outlines used in place of the font glyph when
//!   a character sits in a particular position (光 on the left of 辉).
//!
//! The built-in tables are built once and shared through [`PartTables::builtin`].
//! Callers that need different data build their own [`PartTables`].

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

/// Side length of the box variant paths are drawn in.
pub const VARIANT_REFERENCE_SIZE: f64 = 72.0;

/// Slot a child occupies inside a split operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Left,
    Right,
    Up,
    Down,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        })
    }
}

// ---------------------------------------------------------------------------
// Built-in data
// ---------------------------------------------------------------------------

static SMALL_PARTS: &[char] = &[
    // Person, water, hand, heart and the other narrow side forms
    '亻', '彳', '氵', '冫', '扌', '忄', '讠', '纟', '钅', '饣', '礻', '衤', '犭', '阝', '卩',
    '刂', '丬', '牜', '飠', '釒', '糹', '訁',
    // Full characters that shrink when used as a component
    '口', '日', '目', '月', '王', '木', '禾', '米', '火', '石', '女', '子', '山', '土', '马',
    '贝', '车', '足', '舟', '耳', '虫', '歹', '牛', '片', '方', '矢', '弓', '巾', '工', '夕',
    '白', '田', '立', '几', '又', '寸', '厶', '匕', '卜', '人', '八', '儿', '小', '大', '金',
    '言', '食', '糸', '馬', '貝', '車', '魚', '鱼', '鸟', '鳥', '革', '骨',
    // Strokes and roof/grass forms
    '丶', '丿', '乚', '丨', '亠', '冖', '宀', '艹', '⺮', '罒', '爫', '彡', '攵', '丷', '⺌',
    '龷',
];

static UNSHRINK_PARTS: &[char] = &[
    '木', '禾', '米', '火', '石', '女', '月', '车', '马', '贝', '舟', '耳', '虫', '牛', '矢',
    '足', '歹', '金', '言', '食', '糸', '馬', '貝', '車', '魚', '鱼', '鸟', '鳥', '革', '骨',
];

/// An entry in the variant table.
struct VariantEntry {
    position: Position,
    ch: char,
    /// SVG path data in a [`VARIANT_REFERENCE_SIZE`] box, Y-down.
    path: &'static str,
}

static VARIANTS: &[VariantEntry] = &[
    // 光 on the left (辉, 耀): the final hooked stroke becomes a short lift.
    VariantEntry {
        position: Position::Left,
        ch: '光',
        path: "M33 6L39 6L39 30L33 30Z\
               M14 12L20 10L27 26L22 28Z\
               M58 10L63 13L52 28L47 26Z\
               M4 32L68 32L68 37L4 37Z\
               M24 37L30 37L26 52Q20 62 6 68L4 65Q16 58 22 48Z\
               M42 37L48 37L48 56Q48 60 53 60L66 58L67 63L50 66Q42 66 42 58Z",
    },
    // 雨 on top (雪, 雷): flattened frame with the dots pulled in.
    VariantEntry {
        position: Position::Up,
        ch: '雨',
        path: "M8 6L64 6L64 11L8 11Z\
               M33 11L39 11L39 66L33 66Z\
               M8 22L64 22L64 27L8 27Z\
               M8 27L14 27L14 66L8 66Z\
               M58 27L64 27L64 60Q64 66 58 66L52 66L52 61L58 61Z\
               M20 34L26 34L26 39L20 39Z\
               M20 48L26 48L26 53L20 53Z\
               M46 34L52 34L52 39L46 39Z\
               M46 48L52 48L52 53L46 53Z",
    },
];

static BUILTIN: LazyLock<PartTables> = LazyLock::new(|| {
    let mut tables = PartTables::new();
    tables.small_parts.extend(SMALL_PARTS);
    tables.unshrink_parts.extend(UNSHRINK_PARTS);
    for entry in VARIANTS {
        tables
            .variants
            .insert((entry.position, entry.ch), entry.path.to_owned());
    }
    tables
});

// ---------------------------------------------------------------------------
// PartTables
// ---------------------------------------------------------------------------

/// Read-only classification data consulted during decomposition.
#[derive(Debug, Clone, Default)]
pub struct PartTables {
    small_parts: HashSet<char>,
    unshrink_parts: HashSet<char>,
    variants: HashMap<(Position, char), String>,
}

impl PartTables {
    /// Empty tables: nothing is small, no variants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in tables, initialized on first use.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Whether `ch` takes a narrow slot beside a wider sibling.
    #[must_use]
    pub fn is_small(&self, ch: char) -> bool {
        self.small_parts.contains(&ch)
    }

    /// Whether a small part keeps the wider two-thirds slot.
    #[must_use]
    pub fn is_unshrink(&self, ch: char) -> bool {
        self.unshrink_parts.contains(&ch)
    }

    /// Variant path for `ch` in `position`, if one is registered.
    #[must_use]
    pub fn variant(&self, position: Position, ch: char) -> Option<&str> {
        self.variants.get(&(position, ch)).map(String::as_str)
    }

    /// Mark `ch` as a small part.
    #[must_use]
    pub fn with_small_part(mut self, ch: char) -> Self {
        self.small_parts.insert(ch);
        self
    }

    /// Mark `ch` as a small part that keeps the wider slot.
    #[must_use]
    pub fn with_unshrink_part(mut self, ch: char) -> Self {
        self.small_parts.insert(ch);
        self.unshrink_parts.insert(ch);
        self
    }

    /// Register a variant path, drawn in a [`VARIANT_REFERENCE_SIZE`] box.
    #[must_use]
    pub fn with_variant(mut self, position: Position, ch: char, path: impl Into<String>) -> Self {
        self.variants.insert((position, ch), path.into());
        self
    }
}
