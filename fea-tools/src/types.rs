//! Glyph identifiers and the typed operands carried by rule events.

use std::fmt::{Display, Formatter};

use smol_str::SmolStr;

/// A glyph name or a named glyph class (`@name`), exactly as written.
pub type GlyphName = SmolStr;

/// An ordered run of glyphs and inline classes.
///
/// Order is significant; inline classes do not nest.
pub type GlyphSequence = Vec<GlyphOrClass>;

/// One operand of a rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GlyphOrClass {
    /// A single name; this may be a glyph or a named class such as `@LC`.
    Glyph(GlyphName),
    /// An inline class, written `[a b c]` in the source.
    Class(Vec<GlyphName>),
}

impl GlyphOrClass {
    /// Create a [`GlyphOrClass::Glyph`].
    pub fn glyph(name: impl Into<GlyphName>) -> Self {
        GlyphOrClass::Glyph(name.into())
    }

    /// Create a [`GlyphOrClass::Class`] from its members.
    pub fn class<T: Into<GlyphName>>(members: impl IntoIterator<Item = T>) -> Self {
        GlyphOrClass::Class(members.into_iter().map(Into::into).collect())
    }

    /// Collapse a list of names: one name is a glyph, anything else a class.
    pub(crate) fn from_names(mut names: Vec<GlyphName>) -> Self {
        if names.len() == 1 {
            GlyphOrClass::Glyph(names.remove(0))
        } else {
            GlyphOrClass::Class(names)
        }
    }

    /// `true` if this is an inline class.
    pub fn is_class(&self) -> bool {
        matches!(self, GlyphOrClass::Class(_))
    }

    /// The names this operand refers to, in source order.
    pub fn names(&self) -> &[GlyphName] {
        match self {
            GlyphOrClass::Glyph(name) => std::slice::from_ref(name),
            GlyphOrClass::Class(names) => names,
        }
    }

    /// Return a copy with every name passed through `f`.
    pub fn map_names(&self, mut f: impl FnMut(&GlyphName) -> GlyphName) -> Self {
        match self {
            GlyphOrClass::Glyph(name) => GlyphOrClass::Glyph(f(name)),
            GlyphOrClass::Class(names) => GlyphOrClass::Class(names.iter().map(f).collect()),
        }
    }
}

impl From<&str> for GlyphOrClass {
    fn from(src: &str) -> GlyphOrClass {
        GlyphOrClass::glyph(src)
    }
}

impl Display for GlyphOrClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GlyphOrClass::Glyph(name) => f.write_str(name),
            GlyphOrClass::Class(names) => {
                f.write_str("[")?;
                write_names(f, names)?;
                f.write_str("]")
            }
        }
    }
}

/// Write names separated by single spaces.
pub(crate) fn write_names(f: &mut impl std::fmt::Write, names: &[GlyphName]) -> std::fmt::Result {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        f.write_str(name)?;
    }
    Ok(())
}

bitflags::bitflags! {
    /// The flags set by a `lookupflag` statement.
    ///
    /// Bit values match the OpenType `LookupFlag` field.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LookupFlags: u16 {
        /// `RightToLeft`
        const RIGHT_TO_LEFT = 0x0001;
        /// `IgnoreBaseGlyphs`
        const IGNORE_BASE_GLYPHS = 0x0002;
        /// `IgnoreLigatures`
        const IGNORE_LIGATURES = 0x0004;
        /// `IgnoreMarks`
        const IGNORE_MARKS = 0x0008;
    }
}

impl LookupFlags {
    /// The keyword spelling of each flag, in canonical order.
    pub const KEYWORDS: [(&'static str, LookupFlags); 4] = [
        ("RightToLeft", LookupFlags::RIGHT_TO_LEFT),
        ("IgnoreBaseGlyphs", LookupFlags::IGNORE_BASE_GLYPHS),
        ("IgnoreLigatures", LookupFlags::IGNORE_LIGATURES),
        ("IgnoreMarks", LookupFlags::IGNORE_MARKS),
    ];

    /// Look up a flag by its feature file keyword.
    pub fn from_keyword(keyword: &str) -> Option<LookupFlags> {
        Self::KEYWORDS
            .iter()
            .find(|(name, _)| *name == keyword)
            .map(|(_, flag)| *flag)
    }

    /// Build flags from the four booleans of a `lookupflag` event.
    pub fn from_bools(
        right_to_left: bool,
        ignore_base_glyphs: bool,
        ignore_ligatures: bool,
        ignore_marks: bool,
    ) -> Self {
        let mut flags = LookupFlags::empty();
        flags.set(LookupFlags::RIGHT_TO_LEFT, right_to_left);
        flags.set(LookupFlags::IGNORE_BASE_GLYPHS, ignore_base_glyphs);
        flags.set(LookupFlags::IGNORE_LIGATURES, ignore_ligatures);
        flags.set(LookupFlags::IGNORE_MARKS, ignore_marks);
        flags
    }

    /// The flags as `(right_to_left, ignore_base_glyphs, ignore_ligatures, ignore_marks)`.
    pub fn to_bools(self) -> (bool, bool, bool, bool) {
        (
            self.contains(LookupFlags::RIGHT_TO_LEFT),
            self.contains(LookupFlags::IGNORE_BASE_GLYPHS),
            self.contains(LookupFlags::IGNORE_LIGATURES),
            self.contains(LookupFlags::IGNORE_MARKS),
        )
    }

    /// Iterate the keywords of the set flags, in canonical order.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        Self::KEYWORDS
            .into_iter()
            .filter(move |(_, flag)| self.contains(*flag))
            .map(|(name, _)| name)
    }
}

/// The four adjustments of a single positioning rule, `<a b c d>`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueRecord {
    /// Horizontal placement adjustment.
    pub x_placement: f64,
    /// Vertical placement adjustment.
    pub y_placement: f64,
    /// Horizontal advance adjustment.
    pub x_advance: f64,
    /// Vertical advance adjustment.
    pub y_advance: f64,
}

impl ValueRecord {
    /// Create a new value record; arguments are in source order.
    pub fn new(x_placement: f64, y_placement: f64, x_advance: f64, y_advance: f64) -> Self {
        ValueRecord {
            x_placement,
            y_placement,
            x_advance,
            y_advance,
        }
    }

    /// The values in source order.
    pub fn to_array(self) -> [f64; 4] {
        [
            self.x_placement,
            self.y_placement,
            self.x_advance,
            self.y_advance,
        ]
    }
}

impl Display for ValueRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.to_array();
        write!(f, "<{a} {b} {c} {d}>")
    }
}

/// The typed value of a tag/value table entry.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum TableValue {
    Int(i64),
    Float(f64),
    String(String),
    IntList(Vec<i64>),
}

impl Display for TableValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TableValue::Int(v) => write!(f, "{v}"),
            TableValue::Float(v) => write!(f, "{v}"),
            TableValue::String(v) => f.write_str(v),
            TableValue::IntList(values) => {
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{v}")?;
                }
                Ok(())
            }
        }
    }
}
