//! The error produced when feature text cannot be read.

use std::fmt::{Display, Formatter};

/// The kind of a brace-delimited block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `table NAME { ... } NAME;`
    Table,
    /// `feature NAME { ... } NAME;`
    Feature,
    /// `lookup NAME { ... } NAME;`
    Lookup,
}

/// A terminal syntax error.
///
/// Parsing stops at the first error; every variant carries the fragment of
/// source text that could not be read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// Text that no statement or block pattern consumed.
    #[error("Invalid syntax: '{0}'")]
    Unconsumed(String),
    /// A substitution with more than one glyph on both sides.
    #[error("Many to many replacement not allowed: '{0}'")]
    ManyToMany(String),
    /// A tag that is not part of the table's schema.
    #[error("Unknown tag '{tag}' in table '{table}'")]
    #[allow(missing_docs)]
    UnknownTableTag { table: String, tag: String },
    /// A table value that does not parse as the type its tag declares.
    #[error("Invalid value '{value}' for tag '{tag}' in table '{table}'")]
    #[allow(missing_docs)]
    InvalidTableValue {
        table: String,
        tag: String,
        value: String,
    },
    /// `lookupflag` with a numeric value other than `0`.
    #[error("lookupflag format B is not supported for non-zero value '{0}'")]
    NonZeroLookupFlag(String),
    /// `lookupflag` with a keyword outside the supported set.
    #[error("Unknown lookupflag value: '{0}'")]
    UnknownLookupFlag(String),
    /// A block header without a matching `} NAME;`.
    #[error("Unclosed {kind} block '{name}'")]
    #[allow(missing_docs)]
    UnclosedBlock { kind: BlockKind, name: String },
    /// A positioning value that is not a number.
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
    /// A statement whose operands do not have the shape its rule requires.
    #[error("Malformed {rule}: '{fragment}'")]
    #[allow(missing_docs)]
    MalformedRule {
        rule: &'static str,
        fragment: String,
    },
}

impl SyntaxError {
    /// The offending source fragment.
    ///
    /// For table errors this is the tag, or the value when the value is
    /// what failed.
    pub fn fragment(&self) -> &str {
        match self {
            SyntaxError::Unconsumed(s)
            | SyntaxError::ManyToMany(s)
            | SyntaxError::NonZeroLookupFlag(s)
            | SyntaxError::UnknownLookupFlag(s)
            | SyntaxError::InvalidNumber(s) => s,
            SyntaxError::UnknownTableTag { tag, .. } => tag,
            SyntaxError::InvalidTableValue { value, .. } => value,
            SyntaxError::UnclosedBlock { name, .. } => name,
            SyntaxError::MalformedRule { fragment, .. } => fragment,
        }
    }

    pub(crate) fn malformed(rule: &'static str, fragment: impl Into<String>) -> Self {
        SyntaxError::MalformedRule {
            rule,
            fragment: fragment.into(),
        }
    }
}

impl BlockKind {
    /// The keyword that introduces this kind of block.
    pub fn keyword(self) -> &'static str {
        match self {
            BlockKind::Table => "table",
            BlockKind::Feature => "feature",
            BlockKind::Lookup => "lookup",
        }
    }
}

impl Display for BlockKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
