//! Carving blocks and statements out of a span of text.
//!
//! A span is processed one kind of construct at a time: first each block
//! kind, then each statement category in [`CATEGORIES`] order. For every
//! match, the text before it is processed recursively (so events stay in
//! source order), the match is handled, and scanning continues after it.
//! Whatever is left once every category has been tried is an error.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{error::BlockKind, FeatureWriter, Opts, SyntaxError};

use super::{
    patterns::{self, FEATURE_HEADER, LOOKUP_HEADER, TABLE_HEADER},
    rules::{self, group},
    tables::parse_table,
};

type Apply = fn(&Captures, &mut dyn FeatureWriter, &Opts) -> Result<(), SyntaxError>;

/// One kind of flat statement.
struct Category {
    name: &'static str,
    pattern: &'static LazyLock<Regex>,
    apply: Apply,
}

macro_rules! category {
    ($name:literal, $pattern:ident, $apply:ident) => {
        Category {
            name: $name,
            pattern: &patterns::$pattern,
            apply: rules::$apply,
        }
    };
}

/// Statement categories, in the order they are consumed.
///
/// Earlier categories own their text: a later pattern never sees a span
/// that an earlier one matched.
static CATEGORIES: &[Category] = &[
    category!("class definition", CLASS_DEFINITION, class_definition),
    category!("substitution", SUBSTITUTION, substitution),
    category!("alternate substitution", ALTERNATE, alternate),
    category!("contextual substitution", CONTEXTUAL, contextual),
    category!("ignore substitution", IGNORE, ignore),
    category!("single positioning", SINGLE_POSITION, single_position),
    category!("pair positioning", PAIR_POSITION, pair_position),
    category!("languagesystem", LANGUAGE_SYSTEM, language_system),
    category!("script", SCRIPT, script),
    category!("language", LANGUAGE, language),
    category!("include", INCLUDE, include),
    category!("feature reference", FEATURE_REFERENCE, feature_reference),
    category!("lookup reference", LOOKUP_REFERENCE, lookup_reference),
    category!("lookupflag", LOOKUP_FLAG, lookup_flag),
    category!("subtable", SUBTABLE, subtable),
    category!("featureNames", FEATURE_NAMES, feature_names),
    category!("terminator", TERMINATOR, terminator),
];

const BLOCK_KINDS: [BlockKind; 3] = [BlockKind::Table, BlockKind::Feature, BlockKind::Lookup];

fn header(kind: BlockKind) -> &'static Regex {
    match kind {
        BlockKind::Table => &TABLE_HEADER,
        BlockKind::Feature => &FEATURE_HEADER,
        BlockKind::Lookup => &LOOKUP_HEADER,
    }
}

/// Parse a span of preprocessed text at the given block nesting depth.
pub(crate) fn parse_span(
    text: &str,
    writer: &mut dyn FeatureWriter,
    depth: usize,
    opts: &Opts,
) -> Result<(), SyntaxError> {
    let mut rest = text;

    for kind in BLOCK_KINDS {
        while let Some(caps) = header(kind).captures(rest) {
            let Some(stmt) = caps.name("stmt") else {
                break;
            };
            parse_span(&rest[..stmt.start()], writer, depth, opts)?;
            let name = group(&caps, "name");
            let after_header = &rest[stmt.end()..];
            let (body, remainder) = split_block(kind, name, after_header)?;
            parse_block(kind, name, body, writer, depth + 1, opts)?;
            rest = remainder;
        }
    }

    for category in CATEGORIES {
        while let Some(caps) = category.pattern.captures(rest) {
            let Some(stmt) = caps.name("stmt") else {
                break;
            };
            parse_span(&rest[..stmt.start()], writer, depth, opts)?;
            log::trace!("{}: '{}'", category.name, stmt.as_str().trim());
            (category.apply)(&caps, writer, opts)?;
            rest = &rest[stmt.end()..];
        }
    }

    let residue = rest.trim();
    if residue.is_empty() {
        Ok(())
    } else {
        Err(SyntaxError::Unconsumed(residue.into()))
    }
}

/// Split the text after a block header into the block body and what follows
/// the block's `} NAME;` close.
///
/// The first closing brace followed by the block's own name wins, so a block
/// ends at the earliest possible close.
fn split_block<'a>(
    kind: BlockKind,
    name: &str,
    text: &'a str,
) -> Result<(&'a str, &'a str), SyntaxError> {
    for (pos, _) in text.match_indices('}') {
        let after = text[pos + 1..].trim_start();
        if let Some(after_name) = after.strip_prefix(name) {
            if let Some(remainder) = after_name.trim_start().strip_prefix(';') {
                return Ok((&text[..pos], remainder));
            }
        }
    }
    Err(SyntaxError::UnclosedBlock {
        kind,
        name: name.into(),
    })
}

fn parse_block(
    kind: BlockKind,
    name: &str,
    body: &str,
    writer: &mut dyn FeatureWriter,
    depth: usize,
    opts: &Opts,
) -> Result<(), SyntaxError> {
    if depth > opts.max_depth {
        return Err(SyntaxError::malformed(
            "block nesting",
            format!("{kind} {name}"),
        ));
    }
    log::debug!("{kind} block '{name}' at depth {depth}");
    match kind {
        BlockKind::Table => {
            match parse_table(name, body)? {
                Some(entries) => writer.table(name, &entries),
                None => log::debug!("skipping table '{name}'"),
            }
            Ok(())
        }
        BlockKind::Feature | BlockKind::Lookup => {
            let mut child = match kind {
                BlockKind::Feature => writer.feature(name),
                _ => writer.lookup(name),
            };
            parse_span(body, &mut *child, depth, opts)?;
            child.end_block();
            Ok(())
        }
    }
}
