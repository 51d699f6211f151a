//! Turning runs of glyph names into sequences.

use crate::{
    types::{GlyphName, GlyphOrClass, GlyphSequence},
    SyntaxError,
};

use super::patterns::{INLINE_CLASS, MARKED, NAME};

/// A contextual rule's glyphs, split around the `'`-marked targets.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct MarkedSequence {
    pub(crate) preceding: GlyphSequence,
    pub(crate) targets: GlyphSequence,
    pub(crate) trailing: GlyphSequence,
}

/// Parse whitespace-separated names and `[...]` inline classes.
///
/// Inline classes become a single [`GlyphOrClass::Class`] element; they do
/// not nest. A bracket that does not delimit a class is an error.
pub(crate) fn parse_sequence(text: &str) -> Result<GlyphSequence, SyntaxError> {
    let mut sequence = GlyphSequence::new();
    let mut pos = 0;
    for class in INLINE_CLASS.captures_iter(text) {
        let (Some(whole), Some(members)) = (class.get(0), class.name("members")) else {
            continue;
        };
        push_names(&text[pos..whole.start()], &mut sequence)?;
        sequence.push(GlyphOrClass::Class(
            members.as_str().split_whitespace().map(Into::into).collect(),
        ));
        pos = whole.end();
    }
    push_names(&text[pos..], &mut sequence)?;
    Ok(sequence)
}

fn push_names(text: &str, sequence: &mut GlyphSequence) -> Result<(), SyntaxError> {
    for token in text.split_whitespace() {
        if token.contains(['[', ']']) {
            return Err(SyntaxError::malformed("glyph sequence", text.trim()));
        }
        sequence.push(GlyphOrClass::glyph(token));
    }
    Ok(())
}

/// Every name in `text`, ignoring brackets.
pub(crate) fn names(text: &str) -> Vec<GlyphName> {
    NAME.find_iter(text).map(|m| m.as_str().into()).collect()
}

/// Split a contextual rule's target text at its marked glyphs.
///
/// Text before the first mark is the preceding context and text after the
/// last mark the trailing context. A marked class with one member collapses
/// to that member. Without any mark, everything is preceding context.
pub(crate) fn parse_marked_sequence(text: &str) -> Result<MarkedSequence, SyntaxError> {
    let marks = MARKED.find_iter(text).collect::<Vec<_>>();
    let (Some(first), Some(last)) = (marks.first(), marks.last()) else {
        return Ok(MarkedSequence {
            preceding: parse_sequence(text)?,
            ..Default::default()
        });
    };

    // unmarked glyphs between marks cannot be represented
    if marks
        .windows(2)
        .any(|pair| !text[pair[0].end()..pair[1].start()].trim().is_empty())
    {
        return Err(SyntaxError::malformed(
            "contextual substitution",
            text.trim(),
        ));
    }

    Ok(MarkedSequence {
        preceding: parse_sequence(&text[..first.start()])?,
        targets: marks
            .iter()
            .map(|m| GlyphOrClass::from_names(names(m.as_str())))
            .collect(),
        trailing: parse_sequence(&text[last.end()..])?,
    })
}
