//! The interface through which parsed rules are delivered.

use smol_str::SmolStr;

use crate::types::{GlyphName, GlyphOrClass, LookupFlags, TableValue, ValueRecord};

/// A `(tag, value)` pair from a tag/value table.
pub type TableEntry = (SmolStr, TableValue);

/// A consumer of parse events.
///
/// The parser calls one method per statement, in source order. Every method
/// has a default implementation that does nothing, so a writer only needs
/// to override the events it cares about.
///
/// Blocks are scoped: [`feature`] and [`lookup`] return the writer that
/// receives the block's contents, and [`end_block`] is called on that writer
/// exactly once, after the block body has been fully parsed. The returned
/// writer may borrow from `self`. By default the parent itself is returned,
/// so block contents are delivered inline.
///
/// [`feature`]: FeatureWriter::feature
/// [`lookup`]: FeatureWriter::lookup
/// [`end_block`]: FeatureWriter::end_block
pub trait FeatureWriter {
    /// Begin a `feature NAME { ... } NAME;` block.
    fn feature(&mut self, name: &str) -> Box<dyn FeatureWriter + '_> {
        let _ = name;
        Box::new(self)
    }

    /// Begin a `lookup NAME { ... } NAME;` block.
    fn lookup(&mut self, name: &str) -> Box<dyn FeatureWriter + '_> {
        let _ = name;
        Box::new(self)
    }

    /// Called on a block-scoped writer once its block has been fully parsed.
    fn end_block(&mut self) {}

    /// A tag/value table (`GDEF`, `head`, `hhea`, `OS/2` or `vhea`).
    fn table(&mut self, name: &str, entries: &[TableEntry]) {
        let _ = (name, entries);
    }

    /// `@name = [members];`. The name includes the leading `@`.
    fn class_definition(&mut self, name: &str, members: &[GlyphName]) {
        let _ = (name, members);
    }

    /// `lookupflag` with one or more keywords.
    fn lookup_flag(&mut self, flags: LookupFlags) {
        let _ = flags;
    }

    /// `lookupflag 0;`
    fn lookup_flag_zero(&mut self) {
        self.lookup_flag(LookupFlags::empty())
    }

    /// One glyph (or class) replaced by one glyph (or class).
    fn gsub_single(&mut self, target: &GlyphOrClass, replacement: &GlyphOrClass) {
        let _ = (target, replacement);
    }

    /// One glyph replaced by a sequence.
    fn gsub_multiple(&mut self, target: &GlyphOrClass, replacement: &[GlyphOrClass]) {
        let _ = (target, replacement);
    }

    /// `sub target from [alternates];`
    fn gsub_alternate(&mut self, target: &GlyphName, alternates: &[GlyphName]) {
        let _ = (target, alternates);
    }

    /// A sequence replaced by one glyph.
    fn gsub_ligature(&mut self, target: &[GlyphOrClass], replacement: &GlyphOrClass) {
        let _ = (target, replacement);
    }

    /// A contextual substitution; `replacement` is `None` for `ignore sub`.
    ///
    /// Each context is empty, never omitted, when nothing was written there.
    fn gsub_contextual(
        &mut self,
        preceding: &[GlyphOrClass],
        targets: &[GlyphOrClass],
        trailing: &[GlyphOrClass],
        replacement: Option<&GlyphOrClass>,
    ) {
        let _ = (preceding, targets, trailing, replacement);
    }

    /// `pos target <a b c d>;`
    fn gpos_single(&mut self, target: &GlyphOrClass, value: ValueRecord) {
        let _ = (target, value);
    }

    /// `[enum] pos left right value;`
    fn gpos_pair(
        &mut self,
        left: &GlyphOrClass,
        right: &GlyphOrClass,
        value: f64,
        enumerate: bool,
    ) {
        let _ = (left, right, value, enumerate);
    }

    /// `languagesystem SCRIPT LANG;`; note the argument order.
    fn language_system(&mut self, language: &str, script: &str) {
        let _ = (language, script);
    }

    /// `script TAG;`
    fn script(&mut self, tag: &str) {
        let _ = tag;
    }

    /// `language TAG [include_dflt|exclude_dflt];`
    fn language(&mut self, tag: &str, include_default: bool) {
        let _ = (tag, include_default);
    }

    /// `include(path)`; the path is not resolved.
    fn include(&mut self, path: &str) {
        let _ = path;
    }

    /// `subtable;`
    fn subtable_break(&mut self) {}

    /// `feature NAME;` outside of a block header.
    fn feature_reference(&mut self, name: &str) {
        let _ = name;
    }

    /// `lookup NAME;` outside of a block header.
    fn lookup_reference(&mut self, name: &str) {
        let _ = name;
    }

    /// Text passed through verbatim; currently only bare `;` terminators.
    fn raw_text(&mut self, text: &str) {
        let _ = text;
    }
}

/// A writer that ignores everything; useful for validating input.
impl FeatureWriter for () {}

macro_rules! forward_writer {
    ($($header:tt)*) => {
        $($header)* {
            fn feature(&mut self, name: &str) -> Box<dyn FeatureWriter + '_> {
                (**self).feature(name)
            }
            fn lookup(&mut self, name: &str) -> Box<dyn FeatureWriter + '_> {
                (**self).lookup(name)
            }
            fn end_block(&mut self) {
                (**self).end_block()
            }
            fn table(&mut self, name: &str, entries: &[TableEntry]) {
                (**self).table(name, entries)
            }
            fn class_definition(&mut self, name: &str, members: &[GlyphName]) {
                (**self).class_definition(name, members)
            }
            fn lookup_flag(&mut self, flags: LookupFlags) {
                (**self).lookup_flag(flags)
            }
            fn lookup_flag_zero(&mut self) {
                (**self).lookup_flag_zero()
            }
            fn gsub_single(&mut self, target: &GlyphOrClass, replacement: &GlyphOrClass) {
                (**self).gsub_single(target, replacement)
            }
            fn gsub_multiple(&mut self, target: &GlyphOrClass, replacement: &[GlyphOrClass]) {
                (**self).gsub_multiple(target, replacement)
            }
            fn gsub_alternate(&mut self, target: &GlyphName, alternates: &[GlyphName]) {
                (**self).gsub_alternate(target, alternates)
            }
            fn gsub_ligature(&mut self, target: &[GlyphOrClass], replacement: &GlyphOrClass) {
                (**self).gsub_ligature(target, replacement)
            }
            fn gsub_contextual(
                &mut self,
                preceding: &[GlyphOrClass],
                targets: &[GlyphOrClass],
                trailing: &[GlyphOrClass],
                replacement: Option<&GlyphOrClass>,
            ) {
                (**self).gsub_contextual(preceding, targets, trailing, replacement)
            }
            fn gpos_single(&mut self, target: &GlyphOrClass, value: ValueRecord) {
                (**self).gpos_single(target, value)
            }
            fn gpos_pair(
                &mut self,
                left: &GlyphOrClass,
                right: &GlyphOrClass,
                value: f64,
                enumerate: bool,
            ) {
                (**self).gpos_pair(left, right, value, enumerate)
            }
            fn language_system(&mut self, language: &str, script: &str) {
                (**self).language_system(language, script)
            }
            fn script(&mut self, tag: &str) {
                (**self).script(tag)
            }
            fn language(&mut self, tag: &str, include_default: bool) {
                (**self).language(tag, include_default)
            }
            fn include(&mut self, path: &str) {
                (**self).include(path)
            }
            fn subtable_break(&mut self) {
                (**self).subtable_break()
            }
            fn feature_reference(&mut self, name: &str) {
                (**self).feature_reference(name)
            }
            fn lookup_reference(&mut self, name: &str) {
                (**self).lookup_reference(name)
            }
            fn raw_text(&mut self, text: &str) {
                (**self).raw_text(text)
            }
        }
    };
}

forward_writer!(impl<W: FeatureWriter + ?Sized> FeatureWriter for &mut W);
forward_writer!(impl<W: FeatureWriter + ?Sized> FeatureWriter for Box<W>);
