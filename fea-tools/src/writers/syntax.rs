//! Writing events back out as feature file syntax.

use std::fmt::{Display, Formatter, Write};

use crate::{
    error::BlockKind,
    types::{write_names, GlyphName, GlyphOrClass, LookupFlags, ValueRecord},
    writer::TableEntry,
    FeatureWriter,
};

const INDENT: &str = "   ";

/// A writer that produces feature file text.
///
/// Statements are written one per line, with block contents indented by
/// three spaces per level. Parsing the output produces the same events that
/// were written; original whitespace and comments are not preserved.
#[derive(Clone, Debug, Default)]
pub struct SyntaxWriter {
    items: Vec<Item>,
}

#[derive(Clone, Debug)]
enum Item {
    Line(String),
    Block {
        kind: BlockKind,
        name: String,
        body: SyntaxWriter,
    },
}

impl SyntaxWriter {
    /// Create a new, empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn line(&mut self, line: String) {
        self.items.push(Item::Line(line));
    }

    fn block(&mut self, kind: BlockKind, name: &str) -> &mut SyntaxWriter {
        self.items.push(Item::Block {
            kind,
            name: name.into(),
            body: SyntaxWriter::default(),
        });
        match self.items.last_mut() {
            Some(Item::Block { body, .. }) => body,
            _ => unreachable!("a block was just pushed"),
        }
    }

    fn write_at(&self, f: &mut Formatter<'_>, level: usize) -> std::fmt::Result {
        let indent = INDENT.repeat(level);
        for item in &self.items {
            match item {
                Item::Line(line) => writeln!(f, "{indent}{line}")?,
                Item::Block { kind, name, body } => {
                    writeln!(f, "{indent}{kind} {name} {{")?;
                    body.write_at(f, level + 1)?;
                    writeln!(f, "{indent}}} {name};")?;
                }
            }
        }
        Ok(())
    }
}

impl Display for SyntaxWriter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_at(f, 0)
    }
}

/// Operands separated by spaces, with a `'` after each when `marked`.
fn sequence(items: &[GlyphOrClass], marked: bool) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{item}");
        if marked {
            out.push('\'');
        }
    }
    out
}

fn names(names: &[GlyphName]) -> String {
    let mut out = String::new();
    let _ = write_names(&mut out, names);
    out
}

impl FeatureWriter for SyntaxWriter {
    fn feature(&mut self, name: &str) -> Box<dyn FeatureWriter + '_> {
        Box::new(self.block(BlockKind::Feature, name))
    }

    fn lookup(&mut self, name: &str) -> Box<dyn FeatureWriter + '_> {
        Box::new(self.block(BlockKind::Lookup, name))
    }

    fn table(&mut self, name: &str, entries: &[TableEntry]) {
        let table = self.block(BlockKind::Table, name);
        for (tag, value) in entries {
            table.line(format!("{tag} {value};"));
        }
    }

    fn class_definition(&mut self, name: &str, members: &[GlyphName]) {
        self.line(format!("{name} = [{}];", names(members)));
    }

    fn lookup_flag(&mut self, flags: LookupFlags) {
        if flags.is_empty() {
            self.line("lookupflag 0;".into());
        } else {
            let keywords = flags.keywords().collect::<Vec<_>>().join(", ");
            self.line(format!("lookupflag {keywords};"));
        }
    }

    fn gsub_single(&mut self, target: &GlyphOrClass, replacement: &GlyphOrClass) {
        self.line(format!("sub {target} by {replacement};"));
    }

    fn gsub_multiple(&mut self, target: &GlyphOrClass, replacement: &[GlyphOrClass]) {
        self.line(format!("sub {target} by {};", sequence(replacement, false)));
    }

    fn gsub_alternate(&mut self, target: &GlyphName, alternates: &[GlyphName]) {
        self.line(format!("sub {target} from [{}];", names(alternates)));
    }

    fn gsub_ligature(&mut self, target: &[GlyphOrClass], replacement: &GlyphOrClass) {
        self.line(format!("sub {} by {replacement};", sequence(target, false)));
    }

    fn gsub_contextual(
        &mut self,
        preceding: &[GlyphOrClass],
        targets: &[GlyphOrClass],
        trailing: &[GlyphOrClass],
        replacement: Option<&GlyphOrClass>,
    ) {
        let rule = [
            sequence(preceding, false),
            sequence(targets, true),
            sequence(trailing, false),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
        match replacement {
            Some(replacement) => self.line(format!("sub {rule} by {replacement};")),
            None => self.line(format!("ignore sub {rule};")),
        }
    }

    fn gpos_single(&mut self, target: &GlyphOrClass, value: ValueRecord) {
        self.line(format!("pos {target} {value};"));
    }

    fn gpos_pair(
        &mut self,
        left: &GlyphOrClass,
        right: &GlyphOrClass,
        value: f64,
        enumerate: bool,
    ) {
        let prefix = if enumerate { "enum " } else { "" };
        self.line(format!("{prefix}pos {left} {right} {value};"));
    }

    fn language_system(&mut self, language: &str, script: &str) {
        self.line(format!("languagesystem {script} {language};"));
    }

    fn script(&mut self, tag: &str) {
        self.line(format!("script {tag};"));
    }

    fn language(&mut self, tag: &str, include_default: bool) {
        if include_default {
            self.line(format!("language {tag};"));
        } else {
            self.line(format!("language {tag} exclude_dflt;"));
        }
    }

    fn include(&mut self, path: &str) {
        self.line(format!("include({path});"));
    }

    fn subtable_break(&mut self) {
        self.line("subtable;".into());
    }

    fn feature_reference(&mut self, name: &str) {
        self.line(format!("feature {name};"));
    }

    fn lookup_reference(&mut self, name: &str) {
        self.line(format!("lookup {name};"));
    }

    fn raw_text(&mut self, text: &str) {
        self.line(text.into());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{parse_features, TableValue};

    fn rewrite(text: &str) -> String {
        let mut writer = SyntaxWriter::new();
        parse_features(text, &mut writer).unwrap();
        writer.to_string()
    }

    #[test]
    fn nested_blocks_are_indented() {
        let text = "feature liga{lookup one{sub f i by f_i;}one;}liga;";
        assert_eq!(
            rewrite(text),
            "feature liga {\n   lookup one {\n      sub f i by f_i;\n   } one;\n} liga;\n"
        );
    }

    #[test]
    fn statements() {
        let text = r#"
            languagesystem latn TRK;
            @lc = [a b];
            sub [a b] by [a.sc b.sc];
            sub a from [a.1 a.2];
            ignore sub f i' [l t];
            sub [a b]' c' by d;
            pos a <0 0 -10 0>;
            enum pos @lc [V W] -40;
            pos T o -80.5;
            language TRK exclude_dflt;
            lookupflag IgnoreMarks, RightToLeft;
            lookupflag 0;
            include(other.fea)
            feature kern;
            lookup pairs;
            subtable;
            ;
        "#;
        let expected = "\
languagesystem latn TRK;
@lc = [a b];
sub [a b] by [a.sc b.sc];
sub a from [a.1 a.2];
ignore sub f i' [l t];
sub [a b]' c' by d;
pos a <0 0 -10 0>;
enum pos @lc [V W] -40;
pos T o -80.5;
language TRK exclude_dflt;
lookupflag RightToLeft, IgnoreMarks;
lookupflag 0;
include(other.fea);
feature kern;
lookup pairs;
subtable;
;
";
        assert_eq!(rewrite(text), expected);
    }

    #[test]
    fn tables() {
        let mut writer = SyntaxWriter::new();
        writer.table(
            "OS/2",
            &[
                ("FSType".into(), TableValue::Int(0)),
                ("Panose".into(), TableValue::IntList(vec![2, 0, 5])),
                ("winAscent".into(), TableValue::Float(750.0)),
            ],
        );
        assert_eq!(
            writer.to_string(),
            "table OS/2 {\n   FSType 0;\n   Panose 2 0 5;\n   winAscent 750;\n} OS/2;\n"
        );
    }
}
