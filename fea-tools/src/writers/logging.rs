//! Logging events as they arrive.

use crate::{
    error::BlockKind,
    types::{GlyphName, GlyphOrClass, LookupFlags, ValueRecord},
    writer::TableEntry,
    FeatureWriter,
};

use super::SyntaxWriter;

/// A writer that logs every event at `info` level, as feature syntax.
#[derive(Clone, Debug, Default)]
pub struct LogWriter {
    depth: usize,
    block: Option<(BlockKind, String)>,
}

impl LogWriter {
    /// Create a new top-level writer.
    pub fn new() -> Self {
        Self::default()
    }

    fn indented(&self, syntax: &SyntaxWriter) -> Vec<String> {
        let indent = "   ".repeat(self.depth);
        syntax
            .to_string()
            .lines()
            .map(|line| format!("{indent}{line}"))
            .collect()
    }

    fn emit(&self, syntax: &SyntaxWriter) {
        for line in self.indented(syntax) {
            log::info!("{line}");
        }
    }

    fn child(&self, kind: BlockKind, name: &str) -> LogWriter {
        log::info!("{}{kind} {name} {{", "   ".repeat(self.depth));
        LogWriter {
            depth: self.depth + 1,
            block: Some((kind, name.into())),
        }
    }

    /// The line closing this writer's block, if it is block-scoped.
    fn close_line(&self) -> Option<String> {
        let (_, name) = self.block.as_ref()?;
        Some(format!("{}}} {name};", "   ".repeat(self.depth.saturating_sub(1))))
    }
}

macro_rules! log_as_syntax {
    ($(fn $method:ident(&mut self $(, $arg:ident: $ty:ty)*);)*) => {
        $(
            fn $method(&mut self $(, $arg: $ty)*) {
                let mut syntax = SyntaxWriter::new();
                syntax.$method($($arg),*);
                self.emit(&syntax);
            }
        )*
    };
}

impl FeatureWriter for LogWriter {
    fn feature(&mut self, name: &str) -> Box<dyn FeatureWriter + '_> {
        Box::new(self.child(BlockKind::Feature, name))
    }

    fn lookup(&mut self, name: &str) -> Box<dyn FeatureWriter + '_> {
        Box::new(self.child(BlockKind::Lookup, name))
    }

    fn end_block(&mut self) {
        if let Some(line) = self.close_line() {
            log::info!("{line}");
        }
    }

    log_as_syntax! {
        fn table(&mut self, name: &str, entries: &[TableEntry]);
        fn class_definition(&mut self, name: &str, members: &[GlyphName]);
        fn lookup_flag(&mut self, flags: LookupFlags);
        fn gsub_single(&mut self, target: &GlyphOrClass, replacement: &GlyphOrClass);
        fn gsub_multiple(&mut self, target: &GlyphOrClass, replacement: &[GlyphOrClass]);
        fn gsub_alternate(&mut self, target: &GlyphName, alternates: &[GlyphName]);
        fn gsub_ligature(&mut self, target: &[GlyphOrClass], replacement: &GlyphOrClass);
        fn gsub_contextual(
            &mut self,
            preceding: &[GlyphOrClass],
            targets: &[GlyphOrClass],
            trailing: &[GlyphOrClass],
            replacement: Option<&GlyphOrClass>
        );
        fn gpos_single(&mut self, target: &GlyphOrClass, value: ValueRecord);
        fn gpos_pair(
            &mut self,
            left: &GlyphOrClass,
            right: &GlyphOrClass,
            value: f64,
            enumerate: bool
        );
        fn language_system(&mut self, language: &str, script: &str);
        fn script(&mut self, tag: &str);
        fn language(&mut self, tag: &str, include_default: bool);
        fn include(&mut self, path: &str);
        fn subtable_break(&mut self);
        fn feature_reference(&mut self, name: &str);
        fn lookup_reference(&mut self, name: &str);
        fn raw_text(&mut self, text: &str);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_features;

    #[test]
    fn accepts_everything() {
        let mut writer = LogWriter::new();
        parse_features(
            "table head { FontRevision 1.1; } head;
            feature liga { lookup l { sub f i by f_i; } l; } liga;",
            &mut writer,
        )
        .unwrap();
        assert_eq!(writer.depth, 0);
        assert_eq!(writer.close_line(), None);
    }

    #[test]
    fn nested_blocks_indent() {
        let feature = LogWriter::new().child(BlockKind::Feature, "liga");
        let lookup = feature.child(BlockKind::Lookup, "one");
        assert_eq!(lookup.depth, 2);

        let mut syntax = SyntaxWriter::new();
        syntax.gsub_single(&"f".into(), &"f.alt".into());
        assert_eq!(lookup.indented(&syntax), ["      sub f by f.alt;"]);
        assert_eq!(lookup.close_line().as_deref(), Some("   } one;"));
        assert_eq!(feature.close_line().as_deref(), Some("} liga;"));
    }
}
