//! Renaming glyphs on their way to another writer.

use std::{collections::HashMap, sync::Arc};

use crate::{
    types::{GlyphName, GlyphOrClass, LookupFlags, ValueRecord},
    writer::TableEntry,
    FeatureWriter,
};

/// A writer that renames glyphs and forwards every event to `inner`.
///
/// Names missing from the map are passed through unchanged. Class names
/// are names too: a map entry for `@lc` renames references to that class,
/// but a class definition keeps its own name.
pub struct GlyphRenameWriter<W> {
    map: Arc<HashMap<GlyphName, GlyphName>>,
    inner: W,
}

impl<W: FeatureWriter> GlyphRenameWriter<W> {
    /// Create a writer that renames glyphs according to `map`.
    pub fn new(map: HashMap<GlyphName, GlyphName>, inner: W) -> Self {
        GlyphRenameWriter {
            map: Arc::new(map),
            inner,
        }
    }

    /// Consume the renamer, returning the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn rename(&self, name: &GlyphName) -> GlyphName {
        self.map.get(name).cloned().unwrap_or_else(|| name.clone())
    }

    fn rename_names(&self, names: &[GlyphName]) -> Vec<GlyphName> {
        names.iter().map(|name| self.rename(name)).collect()
    }

    fn rename_item(&self, item: &GlyphOrClass) -> GlyphOrClass {
        item.map_names(|name| self.rename(name))
    }

    fn rename_sequence(&self, items: &[GlyphOrClass]) -> Vec<GlyphOrClass> {
        items.iter().map(|item| self.rename_item(item)).collect()
    }
}

impl<W: FeatureWriter> FeatureWriter for GlyphRenameWriter<W> {
    fn feature(&mut self, name: &str) -> Box<dyn FeatureWriter + '_> {
        let map = self.map.clone();
        let inner = self.inner.feature(name);
        Box::new(GlyphRenameWriter { map, inner })
    }

    fn lookup(&mut self, name: &str) -> Box<dyn FeatureWriter + '_> {
        let map = self.map.clone();
        let inner = self.inner.lookup(name);
        Box::new(GlyphRenameWriter { map, inner })
    }

    fn end_block(&mut self) {
        self.inner.end_block();
    }

    fn table(&mut self, name: &str, entries: &[TableEntry]) {
        self.inner.table(name, entries);
    }

    fn class_definition(&mut self, name: &str, members: &[GlyphName]) {
        let members = self.rename_names(members);
        self.inner.class_definition(name, &members);
    }

    fn lookup_flag(&mut self, flags: LookupFlags) {
        self.inner.lookup_flag(flags);
    }

    fn lookup_flag_zero(&mut self) {
        self.inner.lookup_flag_zero();
    }

    fn gsub_single(&mut self, target: &GlyphOrClass, replacement: &GlyphOrClass) {
        let target = self.rename_item(target);
        let replacement = self.rename_item(replacement);
        self.inner.gsub_single(&target, &replacement);
    }

    fn gsub_multiple(&mut self, target: &GlyphOrClass, replacement: &[GlyphOrClass]) {
        let target = self.rename_item(target);
        let replacement = self.rename_sequence(replacement);
        self.inner.gsub_multiple(&target, &replacement);
    }

    fn gsub_alternate(&mut self, target: &GlyphName, alternates: &[GlyphName]) {
        let target = self.rename(target);
        let alternates = self.rename_names(alternates);
        self.inner.gsub_alternate(&target, &alternates);
    }

    fn gsub_ligature(&mut self, target: &[GlyphOrClass], replacement: &GlyphOrClass) {
        let target = self.rename_sequence(target);
        let replacement = self.rename_item(replacement);
        self.inner.gsub_ligature(&target, &replacement);
    }

    fn gsub_contextual(
        &mut self,
        preceding: &[GlyphOrClass],
        targets: &[GlyphOrClass],
        trailing: &[GlyphOrClass],
        replacement: Option<&GlyphOrClass>,
    ) {
        let preceding = self.rename_sequence(preceding);
        let targets = self.rename_sequence(targets);
        let trailing = self.rename_sequence(trailing);
        let replacement = replacement.map(|item| self.rename_item(item));
        self.inner
            .gsub_contextual(&preceding, &targets, &trailing, replacement.as_ref());
    }

    fn gpos_single(&mut self, target: &GlyphOrClass, value: ValueRecord) {
        let target = self.rename_item(target);
        self.inner.gpos_single(&target, value);
    }

    fn gpos_pair(
        &mut self,
        left: &GlyphOrClass,
        right: &GlyphOrClass,
        value: f64,
        enumerate: bool,
    ) {
        let left = self.rename_item(left);
        let right = self.rename_item(right);
        self.inner.gpos_pair(&left, &right, value, enumerate);
    }

    fn language_system(&mut self, language: &str, script: &str) {
        self.inner.language_system(language, script);
    }

    fn script(&mut self, tag: &str) {
        self.inner.script(tag);
    }

    fn language(&mut self, tag: &str, include_default: bool) {
        self.inner.language(tag, include_default);
    }

    fn include(&mut self, path: &str) {
        self.inner.include(path);
    }

    fn subtable_break(&mut self) {
        self.inner.subtable_break();
    }

    fn feature_reference(&mut self, name: &str) {
        self.inner.feature_reference(name);
    }

    fn lookup_reference(&mut self, name: &str) {
        self.inner.lookup_reference(name);
    }

    fn raw_text(&mut self, text: &str) {
        self.inner.raw_text(text);
    }
}
