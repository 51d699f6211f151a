//! Recording events as values.

use crate::{
    types::{GlyphName, GlyphOrClass, GlyphSequence, LookupFlags, ValueRecord},
    writer::TableEntry,
    FeatureWriter, SyntaxError,
};

/// One recorded writer call.
///
/// A `Vec<Event>` is itself a [`FeatureWriter`]: it records every call it
/// receives, with the contents of each block nested inside its
/// [`Event::Feature`] or [`Event::Lookup`].
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A feature block and everything in it.
    #[allow(missing_docs)]
    Feature { name: String, events: Vec<Event> },
    /// A lookup block and everything in it.
    #[allow(missing_docs)]
    Lookup { name: String, events: Vec<Event> },
    /// A tag/value table.
    #[allow(missing_docs)]
    Table {
        name: String,
        entries: Vec<TableEntry>,
    },
    /// A named class definition.
    #[allow(missing_docs)]
    ClassDefinition {
        name: GlyphName,
        members: Vec<GlyphName>,
    },
    /// `lookupflag` with keywords.
    LookupFlag(LookupFlags),
    /// `lookupflag 0;`
    LookupFlagZero,
    /// See [`FeatureWriter::gsub_single`].
    #[allow(missing_docs)]
    GsubSingle {
        target: GlyphOrClass,
        replacement: GlyphOrClass,
    },
    /// See [`FeatureWriter::gsub_multiple`].
    #[allow(missing_docs)]
    GsubMultiple {
        target: GlyphOrClass,
        replacement: GlyphSequence,
    },
    /// See [`FeatureWriter::gsub_alternate`].
    #[allow(missing_docs)]
    GsubAlternate {
        target: GlyphName,
        alternates: Vec<GlyphName>,
    },
    /// See [`FeatureWriter::gsub_ligature`].
    #[allow(missing_docs)]
    GsubLigature {
        target: GlyphSequence,
        replacement: GlyphOrClass,
    },
    /// See [`FeatureWriter::gsub_contextual`].
    #[allow(missing_docs)]
    GsubContextual {
        preceding: GlyphSequence,
        targets: GlyphSequence,
        trailing: GlyphSequence,
        replacement: Option<GlyphOrClass>,
    },
    /// See [`FeatureWriter::gpos_single`].
    #[allow(missing_docs)]
    GposSingle {
        target: GlyphOrClass,
        value: ValueRecord,
    },
    /// See [`FeatureWriter::gpos_pair`].
    #[allow(missing_docs)]
    GposPair {
        left: GlyphOrClass,
        right: GlyphOrClass,
        value: f64,
        enumerate: bool,
    },
    /// See [`FeatureWriter::language_system`].
    #[allow(missing_docs)]
    LanguageSystem { language: String, script: String },
    /// `script TAG;`
    Script(String),
    /// See [`FeatureWriter::language`].
    #[allow(missing_docs)]
    Language { tag: String, include_default: bool },
    /// `include(path)`
    Include(String),
    /// `subtable;`
    SubtableBreak,
    /// `feature NAME;`
    FeatureReference(String),
    /// `lookup NAME;`
    LookupReference(String),
    /// Text passed through verbatim.
    RawText(String),
}

/// Parse `text` and return everything it contains as events.
pub fn record(text: &str) -> Result<Vec<Event>, SyntaxError> {
    let mut events: Vec<Event> = Vec::new();
    crate::parse_features(text, &mut events)?;
    Ok(events)
}

impl Event {
    /// Deliver this event, and anything nested in it, to `writer`.
    pub fn replay(&self, writer: &mut dyn FeatureWriter) {
        match self {
            Event::Feature { name, events } => {
                let mut child = writer.feature(name);
                events.iter().for_each(|event| event.replay(&mut *child));
                child.end_block();
            }
            Event::Lookup { name, events } => {
                let mut child = writer.lookup(name);
                events.iter().for_each(|event| event.replay(&mut *child));
                child.end_block();
            }
            Event::Table { name, entries } => writer.table(name, entries),
            Event::ClassDefinition { name, members } => writer.class_definition(name, members),
            Event::LookupFlag(flags) => writer.lookup_flag(*flags),
            Event::LookupFlagZero => writer.lookup_flag_zero(),
            Event::GsubSingle {
                target,
                replacement,
            } => writer.gsub_single(target, replacement),
            Event::GsubMultiple {
                target,
                replacement,
            } => writer.gsub_multiple(target, replacement),
            Event::GsubAlternate { target, alternates } => {
                writer.gsub_alternate(target, alternates)
            }
            Event::GsubLigature {
                target,
                replacement,
            } => writer.gsub_ligature(target, replacement),
            Event::GsubContextual {
                preceding,
                targets,
                trailing,
                replacement,
            } => writer.gsub_contextual(preceding, targets, trailing, replacement.as_ref()),
            Event::GposSingle { target, value } => writer.gpos_single(target, *value),
            Event::GposPair {
                left,
                right,
                value,
                enumerate,
            } => writer.gpos_pair(left, right, *value, *enumerate),
            Event::LanguageSystem { language, script } => writer.language_system(language, script),
            Event::Script(tag) => writer.script(tag),
            Event::Language {
                tag,
                include_default,
            } => writer.language(tag, *include_default),
            Event::Include(path) => writer.include(path),
            Event::SubtableBreak => writer.subtable_break(),
            Event::FeatureReference(name) => writer.feature_reference(name),
            Event::LookupReference(name) => writer.lookup_reference(name),
            Event::RawText(text) => writer.raw_text(text),
        }
    }
}

fn push_block(events: &mut Vec<Event>, block: Event) -> &mut Vec<Event> {
    events.push(block);
    match events.last_mut() {
        Some(Event::Feature { events, .. } | Event::Lookup { events, .. }) => events,
        _ => unreachable!("a block was just pushed"),
    }
}

impl FeatureWriter for Vec<Event> {
    fn feature(&mut self, name: &str) -> Box<dyn FeatureWriter + '_> {
        Box::new(push_block(
            self,
            Event::Feature {
                name: name.into(),
                events: Vec::new(),
            },
        ))
    }

    fn lookup(&mut self, name: &str) -> Box<dyn FeatureWriter + '_> {
        Box::new(push_block(
            self,
            Event::Lookup {
                name: name.into(),
                events: Vec::new(),
            },
        ))
    }

    fn table(&mut self, name: &str, entries: &[TableEntry]) {
        self.push(Event::Table {
            name: name.into(),
            entries: entries.to_vec(),
        });
    }

    fn class_definition(&mut self, name: &str, members: &[GlyphName]) {
        self.push(Event::ClassDefinition {
            name: name.into(),
            members: members.to_vec(),
        });
    }

    fn lookup_flag(&mut self, flags: LookupFlags) {
        self.push(Event::LookupFlag(flags));
    }

    fn lookup_flag_zero(&mut self) {
        self.push(Event::LookupFlagZero);
    }

    fn gsub_single(&mut self, target: &GlyphOrClass, replacement: &GlyphOrClass) {
        self.push(Event::GsubSingle {
            target: target.clone(),
            replacement: replacement.clone(),
        });
    }

    fn gsub_multiple(&mut self, target: &GlyphOrClass, replacement: &[GlyphOrClass]) {
        self.push(Event::GsubMultiple {
            target: target.clone(),
            replacement: replacement.to_vec(),
        });
    }

    fn gsub_alternate(&mut self, target: &GlyphName, alternates: &[GlyphName]) {
        self.push(Event::GsubAlternate {
            target: target.clone(),
            alternates: alternates.to_vec(),
        });
    }

    fn gsub_ligature(&mut self, target: &[GlyphOrClass], replacement: &GlyphOrClass) {
        self.push(Event::GsubLigature {
            target: target.to_vec(),
            replacement: replacement.clone(),
        });
    }

    fn gsub_contextual(
        &mut self,
        preceding: &[GlyphOrClass],
        targets: &[GlyphOrClass],
        trailing: &[GlyphOrClass],
        replacement: Option<&GlyphOrClass>,
    ) {
        self.push(Event::GsubContextual {
            preceding: preceding.to_vec(),
            targets: targets.to_vec(),
            trailing: trailing.to_vec(),
            replacement: replacement.cloned(),
        });
    }

    fn gpos_single(&mut self, target: &GlyphOrClass, value: ValueRecord) {
        self.push(Event::GposSingle {
            target: target.clone(),
            value,
        });
    }

    fn gpos_pair(
        &mut self,
        left: &GlyphOrClass,
        right: &GlyphOrClass,
        value: f64,
        enumerate: bool,
    ) {
        self.push(Event::GposPair {
            left: left.clone(),
            right: right.clone(),
            value,
            enumerate,
        });
    }

    fn language_system(&mut self, language: &str, script: &str) {
        self.push(Event::LanguageSystem {
            language: language.into(),
            script: script.into(),
        });
    }

    fn script(&mut self, tag: &str) {
        self.push(Event::Script(tag.into()));
    }

    fn language(&mut self, tag: &str, include_default: bool) {
        self.push(Event::Language {
            tag: tag.into(),
            include_default,
        });
    }

    fn include(&mut self, path: &str) {
        self.push(Event::Include(path.into()));
    }

    fn subtable_break(&mut self) {
        self.push(Event::SubtableBreak);
    }

    fn feature_reference(&mut self, name: &str) {
        self.push(Event::FeatureReference(name.into()));
    }

    fn lookup_reference(&mut self, name: &str) {
        self.push(Event::LookupReference(name.into()));
    }

    fn raw_text(&mut self, text: &str) {
        self.push(Event::RawText(text.into()));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blocks_nest() {
        let mut events: Vec<Event> = Vec::new();
        {
            let mut feature = events.feature("kern");
            feature.subtable_break();
            let mut lookup = feature.lookup("pairs");
            lookup.lookup_flag_zero();
            lookup.end_block();
        }
        events.script("latn");
        assert_eq!(
            events,
            vec![
                Event::Feature {
                    name: "kern".into(),
                    events: vec![
                        Event::SubtableBreak,
                        Event::Lookup {
                            name: "pairs".into(),
                            events: vec![Event::LookupFlagZero],
                        },
                    ],
                },
                Event::Script("latn".into()),
            ]
        );
    }

    #[test]
    fn replay_reproduces() {
        let events = record(
            "languagesystem latn dflt;
            feature liga {
                lookup fi { sub f i by f_i; } fi;
                lookupflag IgnoreMarks;
                pos a b -20;
            } liga;",
        )
        .unwrap();
        let mut replayed: Vec<Event> = Vec::new();
        events.iter().for_each(|event| event.replay(&mut replayed));
        assert_eq!(replayed, events);
    }
}
