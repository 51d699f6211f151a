//! Writing parsed events back out as syntax and parsing them again.
//!
//! Every `.fea` file in the round-trip directory must parse, and the text
//! produced by [`SyntaxWriter`] must parse to the same events.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use pretty_assertions::assert_eq;

use crate::writers::{record, Event, GlyphRenameWriter, SyntaxWriter};

static ROUNDTRIP_TESTS: &str = "./test-data/roundtrip";

fn iter_fea_files(path: impl AsRef<Path>) -> impl Iterator<Item = PathBuf> {
    let mut dir = path.as_ref().read_dir().unwrap();
    std::iter::from_fn(move || loop {
        let entry = dir.next()?.unwrap();
        let path = entry.path();
        if path.extension() == Some(OsStr::new("fea")) {
            return Some(path);
        }
    })
}

fn write_syntax(events: &[Event]) -> String {
    let mut writer = SyntaxWriter::new();
    events.iter().for_each(|event| event.replay(&mut writer));
    writer.to_string()
}

#[test]
fn all_roundtrip_tests() {
    let paths = iter_fea_files(ROUNDTRIP_TESTS).collect::<Vec<_>>();
    assert!(!paths.is_empty(), "no test files in {ROUNDTRIP_TESTS}");

    for path in paths {
        let text = std::fs::read_to_string(&path).unwrap();
        let events = record(&text).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert!(!events.is_empty(), "{}", path.display());

        let written = write_syntax(&events);
        let reparsed = record(&written)
            .unwrap_or_else(|e| panic!("{}: {e}\n{written}", path.display()));
        assert_eq!(reparsed, events, "{}", path.display());
        assert_eq!(write_syntax(&reparsed), written, "{}", path.display());
    }
}

#[test]
fn writer_and_recorder_agree() {
    let text = "feature kern { lookup one { pos a b -10; } one; subtable; } kern;";
    let mut syntax = SyntaxWriter::new();
    crate::parse_features(text, &mut syntax).unwrap();
    assert_eq!(write_syntax(&record(text).unwrap()), syntax.to_string());
}

#[test]
fn renamed_roundtrip() {
    let text = "@lc = [a b]; feature liga { sub f i by f_i; } liga;";
    let map = [("f_i", "fi"), ("a", "a.alt")]
        .into_iter()
        .map(|(from, to)| (from.into(), to.into()))
        .collect();
    let mut writer = GlyphRenameWriter::new(map, SyntaxWriter::new());
    crate::parse_features(text, &mut writer).unwrap();
    let written = writer.into_inner().to_string();
    assert_eq!(
        written,
        "@lc = [a.alt b];\nfeature liga {\n   sub f i by fi;\n} liga;\n"
    );

    let mut events: Vec<Event> = Vec::new();
    crate::parse_features(&written, &mut events).unwrap();
    assert_eq!(events.len(), 2);
}

#[test]
fn concatenated_files_parse_in_order() {
    let mut texts = iter_fea_files(ROUNDTRIP_TESTS)
        .map(|path| std::fs::read_to_string(path).unwrap())
        .collect::<Vec<_>>();
    texts.sort();
    let kern = std::fs::read_to_string(Path::new(ROUNDTRIP_TESTS).join("kern.fea")).unwrap();
    texts.extend([kern.clone(), kern]);

    let expected = texts
        .iter()
        .flat_map(|text| record(text).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(record(&texts.join("\n")).unwrap(), expected);
}
