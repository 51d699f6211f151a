//! Tag/value tables and the schema they are checked against.

use crate::{types::TableValue, writer::TableEntry, SyntaxError};

/// The type a table tag's value must parse as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ValueKind {
    Int,
    Float,
    Text,
    IntList,
}

use ValueKind::*;

static SCHEMA: &[(&str, &[(&str, ValueKind)])] = &[
    ("GDEF", &[("GlyphClassDef", Text)]),
    ("head", &[("FontRevision", Float)]),
    (
        "hhea",
        &[
            ("CaretOffset", Float),
            ("Ascender", Float),
            ("Descender", Float),
            ("LineGap", Float),
        ],
    ),
    (
        "OS/2",
        &[
            ("FSType", Int),
            ("Panose", IntList),
            ("UnicodeRange", IntList),
            ("CodePageRange", IntList),
            ("TypoAscender", Float),
            ("TypoDescender", Float),
            ("TypoLineGap", Float),
            ("winAscent", Float),
            ("winDescent", Float),
            ("XHeight", Float),
            ("CapHeight", Float),
            ("WeightClass", Float),
            ("WidthClass", Float),
            ("Vendor", Text),
        ],
    ),
    (
        "vhea",
        &[
            ("VertTypoAscender", Float),
            ("VertTypoDescender", Float),
            ("VertTypoLineGap", Float),
        ],
    ),
];

/// Parse a table body into typed entries.
///
/// Returns `None` for tables without a schema; their bodies are not
/// inspected at all.
pub(crate) fn parse_table(
    name: &str,
    body: &str,
) -> Result<Option<Vec<TableEntry>>, SyntaxError> {
    let Some((_, fields)) = SCHEMA.iter().find(|(table, _)| *table == name) else {
        return Ok(None);
    };

    let mut entries = Vec::new();
    for piece in body.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (tag, value) = piece
            .split_once(char::is_whitespace)
            .map(|(tag, value)| (tag, value.trim()))
            .unwrap_or((piece, ""));
        let Some((_, kind)) = fields.iter().find(|(field, _)| *field == tag) else {
            return Err(SyntaxError::UnknownTableTag {
                table: name.into(),
                tag: tag.into(),
            });
        };
        // a value that was only a quoted string has been stripped
        if value.is_empty() {
            log::debug!("skipping '{tag}' in table '{name}', it has no value");
            continue;
        }
        let value = parse_value(*kind, value).ok_or_else(|| SyntaxError::InvalidTableValue {
            table: name.into(),
            tag: tag.into(),
            value: value.into(),
        })?;
        entries.push((tag.into(), value));
    }
    Ok(Some(entries))
}

fn parse_value(kind: ValueKind, value: &str) -> Option<TableValue> {
    match kind {
        Int => value.parse().ok().map(TableValue::Int),
        Float => value
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(TableValue::Float),
        Text => Some(TableValue::String(value.into())),
        IntList => value
            .split_whitespace()
            .map(|v| v.parse().ok())
            .collect::<Option<Vec<_>>>()
            .map(TableValue::IntList),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn os2() {
        let body = "
            FSType 0; 
            Panose 0 1 2 3 4 5 6 7 8 9; 
            TypoDescender -250; 
            Vendor ; 
        ";
        let entries = parse_table("OS/2", body).unwrap().unwrap();
        assert_eq!(
            entries,
            vec![
                ("FSType".into(), TableValue::Int(0)),
                ("Panose".into(), TableValue::IntList((0..10).collect())),
                ("TypoDescender".into(), TableValue::Float(-250.0)),
            ]
        );
    }

    #[test]
    fn string_values_are_kept_whole() {
        let entries = parse_table("GDEF", "GlyphClassDef @BASE, @LIGA, , ; ")
            .unwrap()
            .unwrap();
        assert_eq!(
            entries,
            vec![(
                "GlyphClassDef".into(),
                TableValue::String("@BASE, @LIGA, ,".into())
            )]
        );
    }

    #[test]
    fn unknown_tables_are_not_inspected() {
        assert_eq!(parse_table("name", "nameid 1 ; ").unwrap(), None);
    }

    #[test]
    fn empty_known_table() {
        assert_eq!(parse_table("head", "  ").unwrap(), Some(vec![]));
    }

    #[test]
    fn unknown_tag() {
        assert_eq!(
            parse_table("hhea", "Bogus 10; "),
            Err(SyntaxError::UnknownTableTag {
                table: "hhea".into(),
                tag: "Bogus".into()
            })
        );
    }

    #[test]
    fn invalid_value() {
        assert_eq!(
            parse_table("OS/2", "FSType 1.5; "),
            Err(SyntaxError::InvalidTableValue {
                table: "OS/2".into(),
                tag: "FSType".into(),
                value: "1.5".into(),
            })
        );
        assert!(parse_table("OS/2", "UnicodeRange 0 x 2; ").is_err());
        assert!(parse_table("head", "FontRevision one; ").is_err());
        assert!(parse_table("head", "FontRevision inf; ").is_err());
    }
}
