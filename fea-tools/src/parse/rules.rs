//! Classifying isolated statements and emitting their events.
//!
//! Each function here receives the captures of one statement pattern from
//! [`super::patterns`] and turns them into a single writer call.

use regex::Captures;

use crate::{
    types::{GlyphOrClass, GlyphSequence, LookupFlags, ValueRecord},
    FeatureWriter, Opts, SyntaxError,
};

use super::sequence::{names, parse_marked_sequence, parse_sequence};

/// The text of a named group, or `""` if it did not participate.
pub(crate) fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn statement<'t>(caps: &Captures<'t>) -> &'t str {
    group(caps, "stmt").trim()
}

pub(crate) fn class_definition(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    let name = format!("@{}", group(caps, "name"));
    let members = group(caps, "members")
        .split_whitespace()
        .map(Into::into)
        .collect::<Vec<_>>();
    writer.class_definition(&name, &members);
    Ok(())
}

/// `sub ... by ...;` without marks: single, ligature or multiple.
pub(crate) fn substitution(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    let target = parse_sequence(group(caps, "target"))?;
    let replacement = parse_sequence(group(caps, "replacement"))?;
    match (target.as_slice(), replacement.as_slice()) {
        ([], _) | (_, []) => Err(SyntaxError::malformed("substitution", statement(caps))),
        ([target], [replacement]) => {
            writer.gsub_single(target, replacement);
            Ok(())
        }
        (target, [replacement]) => {
            writer.gsub_ligature(target, replacement);
            Ok(())
        }
        ([target], replacement) => {
            writer.gsub_multiple(target, replacement);
            Ok(())
        }
        _ => Err(SyntaxError::ManyToMany(statement(caps).into())),
    }
}

/// `sub target from [alternates];`
pub(crate) fn alternate(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    let target = names(group(caps, "target"));
    let alternates = names(group(caps, "replacement"));
    match target.as_slice() {
        [target] if !alternates.is_empty() => {
            writer.gsub_alternate(target, &alternates);
            Ok(())
        }
        _ => Err(SyntaxError::malformed(
            "alternate substitution",
            statement(caps),
        )),
    }
}

/// `sub pre target' post by replacement;`
pub(crate) fn contextual(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    let marked = parse_marked_sequence(group(caps, "target"))?;
    let replacement = names(group(caps, "replacement"));
    if replacement.is_empty() {
        return Err(SyntaxError::malformed(
            "contextual substitution",
            statement(caps),
        ));
    }
    let replacement = GlyphOrClass::from_names(replacement);
    writer.gsub_contextual(
        &marked.preceding,
        &marked.targets,
        &marked.trailing,
        Some(&replacement),
    );
    Ok(())
}

/// `ignore sub pre target' post;`
pub(crate) fn ignore(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    let marked = parse_marked_sequence(group(caps, "target"))?;
    writer.gsub_contextual(&marked.preceding, &marked.targets, &marked.trailing, None);
    Ok(())
}

fn parse_number(text: &str) -> Result<f64, SyntaxError> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| SyntaxError::InvalidNumber(text.into()))
}

/// `pos target <a b c d>;`
pub(crate) fn single_position(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    let target = parse_sequence(group(caps, "target"))?;
    let values = group(caps, "value")
        .split_whitespace()
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;
    match (target.as_slice(), values.as_slice()) {
        ([target], &[a, b, c, d]) => {
            writer.gpos_single(target, ValueRecord::new(a, b, c, d));
            Ok(())
        }
        _ => Err(SyntaxError::malformed(
            "single positioning",
            statement(caps),
        )),
    }
}

/// `[enum] pos left right value;`
pub(crate) fn pair_position(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    opts: &Opts,
) -> Result<(), SyntaxError> {
    let malformed = || SyntaxError::malformed("pair positioning", statement(caps));
    let (operands, value) = group(caps, "body")
        .trim()
        .rsplit_once(char::is_whitespace)
        .ok_or_else(malformed)?;
    let value = parse_number(value)?;
    let operands: GlyphSequence = parse_sequence(operands)?;
    let [left, right] = operands.as_slice() else {
        return Err(malformed());
    };
    let explicit = caps.name("enum").is_some();
    let enumerate = explicit || (opts.infer_enumeration && (left.is_class() || right.is_class()));
    writer.gpos_pair(left, right, value, enumerate);
    Ok(())
}

pub(crate) fn language_system(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    writer.language_system(group(caps, "language"), group(caps, "script"));
    Ok(())
}

pub(crate) fn script(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    writer.script(group(caps, "tag"));
    Ok(())
}

pub(crate) fn language(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    let include_default = match group(caps, "option") {
        "" | "include_dflt" => true,
        "exclude_dflt" => false,
        _ => return Err(SyntaxError::malformed("language", statement(caps))),
    };
    writer.language(group(caps, "tag"), include_default);
    Ok(())
}

pub(crate) fn include(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    writer.include(group(caps, "path").trim());
    Ok(())
}

pub(crate) fn feature_reference(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    writer.feature_reference(group(caps, "name"));
    Ok(())
}

pub(crate) fn lookup_reference(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    writer.lookup_reference(group(caps, "name"));
    Ok(())
}

/// `lookupflag 0;` or `lookupflag Keyword, Keyword;`
///
/// Only the zero form of the numeric syntax is accepted.
pub(crate) fn lookup_flag(
    caps: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    let values = group(caps, "values").replace(',', " ");
    let tokens = values.split_whitespace().collect::<Vec<_>>();
    if let [number] = tokens.as_slice() {
        if number.bytes().all(|b| b.is_ascii_digit()) {
            if number.trim_start_matches('0').is_empty() {
                writer.lookup_flag_zero();
                return Ok(());
            }
            return Err(SyntaxError::NonZeroLookupFlag((*number).into()));
        }
    }
    let mut flags = LookupFlags::empty();
    for token in tokens {
        flags |= LookupFlags::from_keyword(token)
            .ok_or_else(|| SyntaxError::UnknownLookupFlag(token.into()))?;
    }
    writer.lookup_flag(flags);
    Ok(())
}

pub(crate) fn subtable(
    _: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    writer.subtable_break();
    Ok(())
}

/// `featureNames { ... };` carries only name strings, which are already gone.
pub(crate) fn feature_names(
    caps: &Captures,
    _: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    log::debug!("skipping '{}'", statement(caps));
    Ok(())
}

pub(crate) fn terminator(
    _: &Captures,
    writer: &mut dyn FeatureWriter,
    _: &Opts,
) -> Result<(), SyntaxError> {
    writer.raw_text(";");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use regex::Regex;
    use rstest::rstest;

    use super::*;
    use crate::{parse::patterns, writers::Event};

    fn apply(
        pattern: &Regex,
        rule: fn(&Captures, &mut dyn FeatureWriter, &Opts) -> Result<(), SyntaxError>,
        text: &str,
        opts: &Opts,
    ) -> Result<Vec<Event>, SyntaxError> {
        let caps = pattern.captures(text).expect("pattern matches test input");
        let mut events: Vec<Event> = Vec::new();
        rule(&caps, &mut events, opts)?;
        Ok(events)
    }

    fn glyph(name: &str) -> GlyphOrClass {
        GlyphOrClass::glyph(name)
    }

    fn class(names: &[&str]) -> GlyphOrClass {
        GlyphOrClass::class(names.iter().copied())
    }

    #[rstest]
    #[case::single("sub foo by bar; ", Event::GsubSingle { target: glyph("foo"), replacement: glyph("bar") })]
    #[case::single_class(
        "sub [foo foo.alt] by [bar]; ",
        Event::GsubSingle { target: class(&["foo", "foo.alt"]), replacement: class(&["bar"]) }
    )]
    #[case::ligature(
        "sub f o o by f_o_o; ",
        Event::GsubLigature { target: vec![glyph("f"), glyph("o"), glyph("o")], replacement: glyph("f_o_o") }
    )]
    #[case::multiple(
        "sub f_o_o by f o o; ",
        Event::GsubMultiple { target: glyph("f_o_o"), replacement: vec![glyph("f"), glyph("o"), glyph("o")] }
    )]
    #[case::long_keyword("substitute a by b; ", Event::GsubSingle { target: glyph("a"), replacement: glyph("b") })]
    fn substitution_shapes(#[case] text: &str, #[case] expected: Event) {
        let events = apply(&patterns::SUBSTITUTION, substitution, text, &Opts::default()).unwrap();
        assert_eq!(events, vec![expected]);
    }

    #[test]
    fn many_to_many() {
        let text = "sub a b by c d; ";
        let err = apply(&patterns::SUBSTITUTION, substitution, text, &Opts::default()).unwrap_err();
        assert_eq!(err, SyntaxError::ManyToMany("sub a b by c d;".into()));
    }

    #[test]
    fn alternates() {
        let opts = Opts::default();
        let text = "sub a from [a.1 a.2]; ";
        let events = apply(&patterns::ALTERNATE, alternate, text, &opts).unwrap();
        assert_eq!(
            events,
            vec![Event::GsubAlternate {
                target: "a".into(),
                alternates: vec!["a.1".into(), "a.2".into()],
            }]
        );
        assert!(apply(&patterns::ALTERNATE, alternate, "sub a b from [c]; ", &opts).is_err());
    }

    #[rstest]
    #[case::preceding("sub f o' by o.alt; ", vec![glyph("f")], vec![glyph("o")], vec![], glyph("o.alt"))]
    #[case::marked_class(
        "sub [foo bar]' bar by [foo.alt bar.alt]; ",
        vec![],
        vec![class(&["foo", "bar"])],
        vec![glyph("bar")],
        class(&["foo.alt", "bar.alt"])
    )]
    #[case::two_targets(
        "sub a b' c' d by e; ",
        vec![glyph("a")],
        vec![glyph("b"), glyph("c")],
        vec![glyph("d")],
        glyph("e")
    )]
    fn contextual_shapes(
        #[case] text: &str,
        #[case] preceding: GlyphSequence,
        #[case] targets: GlyphSequence,
        #[case] trailing: GlyphSequence,
        #[case] replacement: GlyphOrClass,
    ) {
        let events = apply(&patterns::CONTEXTUAL, contextual, text, &Opts::default()).unwrap();
        assert_eq!(
            events,
            vec![Event::GsubContextual {
                preceding,
                targets,
                trailing,
                replacement: Some(replacement),
            }]
        );
    }

    #[test]
    fn ignore_has_no_replacement() {
        let text = "ignore sub f o' o; ";
        let events = apply(&patterns::IGNORE, ignore, text, &Opts::default()).unwrap();
        assert_eq!(
            events,
            vec![Event::GsubContextual {
                preceding: vec![glyph("f")],
                targets: vec![glyph("o")],
                trailing: vec![glyph("o")],
                replacement: None,
            }]
        );
    }

    #[test]
    fn single_positioning() {
        let events = apply(
            &patterns::SINGLE_POSITION,
            single_position,
            "pos foo <0 -10 20.5 0>; ",
            &Opts::default(),
        )
        .unwrap();
        assert_eq!(
            events,
            vec![Event::GposSingle {
                target: glyph("foo"),
                value: ValueRecord::new(0., -10., 20.5, 0.),
            }]
        );
        let text = "pos foo <0 0 0>; ";
        assert!(matches!(
            apply(&patterns::SINGLE_POSITION, single_position, text, &Opts::default()),
            Err(SyntaxError::MalformedRule { .. })
        ));
    }

    #[rstest]
    #[case::explicit("enum pos foo [bar bar.alt] -100; ", false, true)]
    #[case::explicit_inferred("enum pos foo [bar bar.alt] -100; ", true, true)]
    #[case::implicit("pos foo [bar bar.alt] -100; ", false, false)]
    #[case::implicit_inferred("pos foo [bar bar.alt] -100; ", true, true)]
    fn pair_enumeration(#[case] text: &str, #[case] infer: bool, #[case] enumerate: bool) {
        let opts = Opts::new().infer_enumeration(infer);
        let events = apply(&patterns::PAIR_POSITION, pair_position, text, &opts).unwrap();
        assert_eq!(
            events,
            vec![Event::GposPair {
                left: glyph("foo"),
                right: class(&["bar", "bar.alt"]),
                value: -100.,
                enumerate,
            }]
        );
    }

    #[rstest]
    #[case::one_operand("pos a -100; ")]
    #[case::three_operands("pos a b c -100; ")]
    fn pair_needs_two_operands(#[case] text: &str) {
        let result = apply(&patterns::PAIR_POSITION, pair_position, text, &Opts::default());
        assert!(matches!(result, Err(SyntaxError::MalformedRule { .. })), "{result:?}");
    }

    #[test]
    fn pair_value_must_be_a_number() {
        let text = "pos a b c; ";
        let result = apply(&patterns::PAIR_POSITION, pair_position, text, &Opts::default());
        assert_eq!(result, Err(SyntaxError::InvalidNumber("c".into())));
    }

    #[rstest]
    #[case::keywords("lookupflag RightToLeft, IgnoreMarks; ", Ok(vec![Event::LookupFlag(LookupFlags::RIGHT_TO_LEFT | LookupFlags::IGNORE_MARKS)]))]
    #[case::no_commas("lookupflag IgnoreLigatures IgnoreBaseGlyphs; ", Ok(vec![Event::LookupFlag(LookupFlags::IGNORE_LIGATURES | LookupFlags::IGNORE_BASE_GLYPHS)]))]
    #[case::zero("lookupflag 0; ", Ok(vec![Event::LookupFlagZero]))]
    #[case::non_zero("lookupflag 1; ", Err(SyntaxError::NonZeroLookupFlag("1".into())))]
    #[case::unknown("lookupflag IgnoreEverything; ", Err(SyntaxError::UnknownLookupFlag("IgnoreEverything".into())))]
    fn lookup_flags(#[case] text: &str, #[case] expected: Result<Vec<Event>, SyntaxError>) {
        assert_eq!(
            apply(&patterns::LOOKUP_FLAG, lookup_flag, text, &Opts::default()),
            expected
        );
    }

    #[rstest]
    #[case::bare("language TRK ; ", Ok(vec![Event::Language { tag: "TRK".into(), include_default: true }]))]
    #[case::include("language TRK include_dflt; ", Ok(vec![Event::Language { tag: "TRK".into(), include_default: true }]))]
    #[case::exclude("language TRK exclude_dflt; ", Ok(vec![Event::Language { tag: "TRK".into(), include_default: false }]))]
    #[case::unknown(
        "language TRK required; ",
        Err(SyntaxError::malformed("language", "language TRK required;"))
    )]
    fn language_defaults(#[case] text: &str, #[case] expected: Result<Vec<Event>, SyntaxError>) {
        assert_eq!(
            apply(&patterns::LANGUAGE, language, text, &Opts::default()),
            expected
        );
    }

    #[test]
    fn language_system_is_language_first() {
        let events = apply(
            &patterns::LANGUAGE_SYSTEM,
            language_system,
            "languagesystem DFLT dflt; ",
            &Opts::default(),
        )
        .unwrap();
        assert_eq!(
            events,
            vec![Event::LanguageSystem {
                language: "dflt".into(),
                script: "DFLT".into(),
            }]
        );
    }

    #[test]
    fn include_path_is_raw() {
        let events = apply(&patterns::INCLUDE, include, "include( ../kern.fea )", &Opts::default())
            .unwrap();
        assert_eq!(events, vec![Event::Include("../kern.fea".into())]);
    }

    #[test]
    fn class_names_keep_their_sigil() {
        let events = apply(
            &patterns::CLASS_DEFINITION,
            class_definition,
            "@lc = [a b c-d]; ",
            &Opts::default(),
        )
        .unwrap();
        assert_eq!(
            events,
            vec![Event::ClassDefinition {
                name: "@lc".into(),
                members: vec!["a".into(), "b".into(), "c-d".into()],
            }]
        );
    }
}
