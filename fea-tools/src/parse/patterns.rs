//! The compiled matchers used to recognize statements.
//!
//! Every statement pattern starts with a boundary (start of text, whitespace,
//! `;`, `{` or `}`) followed by a `stmt` group spanning the statement itself;
//! text before `stmt` belongs to whatever precedes the statement.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        pub(crate) static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect("statement patterns are valid"));
    };
}

// preprocessing
pattern!(STRING, r#""[^"]*""#);
pattern!(COMMENT, r"#.*");

// block headers
pattern!(
    TABLE_HEADER,
    r"(?:^|[\s;{}])(?P<stmt>table\s+(?P<name>[\w/]+)\s*\{)"
);
pattern!(
    FEATURE_HEADER,
    r"(?:^|[\s;{}])(?P<stmt>feature\s+(?P<name>\w{4})\s*\{)"
);
pattern!(
    LOOKUP_HEADER,
    r"(?:^|[\s;{}])(?P<stmt>lookup\s+(?P<name>[\w.]+)\s*\{)"
);

// operands
pattern!(INLINE_CLASS, r"\[\s*(?P<members>[\w.@][\w\s.@]*)\]");
pattern!(NAME, r"[\w.@-]+");
pattern!(MARKED, r"(?:\[\s*[\w.@][\w\s.@]*\]|[\w.@]+)'");

// statements
pattern!(
    CLASS_DEFINITION,
    r"(?:^|[\s;{}])(?P<stmt>@(?P<name>[\w.]+)\s*=\s*\[\s*(?P<members>[\w.@-][\w\s.@-]*)\]\s*;)"
);
pattern!(
    SUBSTITUTION,
    r"(?:^|[\s;{}])(?P<stmt>(?:substitute|sub)\s+(?P<target>[\w\s.@\[\]]+)\s+by\s+(?P<replacement>[\w\s.@\[\]]+);)"
);
pattern!(
    ALTERNATE,
    r"(?:^|[\s;{}])(?P<stmt>(?:substitute|sub)\s+(?P<target>[\w\s.@\[\]]+)\s+from\s+(?P<replacement>[\w\s.@\[\]]+);)"
);
pattern!(
    CONTEXTUAL,
    r"(?:^|[\s;{}])(?P<stmt>(?:substitute|sub)\s+(?P<target>[\w\s.@\[\]']+)\s+by\s+(?P<replacement>[\w\s.@\[\]]+);)"
);
pattern!(
    IGNORE,
    r"(?:^|[\s;{}])(?P<stmt>ignore\s+(?:substitute|sub)\s+(?P<target>[\w\s.@\[\]']+);)"
);
pattern!(
    SINGLE_POSITION,
    r"(?:^|[\s;{}])(?P<stmt>(?:position|pos)\s+(?P<target>[\w\s.@\[\]]+?)\s*<(?P<value>[-+\d.\s]*)>\s*;)"
);
pattern!(
    PAIR_POSITION,
    r"(?:^|[\s;{}])(?P<stmt>(?P<enum>enum\s+)?(?:position|pos)\s+(?P<body>[-\w\s.@\[\]]+);)"
);
pattern!(
    LANGUAGE_SYSTEM,
    r"(?:^|[\s;{}])(?P<stmt>languagesystem\s+(?P<script>\w+)\s+(?P<language>\w+)\s*;)"
);
pattern!(
    SCRIPT,
    r"(?:^|[\s;{}])(?P<stmt>script\s+(?P<tag>\w+)\s*;)"
);
pattern!(
    LANGUAGE,
    r"(?:^|[\s;{}])(?P<stmt>language\s+(?P<tag>\w+)(?:\s+(?P<option>\w+))?\s*;)"
);
pattern!(
    INCLUDE,
    r"(?:^|[\s;{}])(?P<stmt>include\s*\(\s*(?P<path>[^)]+)\)(?:\s*;)?)"
);
pattern!(
    FEATURE_REFERENCE,
    r"(?:^|[\s;{}])(?P<stmt>feature\s+(?P<name>\w{4})\s*;)"
);
pattern!(
    LOOKUP_REFERENCE,
    r"(?:^|[\s;{}])(?P<stmt>lookup\s+(?P<name>[\w.]+)\s*;)"
);
pattern!(
    LOOKUP_FLAG,
    r"(?:^|[\s;{}])(?P<stmt>lookupflag\s+(?P<values>[\w,\s]+);)"
);
pattern!(SUBTABLE, r"(?:^|[\s;{}])(?P<stmt>subtable\s*;)");
pattern!(
    FEATURE_NAMES,
    r"(?:^|[\s;{}])(?P<stmt>featureNames\s*\{[^}]*\}\s*;)"
);
pattern!(TERMINATOR, r"(?P<stmt>;)");
