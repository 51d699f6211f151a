//! Normalizing raw text before statements are matched.

use super::patterns::{COMMENT, STRING};

/// Strip strings and comments, and put a space after every terminator.
///
/// Strings are removed first, so that neither a `#` nor any other syntax
/// inside a string can be mistaken for structure.
pub(crate) fn preprocess(text: &str) -> String {
    let text = STRING.replace_all(text, "");
    let text = COMMENT.replace_all(&text, "");
    text.replace(';', "; ")
}
