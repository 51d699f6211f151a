//! Parse feature file text into writer events

mod blocks;
pub(crate) mod patterns;
mod preprocess;
mod rules;
mod sequence;
mod tables;

use crate::{FeatureWriter, Opts, SyntaxError};

/// Parse feature file text, delivering every statement to `writer`.
///
/// Events arrive in source order. Parsing stops at the first error; events
/// emitted before the error have already been delivered.
pub fn parse_features(text: &str, writer: &mut dyn FeatureWriter) -> Result<(), SyntaxError> {
    parse_features_with_opts(text, writer, &Opts::default())
}

/// Parse feature file text with explicit [`Opts`].
pub fn parse_features_with_opts(
    text: &str,
    writer: &mut dyn FeatureWriter,
    opts: &Opts,
) -> Result<(), SyntaxError> {
    let text = preprocess::preprocess(text);
    blocks::parse_span(&text, writer, 0, opts)
}
