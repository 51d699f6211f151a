//! Concrete [`FeatureWriter`](crate::FeatureWriter) implementations.

mod logging;
mod recorder;
mod rename;
mod syntax;

pub use logging::LogWriter;
pub use recorder::{record, Event};
pub use rename::GlyphRenameWriter;
pub use syntax::SyntaxWriter;
