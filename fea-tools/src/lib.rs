//! Reading the Adobe OpenType Feature File format as a stream of events.
//!
//! Feature text is carved into blocks (`table`, `feature` and `lookup`) and
//! flat statements, and each statement is delivered to a [`FeatureWriter`]
//! as a typed call. Writers decide what to do with the rules: the
//! [`writers`] module has one that records them, one that writes them back
//! out as feature syntax, and one that renames glyphs on the way through.
//!
//! ```
//! use fea_tools::{parse_features, writers::Event, GlyphOrClass};
//!
//! let mut events: Vec<Event> = Vec::new();
//! parse_features("feature liga { sub f i by f_i; } liga;", &mut events).unwrap();
//! assert_eq!(
//!     events,
//!     vec![Event::Feature {
//!         name: "liga".into(),
//!         events: vec![Event::GsubLigature {
//!             target: vec![GlyphOrClass::glyph("f"), GlyphOrClass::glyph("i")],
//!             replacement: GlyphOrClass::glyph("f_i"),
//!         }],
//!     }]
//! );
//! ```

#![deny(missing_docs)]

mod error;
mod opts;
mod parse;
mod types;
mod writer;
pub mod writers;


pub use error::{BlockKind, SyntaxError};
pub use opts::Opts;
pub use parse::{parse_features, parse_features_with_opts};
pub use types::{GlyphName, GlyphOrClass, GlyphSequence, LookupFlags, TableValue, ValueRecord};
pub use writer::{FeatureWriter, TableEntry};
