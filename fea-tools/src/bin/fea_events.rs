//! Parse a feature file and print the events it produces

use std::{collections::HashMap, path::PathBuf};

use clap::Parser;
use fea_tools::{
    writers::{Event, GlyphRenameWriter, LogWriter, SyntaxWriter},
    FeatureWriter, GlyphName, Opts,
};

/// Parse a feature file and print its rules.
///
/// By default every parse event is printed; with `--syntax` the rules are
/// written back out as feature syntax instead.
fn main() -> Result<(), Error> {
    env_logger::builder()
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Args::parse();
    let text = std::fs::read_to_string(&args.input)?;
    let opts = Opts::new().infer_enumeration(args.infer_enum);
    let renames = args.rename.as_deref().map(parse_renames).transpose()?;

    if args.log {
        parse(&text, LogWriter::new(), renames, &opts)?;
    } else if args.syntax {
        let writer = parse(&text, SyntaxWriter::new(), renames, &opts)?;
        print!("{writer}");
    } else {
        let events = parse(&text, Vec::<Event>::new(), renames, &opts)?;
        for event in &events {
            println!("{event:#?}");
        }
    }
    Ok(())
}

fn parse<W: FeatureWriter>(
    text: &str,
    writer: W,
    renames: Option<HashMap<GlyphName, GlyphName>>,
    opts: &Opts,
) -> Result<W, Error> {
    match renames {
        Some(map) => {
            let mut writer = GlyphRenameWriter::new(map, writer);
            fea_tools::parse_features_with_opts(text, &mut writer, opts)?;
            Ok(writer.into_inner())
        }
        None => {
            let mut writer = writer;
            fea_tools::parse_features_with_opts(text, &mut writer, opts)?;
            Ok(writer)
        }
    }
}

/// Read a rename map: one `old new` pair per line.
fn parse_renames(path: &std::path::Path) -> Result<HashMap<GlyphName, GlyphName>, Error> {
    let contents = std::fs::read_to_string(path)?;
    contents
        .lines()
        .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
        .map(|line| {
            let mut names = line.split_whitespace();
            match (names.next(), names.next(), names.next()) {
                (Some(from), Some(to), None) => Ok((from.into(), to.into())),
                _ => Err(Error::InvalidRenameMap(format!(
                    "expected two names, found {line:?}"
                ))),
            }
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("io error: '{0}'")]
    File(#[from] std::io::Error),
    #[error("invalid rename map: {0}")]
    InvalidRenameMap(String),
    #[error(transparent)]
    Syntax(#[from] fea_tools::SyntaxError),
}

/// Print the parse events of a FEA file
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// The feature file to parse.
    input: PathBuf,

    /// Write the rules back out as feature syntax.
    #[arg(short, long)]
    syntax: bool,

    /// Log each event as it is parsed, instead of printing at the end.
    ///
    /// Set RUST_LOG=info to see the output.
    #[arg(short, long, conflicts_with = "syntax")]
    log: bool,

    /// Treat pair positioning with an inline class as enumerated, even
    /// without the `enum` keyword.
    #[arg(long)]
    infer_enum: bool,

    /// Path to a file of glyph renames, one `old new` pair per line.
    #[arg(short, long)]
    rename: Option<PathBuf>,
}
