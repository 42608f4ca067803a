//! Command-line front end
//!
//! Resolves the source text, term and comparison settings from arguments,
//! the config file and the chosen sample, then renders the segments.

use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, Config};
use crate::error::HiliteError;
use crate::highlight::{ComparisonMode, Culture, Highlighter};
use crate::render::{self, OutputFormat};
use crate::samples::{self, ExampleText, SAMPLES};

#[derive(Debug, Parser)]
#[command(
    name = "hilite",
    version,
    about = "Highlight every occurrence of a term in a text"
)]
pub struct Args {
    /// Term to highlight (taken literally)
    #[arg(required_unless_present = "list_samples")]
    pub term: Option<String>,

    /// Read the text from a file instead of stdin
    #[arg(short, long, conflicts_with = "sample")]
    pub file: Option<PathBuf>,

    /// Use a bundled sample text (key, number or title prefix)
    #[arg(short, long)]
    pub sample: Option<String>,

    /// Comparison mode, e.g. ordinal or culture-sensitive-ignore-case
    #[arg(short, long)]
    pub mode: Option<ComparisonMode>,

    /// Culture tag for culture-sensitive modes, e.g. es-ES
    #[arg(short, long)]
    pub culture: Option<Culture>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of ~/.config/hilite/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the number of matches to stderr
    #[arg(long)]
    pub stats: bool,

    /// List the bundled samples and exit
    #[arg(long)]
    pub list_samples: bool,
}

/// Where the text to highlight comes from
enum Source {
    File(PathBuf),
    Sample(&'static ExampleText),
    Stdin,
}

impl Source {
    fn from_args(args: &Args) -> Result<Self, HiliteError> {
        if let Some(path) = &args.file {
            return Ok(Source::File(path.clone()));
        }
        if let Some(name) = &args.sample {
            return Ok(Source::Sample(samples::find(name)?));
        }
        Ok(Source::Stdin)
    }

    fn read(&self, stdin: &mut dyn Read) -> Result<String, HiliteError> {
        match self {
            Source::File(path) => Ok(fs::read_to_string(path)?),
            Source::Sample(sample) => Ok(sample.text.to_string()),
            Source::Stdin => {
                let mut buffer = String::new();
                stdin.read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

/// Run the command with explicit streams
pub fn run(
    args: &Args,
    stdin: &mut dyn Read,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<(), HiliteError> {
    if args.list_samples {
        for (i, sample) in SAMPLES.iter().enumerate() {
            writeln!(
                stdout,
                "{}. {:<12} {:<6} {}",
                i + 1,
                sample.key,
                sample.culture,
                sample.title
            )?;
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };

    let source = Source::from_args(args)?;
    let text = source.read(stdin)?;
    let term = args.term.as_deref().unwrap_or_default();

    let highlighter = resolve_highlighter(args, &source, &config)?;
    log::debug!(
        "highlighting {} bytes with {} ({})",
        text.len(),
        highlighter.mode(),
        highlighter.culture()
    );

    let format = args.format.unwrap_or(config.output.format);
    let rendered = render::render(highlighter.segments(&text, term), format, &config)?;
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        writeln!(stdout)?;
    }

    if args.stats {
        writeln!(stderr, "{} match(es)", highlighter.count(&text, term))?;
    }

    Ok(())
}

/// Flags win over the sample's culture, which wins over the config file
fn resolve_highlighter(
    args: &Args,
    source: &Source,
    config: &Config,
) -> Result<Highlighter, HiliteError> {
    let mode = args.mode.unwrap_or(config.highlight.mode);
    let culture = match (&args.culture, source) {
        (Some(culture), _) => culture.clone(),
        (None, Source::Sample(sample)) => sample.culture()?,
        (None, _) => config.highlight.culture.clone(),
    };
    Ok(Highlighter::new(mode).with_culture(culture))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
