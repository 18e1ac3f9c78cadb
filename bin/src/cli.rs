use anyhow::{bail, Context};
use clap::Parser;
use std::{path::PathBuf, str::FromStr};
use weft_display_map::{DecorationOptions, ModelPoint, ModelRange};

/// Print a file as wrapped view lines with the render entries of each line.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text file to lay out
    pub file: PathBuf,

    /// TOML file with a `[wrap]` table
    #[arg(short, long, env = "WEFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Wrap at this column, overriding the config file
    #[arg(short = 'w', long, conflicts_with = "no_wrap")]
    pub wrap_column: Option<u32>,

    /// Disable wrapping, overriding the config file
    #[arg(long)]
    pub no_wrap: bool,

    /// Decoration as `LINE:COL-LINE:COL=INLINE[/BEFORE[/AFTER]]`
    #[arg(short, long = "decorate", value_name = "DECORATION")]
    pub decorations: Vec<DecorationArg>,

    /// First view line of the viewport
    #[arg(long, default_value_t = 1)]
    pub from: u32,

    /// Last view line of the viewport, defaults to the last line
    #[arg(long)]
    pub to: Option<u32>,

    /// Log file or directory
    #[arg(long, env = "WEFT_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// A decoration given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationArg {
    pub range: ModelRange,
    pub options: DecorationOptions,
}

impl FromStr for DecorationArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (range, classes) = s
            .split_once('=')
            .with_context(|| format!("missing `=CLASS` in decoration `{s}`"))?;
        let (start, end) = range
            .split_once('-')
            .with_context(|| format!("expected `START-END` in decoration `{s}`"))?;

        let mut classes = classes.split('/').map(str::trim);
        let mut options = DecorationOptions::new();
        if let Some(class) = classes.next().filter(|class| !class.is_empty()) {
            options = options.class_name(class).inline_class_name(class);
        }
        if let Some(class) = classes.next().filter(|class| !class.is_empty()) {
            options = options.before_content_class_name(class);
        }
        if let Some(class) = classes.next().filter(|class| !class.is_empty()) {
            options = options.after_content_class_name(class);
        }
        if classes.next().is_some() {
            bail!("too many classes in decoration `{s}`");
        }

        Ok(Self {
            range: ModelRange::new(parse_point(start)?, parse_point(end)?),
            options,
        })
    }
}

fn parse_point(s: &str) -> anyhow::Result<ModelPoint> {
    let (line, column) = s
        .trim()
        .split_once(':')
        .with_context(|| format!("expected `LINE:COL`, got `{s}`"))?;
    let line = line
        .parse()
        .with_context(|| format!("invalid line `{line}`"))?;
    let column = column
        .parse()
        .with_context(|| format!("invalid column `{column}`"))?;
    Ok(ModelPoint::new(line, column))
}
