//! Command-line frontend for columnized output.
//!
//! Items come from the command line or, when no item arguments are
//! present, from stdin. Stdin input can additionally be reduced to a
//! single whitespace-separated column per line before columnizing,
//! which makes output of tools like `dpkg` or `lsmod` easy to reshape.

use std::io;
use std::process;

use anyhow::{bail, Result};
use clap::Parser;
use log::debug;

use pilaster::{columnize_with, read_lines, select_column, Items, Options};

const AFTER_HELP: &str = "\
Examples:
  Columnize and sort a few items:
    pilaster -S foo bar baz

  Columnize the first column of some command output:
    pilaster -S -c0 < /proc/modules
    dpkg --get-selections 'python3*' | pilaster -c0 -s4";

/// Generate columnized output for given string items.
#[derive(Debug, Parser)]
#[command(name = "pilaster", version, about, after_help = AFTER_HELP)]
struct Cli {
    /// An item to columnize (items are read from stdin when absent)
    #[arg(value_name = "ITEM")]
    items: Vec<String>,

    /// Number of blanks between two columns
    #[arg(short, long, value_name = "N", default_value_t = pilaster::config::SPACING)]
    spacing: usize,

    /// Maximal number of characters per line (terminal width by default)
    #[arg(short, long, value_name = "N")]
    width: Option<usize>,

    /// Take only the whitespace-separated column N of each stdin line
    /// (0-based, stdin input only)
    #[arg(short, long, value_name = "N")]
    column: Option<usize>,

    /// Extra character put in the middle of each column separator
    #[arg(short, long, value_name = "CHAR")]
    extra_sep: Option<char>,

    /// Columnize only the items matching PATTERN ("*" and "?" wildcards)
    #[arg(short = 'F', long = "filter", value_name = "PATTERN")]
    pattern: Option<String>,

    /// Sort the items before rendering
    #[arg(short = 'S', long)]
    sort: bool,

    /// Drop all but the first occurrence of repeated items
    #[arg(short = 'U', long)]
    unique: bool,
}

impl Cli {
    fn options(&self) -> Options {
        let mut options = Options::new()
            .spacing(self.spacing)
            .sort_items(self.sort)
            .unique(self.unique);
        if let Some(width) = self.width {
            options = options.line_width(width);
        }
        if let Some(pattern) = &self.pattern {
            options = options.pattern(pattern.clone());
        }
        if let Some(sep) = self.extra_sep {
            options = options.extra_sep(sep);
        }
        options
    }
}

fn gather_items(cli: &Cli) -> Result<Vec<String>> {
    if !cli.items.is_empty() {
        if cli.column.is_some() {
            bail!("can't use --column when items are given as arguments");
        }
        return Ok(cli.items.clone());
    }
    debug!("reading items from stdin");
    let mut lines = read_lines(io::stdin().lock())?;
    if let Some(index) = cli.column {
        lines = select_column(&lines, index)?;
    }
    Ok(lines)
}

fn run(cli: &Cli) -> Result<String> {
    let items = gather_items(cli)?;
    Ok(columnize_with(Items::Sequence(items), &cli.options())?)
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("pilaster: error: {err}");
            process::exit(1);
        }
    }
}
