use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use itertools::Itertools;
use tabled::{settings::Style, Table, Tabled};
use tracing_subscriber::EnvFilter;

use phonicsmap::lookup::relevant_mappings;
use phonicsmap::output::{summary_line, write_listing};
use phonicsmap::{extract_with, read, write, ExtractOptions, Normalization};

const DEFAULT_DICTIONARY: &str = "phonics_engine_dictionary_english-v 7.csv";
const DEFAULT_MAPPINGS: &str = "word_mappings.json";

#[derive(Parser)]
#[command(name = "extract_word_mappings", version, about, long_about = None)]
struct Cli {
    /// Log extraction details to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert the phonics dictionary into a JSON word mapping (default)
    Extract(ExtractArgs),
    /// Show the mappings for the words of one or more sentences
    Lookup(LookupArgs),
}

#[derive(Args)]
struct ExtractArgs {
    #[arg(short = 'i', long = "input", default_value = DEFAULT_DICTIONARY)]
    input: PathBuf,

    #[arg(short = 'o', long = "output", default_value = DEFAULT_MAPPINGS)]
    output: PathBuf,

    /// Decompose graphemes and phonemes to Unicode NFD
    #[arg(long)]
    nfd: bool,

    /// Only print the word count
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl Default for ExtractArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_DICTIONARY),
            output: PathBuf::from(DEFAULT_MAPPINGS),
            nfd: false,
            quiet: false,
        }
    }
}

#[derive(Args)]
struct LookupArgs {
    #[arg(short = 'm', long = "mappings", default_value = DEFAULT_MAPPINGS)]
    mappings: PathBuf,

    #[arg(required = true)]
    sentences: Vec<String>,
}

#[derive(Tabled)]
struct LookupRow {
    #[tabled(rename = "Word")]
    word: String,
    #[tabled(rename = "Graphemes")]
    graphemes: String,
    #[tabled(rename = "Phonemes")]
    phonemes: String,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_extract(args: ExtractArgs) -> Result<()> {
    let options = ExtractOptions {
        normalize: if args.nfd {
            Normalization::Nfd
        } else {
            Normalization::None
        },
    };

    let mapping = extract_with(&args.input, &options).with_context(|| {
        format!(
            "Failed to extract word mappings from {}",
            args.input.display()
        )
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.quiet {
        writeln!(out, "{}", summary_line(mapping.len()))?;
    } else {
        write_listing(&mapping, &mut out)?;
    }
    out.flush()?;

    write(&mapping, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    eprintln!(
        "{} {}",
        "Wrote".bold().green(),
        args.output.display().to_string().bold()
    );
    Ok(())
}

fn run_lookup(args: LookupArgs) -> Result<()> {
    let mapping = read(&args.mappings)
        .with_context(|| format!("Failed to load {}", args.mappings.display()))?;
    let relevant = relevant_mappings(&mapping, args.sentences.as_slice());

    if relevant.is_empty() {
        eprintln!("{}", "No known words found".yellow());
        return Ok(());
    }

    let rows = relevant.iter().map(|(word, entries)| LookupRow {
        word: word.clone(),
        graphemes: entries.iter().map(|e| e.grapheme.as_str()).join(" "),
        phonemes: entries.iter().map(|e| e.phoneme.as_str()).join(" "),
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
    println!("{} known words", relevant.len().to_string().bold());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or_else(|| Command::Extract(ExtractArgs::default())) {
        Command::Extract(args) => run_extract(args),
        Command::Lookup(args) => run_lookup(args),
    }
}
