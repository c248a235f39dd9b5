#![forbid(unsafe_code)]
//! # Distant Reading CLI
//!
//! Command-line interface for the `distant_reading` crate. It analyzes two
//! plain-text documents (Project Gutenberg markers are stripped when present)
//! and writes word frequencies, sentiment, themes, vocabulary richness,
//! sentence complexity, readability and a comparison of the two texts.
//!
//! ## Example
//! ```bash
//! cargo run --release -- WellsModernUtopia.txt pg600.txt \
//!     --first-id wells --second-id dostoyevsky --export-format json
//! ```
//!
//! See `--help` for all available options.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::{error, info};

use distant_reading::{
    AnalysisOptions, DistantReadingError, ExportFormat, Lexicon, Result, TextSource, analyze_pair,
    build_report, export_report, extract_text_from_file, load_stopword_file, write_stopwords,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// First document
    first: PathBuf,

    /// Second document
    second: PathBuf,

    /// Identifier of the first text (default: file stem)
    #[arg(long)]
    first_id: Option<String>,

    /// Identifier of the second text (default: file stem)
    #[arg(long)]
    second_id: Option<String>,

    #[arg(long)]
    first_title: Option<String>,

    #[arg(long)]
    first_author: Option<String>,

    #[arg(long)]
    second_title: Option<String>,

    #[arg(long)]
    second_author: Option<String>,

    /// Number of entries in each word frequency ranking
    #[arg(long, default_value_t = 50)]
    top_n: usize,

    /// Optional path to additional stopword file (.txt, one word per line)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Save the effective stop word list to this file
    #[arg(long)]
    save_stopwords: Option<PathBuf>,

    /// Output format for export (json, csv, tsv)
    #[arg(long, value_enum, default_value = "json")]
    export_format: ExportFormat,

    /// Directory for exported files
    #[arg(long, default_value = ".")]
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.top_n == 0 {
        return Err(DistantReadingError::invalid_argument(
            "--top-n must be at least 1",
        ));
    }

    let mut lexicon = Lexicon::default();
    if let Some(path) = &cli.stopwords {
        let extra = load_stopword_file(path)?;
        info!("Loaded {} extra stop words from {}", extra.len(), path.display());
        lexicon = lexicon.with_extra_stopwords(extra);
    }
    println!("Stop words: {}", lexicon.stopword_count());
    if let Some(path) = &cli.save_stopwords {
        write_stopwords(path, &lexicon)?;
    }

    let first = TextSource {
        id: text_id(cli.first_id.as_deref(), &cli.first),
        title: cli.first_title.clone(),
        author: cli.first_author.clone(),
    };
    let second = TextSource {
        id: text_id(cli.second_id.as_deref(), &cli.second),
        title: cli.second_title.clone(),
        author: cli.second_author.clone(),
    };

    let first_text = extract_text_from_file(&cli.first)?;
    let second_text = extract_text_from_file(&cli.second)?;

    let options = AnalysisOptions {
        top_n: cli.top_n,
        ..AnalysisOptions::default()
    };
    let pair = analyze_pair(
        (first.id.as_str(), first_text.as_str()),
        (second.id.as_str(), second_text.as_str()),
        &lexicon,
        &options,
    )?;

    for record in [&pair.first, &pair.second] {
        println!(
            "{} - {} words, {} sentences",
            record.id, record.basic_stats.word_count, record.basic_stats.sentence_count
        );
    }
    println!(
        "Easier to read: {}",
        pair.comparison.readability_comparison.easier_to_read
    );

    let report = build_report(&first, &second, pair, &lexicon);
    for path in export_report(&report, &cli.output, cli.export_format)? {
        println!("Saved {}", path.display());
    }
    Ok(())
}

fn text_id(explicit: Option<&str>, path: &Path) -> String {
    match explicit {
        Some(id) => id.to_string(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}
