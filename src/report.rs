//! The results document and its JSON/CSV/TSV export.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::{AnalysisRecord, ComparisonRecord, PairAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
    Tsv,
}

/// Identity and optional bibliographic data of one input text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextSource {
    pub id: String,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl TextSource {
    pub fn new(id: impl Into<String>) -> Self {
        TextSource {
            id: id.into(),
            ..TextSource::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// RFC 3339, local time.
    pub analysis_date: String,
    pub texts_analyzed: usize,
    pub stop_words_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(flatten)]
    pub record: AnalysisRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: Metadata,
    pub texts: BTreeMap<String, TextEntry>,
    pub comparison: ComparisonRecord,
}

///Assembles the results document for two analyzed texts. `first` and `second`
///supply titles and authors for the records of the same position in `pair`.
pub fn build_report(
    first: &TextSource,
    second: &TextSource,
    pair: PairAnalysis,
    lexicon: &Lexicon,
) -> AnalysisReport {
    let PairAnalysis {
        first: first_record,
        second: second_record,
        comparison,
    } = pair;

    let mut texts = BTreeMap::new();
    for (source, record) in [(first, first_record), (second, second_record)] {
        texts.insert(
            record.id.clone(),
            TextEntry {
                title: source.title.clone(),
                author: source.author.clone(),
                record,
            },
        );
    }

    AnalysisReport {
        metadata: Metadata {
            analysis_date: Local::now().to_rfc3339(),
            texts_analyzed: texts.len(),
            stop_words_count: lexicon.stopword_count(),
        },
        texts,
        comparison,
    }
}

///`<stem>_<YYYYmmdd>_<HHMMSS>_<suffix>.<ext>` using the local clock.
pub fn timestamped_filename(stem: &str, suffix: &str, ext: &str) -> String {
    let local: DateTime<Local> = Local::now();
    format!("{stem}_{}_{suffix}.{ext}", local.format("%Y%m%d_%H%M%S"))
}

///Writes `report` to `dir` in the given format and returns the files created.
pub fn export_report(
    report: &AnalysisReport,
    dir: &Path,
    format: ExportFormat,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    match format {
        ExportFormat::Json => Ok(vec![write_json(report, dir)?]),
        ExportFormat::Csv => write_tables(report, dir, b',', "csv"),
        ExportFormat::Tsv => write_tables(report, dir, b'\t', "tsv"),
    }
}

///Writes the whole report as pretty-printed JSON.
pub fn write_json(report: &AnalysisReport, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(timestamped_filename("analysis", "results", "json"));
    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    info!("Wrote {}", path.display());
    Ok(path)
}

///Writes a word frequency table and a theme table per text.
fn write_tables(
    report: &AnalysisReport,
    dir: &Path,
    delimiter: u8,
    ext: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (id, entry) in &report.texts {
        let path = dir.join(timestamped_filename(id, "wordfreq", ext));
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_path(&path)?;
        wtr.write_record(["word", "count"])?;
        for f in &entry.record.word_frequencies {
            wtr.write_record([csv_safe_cell(f.word.clone()), f.count.to_string()])?;
        }
        wtr.flush()?;
        info!("Wrote {}", path.display());
        written.push(path);

        let path = dir.join(timestamped_filename(id, "themes", ext));
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_path(&path)?;
        wtr.write_record(["theme", "count", "density", "keyword", "sentence"])?;
        for (theme, result) in &entry.record.thematic_analysis {
            let counts = [
                csv_safe_cell(theme.clone()),
                result.count.to_string(),
                result.density.to_string(),
            ];
            if result.examples.is_empty() {
                wtr.write_record(counts.iter().map(String::as_str).chain(["", ""]))?;
            }
            for example in &result.examples {
                wtr.write_record(counts.iter().cloned().chain([
                    csv_safe_cell(example.keyword.clone()),
                    csv_safe_cell(example.sentence.clone()),
                ]))?;
            }
        }
        wtr.flush()?;
        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

///Neutralizes cells a spreadsheet would read as a formula by prefixing `'`.
/// # Example
/// ```
/// use distant_reading::csv_safe_cell;
/// assert_eq!(csv_safe_cell("=SUM(A1)".to_string()), "'=SUM(A1)");
/// assert_eq!(csv_safe_cell("utopia".to_string()), "utopia");
/// ```
pub fn csv_safe_cell(cell: String) -> String {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{cell}"),
        _ => cell,
    }
}
