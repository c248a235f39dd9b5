use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::Result;

static START_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\*\*\* START OF.*?EBOOK.*?\*\*\*").expect("start marker pattern is valid")
});

static END_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\*\*\* END OF.*?EBOOK.*?\*\*\*").expect("end marker pattern is valid")
});

///Returns the body of a Project Gutenberg style document: the text between the
///`*** START OF ... EBOOK ... ***` and `*** END OF ... EBOOK ... ***` markers,
///trimmed. Without both markers the whole document is returned, trimmed.
/// # Example
/// ```
/// use distant_reading::extract_marked_text;
/// let doc = "License\n*** START OF THE PROJECT GUTENBERG EBOOK X ***\nBody.\n*** END OF THE PROJECT GUTENBERG EBOOK X ***\nMore license";
/// assert_eq!(extract_marked_text(doc), "Body.");
/// assert_eq!(extract_marked_text("  no markers  "), "no markers");
/// ```
pub fn extract_marked_text(content: &str) -> &str {
    match marked_body(content) {
        Some(body) => body.trim(),
        None => content.trim(),
    }
}

fn marked_body(content: &str) -> Option<&str> {
    let start = START_MARKER.find(content)?;
    let end = END_MARKER.find(content)?;
    // An end marker before the start marker leaves nothing in between.
    if end.start() < start.end() {
        return Some("");
    }
    Some(&content[start.end()..end.start()])
}

///Reads a UTF-8 document from disk and extracts its marked body.
pub fn extract_text_from_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)?;
    if marked_body(&content).is_some() {
        debug!("{}: using text between START/END markers", path.display());
    } else {
        debug!("{}: no START/END markers, using whole document", path.display());
    }
    Ok(extract_marked_text(&content).to_string())
}
