use std::fs;
use std::path::Path;
use tempfile::tempdir;

use distant_reading::{Lexicon, analyze_text, extract_text_from_file};

fn write_gutenberg(target: &Path, title: &str, body: &str) {
    let doc = format!(
        "The Project Gutenberg eBook of {title}\n\
         This eBook is for the use of anyone anywhere.\n\n\
         *** START OF THE PROJECT GUTENBERG EBOOK {upper} ***\n\n\
         {body}\n\n\
         *** END OF THE PROJECT GUTENBERG EBOOK {upper} ***\n\n\
         Updated editions will replace the previous one.\n",
        upper = title.to_uppercase()
    );
    fs::write(target, doc).expect("write gutenberg file");
}

#[test]
fn gutenberg_body_is_extracted() {
    let dir = tempdir().expect("create tempdir");
    let path = dir.path().join("pg600.txt");
    let body = "I am a sick man... I am a spiteful man.";
    write_gutenberg(&path, "Notes from the Underground", body);

    let extracted = extract_text_from_file(&path).expect("extract text");
    assert_eq!(extracted, body, "only the text between markers is kept");
}

#[test]
fn unmarked_document_is_used_whole() {
    let dir = tempdir().expect("create tempdir");
    let path = dir.path().join("plain.txt");
    fs::write(&path, "\n  A plain essay on the State.  \n").unwrap();

    let extracted = extract_text_from_file(&path).expect("extract text");
    assert_eq!(extracted, "A plain essay on the State.");
}

#[test]
fn boilerplate_does_not_reach_the_analysis() {
    let dir = tempdir().expect("create tempdir");
    let path = dir.path().join("utopia.txt");
    write_gutenberg(&path, "A Modern Utopia", "Good citizens.");

    let text = extract_text_from_file(&path).unwrap();
    let record = analyze_text(&text, "wells", &Lexicon::default());
    assert_eq!(record.basic_stats.word_count, 2);
    assert_eq!(record.basic_stats.sentence_count, 1);
    assert_eq!(record.basic_stats.character_count, "Good citizens.".len());
}
