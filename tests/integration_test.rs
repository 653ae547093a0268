use pdfprompt::app::{run, AppError};
use pdfprompt::engine::config::{FormatKind, RunConfig, StageMode};
use pdfprompt::engine::{assemble_prompt, format_content, split_text, PromptError, Snippet};
use pdfprompt::input::{Document, InputError, TextExtractor};
use pdfprompt::output::{StageError, StagingSink};
use std::io::Write;
use std::path::Path;

struct PagesExtractor(Vec<String>);

impl PagesExtractor {
    fn new(pages: &[&str]) -> Self {
        Self(pages.iter().map(|p| p.to_string()).collect())
    }
}

impl TextExtractor for PagesExtractor {
    fn extract(&self, path: &Path) -> Result<Document, InputError> {
        Ok(Document::new(
            self.0.clone(),
            format!("test:{}", path.display()),
        ))
    }
}

struct PanicSink;

impl StagingSink for PanicSink {
    fn copy(&mut self, _text: &str) -> Result<(), StageError> {
        panic!("clipboard must not be used in stdout mode");
    }

    fn open_url(&mut self, _url: &str) -> Result<(), StageError> {
        panic!("browser must not be used in stdout mode");
    }
}

fn pdf_fixture() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"%PDF-1.4 placeholder").unwrap();
    file
}

#[test]
fn end_to_end_split_and_print() {
    let file = pdf_fixture();
    let extractor = PagesExtractor::new(&[
        "Rust is a systems language. It has no garbage collector.",
        "",
        "Ownership rules are checked at compile time. Borrowing lets code share data.",
    ]);
    let config = RunConfig {
        context_size: 600,
        stage: StageMode::Stdout,
        format: FormatKind::Paragraph,
        ..RunConfig::new(file.path())
    };

    let mut out = Vec::new();
    let report = run(&config, &extractor, &mut PanicSink, &mut out).unwrap();
    let printed = String::from_utf8(out).unwrap();

    assert_eq!(report.snippet_count, 1);
    assert!(printed.starts_with("Summarize the following text into no longer than 800 words:\n\n"));
    assert!(printed.contains("Rust is a systems language."));
    assert!(printed.contains("Borrowing lets code share data."));
    assert!(!printed.contains("Part 1 of 1"));
}

#[test]
fn end_to_end_selected_part_keeps_position() {
    let file = pdf_fixture();
    let long_page = (1..=40)
        .map(|i| format!("Sentence number {} carries some filler words.", i))
        .collect::<Vec<_>>()
        .join(" ");
    let extractor = PagesExtractor(vec![long_page]);
    let config = RunConfig {
        context_size: 1000,
        snippet: Some(2),
        stage: StageMode::Stdout,
        ..RunConfig::new(file.path())
    };

    let mut out = Vec::new();
    let report = run(&config, &extractor, &mut PanicSink, &mut out).unwrap();
    let printed = String::from_utf8(out).unwrap();

    assert!(report.snippet_count > 2);
    assert!(printed.contains(&format!("Part 2 of {}:", report.snippet_count)));
    assert!(printed.contains("End of Part 2."));
    assert!(!printed.contains("Sentence number 1 carries"));
}

#[test]
fn end_to_end_out_of_range_snippet() {
    let file = pdf_fixture();
    let extractor = PagesExtractor::new(&["Just one short sentence."]);
    let config = RunConfig {
        snippet: Some(3),
        stage: StageMode::Stdout,
        ..RunConfig::new(file.path())
    };

    let mut out: Vec<u8> = Vec::new();
    let err = run(&config, &extractor, &mut PanicSink, &mut out).unwrap_err();

    assert!(matches!(
        err,
        AppError::Prompt(PromptError::SnippetOutOfRange {
            requested: 3,
            total: 1
        })
    ));
    assert!(out.is_empty());
}

#[test]
fn split_then_assemble_frames_every_part() {
    let text = format_content(
        "One fish. Two fish.\n\nRed fish. Blue fish.",
        FormatKind::HtmlParagraph,
    );
    assert_eq!(text, "<p>One fish. Two fish.</p><p>Red fish. Blue fish.</p>");

    let snippets = Snippet::numbered(split_text(&text, 25).unwrap());
    let prompt = assemble_prompt(&snippets, None, "Summarize:").unwrap();

    assert!(snippets.len() > 1);
    for snippet in &snippets {
        assert!(prompt.contains(&format!("Part {} of {}:", snippet.number, snippets.len())));
        assert!(prompt.contains(&format!("End of Part {}.", snippet.number)));
    }
    assert_eq!(
        snippets
            .iter()
            .map(|s| s.body.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        text
    );
}
