// Content formatter - renders extracted text as txt, md or html

use super::config::FormatKind;

/// Paragraphs in extracted text are separated by one blank line.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Render `text` for the given format kind.
///
/// `Plain` returns the text untouched. `Paragraph` splits on the blank-line
/// delimiter and joins the paragraphs back with it, so applying it twice gives
/// the same string. `HtmlParagraph` trims every paragraph, drops empty ones and
/// wraps the rest in `<p>` tags with nothing in between.
pub fn format_content(text: &str, kind: FormatKind) -> String {
    match kind {
        FormatKind::Plain => text.to_string(),
        FormatKind::Paragraph => text
            .split(PARAGRAPH_DELIMITER)
            .collect::<Vec<_>>()
            .join(PARAGRAPH_DELIMITER),
        FormatKind::HtmlParagraph => text
            .split(PARAGRAPH_DELIMITER)
            .map(str::trim)
            .filter(|para| !para.is_empty())
            .map(|para| format!("<p>{}</p>", para))
            .collect(),
    }
}
