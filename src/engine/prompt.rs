// Prompt assembler - instruction header plus bare or framed snippets

use thiserror::Error;

use super::splitter::Snippet;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PromptError {
    #[error("Snippet {requested} is out of range; the document was split into {total} snippet(s)")]
    SnippetOutOfRange { requested: usize, total: usize },
}

/// Wrap a snippet body in its part header and footer.
pub fn frame_snippet(snippet: &Snippet) -> String {
    format!(
        "---\nPart {n} of {total}:\n\n{body}\n\nEnd of Part {n}.\n---",
        n = snippet.number,
        total = snippet.total,
        body = snippet.body,
    )
}

/// Build the final prompt text.
///
/// Purpose: produces the exact string that lands on the clipboard.
/// Connections: takes the numbered snippets from the splitter and the
/// instruction from [`crate::engine::config::RunConfig::instruction`].
///
/// With a `selector`, only that snippet is embedded, framed with its original
/// position and the original total. Without one, a single snippet is appended
/// bare and several snippets are each framed. A lone snippet is never framed,
/// even when selected explicitly.
pub fn assemble_prompt(
    snippets: &[Snippet],
    selector: Option<usize>,
    instruction: &str,
) -> Result<String, PromptError> {
    let total = snippets.len();
    let mut parts = vec![instruction.to_string()];

    match selector {
        Some(requested) => {
            if requested == 0 || requested > total {
                return Err(PromptError::SnippetOutOfRange { requested, total });
            }
            let snippet = &snippets[requested - 1];
            if total == 1 {
                parts.push(snippet.body.clone());
            } else {
                parts.push(frame_snippet(snippet));
            }
        }
        None if total == 1 => parts.push(snippets[0].body.clone()),
        None => parts.extend(snippets.iter().map(frame_snippet)),
    }

    Ok(parts.join("\n\n").trim().to_string())
}
