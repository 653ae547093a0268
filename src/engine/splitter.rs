// Snippet splitter - sentence-aligned chunking under a character budget

use super::config::ConfigError;

/// One sentence-aligned chunk of formatted text, positioned in its sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// 1-indexed position
    pub number: usize,
    /// Number of snippets the text was split into
    pub total: usize,
    pub body: String,
}

impl Snippet {
    /// Number a list of chunk bodies in reading order.
    pub fn numbered(chunks: Vec<String>) -> Vec<Snippet> {
        let total = chunks.len();
        chunks
            .into_iter()
            .enumerate()
            .map(|(idx, body)| Snippet {
                number: idx + 1,
                total,
                body,
            })
            .collect()
    }
}

fn is_sentence_terminator(c: char) -> bool {
    c == '.' || c == '?' || c == '!'
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Segment text into sentences.
///
/// A boundary sits right after `.`, `!` or `?` when one or more whitespace
/// characters follow; that whitespace run separates the two sentences and
/// belongs to neither. Whitespace inside a sentence is kept as-is.
/// Abbreviations such as "Mr. Smith" are split like any other sentence end.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_sentence_terminator(c) {
            continue;
        }
        let end = idx + c.len_utf8();
        let mut next_start = end;
        while let Some(&(ws_idx, ws)) = chars.peek() {
            if !ws.is_whitespace() {
                break;
            }
            next_start = ws_idx + ws.len_utf8();
            chars.next();
        }
        if next_start > end {
            sentences.push(&text[start..end]);
            start = next_start;
        }
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences.retain(|s| !s.trim().is_empty());
    sentences
}

/// Partition `text` into chunks of at most `max_chunk_size` characters without
/// breaking sentences.
///
/// Purpose: keeps every chunk small enough for one chat message while never
/// cutting a sentence in half.
/// Connections: sentences come from [`split_sentences`]; the pipeline numbers
/// the result with [`Snippet::numbered`] before prompt assembly.
///
/// Text that already fits comes back as a single chunk, trimmed but otherwise
/// untouched. Longer text is packed greedily, sentence by sentence, with one
/// space between sentences. A sentence that is longer than the budget on its
/// own becomes a chunk by itself, so the returned chunks may exceed the budget
/// only in that case. No chunk is empty or whitespace-only.
pub fn split_text(text: &str, max_chunk_size: usize) -> Result<Vec<String>, ConfigError> {
    if max_chunk_size == 0 {
        return Err(ConfigError::InvalidChunkSize(max_chunk_size));
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if char_len(trimmed) <= max_chunk_size {
        return Ok(vec![trimmed.to_string()]);
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in split_sentences(text) {
        let sentence_len = char_len(sentence);

        if current_len + sentence_len + 1 > max_chunk_size {
            if current.trim().is_empty() {
                chunks.push(sentence.trim().to_string());
                current.clear();
                current_len = 0;
                continue;
            }
            chunks.push(current.trim().to_string());
            current.clear();
            current_len = 0;
        }

        current.push_str(sentence);
        current.push(' ');
        current_len += sentence_len + 1;
    }

    if !current.trim().is_empty() {
        chunks.push(current.trim().to_string());
    }

    Ok(chunks)
}
