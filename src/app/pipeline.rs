// Pipeline - extract, format, split, assemble, stage

use std::io::Write;

use super::AppError;
use crate::engine::config::{ConfigError, RunConfig, StageMode, FRAMING_ALLOWANCE};
use crate::engine::format::format_content;
use crate::engine::prompt::assemble_prompt;
use crate::engine::splitter::{split_text, Snippet};
use crate::input::{InputError, TextExtractor};
use crate::output::StagingSink;

/// Outcome of a successful run, used by the CLI for its closing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub snippet_count: usize,
    pub selected: Option<usize>,
    pub prompt: String,
    pub stage: StageMode,
}

impl RunReport {
    /// Snippets the user still has to submit in later runs.
    pub fn remaining_snippets(&self) -> usize {
        match self.selected {
            Some(_) => self.snippet_count.saturating_sub(1),
            None => 0,
        }
    }
}

/// Character budget per snippet for text of `text_len` characters.
///
/// Text that already fits keeps the whole context size. Anything larger gives
/// up [`FRAMING_ALLOWANCE`] characters per snippet for the part markers.
pub fn chunk_budget(text_len: usize, context_size: usize) -> Result<usize, ConfigError> {
    if context_size == 0 {
        return Err(ConfigError::InvalidChunkSize(context_size));
    }
    if text_len <= context_size {
        return Ok(context_size);
    }
    match context_size.checked_sub(FRAMING_ALLOWANCE) {
        Some(budget) if budget > 0 => Ok(budget),
        _ => Err(ConfigError::ContextTooSmall(context_size)),
    }
}

/// Run the whole pipeline for one configuration.
///
/// Purpose: turns a PDF path into a staged prompt in one synchronous pass.
/// Steps: check the path, extract pages, reject empty text, format, split
/// against the context budget, assemble, then stage.
/// Staging: `out` receives the prompt in [`StageMode::Stdout`]; the sink is
/// used in the other modes. Nothing is staged unless every earlier step
/// succeeded.
/// Connections: the CLI passes [`crate::input::PdfExtractor`] and
/// [`crate::output::SystemSink`]; tests pass in-memory fakes.
pub fn run<E, S, W>(
    config: &RunConfig,
    extractor: &E,
    sink: &mut S,
    out: &mut W,
) -> Result<RunReport, AppError>
where
    E: TextExtractor + ?Sized,
    S: StagingSink + ?Sized,
    W: Write + ?Sized,
{
    let path = config.pdf_path.as_path();
    if !path.is_file() {
        return Err(InputError::FileNotFound(path.to_path_buf()).into());
    }

    log::info!("Extracting text from '{}'...", path.display());
    let document = extractor.extract(path)?;
    log::debug!("{}: {} page(s)", document.source, document.pages.len());
    for page in document.empty_pages() {
        log::warn!("No text found on page {}.", page);
    }

    let text = document.text();
    if text.trim().is_empty() {
        return Err(InputError::EmptyText(path.to_path_buf()).into());
    }

    log::info!("Formatting content as '{}'...", config.format);
    let formatted = format_content(&text, config.format);

    let content_len = formatted.trim().chars().count();
    let budget = chunk_budget(content_len, config.context_size)?;
    let snippets = Snippet::numbered(split_text(&formatted, budget)?);
    log::debug!(
        "split {} characters into {} snippet(s) of at most {} characters",
        content_len,
        snippets.len(),
        budget
    );
    if snippets.len() > 1 {
        log::info!("Content split into {} snippets.", snippets.len());
    }

    log::info!("Building the prompt...");
    let prompt = assemble_prompt(&snippets, config.snippet, config.instruction())?;

    match config.stage {
        StageMode::Stdout => {
            writeln!(out, "{}", prompt).map_err(crate::output::StageError::from)?;
        }
        StageMode::Browser | StageMode::ClipboardOnly => {
            log::info!("Copying the prompt to the clipboard...");
            sink.copy(&prompt)?;
            if config.stage == StageMode::Browser {
                log::info!("Opening {} in your default browser...", config.url);
                sink.open_url(&config.url)?;
            }
        }
    }

    Ok(RunReport {
        snippet_count: snippets.len(),
        selected: config.snippet,
        prompt,
        stage: config.stage,
    })
}
