// Configuration for a single pdfprompt run
// Built once from CLI input, validated, then passed by reference through the pipeline

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Instruction used when the user does not supply `--prompt`.
pub const DEFAULT_INSTRUCTION: &str =
    "Summarize the following text into no longer than 800 words:";

/// Chat page opened after the prompt lands on the clipboard.
pub const DEFAULT_CHAT_URL: &str = "https://chat.openai.com/chat";

/// Characters per snippet when `--context` is not given.
pub const DEFAULT_CONTEXT_SIZE: usize = 128_000;

/// Characters held back from the budget for part framing and the instruction
/// once the text has to be split.
pub const FRAMING_ALLOWANCE: usize = 500;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported format: {0} (expected txt, md or html)")]
    UnsupportedFormat(String),

    #[error("Chunk size must be a positive number of characters, got {0}")]
    InvalidChunkSize(usize),

    #[error(
        "Context size {0} leaves no room for text once {reserved} characters are reserved for framing",
        reserved = FRAMING_ALLOWANCE
    )]
    ContextTooSmall(usize),

    #[error("Snippet numbers start at 1, got {0}")]
    InvalidSelector(usize),
}

/// Rendering applied to extracted text before splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatKind {
    /// `txt`: text as extracted
    #[default]
    Plain,
    /// `md`: blank-line separated paragraphs
    Paragraph,
    /// `html`: each paragraph wrapped in `<p>` tags
    HtmlParagraph,
}

impl FormatKind {
    pub fn tag(self) -> &'static str {
        match self {
            FormatKind::Plain => "txt",
            FormatKind::Paragraph => "md",
            FormatKind::HtmlParagraph => "html",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FormatKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" => Ok(FormatKind::Plain),
            "md" => Ok(FormatKind::Paragraph),
            "html" => Ok(FormatKind::HtmlParagraph),
            _ => Err(ConfigError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Where the assembled prompt ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageMode {
    /// Copy to the clipboard, then open the chat page
    #[default]
    Browser,
    /// Copy to the clipboard only
    ClipboardOnly,
    /// Write the prompt to stdout; clipboard and browser are left alone
    Stdout,
}

/// Immutable settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub pdf_path: PathBuf,
    pub format: FormatKind,

    /// Maximum characters per snippet (default 128000)
    pub context_size: usize,

    /// 1-indexed snippet to emit alone
    pub snippet: Option<usize>,

    /// Overrides [`DEFAULT_INSTRUCTION`]
    pub instruction: Option<String>,

    pub url: String,
    pub stage: StageMode,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            pdf_path: PathBuf::new(),
            format: FormatKind::default(),
            context_size: DEFAULT_CONTEXT_SIZE,
            snippet: None,
            instruction: None,
            url: DEFAULT_CHAT_URL.to_string(),
            stage: StageMode::default(),
        }
    }
}

impl RunConfig {
    pub fn new(pdf_path: impl Into<PathBuf>) -> Self {
        Self {
            pdf_path: pdf_path.into(),
            ..Self::default()
        }
    }

    /// Rejects settings that could never produce a prompt, before any
    /// extraction work is done.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.context_size == 0 {
            return Err(ConfigError::InvalidChunkSize(self.context_size));
        }
        if self.snippet == Some(0) {
            return Err(ConfigError::InvalidSelector(0));
        }
        Ok(self)
    }

    pub fn instruction(&self) -> &str {
        self.instruction
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_INSTRUCTION)
    }
}
