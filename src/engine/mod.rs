pub mod config;
pub mod format;
pub mod prompt;
pub mod splitter;

pub use config::{ConfigError, FormatKind, RunConfig, StageMode};
pub use format::format_content;
pub use prompt::{assemble_prompt, PromptError};
pub use splitter::{split_sentences, split_text, Snippet};
