//! Staging sink
//!
//! Hands the assembled prompt to the user: the system clipboard and the
//! default browser, or stdout.
//!
//! - **clipboard.rs**: clipboard writes through arboard
//! - **browser.rs**: default-browser launch through the `open` crate

use std::io;
use thiserror::Error;

pub mod browser;
pub mod clipboard;

#[derive(Error, Debug)]
pub enum StageError {
    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(String),

    #[error("Failed to open {url} in the default browser: {reason}")]
    Browser { url: String, reason: String },

    #[error("Failed to write prompt: {0}")]
    Io(#[from] io::Error),
}

/// Destination for the final prompt.
pub trait StagingSink {
    fn copy(&mut self, text: &str) -> Result<(), StageError>;
    fn open_url(&mut self, url: &str) -> Result<(), StageError>;
}

/// Real clipboard and browser.
#[derive(Debug, Default)]
pub struct SystemSink;

impl StagingSink for SystemSink {
    fn copy(&mut self, text: &str) -> Result<(), StageError> {
        clipboard::copy(text)
    }

    fn open_url(&mut self, url: &str) -> Result<(), StageError> {
        browser::open(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_error_messages() {
        let err = StageError::Clipboard("no display".to_string());
        assert_eq!(err.to_string(), "Failed to copy to clipboard: no display");

        let err = StageError::Browser {
            url: "https://chat.openai.com/chat".to_string(),
            reason: "no handler".to_string(),
        };
        assert!(err.to_string().contains("https://chat.openai.com/chat"));
    }
}
