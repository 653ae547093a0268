//! Extract text from a PDF, split it into sentence-aligned snippets that fit a
//! chat assistant's context window, and stage the resulting prompt on the
//! clipboard.
//!
//! ## Module Structure
//!
//! - **input**: per-page PDF text extraction
//! - **engine**: run configuration, formatting, snippet splitting, prompt assembly
//! - **output**: clipboard and browser staging
//! - **app**: the pipeline tying the above together

pub mod app;
pub mod engine;
pub mod input;
pub mod output;
