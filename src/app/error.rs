use thiserror::Error;

use crate::engine::config::ConfigError;
use crate::engine::prompt::PromptError;
use crate::input::InputError;
use crate::output::StageError;

/// Any failure that ends a run.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Stage(#[from] StageError),
}
