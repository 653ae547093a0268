pub mod error;
pub mod pipeline;

pub use error::AppError;
pub use pipeline::{run, RunReport};
