pub mod error;
pub mod task;

// Re-export common error type
pub use error::{KanriError, Result};
