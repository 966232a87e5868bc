// Public modules
pub mod arithmetic;
pub mod average;
pub mod collect;
pub mod concat;
pub mod error;
pub mod palindrome;
pub mod parity;
pub mod prompt;
pub mod repeat;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use prompt::{LineSource, ScriptedLines};
