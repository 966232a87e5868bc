//! Generic utility primitives with zero exercise knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `parser` - Line and comma-list splitting
//! - `validation` - Number parsing with descriptive errors

pub mod io;
pub mod parser;
pub mod validation;
