//! Locating and talking to the course Python environment.

pub mod interpreter;
pub mod snippet;

pub use interpreter::Interpreter;
pub use snippet::snippet_source;
