pub mod editing;
pub mod error;
pub mod graph;
pub mod io;
pub mod models;
pub mod parsing;
pub mod paths;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{Edit, LineBuffer, Patch, Solution};
pub use error::{ParseError, ParseErrorKind, Result, SolutionError};
pub use io::*;
pub use models::*;
pub use parsing::{LineSpan, SectionKind, Sections};
