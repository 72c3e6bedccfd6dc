pub mod grammar;
pub mod scanner;
pub mod span;

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::ParseError;
use crate::models::{NestedProject, ProjectConfiguration, ProjectReference};

pub use scanner::SectionScanner;
pub use span::{LineSpan, SectionKind, Sections};

/// Everything one scan derives from the buffer.
///
/// Collections keep the order their lines were encountered, except the
/// solution configuration names which form a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSolution {
    pub sections: Sections,
    pub projects: Vec<ProjectReference>,
    pub nested_projects: Vec<NestedProject>,
    pub solution_configurations: BTreeSet<String>,
    pub project_configurations: Vec<ProjectConfiguration>,
}

/// Scan `lines` into typed views. `path` is only used in error reports.
pub fn parse_lines(path: &Path, lines: &[String]) -> Result<ParsedSolution, ParseError> {
    SectionScanner::new(path, lines).scan()
}
