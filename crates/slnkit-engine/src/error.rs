use std::path::PathBuf;

use crate::io::IoError;
use crate::parsing::SectionKind;

/// What went wrong on the offending line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("line does not match the {section} entry grammar")]
    UnexpectedLine { section: SectionKind },
    #[error("project block opened inside another project block")]
    NestedProject,
    #[error("{section} block is never closed")]
    Unterminated { section: SectionKind },
    #[error("Project block is never closed")]
    UnterminatedProject,
    #[error("no Global block found")]
    MissingGlobal,
}

/// A fatal scan failure. The manifest cannot be used until the text is fixed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}({}): {kind}: {text:?}", .path.display(), .line)]
pub struct ParseError {
    pub path: PathBuf,
    /// 1-based line number; for `MissingGlobal` this is the last line.
    pub line: usize,
    /// Raw text of the offending line.
    pub text: String,
    pub kind: ParseErrorKind,
}

#[derive(Debug, thiserror::Error)]
pub enum SolutionError {
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Project {0} not found")]
    ProjectNotFound(String),
    #[error("Entity is stale, re-fetch it after mutating: {0}")]
    StaleEntity(String),
    #[error("Nesting cycle detected at {0}")]
    NestingCycle(String),
    #[error(transparent)]
    Io(#[from] IoError),
}

pub type Result<T, E = SolutionError> = std::result::Result<T, E>;

/// Rejects empty values and values that would break the line grammar.
pub(crate) fn require_token(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SolutionError::InvalidArgument {
            name,
            reason: "must not be empty".to_string(),
        });
    }
    if value.trim() != value {
        return Err(SolutionError::InvalidArgument {
            name,
            reason: "must not start or end with whitespace".to_string(),
        });
    }
    if value.contains(['\r', '\n']) {
        return Err(SolutionError::InvalidArgument {
            name,
            reason: "must not contain line breaks".to_string(),
        });
    }
    Ok(())
}

/// Like [`require_token`], also rejecting characters that end a quoted field.
pub(crate) fn require_quoted(name: &'static str, value: &str) -> Result<()> {
    require_token(name, value)?;
    if value.contains('"') {
        return Err(SolutionError::InvalidArgument {
            name,
            reason: "must not contain double quotes".to_string(),
        });
    }
    Ok(())
}
