use std::ops::Range;

/// A raw splice of the line buffer.
///
/// Every structural mutation compiles down to one of these; they are also
/// public for callers that need to edit lines the model doesn't know about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Insert lines so the first one lands at index `at`
    Insert { at: usize, lines: Vec<String> },
    /// Remove `count` lines starting at `at`
    Remove { at: usize, count: usize },
    /// Replace the whole buffer
    ReplaceAll { lines: Vec<String> },
}

impl Edit {
    pub fn insert_line(at: usize, line: String) -> Self {
        Edit::Insert {
            at,
            lines: vec![line],
        }
    }

    pub fn remove_line(at: usize) -> Self {
        Edit::Remove { at, count: 1 }
    }

    /// Check the edit fits a buffer of `len` lines.
    pub(crate) fn check_bounds(&self, len: usize) -> Result<(), String> {
        match self {
            Edit::Insert { at, .. } if *at > len => {
                Err(format!("insert position {at} is past the end ({len} lines)"))
            }
            Edit::Remove { at, count } if at.saturating_add(*count) > len => Err(format!(
                "removing {count} lines at {at} runs past the end ({len} lines)"
            )),
            _ => Ok(()),
        }
    }
}

/// Result of applying an [`Edit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Lines that now hold new content; empty at the removal point for removals
    pub changed: Range<usize>,
    /// Buffer version after the edit
    pub version: u64,
}
