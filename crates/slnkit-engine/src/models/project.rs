use serde::Serialize;

use crate::models::ids::SOLUTION_FOLDER_TYPE_ID;
use crate::parsing::{LineSpan, grammar::ProjectHeader};

/// A `Project(...)` ... `EndProject` block, as seen by the last scan.
///
/// Views are snapshots: after any mutation the line numbers may point at
/// different content, so re-fetch instead of holding on to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectReference {
    id: String,
    type_id: String,
    name: String,
    location: String,
    line: usize,
    line_count: usize,
}

impl ProjectReference {
    pub(crate) fn from_header(header: ProjectHeader, span: LineSpan) -> Self {
        Self {
            id: header.id,
            type_id: header.type_id,
            name: header.name,
            location: header.location,
            line: span.start,
            line_count: span.line_count(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relative path of the project file, or the display name for folders
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Index of the opening `Project(...)` line
    pub fn line(&self) -> usize {
        self.line
    }

    /// Lines from the opening marker to `EndProject`, both included
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn span(&self) -> LineSpan {
        LineSpan::new(self.line, self.line + self.line_count - 1)
    }

    pub fn is_folder(&self) -> bool {
        self.type_id == SOLUTION_FOLDER_TYPE_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(type_id: &str) -> ProjectHeader {
        ProjectHeader {
            type_id: type_id.to_string(),
            name: "Docs".to_string(),
            location: "Docs".to_string(),
            id: "{D}".to_string(),
        }
    }

    #[test]
    fn span_covers_opening_and_closing_lines() {
        let project = ProjectReference::from_header(header("{T}"), LineSpan::new(3, 7));
        assert_eq!(project.line(), 3);
        assert_eq!(project.line_count(), 5);
        assert_eq!(project.span(), LineSpan::new(3, 7));
        assert!(!project.is_folder());
    }

    #[test]
    fn folder_type_is_recognised() {
        let folder =
            ProjectReference::from_header(header(SOLUTION_FOLDER_TYPE_ID), LineSpan::new(0, 1));
        assert!(folder.is_folder());
    }
}
