use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// An inclusive range of line indices `[start, end]`.
///
/// Spans bracket a block from its opening marker line to its closing marker
/// line, so a span always covers at least one line. Absent sections are
/// modelled as `Option<LineSpan>` rather than a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LineSpan {
    /// Index of the opening marker line.
    pub start: usize,
    /// Index of the closing marker line.
    pub end: usize,
}

impl LineSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} after end {end}");
        Self { start, end }
    }

    /// Number of lines covered, marker lines included.
    #[must_use]
    pub fn line_count(self) -> usize {
        self.end - self.start + 1
    }

    /// Line indices strictly between the two marker lines.
    #[must_use]
    pub fn body(self) -> Range<usize> {
        self.start + 1..self.end
    }

    #[must_use]
    pub fn contains(self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }
}

/// The four blocks the scanner tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    Global,
    NestedProjects,
    SolutionConfigurations,
    ProjectConfigurations,
}

impl SectionKind {
    /// Exact (trimmed) text of the line that opens this block.
    pub fn opening_marker(self) -> &'static str {
        match self {
            SectionKind::Global => "Global",
            SectionKind::NestedProjects => "GlobalSection(NestedProjects) = preSolution",
            SectionKind::SolutionConfigurations => {
                "GlobalSection(SolutionConfigurationPlatforms) = preSolution"
            }
            SectionKind::ProjectConfigurations => {
                "GlobalSection(ProjectConfigurationPlatforms) = postSolution"
            }
        }
    }

    /// Exact (trimmed) text of the line that closes this block.
    pub fn closing_marker(self) -> &'static str {
        match self {
            SectionKind::Global => "EndGlobal",
            _ => "EndGlobalSection",
        }
    }

    /// Indentation used when the block's marker lines are written.
    pub(crate) fn marker_indent(self) -> &'static str {
        match self {
            SectionKind::Global => "",
            _ => "\t",
        }
    }

    /// The inner sections recognised while scanning outside any block.
    pub(crate) const INNER: [SectionKind; 3] = [
        SectionKind::NestedProjects,
        SectionKind::SolutionConfigurations,
        SectionKind::ProjectConfigurations,
    ];
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Global => "Global",
            SectionKind::NestedProjects => "NestedProjects",
            SectionKind::SolutionConfigurations => "SolutionConfigurationPlatforms",
            SectionKind::ProjectConfigurations => "ProjectConfigurationPlatforms",
        };
        f.write_str(name)
    }
}

/// Where each tracked block sits in the buffer after a successful scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sections {
    pub global: LineSpan,
    pub nested_projects: Option<LineSpan>,
    pub solution_configurations: Option<LineSpan>,
    pub project_configurations: Option<LineSpan>,
}

impl Sections {
    pub fn get(&self, kind: SectionKind) -> Option<LineSpan> {
        match kind {
            SectionKind::Global => Some(self.global),
            SectionKind::NestedProjects => self.nested_projects,
            SectionKind::SolutionConfigurations => self.solution_configurations,
            SectionKind::ProjectConfigurations => self.project_configurations,
        }
    }
}
