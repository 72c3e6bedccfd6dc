use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{ParseError, ParseErrorKind};
use crate::models::{NestedProject, ProjectConfiguration, ProjectReference};
use crate::parsing::grammar::{self, END_PROJECT, ProjectHeader};
use crate::parsing::span::{LineSpan, SectionKind, Sections};
use crate::parsing::ParsedSolution;

#[derive(Debug)]
enum ScanState {
    Outside,
    InProject { header: ProjectHeader, start: usize },
    InSection { kind: SectionKind, start: usize },
}

/// Single forward pass over the buffer, one line at a time.
///
/// Tracks which block the current line belongs to and fails on the first
/// line that breaks that block's grammar, or at end of input if a block is
/// still open.
pub struct SectionScanner<'a> {
    path: PathBuf,
    lines: &'a [String],
    state: ScanState,
    global_start: Option<usize>,
    global_end: Option<usize>,
    nested_projects: Option<LineSpan>,
    solution_configurations: Option<LineSpan>,
    project_configurations: Option<LineSpan>,
    projects: Vec<ProjectReference>,
    nested: Vec<NestedProject>,
    solution_configs: BTreeSet<String>,
    project_configs: Vec<ProjectConfiguration>,
}

impl<'a> SectionScanner<'a> {
    pub fn new(path: &Path, lines: &'a [String]) -> Self {
        Self {
            path: path.to_path_buf(),
            lines,
            state: ScanState::Outside,
            global_start: None,
            global_end: None,
            nested_projects: None,
            solution_configurations: None,
            project_configurations: None,
            projects: vec![],
            nested: vec![],
            solution_configs: BTreeSet::new(),
            project_configs: vec![],
        }
    }

    pub fn scan(mut self) -> Result<ParsedSolution, ParseError> {
        for index in 0..self.lines.len() {
            self.push(index)?;
        }
        self.finish()
    }

    fn push(&mut self, index: usize) -> Result<(), ParseError> {
        let lines = self.lines;
        let line = lines[index].trim();

        match std::mem::replace(&mut self.state, ScanState::Outside) {
            ScanState::Outside => self.push_outside(index, line),
            ScanState::InProject { header, start } => {
                if line == END_PROJECT {
                    self.projects.push(ProjectReference::from_header(
                        header,
                        LineSpan::new(start, index),
                    ));
                } else if grammar::parse_project_open(line).is_some() {
                    return Err(self.error(index, ParseErrorKind::NestedProject));
                } else {
                    // ProjectSection blocks and anything else inside a project
                    // are carried verbatim.
                    self.state = ScanState::InProject { header, start };
                }
                Ok(())
            }
            ScanState::InSection { kind, start } => {
                if line == kind.closing_marker() {
                    self.close_section(kind, LineSpan::new(start, index));
                    return Ok(());
                }
                self.push_entry(kind, index, line)?;
                self.state = ScanState::InSection { kind, start };
                Ok(())
            }
        }
    }

    fn push_outside(&mut self, index: usize, line: &str) -> Result<(), ParseError> {
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        if let Some(header) = grammar::parse_project_open(line) {
            self.state = ScanState::InProject {
                header,
                start: index,
            };
            return Ok(());
        }

        if line == SectionKind::Global.opening_marker() {
            if self.global_start.is_none() {
                self.global_start = Some(index);
            }
            return Ok(());
        }

        if line == SectionKind::Global.closing_marker() {
            if self.global_start.is_some() && self.global_end.is_none() {
                self.global_end = Some(index);
            }
            return Ok(());
        }

        if let Some(kind) = SectionKind::INNER
            .into_iter()
            .find(|kind| line == kind.opening_marker())
        {
            self.state = ScanState::InSection { kind, start: index };
        }

        Ok(())
    }

    fn push_entry(&mut self, kind: SectionKind, index: usize, line: &str) -> Result<(), ParseError> {
        let unexpected = || ParseErrorKind::UnexpectedLine { section: kind };
        match kind {
            SectionKind::NestedProjects => {
                let (child, parent) = grammar::parse_nested_project(line)
                    .ok_or_else(|| self.error(index, unexpected()))?;
                self.nested.push(NestedProject::new(child, parent, index));
            }
            SectionKind::SolutionConfigurations => {
                let name = grammar::parse_solution_configuration(line)
                    .ok_or_else(|| self.error(index, unexpected()))?;
                self.solution_configs.insert(name);
            }
            SectionKind::ProjectConfigurations => {
                let fields = grammar::parse_project_configuration(line)
                    .ok_or_else(|| self.error(index, unexpected()))?;
                self.project_configs
                    .push(ProjectConfiguration::new(fields, index));
            }
            SectionKind::Global => unreachable!("Global is never an entry section"),
        }
        Ok(())
    }

    fn close_section(&mut self, kind: SectionKind, span: LineSpan) {
        let slot = match kind {
            SectionKind::NestedProjects => &mut self.nested_projects,
            SectionKind::SolutionConfigurations => &mut self.solution_configurations,
            SectionKind::ProjectConfigurations => &mut self.project_configurations,
            SectionKind::Global => return,
        };
        // A repeated section keeps the first span; its entries still count.
        if slot.is_none() {
            *slot = Some(span);
        }
    }

    fn finish(self) -> Result<ParsedSolution, ParseError> {
        match &self.state {
            ScanState::Outside => {}
            ScanState::InProject { start, .. } => {
                return Err(self.error(*start, ParseErrorKind::UnterminatedProject));
            }
            ScanState::InSection { kind, start } => {
                return Err(self.error(*start, ParseErrorKind::Unterminated { section: *kind }));
            }
        }

        let global = match (self.global_start, self.global_end) {
            (Some(start), Some(end)) => LineSpan::new(start, end),
            (Some(start), None) => {
                return Err(self.error(
                    start,
                    ParseErrorKind::Unterminated {
                        section: SectionKind::Global,
                    },
                ));
            }
            (None, _) => {
                let last = self.lines.len().saturating_sub(1);
                return Err(self.error(last, ParseErrorKind::MissingGlobal));
            }
        };

        Ok(ParsedSolution {
            sections: Sections {
                global,
                nested_projects: self.nested_projects,
                solution_configurations: self.solution_configurations,
                project_configurations: self.project_configurations,
            },
            projects: self.projects,
            nested_projects: self.nested,
            solution_configurations: self.solution_configs,
            project_configurations: self.project_configs,
        })
    }

    fn error(&self, index: usize, kind: ParseErrorKind) -> ParseError {
        ParseError {
            path: self.path.clone(),
            line: index + 1,
            text: self.lines.get(index).cloned().unwrap_or_default(),
            kind,
        }
    }
}
