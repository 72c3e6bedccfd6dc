use log::debug;

use crate::editing::{Edit, Solution};
use crate::error::{Result, SolutionError, require_token};
use crate::models::NestedProject;
use crate::parsing::{LineSpan, SectionKind, grammar};

impl Solution {
    /// Insert an empty NestedProjects section just before `EndGlobal`.
    pub fn add_nested_projects_section(&mut self) -> Result<LineSpan> {
        self.insert_section(SectionKind::NestedProjects)
    }

    /// Place `child_id` inside the folder `parent_id`.
    ///
    /// Creates the NestedProjects section if needed and appends the edge at
    /// its end. A child may have only one parent, and an edge that would
    /// close a loop is refused.
    pub fn add_nested_project(&mut self, child_id: &str, parent_id: &str) -> Result<NestedProject> {
        require_edge_token("child_id", child_id)?;
        require_edge_token("parent_id", parent_id)?;
        self.ensure_scanned()?;

        if child_id == parent_id {
            return Err(SolutionError::InvalidOperation(format!(
                "{child_id} cannot be nested inside itself"
            )));
        }
        if let Some(existing) = self.nesting.parent_of(child_id) {
            return Err(SolutionError::InvalidOperation(format!(
                "{child_id} is already nested under {existing}"
            )));
        }
        match self.nesting.ancestors(parent_id) {
            Ok(chain) if chain.contains(&child_id) => {
                return Err(SolutionError::NestingCycle(child_id.to_string()));
            }
            Ok(_) => {}
            Err(id) => return Err(SolutionError::NestingCycle(id.to_string())),
        }

        let section = self.ensure_section(SectionKind::NestedProjects)?;
        let at = section.end;
        self.apply(Edit::insert_line(
            at,
            grammar::format_nested_project(child_id, parent_id),
        ))?;
        debug!("nested {child_id} under {parent_id}");

        self.nested_project_at(at)
    }

    /// Remove the edge's line.
    pub fn delete_nested_project(&mut self, edge: &NestedProject) -> Result<()> {
        self.ensure_current(&self.parsed.nested_projects, edge)?;
        self.remove_line(edge.line())
    }

    fn nested_project_at(&self, line: usize) -> Result<NestedProject> {
        self.parsed
            .nested_projects
            .iter()
            .find(|edge| edge.line() == line)
            .cloned()
            .ok_or_else(|| {
                SolutionError::InvalidOperation(format!("no nesting edge on line {}", line + 1))
            })
    }
}

fn require_edge_token(name: &'static str, value: &str) -> Result<()> {
    require_token(name, value)?;
    if value.contains(" = ") {
        return Err(SolutionError::InvalidArgument {
            name,
            reason: "must not contain ` = `".to_string(),
        });
    }
    Ok(())
}
