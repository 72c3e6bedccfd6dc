use log::{debug, warn};

use crate::editing::{Edit, Solution};
use crate::error::{Result, SolutionError, require_quoted};
use crate::models::{ProjectReference, SOLUTION_FOLDER_TYPE_ID, new_guid};
use crate::parsing::grammar::{self, END_PROJECT, ProjectHeader};

impl Solution {
    /// Add a `Project(...)`/`EndProject` pair just before the Global block.
    ///
    /// Identifiers must be unique; adding one that already exists fails.
    pub fn add_project(
        &mut self,
        type_id: &str,
        name: &str,
        location: &str,
        id: &str,
    ) -> Result<ProjectReference> {
        require_quoted("type_id", type_id)?;
        require_quoted("name", name)?;
        require_quoted("location", location)?;
        require_quoted("id", id)?;
        self.ensure_scanned()?;
        if self.contains_project(id) {
            return Err(SolutionError::InvalidOperation(format!(
                "a project with id {id} already exists"
            )));
        }

        let header = ProjectHeader {
            type_id: type_id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            id: id.to_string(),
        };
        let at = self.parsed.sections.global.start;
        self.apply(Edit::Insert {
            at,
            lines: vec![grammar::format_project_open(&header), END_PROJECT.to_string()],
        })?;
        debug!("added project {name} {id}");

        self.resolve(id).cloned()
    }

    /// Create a solution folder, optionally inside an existing folder.
    pub fn add_solution_folder(
        &mut self,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<ProjectReference> {
        require_quoted("name", name)?;
        self.ensure_scanned()?;
        if let Some(parent_id) = parent_id {
            let parent = self.resolve(parent_id)?;
            if !parent.is_folder() {
                return Err(SolutionError::InvalidOperation(format!(
                    "{} is not a solution folder",
                    parent.name()
                )));
            }
        }

        let id = new_guid();
        self.add_project(SOLUTION_FOLDER_TYPE_ID, name, name, &id)?;
        if let Some(parent_id) = parent_id {
            self.add_nested_project(&id, parent_id)?;
        }
        self.resolve(&id).cloned()
    }

    /// Remove exactly the reference's lines.
    ///
    /// Nesting edges and configuration mappings naming it are left alone;
    /// see [`Solution::delete_project_and_related`].
    pub fn delete_project(&mut self, project: &ProjectReference) -> Result<()> {
        self.ensure_current(&self.parsed.projects, project)?;
        self.apply(Edit::Remove {
            at: project.line(),
            count: project.line_count(),
        })?;
        debug!("deleted project {} {}", project.name(), project.id());
        Ok(())
    }

    /// Remove every nesting edge and configuration mapping naming the
    /// reference, then the reference itself.
    pub fn delete_project_and_related(&mut self, project: &ProjectReference) -> Result<()> {
        self.ensure_current(&self.parsed.projects, project)?;
        self.delete_related(project.id())
    }

    /// Delete a folder and, depth first, everything nested beneath it.
    pub fn delete_solution_folder(&mut self, folder: &ProjectReference) -> Result<()> {
        self.ensure_current(&self.parsed.projects, folder)?;
        if !folder.is_folder() {
            return Err(SolutionError::InvalidOperation(format!(
                "{} is not a solution folder",
                folder.name()
            )));
        }
        let mut visiting = Vec::new();
        self.delete_folder_tree(folder.id(), &mut visiting)
    }

    fn delete_folder_tree(&mut self, folder_id: &str, visiting: &mut Vec<String>) -> Result<()> {
        visiting.push(folder_id.to_string());

        while let Some((line, child_id)) = self.first_child_edge(folder_id) {
            if visiting.contains(&child_id) {
                warn!("breaking nesting cycle: {child_id} is nested under {folder_id}");
                self.remove_line(line)?;
                continue;
            }
            let child_is_folder = match self.resolve(&child_id) {
                Ok(child) => child.is_folder(),
                Err(_) => {
                    // Edge to a reference that doesn't exist; drop the edge.
                    self.remove_line(line)?;
                    continue;
                }
            };
            if child_is_folder {
                self.delete_folder_tree(&child_id, visiting)?;
            } else {
                self.delete_related(&child_id)?;
            }
        }

        visiting.pop();
        self.delete_related(folder_id)
    }

    /// Cascade for one identifier. Each removal is a single-line edit
    /// followed by a rescan, so lookups always see fresh line numbers.
    fn delete_related(&mut self, id: &str) -> Result<()> {
        while let Some(line) = self.first_edge_mentioning(id) {
            self.remove_line(line)?;
        }
        while let Some(line) = self.first_mapping_for(id) {
            self.remove_line(line)?;
        }
        let project = self.resolve(id)?.clone();
        self.apply(Edit::Remove {
            at: project.line(),
            count: project.line_count(),
        })?;
        debug!("deleted project {} {} and related entries", project.name(), id);
        Ok(())
    }

    fn first_child_edge(&self, parent_id: &str) -> Option<(usize, String)> {
        self.parsed
            .nested_projects
            .iter()
            .find(|edge| edge.parent_id() == parent_id)
            .map(|edge| (edge.line(), edge.child_id().to_string()))
    }

    fn first_edge_mentioning(&self, id: &str) -> Option<usize> {
        self.parsed
            .nested_projects
            .iter()
            .find(|edge| edge.mentions(id))
            .map(|edge| edge.line())
    }

    fn first_mapping_for(&self, id: &str) -> Option<usize> {
        self.project_configurations_for(id)
            .next()
            .map(|mapping| mapping.line())
    }
}
