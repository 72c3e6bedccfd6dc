use log::{debug, trace};

use crate::editing::{Edit, Solution};
use crate::error::{Result, SolutionError, require_token};
use crate::models::ProjectConfiguration;
use crate::parsing::grammar::{self, ProjectConfigurationFields};
use crate::parsing::{LineSpan, SectionKind};

impl Solution {
    /// Insert an empty SolutionConfigurationPlatforms section at the top of
    /// the Global block.
    pub fn add_solution_configurations_section(&mut self) -> Result<LineSpan> {
        self.insert_section(SectionKind::SolutionConfigurations)
    }

    /// Insert an empty ProjectConfigurationPlatforms section right after the
    /// solution configurations, or before `EndGlobal` when there are none.
    pub fn add_project_configurations_section(&mut self) -> Result<LineSpan> {
        self.insert_section(SectionKind::ProjectConfigurations)
    }

    /// Add `name = name`. Returns `false` if the name is already listed.
    pub fn add_solution_configuration(&mut self, name: &str) -> Result<bool> {
        require_config_token("name", name)?;
        self.ensure_scanned()?;
        if self.parsed.solution_configurations.contains(name) {
            return Ok(false);
        }

        let section = self.ensure_section(SectionKind::SolutionConfigurations)?;
        self.apply(Edit::insert_line(
            section.end,
            grammar::format_solution_configuration(name),
        ))?;
        debug!("added solution configuration {name}");
        Ok(true)
    }

    /// Remove every mapping onto `name`, then the name itself.
    ///
    /// Returns `false` if the name was not listed; mappings onto it are
    /// still removed.
    pub fn delete_solution_configuration(&mut self, name: &str) -> Result<bool> {
        require_token("name", name)?;
        self.ensure_scanned()?;

        while let Some(line) = self.first_mapping_onto(name) {
            self.remove_line(line)?;
        }

        let mut removed = false;
        while let Some(line) = self.solution_configuration_line(name) {
            self.remove_line(line)?;
            removed = true;
        }
        if removed {
            debug!("deleted solution configuration {name}");
        }
        Ok(removed)
    }

    /// Add a `{project}.{config}.{property} = {solution}` mapping.
    ///
    /// Mappings for one project are kept together and ascending by
    /// solution-side label: the new line goes before the first mapping of
    /// the same project with a greater label, else after the last one with
    /// the same label, else after the project's last mapping, else at the
    /// end of the section.
    pub fn add_project_configuration(
        &mut self,
        project_id: &str,
        project_config: &str,
        property: &str,
        solution_config: &str,
    ) -> Result<ProjectConfiguration> {
        require_segment("project_id", project_id)?;
        require_segment("project_config", project_config)?;
        require_config_token("property", property)?;
        require_token("solution_config", solution_config)?;
        self.ensure_scanned()?;

        let section = self.ensure_section(SectionKind::ProjectConfigurations)?;
        let at = self.mapping_insertion_point(project_id, solution_config, section);

        let fields = ProjectConfigurationFields {
            project_id: project_id.to_string(),
            project_config: project_config.to_string(),
            property: property.to_string(),
            solution_config: solution_config.to_string(),
        };
        self.apply(Edit::insert_line(
            at,
            grammar::format_project_configuration(&fields),
        ))?;
        debug!("mapped {project_id}.{project_config}.{property} onto {solution_config}");

        self.parsed
            .project_configurations
            .iter()
            .find(|mapping| mapping.line() == at)
            .cloned()
            .ok_or_else(|| {
                SolutionError::InvalidOperation(format!("no mapping on line {}", at + 1))
            })
    }

    /// Remove the mapping's line.
    pub fn delete_project_configuration(&mut self, mapping: &ProjectConfiguration) -> Result<()> {
        self.ensure_current(&self.parsed.project_configurations, mapping)?;
        self.remove_line(mapping.line())
    }

    fn mapping_insertion_point(
        &self,
        project_id: &str,
        solution_config: &str,
        section: LineSpan,
    ) -> usize {
        let same_project: Vec<&ProjectConfiguration> =
            self.project_configurations_for(project_id).collect();

        if let Some(greater) = same_project
            .iter()
            .find(|m| m.solution_config() > solution_config)
        {
            trace!("inserting before greater label on line {}", greater.line());
            return greater.line();
        }
        if let Some(same_label) = same_project
            .iter()
            .rev()
            .find(|m| m.solution_config() == solution_config)
        {
            trace!("inserting after same label on line {}", same_label.line());
            return same_label.line() + 1;
        }
        if let Some(last) = same_project.last() {
            trace!("inserting after project's last mapping on line {}", last.line());
            return last.line() + 1;
        }
        trace!("appending at section end, line {}", section.end);
        section.end
    }

    fn first_mapping_onto(&self, solution_config: &str) -> Option<usize> {
        self.parsed
            .project_configurations
            .iter()
            .find(|m| m.solution_config() == solution_config)
            .map(|m| m.line())
    }

    fn solution_configuration_line(&self, name: &str) -> Option<usize> {
        let section = self.parsed.sections.solution_configurations?;
        let lines = self.buffer.lines();
        section.body().find(|&index| {
            grammar::parse_solution_configuration(lines[index].trim()).as_deref() == Some(name)
        })
    }
}

fn require_config_token(name: &'static str, value: &str) -> Result<()> {
    require_token(name, value)?;
    if value.contains(" = ") {
        return Err(SolutionError::InvalidArgument {
            name,
            reason: "must not contain ` = `".to_string(),
        });
    }
    Ok(())
}

/// The dotted left-hand side splits on `.`, so the first two parts can't
/// contain one.
fn require_segment(name: &'static str, value: &str) -> Result<()> {
    require_config_token(name, value)?;
    if value.contains('.') {
        return Err(SolutionError::InvalidArgument {
            name,
            reason: "must not contain `.`".to_string(),
        });
    }
    Ok(())
}
