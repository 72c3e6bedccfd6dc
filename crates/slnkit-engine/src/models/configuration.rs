use serde::Serialize;

use crate::parsing::grammar::ProjectConfigurationFields;

/// One line of the ProjectConfigurationPlatforms section, for example
/// `{id}.Debug|Any CPU.Build.0 = Debug|Any CPU`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfiguration {
    project_id: String,
    project_config: String,
    property: String,
    solution_config: String,
    line: usize,
}

impl ProjectConfiguration {
    pub(crate) fn new(fields: ProjectConfigurationFields, line: usize) -> Self {
        Self {
            project_id: fields.project_id,
            project_config: fields.project_config,
            property: fields.property,
            solution_config: fields.solution_config,
            line,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Label between the project id and the property
    pub fn project_config(&self) -> &str {
        &self.project_config
    }

    /// `ActiveCfg`, `Build.0`, `Deploy.0`, ...
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Label on the right-hand side of ` = `
    pub fn solution_config(&self) -> &str {
        &self.solution_config
    }

    pub fn line(&self) -> usize {
        self.line
    }
}
