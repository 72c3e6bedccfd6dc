//! Per-line grammars of the manifest format, in both directions.
//!
//! The `parse_*` functions take a line that has already been trimmed and
//! return `None` when it does not match. The `format_*` functions produce
//! the exact text inserted by mutations, indentation included.

use std::sync::LazyLock;

use regex::Regex;

static PROJECT_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^Project\("(?P<type_id>[^"]*)"\)\s*=\s*"(?P<name>[^"]*)"\s*,\s*"(?P<location>[^"]*)"\s*,\s*"(?P<id>[^"]*)"\s*$"#,
    )
    .expect("project line pattern is valid")
});

static NESTED_PROJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<child>.+?) = (?P<parent>.+)$").expect("nested project pattern is valid")
});

static SOLUTION_CONFIGURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?) = .+$").expect("solution configuration pattern is valid")
});

static PROJECT_CONFIGURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<project>[^.]+)\.(?P<config>[^.]+)\.(?P<property>.+?) = (?P<solution>.*)$",
    )
    .expect("project configuration pattern is valid")
});

pub const END_PROJECT: &str = "EndProject";

/// The four quoted fields of a `Project(...)` opening line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectHeader {
    pub type_id: String,
    pub name: String,
    pub location: String,
    pub id: String,
}

/// Fields of a `<project>.<config>.<property> = <solution>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfigurationFields {
    pub project_id: String,
    pub project_config: String,
    pub property: String,
    pub solution_config: String,
}

pub fn parse_project_open(line: &str) -> Option<ProjectHeader> {
    let caps = PROJECT_OPEN.captures(line)?;
    Some(ProjectHeader {
        type_id: caps["type_id"].to_string(),
        name: caps["name"].to_string(),
        location: caps["location"].to_string(),
        id: caps["id"].to_string(),
    })
}

/// Returns `(child_id, parent_id)`.
pub fn parse_nested_project(line: &str) -> Option<(String, String)> {
    let caps = NESTED_PROJECT.captures(line)?;
    Some((caps["child"].to_string(), caps["parent"].to_string()))
}

/// Only the left-hand side of `name = name` is kept.
pub fn parse_solution_configuration(line: &str) -> Option<String> {
    let caps = SOLUTION_CONFIGURATION.captures(line)?;
    Some(caps["name"].to_string())
}

pub fn parse_project_configuration(line: &str) -> Option<ProjectConfigurationFields> {
    let caps = PROJECT_CONFIGURATION.captures(line)?;
    Some(ProjectConfigurationFields {
        project_id: caps["project"].to_string(),
        project_config: caps["config"].to_string(),
        property: caps["property"].to_string(),
        solution_config: caps["solution"].to_string(),
    })
}

pub fn format_project_open(header: &ProjectHeader) -> String {
    format!(
        "Project(\"{}\") = \"{}\", \"{}\", \"{}\"",
        header.type_id, header.name, header.location, header.id
    )
}

pub fn format_nested_project(child_id: &str, parent_id: &str) -> String {
    format!("\t\t{child_id} = {parent_id}")
}

pub fn format_solution_configuration(name: &str) -> String {
    format!("\t\t{name} = {name}")
}

pub fn format_project_configuration(fields: &ProjectConfigurationFields) -> String {
    format!(
        "\t\t{}.{}.{} = {}",
        fields.project_id, fields.project_config, fields.property, fields.solution_config
    )
}
