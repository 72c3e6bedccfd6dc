use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::editing::Solution;

pub const CSHARP: &str = "{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}";
pub const LIB: &str = "{11111111-1111-1111-1111-111111111111}";
pub const TOOL: &str = "{22222222-2222-2222-2222-222222222222}";
pub const FOLDER_A: &str = "{AAAAAAAA-AAAA-AAAA-AAAA-AAAAAAAAAAAA}";

/// A small but complete manifest: two projects, one folder holding the
/// second project, two solution configurations and their mappings.
pub const SAMPLE: &str = r#"
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 17
Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "Lib", "src\Lib\Lib.csproj", "{11111111-1111-1111-1111-111111111111}"
EndProject
Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "Tool", "src/Tool/Tool.csproj", "{22222222-2222-2222-2222-222222222222}"
	ProjectSection(ProjectDependencies) = postProject
		{11111111-1111-1111-1111-111111111111} = {11111111-1111-1111-1111-111111111111}
	EndProjectSection
EndProject
Project("{2150E333-8FDC-42A3-9474-1A3956D46DE8}") = "Tools", "Tools", "{AAAAAAAA-AAAA-AAAA-AAAA-AAAAAAAAAAAA}"
EndProject
Global
	GlobalSection(SolutionConfigurationPlatforms) = preSolution
		Debug|Any CPU = Debug|Any CPU
		Release|Any CPU = Release|Any CPU
	EndGlobalSection
	GlobalSection(ProjectConfigurationPlatforms) = postSolution
		{11111111-1111-1111-1111-111111111111}.Debug|Any CPU.ActiveCfg = Debug|Any CPU
		{11111111-1111-1111-1111-111111111111}.Debug|Any CPU.Build.0 = Debug|Any CPU
		{22222222-2222-2222-2222-222222222222}.Debug|Any CPU.ActiveCfg = Debug|Any CPU
		{22222222-2222-2222-2222-222222222222}.Debug|Any CPU.Build.0 = Debug|Any CPU
	EndGlobalSection
	GlobalSection(SolutionProperties) = preSolution
		HideSolutionNode = FALSE
	EndGlobalSection
	GlobalSection(NestedProjects) = preSolution
		{22222222-2222-2222-2222-222222222222} = {AAAAAAAA-AAAA-AAAA-AAAA-AAAAAAAAAAAA}
	EndGlobalSection
EndGlobal
"#;

pub fn sample_lines() -> Vec<String> {
    SAMPLE.lines().map(str::to_string).collect()
}

/// Minimal manifest with an empty Global block.
pub fn empty_lines() -> Vec<String> {
    vec!["Global".to_string(), "EndGlobal".to_string()]
}

pub fn sample_solution() -> Solution {
    Solution::from_lines("/work/Sample.sln", sample_lines()).unwrap()
}

pub fn empty_solution() -> Solution {
    Solution::from_lines("/work/Empty.sln", empty_lines()).unwrap()
}

/// Create a temporary directory for storage tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a file inside the test directory with raw bytes
pub fn create_test_file(dir: &TempDir, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
