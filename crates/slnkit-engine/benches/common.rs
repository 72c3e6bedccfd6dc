// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2

const CSHARP: &str = "{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}";
const FOLDER: &str = "{2150E333-8FDC-42A3-9474-1A3956D46DE8}";

#[allow(dead_code)]
pub fn project_id(index: usize) -> String {
    format!("{{00000000-0000-0000-0000-{index:012X}}}")
}

#[allow(dead_code)]
pub fn folder_id(index: usize) -> String {
    format!("{{FFFFFFFF-0000-0000-0000-{index:012X}}}")
}

/// A manifest with `folders` solution folders and `projects` projects spread
/// across them, each project mapped for Debug and Release.
#[allow(dead_code)]
pub fn generate_manifest(projects: usize, folders: usize) -> Vec<String> {
    let mut lines = vec![
        "Microsoft Visual Studio Solution File, Format Version 12.00".to_string(),
        "# Visual Studio Version 17".to_string(),
    ];

    for f in 0..folders {
        let id = folder_id(f);
        lines.push(format!(
            "Project(\"{FOLDER}\") = \"Folder{f}\", \"Folder{f}\", \"{id}\""
        ));
        lines.push("EndProject".to_string());
    }
    for p in 0..projects {
        let id = project_id(p);
        lines.push(format!(
            "Project(\"{CSHARP}\") = \"Project{p}\", \"src\\Project{p}\\Project{p}.csproj\", \"{id}\""
        ));
        lines.push("EndProject".to_string());
    }

    lines.push("Global".to_string());
    lines.push("\tGlobalSection(SolutionConfigurationPlatforms) = preSolution".to_string());
    for config in ["Debug|Any CPU", "Release|Any CPU"] {
        lines.push(format!("\t\t{config} = {config}"));
    }
    lines.push("\tEndGlobalSection".to_string());

    lines.push("\tGlobalSection(ProjectConfigurationPlatforms) = postSolution".to_string());
    for p in 0..projects {
        let id = project_id(p);
        for config in ["Debug|Any CPU", "Release|Any CPU"] {
            lines.push(format!("\t\t{id}.{config}.ActiveCfg = {config}"));
            lines.push(format!("\t\t{id}.{config}.Build.0 = {config}"));
        }
    }
    lines.push("\tEndGlobalSection".to_string());

    lines.push("\tGlobalSection(NestedProjects) = preSolution".to_string());
    if folders > 0 {
        // Folder n lives in folder n / 4, giving a few levels of depth
        for f in 1..folders {
            lines.push(format!("\t\t{} = {}", folder_id(f), folder_id(f / 4)));
        }
        for p in 0..projects {
            lines.push(format!("\t\t{} = {}", project_id(p), folder_id(p % folders)));
        }
    }
    lines.push("\tEndGlobalSection".to_string());
    lines.push("EndGlobal".to_string());

    lines
}
