use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::debug;
use slnkit_config::Config;

use crate::editing::{Edit, LineBuffer, Patch};
use crate::error::{ParseError, Result, SolutionError};
use crate::graph::{self, NestingIndex};
use crate::io::{ProjectFileLoader, SaveOptions, TextStorage};
use crate::models::{NestedProject, ProjectConfiguration, ProjectReference};
use crate::parsing::{ParsedSolution, Sections, parse_lines};
use crate::paths;

/// A solution manifest: a line buffer plus the typed view of its sections.
///
/// The buffer is the single source of truth. Every mutation splices it and
/// then rescans the whole thing, so the typed view is never patched by
/// hand. Lines no operation touches are kept byte for byte.
///
/// ```
/// use slnkit_engine::Solution;
///
/// let lines = vec!["Global".to_string(), "EndGlobal".to_string()];
/// let mut solution = Solution::from_lines("/src/App.sln", lines).unwrap();
///
/// let folder = solution.add_solution_folder("Tests", None).unwrap();
/// assert!(folder.is_folder());
/// assert_eq!(solution.lines().last().map(String::as_str), Some("EndGlobal"));
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    pub(crate) path: PathBuf,
    pub(crate) buffer: LineBuffer,
    pub(crate) parsed: ParsedSolution,
    pub(crate) nesting: NestingIndex,
    /// Set when the last rescan failed; cleared by the next good one
    pub(crate) broken: Option<ParseError>,
}

impl Solution {
    /// Scan `lines` as the content of the manifest at `path`.
    pub fn from_lines(path: impl Into<PathBuf>, lines: Vec<String>) -> Result<Self> {
        let path = path.into();
        let parsed = parse_lines(&path, &lines)?;
        let nesting = NestingIndex::build(&parsed.nested_projects);
        debug!(
            "loaded {} ({} lines, {} projects)",
            path.display(),
            lines.len(),
            parsed.projects.len()
        );
        Ok(Self {
            path,
            buffer: LineBuffer::new(lines),
            parsed,
            nesting,
            broken: None,
        })
    }

    pub fn load(path: impl Into<PathBuf>, storage: &impl TextStorage) -> Result<Self> {
        let path = path.into();
        let lines = storage.read_lines(&path)?;
        Self::from_lines(path, lines)
    }

    /// Write with the toolchain convention: CRLF and a byte order mark.
    pub fn save(&self, storage: &impl TextStorage) -> Result<()> {
        self.save_with(storage, SaveOptions::default())
    }

    pub fn save_with(&self, storage: &impl TextStorage, options: SaveOptions) -> Result<()> {
        storage.write_lines(
            &self.path,
            self.buffer.lines(),
            options.line_ending,
            options.byte_order_mark,
        )?;
        debug!("saved {} (version {})", self.path.display(), self.version());
        Ok(())
    }

    /// Save using the `[save]` settings from the user config file.
    pub fn save_with_user_config(&self, storage: &impl TextStorage) -> anyhow::Result<()> {
        self.save_with_config_at(storage, Config::config_path())
    }

    /// Save using the `[save]` settings from the config file at
    /// `config_path`, or the toolchain defaults if there is no such file.
    pub fn save_with_config_at(
        &self,
        storage: &impl TextStorage,
        config_path: impl AsRef<Path>,
    ) -> anyhow::Result<()> {
        let config = Config::load_from_path(config_path)?.unwrap_or_default();
        self.save_with(storage, SaveOptions::from(&config.save))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute directory that relative locations are resolved against.
    ///
    /// A relative manifest path is anchored at the working directory.
    pub fn directory(&self) -> PathBuf {
        let dir = self.path.parent().unwrap_or(Path::new(""));
        paths::absolute_lexically(dir)
    }

    pub fn lines(&self) -> &[String] {
        self.buffer.lines()
    }

    pub fn version(&self) -> u64 {
        self.buffer.version()
    }

    /// Apply a raw edit and rescan.
    ///
    /// A failed rescan leaves the edit in place and returns the parse error;
    /// structural operations then refuse to run until another edit makes
    /// the text scan again.
    pub fn apply(&mut self, edit: Edit) -> Result<Patch> {
        edit.check_bounds(self.buffer.len())
            .map_err(|reason| SolutionError::InvalidArgument {
                name: "edit",
                reason,
            })?;

        let changed = match edit {
            Edit::Insert { at, lines } => self.buffer.insert(at, lines),
            Edit::Remove { at, count } => {
                self.buffer.remove(at, count);
                at..at
            }
            Edit::ReplaceAll { lines } => {
                self.buffer.replace(lines);
                0..self.buffer.len()
            }
        };
        debug!(
            "spliced {:?} in {} (version {})",
            changed,
            self.path.display(),
            self.buffer.version()
        );

        self.rescan()?;
        Ok(Patch {
            changed,
            version: self.buffer.version(),
        })
    }

    fn rescan(&mut self) -> Result<()> {
        match parse_lines(&self.path, self.buffer.lines()) {
            Ok(parsed) => {
                self.nesting = NestingIndex::build(&parsed.nested_projects);
                self.parsed = parsed;
                self.broken = None;
                debug!(
                    "rescanned {}: {} projects, {} nested, {} mappings",
                    self.path.display(),
                    self.parsed.projects.len(),
                    self.parsed.nested_projects.len(),
                    self.parsed.project_configurations.len()
                );
                Ok(())
            }
            Err(err) => {
                self.broken = Some(err.clone());
                Err(err.into())
            }
        }
    }

    /// Fails with the last parse error if the buffer currently doesn't scan.
    pub(crate) fn ensure_scanned(&self) -> Result<()> {
        match &self.broken {
            Some(err) => Err(err.clone().into()),
            None => Ok(()),
        }
    }

    /// The error from the last rescan, if the buffer currently doesn't scan.
    ///
    /// While this is set, the slice accessors below still return the view
    /// of the last successful scan, whose line numbers may no longer match
    /// [`Solution::lines`]. The `Result` queries fail with the parse error.
    pub fn parse_error(&self) -> Option<&ParseError> {
        self.broken.as_ref()
    }

    /// Section spans from the last successful scan
    pub fn sections(&self) -> Sections {
        self.parsed.sections
    }

    pub fn projects(&self) -> &[ProjectReference] {
        &self.parsed.projects
    }

    pub fn nested_projects(&self) -> &[NestedProject] {
        &self.parsed.nested_projects
    }

    pub fn solution_configurations(&self) -> &BTreeSet<String> {
        &self.parsed.solution_configurations
    }

    pub fn project_configurations(&self) -> &[ProjectConfiguration] {
        &self.parsed.project_configurations
    }

    /// Mappings for one project, in document order
    pub fn project_configurations_for<'a>(
        &'a self,
        project_id: &'a str,
    ) -> impl Iterator<Item = &'a ProjectConfiguration> + 'a {
        self.parsed
            .project_configurations
            .iter()
            .filter(move |c| c.project_id() == project_id)
    }

    /// First reference with identifier `id`.
    pub fn resolve(&self, id: &str) -> Result<&ProjectReference> {
        self.ensure_scanned()?;
        self.parsed
            .projects
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| SolutionError::ProjectNotFound(id.to_string()))
    }

    pub fn contains_project(&self, id: &str) -> bool {
        self.parsed.projects.iter().any(|p| p.id() == id)
    }

    pub fn absolute_location(&self, project: &ProjectReference) -> PathBuf {
        paths::resolve_location(&self.directory(), project.location())
    }

    /// True if the reference resolves under the manifest's directory.
    pub fn is_local(&self, project: &ProjectReference) -> bool {
        paths::is_within(&self.directory(), &self.absolute_location(project))
    }

    /// The folder containing `project`, or `None` at the root of the forest.
    pub fn nesting_parent(&self, project: &ProjectReference) -> Result<Option<&ProjectReference>> {
        self.ensure_scanned()?;
        self.nesting
            .parent_of(project.id())
            .map(|parent_id| self.resolve(parent_id))
            .transpose()
    }

    /// Containing folders of `project`, nearest first.
    pub fn ancestors(&self, project: &ProjectReference) -> Result<Vec<&ProjectReference>> {
        self.ensure_scanned()?;
        let chain = self
            .nesting
            .ancestors(project.id())
            .map_err(|id| SolutionError::NestingCycle(id.to_string()))?;
        chain.into_iter().map(|id| self.resolve(id)).collect()
    }

    /// References nested directly under `folder_id`, in edge order.
    pub fn children(&self, folder_id: &str) -> Result<Vec<&ProjectReference>> {
        self.ensure_scanned()?;
        self.nesting
            .children_of(folder_id)
            .iter()
            .map(|id| self.resolve(id))
            .collect()
    }

    /// Escaped `Folder\Sub\Project` path addressing this project's target.
    pub fn build_target_name(&self, project: &ProjectReference) -> Result<String> {
        let ancestors = self.ancestors(project)?;
        let names = ancestors
            .iter()
            .rev()
            .map(|p| p.name())
            .chain(std::iter::once(project.name()));
        Ok(graph::build_target_name(names))
    }

    /// Load the file a (non-folder) reference points at.
    pub fn open_project_file<L: ProjectFileLoader>(
        &self,
        project: &ProjectReference,
        loader: &L,
    ) -> Result<L::File> {
        self.ensure_scanned()?;
        if project.is_folder() {
            return Err(SolutionError::InvalidOperation(format!(
                "{} is a solution folder, not a project file",
                project.name()
            )));
        }
        Ok(loader.load(&self.absolute_location(project))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{FsTextStorage, IoError, ProjectFile};
    use crate::tests::{
        CSHARP, FOLDER_A, LIB, TOOL, create_test_dir, create_test_file, empty_lines,
        empty_solution, sample_lines, sample_solution,
    };
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[test]
    fn unmodified_buffer_round_trips() {
        let solution = sample_solution();
        assert_eq!(solution.lines(), sample_lines().as_slice());
        assert_eq!(solution.version(), 0);
    }

    #[test]
    fn resolve_finds_by_identifier() {
        let solution = sample_solution();
        assert_eq!(solution.resolve(LIB).unwrap().name(), "Lib");
        assert!(matches!(
            solution.resolve("{missing}"),
            Err(SolutionError::ProjectNotFound(id)) if id == "{missing}"
        ));
    }

    #[test]
    fn nesting_parent_and_root() {
        let solution = sample_solution();
        let tool = solution.resolve(TOOL).unwrap();
        let lib = solution.resolve(LIB).unwrap();

        assert_eq!(solution.nesting_parent(tool).unwrap().unwrap().id(), FOLDER_A);
        assert!(solution.nesting_parent(lib).unwrap().is_none());
    }

    #[test]
    fn children_of_folder() {
        let solution = sample_solution();
        let children = solution.children(FOLDER_A).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].id(), TOOL);
    }

    #[test]
    fn build_target_name_walks_folders() {
        let solution = sample_solution();
        let tool = solution.resolve(TOOL).unwrap();
        assert_eq!(solution.build_target_name(tool).unwrap(), r"Tools\Tool");
    }

    #[test]
    fn build_target_name_escapes_every_segment() {
        let mut solution = empty_solution();
        let root = solution.add_solution_folder("A;B", None).unwrap();
        let folder = solution
            .add_solution_folder("My.Solution(v1)", Some(root.id()))
            .unwrap();

        insta::assert_snapshot!(solution.build_target_name(&folder).unwrap(), @r"A_B\My_Solution_v1_");
    }

    #[cfg(unix)]
    #[test]
    fn locations_resolve_relative_to_manifest() {
        let solution = sample_solution();
        let lib = solution.resolve(LIB).unwrap();
        assert_eq!(
            solution.absolute_location(lib),
            PathBuf::from("/work/src/Lib/Lib.csproj")
        );
        assert!(solution.is_local(lib));
    }

    #[test]
    fn relative_manifest_path_is_anchored_for_locality() {
        let lines = vec![
            format!(r#"Project("{CSHARP}") = "Out", "..\Shared\Out.csproj", "{{O}}""#),
            "EndProject".to_string(),
            format!(r#"Project("{CSHARP}") = "In", "src\In\In.csproj", "{{I}}""#),
            "EndProject".to_string(),
            "Global".to_string(),
            "EndGlobal".to_string(),
        ];

        let solution = Solution::from_lines("App.sln", lines.clone()).unwrap();
        assert!(solution.directory().is_absolute());
        assert!(!solution.is_local(solution.resolve("{O}").unwrap()));
        assert!(solution.is_local(solution.resolve("{I}").unwrap()));

        let above = Solution::from_lines("../App.sln", lines).unwrap();
        assert!(!above.is_local(above.resolve("{O}").unwrap()));
        assert!(above.is_local(above.resolve("{I}").unwrap()));
    }

    #[test]
    fn queries_fail_while_buffer_does_not_scan() {
        let mut solution = sample_solution();
        let tool = solution.resolve(TOOL).unwrap().clone();

        let err = solution
            .apply(Edit::Insert {
                at: 0,
                lines: vec![
                    "Global".to_string(),
                    "\tGlobalSection(NestedProjects) = preSolution".to_string(),
                ],
            })
            .unwrap_err();
        assert!(matches!(err, SolutionError::Parse(_)));
        assert!(solution.parse_error().is_some());

        assert!(matches!(solution.resolve(LIB), Err(SolutionError::Parse(_))));
        assert!(matches!(solution.nesting_parent(&tool), Err(SolutionError::Parse(_))));
        assert!(matches!(solution.ancestors(&tool), Err(SolutionError::Parse(_))));
        assert!(matches!(solution.children(FOLDER_A), Err(SolutionError::Parse(_))));
        assert!(matches!(
            solution.build_target_name(&tool),
            Err(SolutionError::Parse(_))
        ));
        // Slice accessors keep the last good view
        assert_eq!(solution.projects().len(), 3);

        solution.apply(Edit::Remove { at: 0, count: 2 }).unwrap();
        assert!(solution.parse_error().is_none());
        assert_eq!(solution.resolve(TOOL).unwrap(), &tool);
    }

    #[test]
    fn save_with_config_at_follows_save_settings() {
        let dir = create_test_dir();
        let manifest = dir.path().join("App.sln");
        let solution = Solution::from_lines(&manifest, empty_lines()).unwrap();

        let lf = create_test_file(
            &dir,
            "config.toml",
            b"[save]\nline_ending = \"lf\"\nbyte_order_mark = false\n",
        );
        solution.save_with_config_at(&FsTextStorage, &lf).unwrap();
        assert_eq!(std::fs::read(&manifest).unwrap(), b"Global\nEndGlobal\n");

        // No config file means the toolchain defaults
        solution
            .save_with_config_at(&FsTextStorage, dir.path().join("missing.toml"))
            .unwrap();
        assert_eq!(
            std::fs::read(&manifest).unwrap(),
            b"\xEF\xBB\xBFGlobal\r\nEndGlobal\r\n"
        );

        let bad = create_test_file(&dir, "bad.toml", b"[save]\nline_ending = \"mac\"\n");
        let err = solution
            .save_with_config_at(&FsTextStorage, &bad)
            .unwrap_err();
        assert!(err.downcast_ref::<slnkit_config::ConfigError>().is_some());
    }

    #[test]
    fn raw_edit_that_breaks_grammar_blocks_structural_edits() {
        let mut solution = empty_solution();
        let err = solution
            .apply(Edit::Insert {
                at: 1,
                lines: vec!["\tGlobalSection(NestedProjects) = preSolution".to_string()],
            })
            .unwrap_err();
        assert!(matches!(err, SolutionError::Parse(_)));

        // The edit stays in the buffer
        assert_eq!(solution.lines().len(), 3);
        assert!(matches!(
            solution.add_solution_folder("Docs", None),
            Err(SolutionError::Parse(_))
        ));

        // Fixing the text makes the manifest usable again
        solution.apply(Edit::remove_line(1)).unwrap();
        assert!(solution.add_solution_folder("Docs", None).is_ok());
    }

    #[test]
    fn out_of_range_edit_is_an_argument_error() {
        let mut solution = empty_solution();
        let err = solution.apply(Edit::remove_line(5)).unwrap_err();
        assert!(matches!(err, SolutionError::InvalidArgument { name: "edit", .. }));
        assert_eq!(solution.version(), 0);
    }

    struct FakeProject(HashMap<String, String>);

    impl ProjectFile for FakeProject {
        fn get_property(&self, name: &str) -> String {
            self.0.get(name).cloned().unwrap_or_default()
        }

        fn set_property(&mut self, name: &str, value: &str) {
            self.0.insert(name.to_string(), value.to_string());
        }
    }

    #[derive(Default)]
    struct FakeLoader {
        opened: RefCell<Vec<PathBuf>>,
    }

    impl ProjectFileLoader for FakeLoader {
        type File = FakeProject;

        fn load(&self, path: &Path) -> Result<FakeProject, IoError> {
            self.opened.borrow_mut().push(path.to_path_buf());
            let mut props = HashMap::new();
            props.insert("AssemblyName".to_string(), "Lib".to_string());
            Ok(FakeProject(props))
        }
    }

    #[test]
    fn open_project_file_uses_absolute_location() {
        let solution = sample_solution();
        let loader = FakeLoader::default();
        let lib = solution.resolve(LIB).unwrap();

        let mut file = solution.open_project_file(lib, &loader).unwrap();
        assert_eq!(file.get_property("AssemblyName"), "Lib");
        assert_eq!(file.get_property("Missing"), "");
        file.set_property("RootNamespace", "Company.Lib");
        assert_eq!(file.get_property("RootNamespace"), "Company.Lib");

        assert_eq!(
            loader.opened.borrow().as_slice(),
            [solution.absolute_location(lib)]
        );
    }

    #[test]
    fn folders_have_no_project_file() {
        let solution = sample_solution();
        let folder = solution.resolve(FOLDER_A).unwrap();
        let result = solution.open_project_file(folder, &FakeLoader::default());
        assert!(matches!(result, Err(SolutionError::InvalidOperation(_))));
    }
}
