/*!
 * # Editing Core Module
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth: the Line Buffer
 * - The manifest is held as an ordered list of lines in a **`LineBuffer`**
 * - Lines are stored without terminators; saving writes them back verbatim
 * - Lines no operation touches keep their exact text, including unknown sections
 *
 * ### 2. Command-Based Editing
 * - Every change is an **`Edit`** (insert, remove, replace all) applied through
 *   `Solution::apply`, which returns a **`Patch`**
 * - Structural operations (add/delete references, nesting edges, configuration
 *   mappings) compute a target line and compile down to a single `Edit`
 *
 * ### 3. Full Rescan After Every Edit
 * - Each applied edit re-runs the section scanner over the whole buffer
 * - Entity views (`ProjectReference`, `NestedProject`, `ProjectConfiguration`)
 *   carry the line numbers of the scan that produced them
 * - Multi-step deletes re-query after each single-line removal, never batching
 *   line numbers that the previous removal shifted
 *
 * ## Module Structure
 *
 * - **`buffer`**: `LineBuffer`, the versioned list of lines
 * - **`commands`**: `Edit` and `Patch`
 * - **`solution`**: `Solution`, the buffer plus its typed view and queries
 * - **`sections`**: section insertion points shared by the mutations
 * - **`references`**: project references, solution folders and cascading deletes
 * - **`nesting`**: NestedProjects edges
 * - **`configurations`**: solution configurations and project mappings
 *
 * ## Usage Pattern
 *
 * ```rust
 * use slnkit_engine::editing::*;
 *
 * let lines = vec!["Global".to_string(), "EndGlobal".to_string()];
 * let mut solution = Solution::from_lines("/src/App.sln", lines).unwrap();
 *
 * let app = solution
 *     .add_project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}", "App", r"App\App.csproj", "{A}")
 *     .unwrap();
 * solution
 *     .add_project_configuration(app.id(), "Debug|Any CPU", "ActiveCfg", "Debug|Any CPU")
 *     .unwrap();
 *
 * solution.delete_project_and_related(&app).unwrap();
 * assert!(solution.project_configurations().is_empty());
 * ```
 */

pub mod buffer;
pub mod commands;
pub mod configurations;
pub mod nesting;
pub mod references;
pub mod sections;
pub mod solution;

pub use buffer::LineBuffer;
pub use commands::{Edit, Patch};
pub use solution::Solution;
