pub mod configuration;
pub mod ids;
pub mod nested;
pub mod project;

pub use configuration::ProjectConfiguration;
pub use ids::{SOLUTION_FOLDER_TYPE_ID, new_guid};
pub use nested::NestedProject;
pub use project::ProjectReference;
