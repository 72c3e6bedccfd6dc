use std::path::Path;

use crate::io::IoError;

/// A referenced project file, reduced to what the manifest model needs.
pub trait ProjectFile {
    /// Value of a top-level property, or `""` if it is not set.
    fn get_property(&self, name: &str) -> String;

    fn set_property(&mut self, name: &str, value: &str);
}

/// Opens project files for a resolved reference.
pub trait ProjectFileLoader {
    type File: ProjectFile;

    fn load(&self, path: &Path) -> Result<Self::File, IoError>;
}
