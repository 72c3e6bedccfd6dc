use uuid::Uuid;

/// Type identifier marking a reference as a solution folder.
pub const SOLUTION_FOLDER_TYPE_ID: &str = "{2150E333-8FDC-42A3-9474-1A3956D46DE8}";

/// A fresh identifier in the braced upper-case form the toolchain writes.
pub fn new_guid() -> String {
    format!("{{{}}}", Uuid::new_v4().hyphenated()).to_uppercase()
}
