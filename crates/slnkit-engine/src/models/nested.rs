use serde::Serialize;

/// One `child = parent` line of the NestedProjects section: the child
/// reference lives inside the parent folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NestedProject {
    child_id: String,
    parent_id: String,
    line: usize,
}

impl NestedProject {
    pub(crate) fn new(child_id: String, parent_id: String, line: usize) -> Self {
        Self {
            child_id,
            parent_id,
            line,
        }
    }

    pub fn child_id(&self) -> &str {
        &self.child_id
    }

    pub fn parent_id(&self) -> &str {
        &self.parent_id
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// True if `id` appears on either side of the edge
    pub fn mentions(&self, id: &str) -> bool {
        self.child_id == id || self.parent_id == id
    }
}
