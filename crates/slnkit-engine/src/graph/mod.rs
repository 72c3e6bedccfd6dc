//! Folder nesting as a forest.
//!
//! The NestedProjects edges together with the folder references form a
//! forest. [`NestingIndex`] is rebuilt after every scan so that parent and
//! child lookups during one traversal don't re-filter the edge list.

pub mod target_name;

use std::collections::HashMap;

use crate::models::NestedProject;

pub use target_name::{build_target_name, escape_target_segment};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestingIndex {
    /// child id -> parent id, first edge in document order wins
    parent_of: HashMap<String, String>,
    /// parent id -> child ids, in edge order
    children_of: HashMap<String, Vec<String>>,
}

impl NestingIndex {
    pub fn build(edges: &[NestedProject]) -> Self {
        let mut index = Self::default();
        for edge in edges {
            index
                .parent_of
                .entry(edge.child_id().to_string())
                .or_insert_with(|| edge.parent_id().to_string());
            index
                .children_of
                .entry(edge.parent_id().to_string())
                .or_default()
                .push(edge.child_id().to_string());
        }
        index
    }

    pub fn parent_of(&self, child_id: &str) -> Option<&str> {
        self.parent_of.get(child_id).map(String::as_str)
    }

    pub fn children_of(&self, parent_id: &str) -> &[String] {
        self.children_of
            .get(parent_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Parent chain of `id`, nearest first.
    ///
    /// Stops with `Err(id)` naming the first identifier met twice, which
    /// means the edges contain a cycle.
    pub fn ancestors<'a>(&'a self, id: &'a str) -> Result<Vec<&'a str>, &'a str> {
        let mut chain = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent_of(current) {
            if parent == id || chain.contains(&parent) {
                return Err(parent);
            }
            chain.push(parent);
            current = parent;
        }
        Ok(chain)
    }
}
