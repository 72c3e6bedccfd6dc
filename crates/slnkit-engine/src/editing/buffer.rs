use std::ops::Range;

/// Ordered, mutable sequence of text lines with 0-based indices.
///
/// Lines are stored without terminators. Line endings and the byte order
/// mark are a storage concern and only appear when the buffer is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    version: u64,
}

impl LineBuffer {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, version: 0 }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Incremented on every splice
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Insert `new_lines` so the first of them ends up at index `at`.
    ///
    /// Returns the range the inserted lines now occupy. `at` may equal
    /// `len()` to append; anything larger is a caller bug.
    pub fn insert(&mut self, at: usize, new_lines: Vec<String>) -> Range<usize> {
        let count = new_lines.len();
        self.lines.splice(at..at, new_lines);
        self.version += 1;
        at..at + count
    }

    /// Remove `count` lines starting at `at`, returning them.
    pub fn remove(&mut self, at: usize, count: usize) -> Vec<String> {
        let removed = self.lines.drain(at..at + count).collect();
        self.version += 1;
        removed
    }

    /// Swap in a whole new set of lines, returning the previous ones.
    pub fn replace(&mut self, lines: Vec<String>) -> Vec<String> {
        self.version += 1;
        std::mem::replace(&mut self.lines, lines)
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
