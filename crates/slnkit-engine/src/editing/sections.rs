use log::trace;

use crate::editing::{Edit, Solution};
use crate::error::{Result, SolutionError};
use crate::parsing::{LineSpan, SectionKind};

impl Solution {
    /// Insert an empty `kind` section, failing if one exists already.
    pub(crate) fn insert_section(&mut self, kind: SectionKind) -> Result<LineSpan> {
        self.ensure_scanned()?;
        if kind == SectionKind::Global {
            return Err(SolutionError::InvalidOperation(
                "the Global block cannot be added".to_string(),
            ));
        }
        if self.parsed.sections.get(kind).is_some() {
            return Err(SolutionError::InvalidOperation(format!(
                "{kind} section already exists"
            )));
        }

        let at = self.section_insertion_point(kind);
        trace!("inserting {kind} section at line {at}");
        let indent = kind.marker_indent();
        self.apply(Edit::Insert {
            at,
            lines: vec![
                format!("{indent}{}", kind.opening_marker()),
                format!("{indent}{}", kind.closing_marker()),
            ],
        })?;

        self.parsed.sections.get(kind).ok_or_else(|| {
            SolutionError::InvalidOperation(format!("{kind} section missing after insertion"))
        })
    }

    /// The span of `kind`, creating an empty section first if needed.
    pub(crate) fn ensure_section(&mut self, kind: SectionKind) -> Result<LineSpan> {
        self.ensure_scanned()?;
        match self.parsed.sections.get(kind) {
            Some(span) => Ok(span),
            None => self.insert_section(kind),
        }
    }

    fn section_insertion_point(&self, kind: SectionKind) -> usize {
        let sections = self.parsed.sections;
        match kind {
            SectionKind::SolutionConfigurations => sections.global.start + 1,
            SectionKind::ProjectConfigurations => sections
                .solution_configurations
                .map_or(sections.global.end, |span| span.end + 1),
            SectionKind::NestedProjects | SectionKind::Global => sections.global.end,
        }
    }

    /// Remove one line and rescan
    pub(crate) fn remove_line(&mut self, line: usize) -> Result<()> {
        self.apply(Edit::remove_line(line))?;
        Ok(())
    }

    /// Fail with `StaleEntity` unless `entity` is in the current scan.
    pub(crate) fn ensure_current<T: PartialEq + std::fmt::Debug>(
        &self,
        current: &[T],
        entity: &T,
    ) -> Result<()> {
        self.ensure_scanned()?;
        if current.contains(entity) {
            Ok(())
        } else {
            Err(SolutionError::StaleEntity(format!("{entity:?}")))
        }
    }
}
