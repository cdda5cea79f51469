//! Sidebar selection state.
//!
//! The selection is an ordinary value owned by whoever is rendering (one per
//! request on the server), never a process-wide global. It starts at the
//! first section and changes only through `select`/`select_named`.

use crate::report::{self, ContentBlock, ReportError, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    current: Section,
}

impl Navigation {
    #[must_use]
    pub fn new() -> Self {
        Self { current: Section::ALL[0] }
    }

    #[must_use]
    pub fn current(&self) -> Section {
        self.current
    }

    pub fn select(&mut self, section: Section) {
        self.current = section;
    }

    /// Select by sidebar label or slug.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidSection` for an unknown name; the current
    /// selection is left untouched.
    pub fn select_named(&mut self, name: &str) -> Result<Section, ReportError> {
        let section = name.parse()?;
        self.select(section);
        Ok(section)
    }

    /// Content of the selected section.
    #[must_use]
    pub fn content(&self) -> Vec<ContentBlock> {
        report::render(self.current)
    }

    #[must_use]
    pub fn is_selected(&self, section: Section) -> bool {
        self.current == section
    }
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;
