//! Report content router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site narrates an offline traffic-incident study. Nothing here is
//! computed: each section maps to a fixed sequence of content blocks, and
//! the two tables are literal transcriptions of the study's figures.
//!
//! DESIGN
//! ======
//! `render` is an exhaustive match over the closed `Section` enum, so a
//! section without content does not compile. Free-form names are parsed
//! into a `Section` once, at the edge, and an unknown name surfaces as
//! `ReportError::InvalidSection` rather than as empty output.

pub mod content;
mod prose;
pub mod section;
pub mod tables;

pub use content::{Cell, ContentBlock, Table};
pub use prose::REPORT_TITLE;
pub use section::{Section, SectionSummary};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("invalid section: {0}")]
    InvalidSection(String),
}

/// Ordered content blocks for `section`.
#[must_use]
pub fn render(section: Section) -> Vec<ContentBlock> {
    match section {
        Section::Abstract => prose::abstract_text(),
        Section::Introduction => prose::introduction(),
        Section::Goals => prose::goals(),
        Section::Objectives => prose::objectives(),
        Section::Motivations => prose::motivations(),
        Section::PriorArtAndChallenges => prose::prior_art(),
        Section::DataSources => prose::data_sources(),
        Section::ToolsAndImplementation => prose::tools(),
        Section::Results => prose::results(),
        Section::ContributionsAndConclusions => prose::conclusions(),
    }
}

/// Render a section named by its label or slug.
///
/// # Errors
///
/// Returns `ReportError::InvalidSection` if `name` is not one of the ten
/// sections.
pub fn render_named(name: &str) -> Result<Vec<ContentBlock>, ReportError> {
    Ok(render(name.parse()?))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
