//! The closed set of report sections shown in the sidebar.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::ReportError;

/// One named division of the report, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Abstract,
    Introduction,
    Goals,
    Objectives,
    Motivations,
    PriorArtAndChallenges,
    DataSources,
    ToolsAndImplementation,
    Results,
    ContributionsAndConclusions,
}

impl Section {
    /// Every section, in the order the sidebar lists them.
    pub const ALL: [Self; 10] = [
        Self::Abstract,
        Self::Introduction,
        Self::Goals,
        Self::Objectives,
        Self::Motivations,
        Self::PriorArtAndChallenges,
        Self::DataSources,
        Self::ToolsAndImplementation,
        Self::Results,
        Self::ContributionsAndConclusions,
    ];

    /// Sidebar label, verbatim as the report titles it.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Abstract => "Abstract",
            Self::Introduction => "Introduction",
            Self::Goals => "Goals",
            Self::Objectives => "Objectives",
            Self::Motivations => "Motivations",
            Self::PriorArtAndChallenges => "Prior Art & Challenges",
            Self::DataSources => "Data Sources",
            Self::ToolsAndImplementation => "Tools & Implementation",
            Self::Results => "Results",
            Self::ContributionsAndConclusions => "Contributions & Conclusions",
        }
    }

    /// URL path segment used by `/sections/{slug}`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Introduction => "introduction",
            Self::Goals => "goals",
            Self::Objectives => "objectives",
            Self::Motivations => "motivations",
            Self::PriorArtAndChallenges => "prior-art-and-challenges",
            Self::DataSources => "data-sources",
            Self::ToolsAndImplementation => "tools-and-implementation",
            Self::Results => "results",
            Self::ContributionsAndConclusions => "contributions-and-conclusions",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the sidebar label or the slug, ignoring ASCII case and
/// surrounding whitespace.
impl FromStr for Section {
    type Err = ReportError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let name = raw.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(name) || s.slug().eq_ignore_ascii_case(name))
            .ok_or_else(|| ReportError::InvalidSection(raw.to_owned()))
    }
}

/// Wire summary of a section for `/api/sections`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub slug: &'static str,
    pub label: &'static str,
}

impl From<Section> for SectionSummary {
    fn from(section: Section) -> Self {
        Self { slug: section.slug(), label: section.label() }
    }
}

#[cfg(test)]
#[path = "section_test.rs"]
mod tests;
