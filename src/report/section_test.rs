use super::*;

#[test]
fn all_has_ten_distinct_sections() {
    assert_eq!(Section::ALL.len(), 10);
    for (i, a) in Section::ALL.iter().enumerate() {
        for b in &Section::ALL[i + 1..] {
            assert_ne!(a, b);
            assert_ne!(a.slug(), b.slug());
            assert_ne!(a.label(), b.label());
        }
    }
}

#[test]
fn all_starts_with_abstract_and_matches_default() {
    assert_eq!(Section::ALL[0], Section::Abstract);
    assert_eq!(Section::default(), Section::Abstract);
    assert_eq!(Section::ALL[9], Section::ContributionsAndConclusions);
}

#[test]
fn labels_are_verbatim() {
    let labels: Vec<&str> = Section::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(
        labels,
        [
            "Abstract",
            "Introduction",
            "Goals",
            "Objectives",
            "Motivations",
            "Prior Art & Challenges",
            "Data Sources",
            "Tools & Implementation",
            "Results",
            "Contributions & Conclusions",
        ]
    );
}

#[test]
fn parses_label_and_slug() {
    for section in Section::ALL {
        assert_eq!(section.label().parse::<Section>().unwrap(), section);
        assert_eq!(section.slug().parse::<Section>().unwrap(), section);
    }
}

#[test]
fn parse_ignores_case_and_whitespace() {
    assert_eq!("  data sources ".parse::<Section>().unwrap(), Section::DataSources);
    assert_eq!("RESULTS".parse::<Section>().unwrap(), Section::Results);
    assert_eq!("Prior-Art-And-Challenges".parse::<Section>().unwrap(), Section::PriorArtAndChallenges);
}

#[test]
fn parse_unknown_is_invalid_section() {
    let err = "Appendix".parse::<Section>().unwrap_err();
    assert!(matches!(err, ReportError::InvalidSection(ref name) if name == "Appendix"));
    assert_eq!(err.to_string(), "invalid section: Appendix");
}

#[test]
fn parse_empty_is_invalid_section() {
    assert!(matches!("".parse::<Section>(), Err(ReportError::InvalidSection(_))));
    assert!(matches!("   ".parse::<Section>(), Err(ReportError::InvalidSection(_))));
}

#[test]
fn display_uses_label() {
    assert_eq!(Section::ToolsAndImplementation.to_string(), "Tools & Implementation");
}

#[test]
fn summary_carries_slug_and_label() {
    let summary = SectionSummary::from(Section::DataSources);
    assert_eq!(summary, SectionSummary { slug: "data-sources", label: "Data Sources" });
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["slug"], "data-sources");
    assert_eq!(json["label"], "Data Sources");
}
