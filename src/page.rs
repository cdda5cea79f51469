//! HTML rendering of the report page.
//!
//! LAYOUT
//! ======
//! Wide two-column page on a dark theme: an always-expanded sidebar (site
//! title, authors, mentor, the ten-choice navigation group) and a main area
//! with the selected section's blocks in order. All text goes through maud's
//! escaping; only the stylesheet is emitted raw.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::config::SiteInfo;
use crate::navigation::Navigation;
use crate::report::{ContentBlock, Section, Table};

const THEME_CSS: &str = r"
body { margin: 0; display: flex; min-height: 100vh; font-family: sans-serif; background: #111; color: #fff; }
.sidebar { flex: 0 0 18rem; padding: 1.5rem; background: #222; color: #fff; }
.sidebar .nav-label { margin-top: 1.5rem; font-size: 0.85rem; opacity: 0.8; }
.sidebar ul { list-style: none; padding: 0; margin: 0; }
.sidebar li a { display: block; padding: 0.3rem 0; color: #fff; text-decoration: none; }
.sidebar li a::before { content: '\25CB'; margin-right: 0.5rem; }
.sidebar li.selected a::before { content: '\25C9'; }
.reportview-container { flex: 1; padding: 2rem 3rem; background: #111; color: #fff; }
.reportview-container table { border-collapse: collapse; margin: 1rem 0; }
.reportview-container th, .reportview-container td { border: 1px solid #444; padding: 0.4rem 0.6rem; text-align: left; }
";

/// Path serving `section` as a full page.
#[must_use]
pub fn section_href(section: Section) -> String {
    format!("/sections/{}", section.slug())
}

/// Full page for the current selection of `nav`.
#[must_use]
pub fn render_page(site: &SiteInfo, nav: &Navigation) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (site.title) " - " (nav.current().label()) }
                style { (PreEscaped(THEME_CSS)) }
            }
            body.layout-wide {
                (sidebar(site, nav))
                main.reportview-container {
                    @for block in &nav.content() {
                        (main_block(site, block))
                    }
                }
            }
        }
    }
}

fn sidebar(site: &SiteInfo, nav: &Navigation) -> Markup {
    html! {
        aside.sidebar.sidebar-content.expanded {
            h1.sidebar-title { (site.title) }
            h3.sidebar-subheader { (site.authors) }
            p.sidebar-mentor { "Mentor: " (site.mentor) }
            nav aria-label="Navigation" {
                p.nav-label { "Navigation" }
                ul role="radiogroup" {
                    @for section in Section::ALL {
                        @let selected = nav.is_selected(section);
                        li.selected[selected] role="radio" aria-checked=(if selected { "true" } else { "false" }) {
                            a href=(section_href(section)) aria-current=[selected.then_some("page")] {
                                (section.label())
                            }
                        }
                    }
                }
            }
        }
    }
}

/// The report title follows the configured site title so the page never
/// shows two different titles.
fn main_block(site: &SiteInfo, block: &ContentBlock) -> Markup {
    match block {
        ContentBlock::Title(_) => html! { h1 { (site.title) } },
        _ => render_block(block),
    }
}

/// One content block as markup.
#[must_use]
pub fn render_block(block: &ContentBlock) -> Markup {
    match block {
        ContentBlock::Title(text) => html! { h1 { (text) } },
        ContentBlock::Header(text) => html! { h2 { (text) } },
        ContentBlock::Subheader(text) => html! { h3 { (text) } },
        ContentBlock::Paragraph(text) => html! { p { (text) } },
        ContentBlock::List { ordered: true, items } => html! {
            ol { @for item in items { li { (item) } } }
        },
        ContentBlock::List { ordered: false, items } => html! {
            ul { @for item in items { li { (item) } } }
        },
        ContentBlock::Table(table) => render_table(table),
    }
}

fn render_table(table: &Table) -> Markup {
    html! {
        table.report-table {
            thead {
                tr { @for column in &table.columns { th scope="col" { (column) } } }
            }
            tbody {
                @for row in &table.rows {
                    tr { @for cell in row { td { (cell.to_string()) } } }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
