//! Section page and section content routes.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::navigation::Navigation;
use crate::page;
use crate::report::{self, ContentBlock, ReportError, Section, SectionSummary};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub section: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SectionContent {
    pub slug: &'static str,
    pub label: &'static str,
    pub blocks: Vec<ContentBlock>,
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let status = report_error_to_status(&self);
        warn!(error = %self, %status, "rejected section request");
        (status, self.to_string()).into_response()
    }
}

pub(crate) fn report_error_to_status(err: &ReportError) -> StatusCode {
    match err {
        ReportError::InvalidSection(_) => StatusCode::NOT_FOUND,
    }
}

/// `GET /`: page for the first section, or the one named by `?section=`.
///
/// A query that does not deserialize (e.g. `section` given twice) names no
/// single section and is rejected as `InvalidSection`.
pub async fn index(
    State(state): State<AppState>,
    query: Result<Query<IndexQuery>, QueryRejection>,
) -> Result<Html<String>, ReportError> {
    let Query(query) = query.map_err(|rejection| ReportError::InvalidSection(rejection.body_text()))?;
    let mut nav = Navigation::new();
    if let Some(name) = query.section.as_deref() {
        nav.select_named(name)?;
    }
    Ok(render(&state, &nav))
}

/// `GET /sections/:slug`: page with that section selected.
pub async fn section_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, ReportError> {
    let mut nav = Navigation::new();
    nav.select_named(&slug)?;
    Ok(render(&state, &nav))
}

/// `GET /api/sections`: every section in sidebar order.
pub async fn list_sections() -> Json<Vec<SectionSummary>> {
    Json(Section::ALL.into_iter().map(SectionSummary::from).collect())
}

/// `GET /api/sections/:slug`: the blocks of one section.
pub async fn section_content(Path(slug): Path<String>) -> Result<Json<SectionContent>, ReportError> {
    let section: Section = slug.parse()?;
    Ok(Json(SectionContent { slug: section.slug(), label: section.label(), blocks: report::render(section) }))
}

fn render(state: &AppState, nav: &Navigation) -> Html<String> {
    Html(page::render_page(&state.site, nav).into_string())
}

#[cfg(test)]
#[path = "sections_test.rs"]
mod tests;
