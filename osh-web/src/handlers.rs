use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;

use crate::error::{Result, WebError};
use crate::models::{find_field, ContributorsQuery, PageQuery, PageState, SourcesQuery};
use crate::state::AppState;
use crate::templates::{
    ContributorsPageTemplate, ContributorsPanelTemplate, FacilityTemplate, FieldSourcesTemplate,
};

/// The demo deployment hosts a single location; the root redirects there.
pub async fn index(State(state): State<AppState>) -> Redirect {
    Redirect::to(&format!("/facilities/{}", state.bundle.facility.os_id))
}

pub async fn facility_page(
    State(state): State<AppState>,
    Path(os_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Response> {
    state.bundle.ensure_os_id(&os_id)?;
    let page_state = PageState::from_query(&os_id, &query);
    tracing::debug!(section = %page_state.active_section, "rendering facility page");
    let template = FacilityTemplate::build(&state.bundle, &page_state);
    Ok(template.into_response())
}

/// All-contributors drawer. HTMX requests get just the panel; direct
/// navigation gets a full page around it.
pub async fn contributors(
    State(state): State<AppState>,
    Path(os_id): Path<String>,
    Query(query): Query<ContributorsQuery>,
    headers: HeaderMap,
) -> Result<Response> {
    state.bundle.ensure_os_id(&os_id)?;
    let view_recent = query.view.as_deref() == Some("recent");

    let is_htmx = headers.get("HX-Request").is_some();
    if is_htmx {
        Ok(ContributorsPanelTemplate::build(&state.bundle, view_recent).into_response())
    } else {
        Ok(ContributorsPageTemplate::build(&state.bundle, view_recent).into_response())
    }
}

/// "+N data sources" drawer for one field.
pub async fn field_sources(
    State(state): State<AppState>,
    Path(os_id): Path<String>,
    Query(query): Query<SourcesQuery>,
) -> Result<Response> {
    state.bundle.ensure_os_id(&os_id)?;
    let field = find_field(&state.bundle, &query.field)
        .ok_or_else(|| WebError::UnknownField(query.field.clone()))?;
    Ok(FieldSourcesTemplate::build(&field).into_response())
}

/// Raw JSON export of the profile data, linked from the footer.
pub async fn facility_data(
    State(state): State<AppState>,
    Path(os_id): Path<String>,
) -> Result<Response> {
    state.bundle.ensure_os_id(&os_id)?;
    Ok(Json(state.bundle.as_ref().clone()).into_response())
}
