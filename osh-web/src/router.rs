use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers::{contributors, facility_data, facility_page, field_sources, index};
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/facilities/:os_id", get(facility_page))
        .route("/facilities/:os_id/contributors", get(contributors))
        .route("/facilities/:os_id/sources", get(field_sources))
        .route("/facilities/:os_id/data.json", get(facility_data))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}
