//! Dashboard Routes
//!
//! - GET / - Full dashboard document
//! - GET /fragments/courses - Course list markup only
//!
//! Both accept `search` and `category` query parameters. Filtering works on
//! a copy of the page, so concurrent requests never see each other's
//! filters.

use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::page::ElementId;
use crate::store::FilterParams;
use crate::view::render_document;

/// GET /
///
/// Without filter parameters the course list is shown as loaded
/// (including a load failure message).
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> ApiResult<Html<String>> {
    let mut page = state.dashboard.page().await;

    if params.search.is_some() || params.category.is_some() {
        let filter = params.to_filter();

        // Controls absent from the page simply keep no value
        let _ = page.set_value(
            ElementId::CourseSearch,
            params.search.clone().unwrap_or_default(),
        );
        let _ = page.set_value(ElementId::CategoryFilter, filter.category.as_str());

        let markup = state.dashboard.filtered_markup(&filter).await?;
        if let Err(e) = page.set_markup(ElementId::CoursesList, markup) {
            tracing::warn!("Course list missing from page: {}", e);
        }
    }

    let categories = state.dashboard.categories().await;
    Ok(Html(render_document(&page, &categories)?))
}

/// GET /fragments/courses
pub async fn courses_fragment(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> ApiResult<Html<String>> {
    let filter = params.to_filter();
    Ok(Html(state.dashboard.filtered_markup(&filter).await?))
}
