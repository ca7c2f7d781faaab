//! Course Routes
//!
//! - GET /api/v1/courses - Filtered active courses as JSON
//! - GET /api/v1/categories - Distinct categories

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::CoursesResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::store::FilterParams;

/// GET /api/v1/courses
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> ApiResult<Json<CoursesResponse>> {
    ensure_loaded(&state).await?;

    let filter = params.to_filter();
    let courses = state.dashboard.filtered_courses(&filter).await;

    Ok(Json(CoursesResponse {
        count: courses.len(),
        search: filter.search().to_string(),
        category: filter.category.as_str().to_string(),
        courses,
    }))
}

/// GET /api/v1/categories
pub async fn list_categories(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<String>>> {
    ensure_loaded(&state).await?;
    Ok(Json(state.dashboard.categories().await))
}

async fn ensure_loaded(state: &AppState) -> ApiResult<()> {
    if state.dashboard.is_loaded().await {
        Ok(())
    } else {
        Err(ApiError::ServiceUnavailable(
            "course catalogue not loaded".to_string(),
        ))
    }
}
