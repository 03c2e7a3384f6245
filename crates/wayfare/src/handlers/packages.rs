//! Public package browsing.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use wayfare_core::domain::Package;

use crate::models::SearchQuery;
use crate::state::AppState;

use super::error::AppError;

/// The three most recent packages, for the landing page.
pub async fn featured(State(state): State<AppState>) -> Result<Json<Vec<Package>>, AppError> {
    let packages = state.store.featured_packages(3).await?;
    Ok(Json(packages))
}

/// All packages, or a case-insensitive title/location search when `q` is
/// present.
pub async fn explore(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Package>>, AppError> {
    let packages = match query.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => state.store.search_packages(q).await?,
        _ => state.store.list_packages().await?,
    };
    Ok(Json(packages))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Package>, AppError> {
    let package = state.store.get_package(id).await?;
    Ok(Json(package))
}
