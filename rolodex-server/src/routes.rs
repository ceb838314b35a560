//! REST handlers for the customer record set.

use crate::{ApiError, AppState};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use rolodex_store::RecordStore;
use rolodex_types::{Customer, CustomerDraft, CustomerId, CustomerPage};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub search: String,
    #[serde(default = "first_page")]
    pub page: u32,
}

const fn first_page() -> u32 {
    1
}

pub async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<CustomerPage>, ApiError> {
    let page = state.store.list(&params.search, params.page).await?;
    Ok(Json(page))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(draft): Json<CustomerDraft>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let report = state.validator.validate(&draft);
    if !report.is_acceptable() {
        return Err(ApiError::Validation(report));
    }
    let created = state.store.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    Json(draft): Json<CustomerDraft>,
) -> Result<Json<Customer>, ApiError> {
    let report = state.validator.validate(&draft);
    if !report.is_acceptable() {
        return Err(ApiError::Validation(report));
    }
    let updated = state.store.update(id, &draft).await?;
    Ok(Json(updated))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn titles(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.store.titles().await?))
}

pub async fn countries(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.store.countries().await?))
}
