//! HTTP API for the Rolodex record store.
//!
//! Exposes the customer record set over REST with the duplicate-guard
//! middleware running ahead of persistence on the mutation routes. List
//! responses carry the page-count indicator in the JSON envelope.

mod error;
mod guard;
mod routes;

pub use error::ApiError;

use axum::routing::{get, patch};
use axum::{middleware, Router};
use rolodex_store::MemoryStore;
use rolodex_validate::CustomerValidator;
use std::sync::Arc;

/// Shared server state: the authoritative store and the draft validator.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemoryStore>,
    pub validator: Arc<CustomerValidator>,
}

/// Build the HTTP API router with the given state.
///
/// The duplicate guard is a request layer over the whole router; it
/// inspects method + path and only acts on `POST /customers` and
/// `PATCH /customers/{id}`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/customers",
            get(routes::list_customers).post(routes::create_customer),
        )
        .route(
            "/customers/{id}",
            patch(routes::update_customer).delete(routes::delete_customer),
        )
        .route("/titles", get(routes::titles))
        .route("/countries", get(routes::countries))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            guard::duplicate_guard,
        ))
        .with_state(state)
}
