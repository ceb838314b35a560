//! Duplicate-guard request middleware.
//!
//! Runs ahead of persistence on `POST /customers` (create) and
//! `PATCH /customers/{id}` (update with self exclusion); every other
//! request passes through untouched. The comparison set is re-read from
//! the store on each request — never cached across requests.

use crate::{ApiError, AppState};
use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use rolodex_store::guard::{is_duplicate, CREATE_CONFLICT, UPDATE_CONFLICT};
use rolodex_types::{CustomerDraft, CustomerId};
use tracing::debug;

const BODY_LIMIT: usize = 64 * 1024;

enum GuardVariant {
    Create,
    Update(CustomerId),
}

/// Which guard variant applies, from the request method + path.
fn variant_for(method: &Method, path: &str) -> Option<GuardVariant> {
    if method == Method::POST && path == "/customers" {
        return Some(GuardVariant::Create);
    }
    if method == Method::PATCH {
        // An unparseable id falls through to the handler's extractor.
        let id = path.strip_prefix("/customers/")?;
        return CustomerId::parse(id).ok().map(GuardVariant::Update);
    }
    None
}

pub async fn duplicate_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(variant) = variant_for(request.method(), request.uri().path()) else {
        return Ok(next.run(request).await);
    };

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|e| ApiError::Store(rolodex_store::StoreError::Transport(e.to_string())))?;

    // A malformed body passes through so the handler's Json extractor
    // produces the rejection.
    if let Ok(draft) = serde_json::from_slice::<CustomerDraft>(&bytes) {
        let (exclude, message) = match &variant {
            GuardVariant::Create => (None, CREATE_CONFLICT),
            GuardVariant::Update(id) => (Some(*id), UPDATE_CONFLICT),
        };
        let existing = state.store.snapshot().await;
        if is_duplicate(&draft, &existing, exclude) {
            debug!(email = %draft.email, "duplicate guard rejected write");
            return Err(ApiError::conflict(message));
        }
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
