//! HTTP client binding for the record store REST surface.
//!
//! Maps response statuses onto the store error taxonomy: 400 carries a
//! duplicate-guard conflict, 404 a missing target, 422 a server-side
//! validation rejection; anything else non-2xx is a transport failure.

use crate::{RecordStore, StoreError, StoreResult};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use rolodex_types::{Customer, CustomerDraft, CustomerId, CustomerPage};
use serde::Deserialize;
use tracing::debug;

/// Error body shape shared with the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// A reqwest-backed [`RecordStore`] speaking to a remote server.
pub struct HttpStore {
    base_url: String,
    client: Client,
}

impl HttpStore {
    /// Creates a store client for the given base URL (no trailing slash
    /// required).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Converts a non-2xx response into a `StoreError`. `target` is the
    /// record id the request addressed, when there is one.
    async fn error_from(response: Response, target: Option<CustomerId>) -> StoreError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("HTTP {status}"),
        };
        match status {
            StatusCode::BAD_REQUEST => StoreError::Conflict(message),
            StatusCode::NOT_FOUND => match target {
                Some(id) => StoreError::NotFound(id),
                None => StoreError::Transport(message),
            },
            StatusCode::UNPROCESSABLE_ENTITY => StoreError::Validation(message),
            _ => StoreError::Transport(format!("{status}: {message}")),
        }
    }

    async fn fetch_options(&self, path: &str) -> StoreResult<Vec<String>> {
        let response = self.client.get(self.url(path)).send().await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, None).await);
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl RecordStore for HttpStore {
    async fn list(&self, search: &str, page: u32) -> StoreResult<CustomerPage> {
        debug!(search, page, "listing customers");
        let page_param = page.to_string();
        let response = self
            .client
            .get(self.url("/customers"))
            .query(&[("search", search), ("page", page_param.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, None).await);
        }
        Ok(response.json().await?)
    }

    async fn create(&self, draft: &CustomerDraft) -> StoreResult<Customer> {
        let response = self
            .client
            .post(self.url("/customers"))
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, None).await);
        }
        Ok(response.json().await?)
    }

    async fn update(&self, id: CustomerId, draft: &CustomerDraft) -> StoreResult<Customer> {
        let response = self
            .client
            .patch(self.url(&format!("/customers/{id}")))
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, Some(id)).await);
        }
        Ok(response.json().await?)
    }

    async fn delete(&self, id: CustomerId) -> StoreResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/customers/{id}")))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from(response, Some(id)).await);
        }
        Ok(())
    }

    async fn titles(&self) -> StoreResult<Vec<String>> {
        self.fetch_options("/titles").await
    }

    async fn countries(&self) -> StoreResult<Vec<String>> {
        self.fetch_options("/countries").await
    }
}
