//! The customer record model.
//!
//! Wire format is camelCase JSON (`firstName`, `lastName`, ...) to match
//! the REST surface of the record store.

use crate::CustomerId;
use serde::{Deserialize, Serialize};

/// A persisted customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Store-assigned identity; unique within the store.
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub email: String,
    pub country: String,
}

/// A candidate customer record, before the store has assigned an identity.
/// The payload for create and update submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub email: String,
    pub country: String,
}

impl Customer {
    /// Builds a record from a draft and a store-assigned identity.
    #[must_use]
    pub fn from_draft(id: CustomerId, draft: &CustomerDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            title: draft.title.clone(),
            email: draft.email.clone(),
            country: draft.country.clone(),
        }
    }

    /// Overwrites every non-identity field from a draft. The id is stable.
    pub fn apply_draft(&mut self, draft: &CustomerDraft) {
        self.first_name = draft.first_name.clone();
        self.last_name = draft.last_name.clone();
        self.title = draft.title.clone();
        self.email = draft.email.clone();
        self.country = draft.country.clone();
    }

    /// The draft form of this record, e.g. for pre-filling an edit surface.
    #[must_use]
    pub fn as_draft(&self) -> CustomerDraft {
        CustomerDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            title: self.title.clone(),
            email: self.email.clone(),
            country: self.country.clone(),
        }
    }
}
