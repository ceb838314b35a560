//! The per-field validation pipeline and its aggregated report.

use crate::rules;
use rolodex_types::CustomerDraft;
use std::collections::BTreeMap;
use std::fmt;

/// Fields of a customer submission, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Title,
    Country,
}

impl Field {
    /// Wire name of the field, matching the record's JSON shape.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Title => "title",
            Self::Country => "country",
        }
    }

    /// Human-readable label used inside error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Email => "email address",
            Self::Title => "title",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid(String),
}

impl FieldStatus {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The error message, when invalid.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

/// Aggregated validation outcome for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    fields: BTreeMap<Field, FieldStatus>,
}

impl ValidationReport {
    /// True when every field is valid — the submission may proceed.
    #[must_use]
    pub fn is_acceptable(&self) -> bool {
        self.fields.values().all(FieldStatus::is_valid)
    }

    /// Status of a single field.
    #[must_use]
    pub fn field(&self, field: Field) -> &FieldStatus {
        &self.fields[&field]
    }

    /// Iterates over (field, message) pairs for every invalid field.
    pub fn errors(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields
            .iter()
            .filter_map(|(field, status)| status.message().map(|m| (*field, m)))
    }
}

/// Immutable configuration for the validator: the server-provided option
/// lists a selection field must match.
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    pub titles: Vec<String>,
    pub countries: Vec<String>,
}

/// Validates customer drafts against the field grammar.
#[derive(Debug, Clone)]
pub struct CustomerValidator {
    config: ValidatorConfig,
}

impl CustomerValidator {
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Runs every field pipeline over the draft. Pure and deterministic;
    /// used both to gate submission and to render inline error text.
    #[must_use]
    pub fn validate(&self, draft: &CustomerDraft) -> ValidationReport {
        let mut fields = BTreeMap::new();
        fields.insert(Field::FirstName, check_name(Field::FirstName, &draft.first_name));
        fields.insert(Field::LastName, check_name(Field::LastName, &draft.last_name));
        fields.insert(Field::Email, check_email(&draft.email));
        fields.insert(
            Field::Title,
            check_selection(Field::Title, &draft.title, &self.config.titles),
        );
        fields.insert(
            Field::Country,
            check_selection(Field::Country, &draft.country, &self.config.countries),
        );
        ValidationReport { fields }
    }
}

/// Name pipeline, first failure wins. Rule order matters: the blank check
/// runs before any shape rule so an empty field reports "please fill", and
/// spacing hygiene runs last so structural violations surface first.
fn check_name(field: Field, value: &str) -> FieldStatus {
    if rules::is_blank(value) {
        return FieldStatus::Invalid(format!("Please fill the {}", field.label()));
    }
    if !rules::has_only_allowed_characters(value) {
        return FieldStatus::Invalid(
            "Must contain only English alphabets and ( ' . - ) symbols".to_string(),
        );
    }
    if !rules::words_start_capitalized(value) {
        return FieldStatus::Invalid(
            "First character must be capitalized and not a symbol".to_string(),
        );
    }
    if !rules::symbols_unique(value) {
        return FieldStatus::Invalid(
            "Each word can contain only one of these symbols: ( ' . - )".to_string(),
        );
    }
    if !rules::has_clean_spacing(value) {
        return FieldStatus::Invalid("Incorrect spacebar format".to_string());
    }
    FieldStatus::Valid
}

fn check_email(value: &str) -> FieldStatus {
    if rules::is_blank(value) {
        return FieldStatus::Invalid("Please fill the email address".to_string());
    }
    if !rules::looks_like_email(value) {
        return FieldStatus::Invalid("Invalid email".to_string());
    }
    FieldStatus::Valid
}

fn check_selection(field: Field, value: &str, options: &[String]) -> FieldStatus {
    if rules::is_blank(value) || !rules::is_known_option(value, options) {
        return FieldStatus::Invalid(format!("Please select {}", field.label()));
    }
    FieldStatus::Valid
}
