//! Named predicates over a single text field.
//!
//! Each rule is a pure function so it can be unit-tested in isolation;
//! the validator decides ordering and error text. Character checks are
//! spelled out with iterators rather than pattern literals so rule changes
//! stay auditable.

/// Symbols a name field may carry alongside letters and spaces.
pub const NAME_SYMBOLS: [char; 3] = ['\'', '.', '-'];

/// True when the text has no content after trimming whitespace.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// True when every character is an ASCII letter, a space, or one of the
/// allowed name symbols.
#[must_use]
pub fn has_only_allowed_characters(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_alphabetic() || c == ' ' || NAME_SYMBOLS.contains(&c))
}

/// True when every whitespace-separated word starts with an ASCII
/// uppercase letter (not a symbol, not lowercase).
#[must_use]
pub fn words_start_capitalized(text: &str) -> bool {
    text.split_whitespace()
        .all(|word| word.chars().next().is_some_and(|c| c.is_ascii_uppercase()))
}

/// True when each allowed symbol occurs at most once in the entire value.
///
/// The scope is the whole field, not individual words: `O'Brien-Smith`
/// passes (one apostrophe, one hyphen) while `O'Bri'en` fails (the
/// apostrophe repeats).
#[must_use]
pub fn symbols_unique(text: &str) -> bool {
    NAME_SYMBOLS
        .iter()
        .all(|&symbol| text.chars().filter(|&c| c == symbol).count() <= 1)
}

/// True when the value neither starts nor ends with whitespace and never
/// contains two consecutive spaces.
#[must_use]
pub fn has_clean_spacing(text: &str) -> bool {
    !text.starts_with(char::is_whitespace)
        && !text.ends_with(char::is_whitespace)
        && !text.contains("  ")
}

/// Structural address-shape check: one `@` separating a non-empty local
/// part from a domain that carries a dot-separated, non-empty suffix.
#[must_use]
pub fn looks_like_email(text: &str) -> bool {
    if text.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, suffix)) => !host.is_empty() && !suffix.is_empty(),
        None => false,
    }
}

/// True when the value is one of the configured options. Exact match —
/// option lists are server-provided reference data, not user text.
#[must_use]
pub fn is_known_option(text: &str, options: &[String]) -> bool {
    options.iter().any(|option| option == text)
}
