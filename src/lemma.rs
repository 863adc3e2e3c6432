#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Reduces a word to its base form.
///
/// The engine never constructs a lemmatizer itself; callers build one once and
/// pass it in, so tests can supply whatever behaviour they need.
pub trait Lemmatize {
    /// Returns the lemma for `word`. Implementations must at minimum
    /// lowercase their input so concept sets compare case-insensitively.
    fn lemma(&self, word: &str) -> String;
}

/// Lowercase-identity fallback used when no real lemmatizer is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatize for IdentityLemmatizer {
    fn lemma(&self, word: &str) -> String {
        word.to_lowercase()
    }
}

/// A small rule-based English noun lemmatizer.
///
/// Handles regular plural inflection only; irregular forms pass through
/// unchanged, which is acceptable because both the answer and the rule go
/// through the same rules before comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLemmatizer;

impl Lemmatize for EnglishLemmatizer {
    fn lemma(&self, word: &str) -> String {
        let word = word.to_lowercase();
        let length = word.len();

        if word.ends_with("ies") && length > 4 {
            return format!("{}y", &word[..length - 3]);
        }
        if word.ends_with("sses")
            || word.ends_with("shes")
            || word.ends_with("ches")
            || word.ends_with("xes")
            || word.ends_with("zes")
        {
            return word[..length - 2].to_string();
        }
        if word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
            && length > 3
        {
            return word[..length - 1].to_string();
        }

        word
    }
}
