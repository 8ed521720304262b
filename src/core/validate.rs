//! Peer id and API key format checks. Empty input is always accepted.

use once_cell::sync::Lazy;
use regex::Regex;

static PEER_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+(?:[ _-][A-Za-z0-9]+)*$").expect("peer id regex"));

static API_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]{8}(-[a-z0-9]{4}){3}-[a-z0-9]{12}$").expect("api key regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation<'a> {
    /// Nothing to check. Absence of an id is not an error.
    Empty,
    Matched(&'a str),
    Rejected,
}

impl Validation<'_> {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Validation::Rejected)
    }
}

fn check<'a>(re: &Regex, value: &'a str) -> Validation<'a> {
    if value.is_empty() {
        return Validation::Empty;
    }
    match re.find(value) {
        Some(m) => Validation::Matched(m.as_str()),
        None => Validation::Rejected,
    }
}

/// Runs of `[A-Za-z0-9_-]`, optionally joined by a single space, `_` or `-`
/// followed by an alphanumeric run.
pub fn validate_id(id: &str) -> Validation<'_> {
    check(&PEER_ID, id)
}

/// 8-4-4-4-12 groups of `[a-z0-9]` separated by hyphens.
pub fn validate_key(key: &str) -> Validation<'_> {
    check(&API_KEY, key)
}
