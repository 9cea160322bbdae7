// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

/// ASCII approximations for the Turkish letters that appear in titles.
/// Applied before lowercasing so that characters like 'İ' never go through
/// Unicode case folding (which would introduce a combining dot).
const LOCALE_FOLD: &[(char, char)] = &[
    ('ç', 'c'),
    ('Ç', 'c'),
    ('ğ', 'g'),
    ('Ğ', 'g'),
    ('ı', 'i'),
    ('İ', 'i'),
    ('ö', 'o'),
    ('Ö', 'o'),
    ('ş', 's'),
    ('Ş', 's'),
    ('ü', 'u'),
    ('Ü', 'u'),
];

fn fold_locale(ch: char) -> char {
    LOCALE_FOLD
        .iter()
        .find(|(from, _)| *from == ch)
        .map_or(ch, |(_, to)| *to)
}

/// Derive a URL-safe identifier from a free-text title.
///
/// Lowercases, substitutes the fixed locale table, turns every run of
/// characters outside `[a-z0-9]` into a single hyphen and trims hyphens at
/// both ends. Pure and deterministic; empty input yields an empty string.
pub fn generate_slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.chars() {
        let ch = fold_locale(ch).to_ascii_lowercase();
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            out.push(ch);
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// Normalized, URL-safe identifier derived from a title. Unique within its
/// owning content type's table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Accepts only the canonical form: `^[a-z0-9]+(-[a-z0-9]+)*$`.
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        let canonical = value
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
        if canonical {
            Ok(Self(value))
        } else {
            Err(DomainError::Validation(format!(
                "slug '{value}' must be lowercase letters, digits and single hyphens"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Lookup of the record currently owning a slug within one content type's
/// uniqueness scope. Each read repository implements this against its own
/// table.
#[async_trait]
pub trait SlugIndex: Send + Sync {
    async fn find_owner(&self, slug: &Slug) -> DomainResult<Option<i64>>;
}
