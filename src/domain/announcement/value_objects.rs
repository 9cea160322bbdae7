use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const TITLE_MAX_LEN: usize = 200;
pub const SUMMARY_MAX_LEN: usize = 500;
pub const TAGS_MAX_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnouncementId(pub i64);

impl AnnouncementId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "announcement id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AnnouncementId> for i64 {
    fn from(value: AnnouncementId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementTitle(String);

impl AnnouncementTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > TITLE_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "title cannot exceed {TITLE_MAX_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnnouncementTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<AnnouncementTitle> for String {
    fn from(value: AnnouncementTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementBody(String);

impl AnnouncementBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("body cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<AnnouncementBody> for String {
    fn from(value: AnnouncementBody) -> Self {
        value.0
    }
}
