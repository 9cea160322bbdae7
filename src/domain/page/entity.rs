// src/domain/page/entity.rs
use crate::domain::page::value_objects::{PageBody, PageId, PageTitle};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub title: PageTitle,
    pub slug: Slug,
    pub body: PageBody,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub is_active: bool,
    pub is_homepage: bool,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub title: PageTitle,
    pub slug: Slug,
    pub body: PageBody,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update guarded by optimistic concurrency: the write only applies
/// when the stored `updated_at` still equals `original_updated_at`.
#[derive(Debug, Clone)]
pub struct PageUpdate {
    pub id: PageId,
    pub title: Option<PageTitle>,
    pub slug: Option<Slug>,
    pub body: Option<PageBody>,
    pub meta_description: Option<Option<String>>,
    pub meta_keywords: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub clear_homepage: bool,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PageUpdate {
    pub fn new(id: PageId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            body: None,
            meta_description: None,
            meta_keywords: None,
            is_active: None,
            clear_homepage: false,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: PageTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_body(mut self, body: PageBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_meta_description(mut self, value: Option<String>) -> Self {
        self.meta_description = Some(value);
        self
    }

    pub fn with_meta_keywords(mut self, value: Option<String>) -> Self {
        self.meta_keywords = Some(value);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Clearing the flag is an ordinary field write. Setting it goes through
    /// the repository's transactional homepage switch instead.
    pub fn with_cleared_homepage(mut self) -> Self {
        self.clear_homepage = true;
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    pub fn is_noop(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.body.is_none()
            && self.meta_description.is_none()
            && self.meta_keywords.is_none()
            && self.is_active.is_none()
            && !self.clear_homepage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn update_builder_tracks_touched_fields() {
        let now = Utc::now();
        let id = PageId::new(1).unwrap();
        let update = PageUpdate::new(id, now);
        assert!(update.is_noop());

        let update = update
            .with_title(PageTitle::new("Hakkımızda").unwrap())
            .with_active(false);
        assert!(!update.is_noop());
        assert!(update.slug.is_none());
        assert_eq!(update.original_updated_at, now);
    }

    #[test]
    fn clearing_homepage_is_a_field_write() {
        let update = PageUpdate::new(PageId::new(3).unwrap(), Utc::now()).with_cleared_homepage();
        assert!(update.clear_homepage);
        assert!(!update.is_noop());
    }
}
