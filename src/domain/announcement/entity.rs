// src/domain/announcement/entity.rs
use crate::domain::announcement::value_objects::{
    AnnouncementBody, AnnouncementId, AnnouncementTitle,
};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Announcement {
    pub id: AnnouncementId,
    pub title: AnnouncementTitle,
    pub slug: Slug,
    pub summary: Option<String>,
    pub body: AnnouncementBody,
    pub is_active: bool,
    pub is_pinned: bool,
    pub publish_date: Option<DateTime<Utc>>,
    pub tags: Option<String>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub title: AnnouncementTitle,
    pub slug: Slug,
    pub summary: Option<String>,
    pub body: AnnouncementBody,
    pub is_active: bool,
    pub is_pinned: bool,
    pub publish_date: Option<DateTime<Utc>>,
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AnnouncementUpdate {
    pub id: AnnouncementId,
    pub title: Option<AnnouncementTitle>,
    pub slug: Option<Slug>,
    pub summary: Option<Option<String>>,
    pub body: Option<AnnouncementBody>,
    pub is_active: Option<bool>,
    pub is_pinned: Option<bool>,
    pub publish_date: Option<Option<DateTime<Utc>>>,
    pub tags: Option<Option<String>>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AnnouncementUpdate {
    pub fn new(id: AnnouncementId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            summary: None,
            body: None,
            is_active: None,
            is_pinned: None,
            publish_date: None,
            tags: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: AnnouncementTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_body(mut self, body: AnnouncementBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_pinned(mut self, is_pinned: bool) -> Self {
        self.is_pinned = Some(is_pinned);
        self
    }

    pub fn with_publish_date(mut self, publish_date: Option<DateTime<Utc>>) -> Self {
        self.publish_date = Some(publish_date);
        self
    }

    pub fn with_tags(mut self, tags: Option<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}
