use crate::domain::announcement::Announcement;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub body: String,
    pub is_active: bool,
    pub is_pinned: bool,
    pub publish_date: Option<DateTime<Utc>>,
    pub tags: Option<String>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Announcement> for AnnouncementDto {
    fn from(announcement: Announcement) -> Self {
        Self {
            id: announcement.id.into(),
            title: announcement.title.into(),
            slug: announcement.slug.into(),
            summary: announcement.summary,
            body: announcement.body.into(),
            is_active: announcement.is_active,
            is_pinned: announcement.is_pinned,
            publish_date: announcement.publish_date,
            tags: announcement.tags,
            view_count: announcement.view_count,
            created_at: announcement.created_at,
            updated_at: announcement.updated_at,
        }
    }
}
