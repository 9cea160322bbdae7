use crate::domain::page::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub is_active: bool,
    pub is_homepage: bool,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id.into(),
            title: page.title.into(),
            slug: page.slug.into(),
            body: page.body.into(),
            meta_description: page.meta_description,
            meta_keywords: page.meta_keywords,
            is_active: page.is_active,
            is_homepage: page.is_homepage,
            view_count: page.view_count,
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}
