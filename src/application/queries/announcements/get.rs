// src/application/queries/announcements/get.rs
use super::service::AnnouncementQueryService;
use crate::{
    application::{
        dto::AnnouncementDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{announcement::AnnouncementId, slug::Slug},
};

pub struct GetAnnouncementByIdQuery {
    pub id: i64,
}

pub struct GetPublishedAnnouncementQuery {
    pub slug: String,
}

impl AnnouncementQueryService {
    pub async fn get_announcement_by_id(
        &self,
        query: GetAnnouncementByIdQuery,
    ) -> ApplicationResult<AnnouncementDto> {
        let id = AnnouncementId::new(query.id)?;
        let announcement = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("announcement not found"))?;
        Ok(announcement.into())
    }

    /// Public detail lookup. Inactive records are reported as missing, with
    /// no further detail; a hit bumps the view counter.
    pub async fn get_published_by_slug(
        &self,
        query: GetPublishedAnnouncementQuery,
    ) -> ApplicationResult<AnnouncementDto> {
        let Ok(slug) = Slug::parse(query.slug) else {
            return Err(ApplicationError::not_found("announcement not found"));
        };
        match self.read_repo.find_by_slug(&slug).await? {
            Some(announcement) if announcement.is_active => {
                self.bump_view_count(announcement.id);
                Ok(announcement.into())
            }
            _ => Err(ApplicationError::not_found("announcement not found")),
        }
    }
}
