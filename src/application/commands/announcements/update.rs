// src/application/commands/announcements/update.rs
use super::service::AnnouncementCommandService;
use crate::{
    application::{
        dto::AnnouncementDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        announcement::{
            AnnouncementBody, AnnouncementId, AnnouncementTitle, AnnouncementUpdate,
            value_objects::{SUMMARY_MAX_LEN, TAGS_MAX_LEN},
        },
        page::value_objects::validate_optional_len,
    },
};
use chrono::{DateTime, Utc};

pub struct UpdateAnnouncementCommand {
    pub id: i64,
    pub title: Option<String>,
    /// Same contract as for pages: `None` keeps, empty string recomputes.
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub is_active: Option<bool>,
    pub is_pinned: Option<bool>,
    pub publish_date: Option<Option<DateTime<Utc>>>,
    pub tags: Option<String>,
}

impl AnnouncementCommandService {
    pub async fn update_announcement(
        &self,
        command: UpdateAnnouncementCommand,
    ) -> ApplicationResult<AnnouncementDto> {
        let id = AnnouncementId::new(command.id)?;
        let announcement = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("announcement not found"))?;

        let mut update = AnnouncementUpdate::new(id, announcement.updated_at);
        let mut touched = false;

        let title = command.title.map(AnnouncementTitle::new).transpose()?;
        let effective_title = title.clone().unwrap_or_else(|| announcement.title.clone());

        if let Some(requested) = command.slug {
            let requested = if requested.trim().is_empty() {
                None
            } else {
                Some(requested)
            };
            let slug = self
                .slug_assignment
                .assign(
                    self.read_repo.as_ref(),
                    effective_title.as_str(),
                    requested.as_deref(),
                    Some(id.into()),
                )
                .await?;
            if slug != announcement.slug {
                update = update.with_slug(slug);
                touched = true;
            }
        }

        if let Some(title) = title {
            update = update.with_title(title);
            touched = true;
        }
        if let Some(summary) = command.summary {
            let summary = validate_optional_len("summary", Some(summary), SUMMARY_MAX_LEN)?;
            update = update.with_summary(summary);
            touched = true;
        }
        if let Some(body) = command.body {
            update = update.with_body(AnnouncementBody::new(body)?);
            touched = true;
        }
        if let Some(is_active) = command.is_active {
            update = update.with_active(is_active);
            touched = true;
        }
        if let Some(is_pinned) = command.is_pinned {
            update = update.with_pinned(is_pinned);
            touched = true;
        }
        if let Some(publish_date) = command.publish_date {
            update = update.with_publish_date(publish_date);
            touched = true;
        }
        if let Some(tags) = command.tags {
            let tags = validate_optional_len("tags", Some(tags), TAGS_MAX_LEN)?;
            update = update.with_tags(tags);
            touched = true;
        }

        if !touched {
            return Ok(announcement.into());
        }

        update.set_updated_at(self.clock.now());
        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
