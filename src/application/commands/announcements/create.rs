// src/application/commands/announcements/create.rs
use super::service::AnnouncementCommandService;
use crate::{
    application::{dto::AnnouncementDto, error::ApplicationResult},
    domain::{
        announcement::{
            AnnouncementBody, AnnouncementTitle, NewAnnouncement,
            value_objects::{SUMMARY_MAX_LEN, TAGS_MAX_LEN},
        },
        page::value_objects::validate_optional_len,
    },
};
use chrono::{DateTime, Utc};

pub struct CreateAnnouncementCommand {
    pub title: String,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub body: String,
    pub is_active: bool,
    pub is_pinned: bool,
    pub publish_date: Option<DateTime<Utc>>,
    pub tags: Option<String>,
}

impl AnnouncementCommandService {
    pub async fn create_announcement(
        &self,
        command: CreateAnnouncementCommand,
    ) -> ApplicationResult<AnnouncementDto> {
        let title = AnnouncementTitle::new(command.title)?;
        let body = AnnouncementBody::new(command.body)?;
        let summary = validate_optional_len("summary", command.summary, SUMMARY_MAX_LEN)?;
        let tags = validate_optional_len("tags", command.tags, TAGS_MAX_LEN)?;

        let slug = self
            .slug_assignment
            .assign(
                self.read_repo.as_ref(),
                title.as_str(),
                command.slug.as_deref(),
                None,
            )
            .await?;

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewAnnouncement {
                title,
                slug,
                summary,
                body,
                is_active: command.is_active,
                is_pinned: command.is_pinned,
                publish_date: command.publish_date,
                tags,
                created_at: now,
                updated_at: now,
            })
            .await?;

        Ok(created.into())
    }
}
