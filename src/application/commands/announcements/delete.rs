// src/application/commands/announcements/delete.rs
use super::service::AnnouncementCommandService;
use crate::{application::error::ApplicationResult, domain::announcement::AnnouncementId};

pub struct DeleteAnnouncementCommand {
    pub id: i64,
}

impl AnnouncementCommandService {
    pub async fn delete_announcement(
        &self,
        command: DeleteAnnouncementCommand,
    ) -> ApplicationResult<()> {
        let id = AnnouncementId::new(command.id)?;
        self.write_repo.delete(id).await?;
        Ok(())
    }
}
