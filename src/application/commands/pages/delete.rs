// src/application/commands/pages/delete.rs
use super::service::PageCommandService;
use crate::{application::error::ApplicationResult, domain::page::PageId};

pub struct DeletePageCommand {
    pub id: i64,
}

impl PageCommandService {
    pub async fn delete_page(&self, command: DeletePageCommand) -> ApplicationResult<()> {
        let id = PageId::new(command.id)?;
        self.write_repo.delete(id).await?;
        Ok(())
    }
}
