// src/application/commands/pages/set_homepage.rs
use super::service::PageCommandService;
use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::PageId,
};

pub struct SetHomepageCommand {
    pub id: i64,
}

impl PageCommandService {
    /// Make the given page the site homepage. The repository switch runs
    /// "unset all, then set one" in one transaction, so concurrent calls
    /// serialize and exactly one page ends up flagged.
    pub async fn set_homepage(&self, command: SetHomepageCommand) -> ApplicationResult<PageDto> {
        let id = PageId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        self.write_repo.set_homepage(id).await?;

        let page = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;
        Ok(page.into())
    }
}
