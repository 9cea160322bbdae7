// src/application/commands/pages/create.rs
use super::service::PageCommandService;
use crate::{
    application::{dto::PageDto, error::ApplicationResult},
    domain::page::{
        NewPage, PageBody, PageTitle,
        value_objects::{
            META_DESCRIPTION_MAX_LEN, META_KEYWORDS_MAX_LEN, validate_optional_len,
        },
    },
};

pub struct CreatePageCommand {
    pub title: String,
    /// Blank or absent: derive from the title.
    pub slug: Option<String>,
    pub body: String,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub is_active: bool,
    pub is_homepage: bool,
}

impl PageCommandService {
    pub async fn create_page(&self, command: CreatePageCommand) -> ApplicationResult<PageDto> {
        let title = PageTitle::new(command.title)?;
        let body = PageBody::new(command.body)?;
        let meta_description = validate_optional_len(
            "meta description",
            command.meta_description,
            META_DESCRIPTION_MAX_LEN,
        )?;
        let meta_keywords =
            validate_optional_len("meta keywords", command.meta_keywords, META_KEYWORDS_MAX_LEN)?;

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
        let mut created = self
            .write_repo
            .insert(NewPage {
                title,
                slug,
                body,
                meta_description,
                meta_keywords,
                is_active: command.is_active,
                created_at: now,
                updated_at: now,
            })
            .await?;

        // Inserts never carry the homepage flag; the transactional switch is
        // the only writer that sets it.
        if command.is_homepage {
            self.write_repo.set_homepage(created.id).await?;
            created.is_homepage = true;
        }

        Ok(created.into())
    }
}
