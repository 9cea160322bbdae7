// src/application/commands/pages/update.rs
use super::service::PageCommandService;
use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::page::{
        PageBody, PageId, PageTitle, PageUpdate,
        value_objects::{
            META_DESCRIPTION_MAX_LEN, META_KEYWORDS_MAX_LEN, validate_optional_len,
        },
    },
};

pub struct UpdatePageCommand {
    pub id: i64,
    pub title: Option<String>,
    /// `None` keeps the stored slug. An empty string means the editor
    /// cleared the field: recompute from the (possibly new) title. Anything
    /// else is used as given.
    pub slug: Option<String>,
    pub body: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub is_active: Option<bool>,
    pub is_homepage: Option<bool>,
}

impl PageCommandService {
    pub async fn update_page(&self, command: UpdatePageCommand) -> ApplicationResult<PageDto> {
        let id = PageId::new(command.id)?;
        let page = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        let mut update = PageUpdate::new(id, page.updated_at);

        let title = command.title.map(PageTitle::new).transpose()?;
        let effective_title = title.clone().unwrap_or_else(|| page.title.clone());

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
            if slug != page.slug {
                update = update.with_slug(slug);
            }
        }

        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(body) = command.body {
            update = update.with_body(PageBody::new(body)?);
        }
        if let Some(meta_description) = command.meta_description {
            let meta_description = validate_optional_len(
                "meta description",
                Some(meta_description),
                META_DESCRIPTION_MAX_LEN,
            )?;
            update = update.with_meta_description(meta_description);
        }
        if let Some(meta_keywords) = command.meta_keywords {
            let meta_keywords =
                validate_optional_len("meta keywords", Some(meta_keywords), META_KEYWORDS_MAX_LEN)?;
            update = update.with_meta_keywords(meta_keywords);
        }
        if let Some(is_active) = command.is_active {
            update = update.with_active(is_active);
        }
        if command.is_homepage == Some(false) && page.is_homepage {
            update = update.with_cleared_homepage();
        }

        let mut updated = if update.is_noop() {
            page
        } else {
            update.set_updated_at(self.clock.now());
            self.write_repo.update(update).await?
        };

        if command.is_homepage == Some(true) && !updated.is_homepage {
            self.write_repo.set_homepage(id).await?;
            updated.is_homepage = true;
        }

        Ok(updated.into())
    }
}
