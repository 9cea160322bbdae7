// src/application/commands/menus.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::MenuDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::menu::{MenuId, MenuRepository, MenuUpdate, NewMenu},
};

pub struct CreateMenuCommand {
    pub title: String,
    pub url: String,
    pub parent_id: Option<i64>,
    pub position: i32,
    pub is_active: bool,
    pub is_external: bool,
    pub css_class: Option<String>,
    pub icon: Option<String>,
}

pub struct UpdateMenuCommand {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub parent_id: Option<i64>,
    pub position: i32,
    pub is_active: bool,
    pub is_external: bool,
    pub css_class: Option<String>,
    pub icon: Option<String>,
}

pub struct DeleteMenuCommand {
    pub id: i64,
}

pub struct MenuCommandService {
    repo: Arc<dyn MenuRepository>,
    clock: Arc<dyn Clock>,
}

impl MenuCommandService {
    pub fn new(repo: Arc<dyn MenuRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    async fn resolve_parent(&self, parent_id: Option<i64>) -> ApplicationResult<Option<MenuId>> {
        let Some(raw) = parent_id else {
            return Ok(None);
        };
        let parent = MenuId::new(raw)?;
        self.repo
            .find_by_id(parent)
            .await?
            .ok_or_else(|| ApplicationError::not_found("parent menu not found"))?;
        Ok(Some(parent))
    }

    pub async fn create_menu(&self, command: CreateMenuCommand) -> ApplicationResult<MenuDto> {
        let parent_id = self.resolve_parent(command.parent_id).await?;
        let menu = NewMenu {
            title: command.title,
            url: command.url,
            parent_id,
            position: command.position,
            is_active: command.is_active,
            is_external: command.is_external,
            css_class: command.css_class,
            icon: command.icon,
            created_at: self.clock.now(),
        };
        menu.validate()?;
        Ok(self.repo.insert(menu).await?.into())
    }

    /// Walks the ancestor chain of the requested parent. Re-parenting an
    /// entry under itself or one of its descendants would detach the whole
    /// subtree from the navigation roots.
    async fn ensure_no_cycle(
        &self,
        id: MenuId,
        parent_id: Option<MenuId>,
    ) -> ApplicationResult<()> {
        const MAX_DEPTH: usize = 64;

        let mut current = parent_id;
        for _ in 0..MAX_DEPTH {
            let Some(ancestor) = current else {
                return Ok(());
            };
            if ancestor == id {
                return Err(ApplicationError::validation(
                    "menu cannot be nested under itself or one of its children",
                ));
            }
            current = self
                .repo
                .find_by_id(ancestor)
                .await?
                .and_then(|menu| menu.parent_id);
        }
        Err(ApplicationError::validation("menu nesting is too deep"))
    }

    pub async fn update_menu(&self, command: UpdateMenuCommand) -> ApplicationResult<MenuDto> {
        let id = MenuId::new(command.id)?;
        let parent_id = self.resolve_parent(command.parent_id).await?;
        self.ensure_no_cycle(id, parent_id).await?;
        let update = MenuUpdate {
            id,
            title: command.title,
            url: command.url,
            parent_id,
            position: command.position,
            is_active: command.is_active,
            is_external: command.is_external,
            css_class: command.css_class,
            icon: command.icon,
        };
        update.validate()?;
        Ok(self.repo.update(update).await?.into())
    }

    pub async fn delete_menu(&self, command: DeleteMenuCommand) -> ApplicationResult<()> {
        let id = MenuId::new(command.id)?;
        if self.repo.has_children(id).await? {
            return Err(ApplicationError::conflict(
                "menu has child entries and cannot be deleted",
            ));
        }
        self.repo.delete(id).await?;
        Ok(())
    }
}
