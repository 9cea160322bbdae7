// src/domain/menu.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub const MENU_TITLE_MAX_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuId(pub i64);

impl MenuId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("menu id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<MenuId> for i64 {
    fn from(value: MenuId) -> Self {
        value.0
    }
}

/// Navigation entry. `parent_id` makes a two-level-or-deeper tree; `position`
/// orders siblings.
#[derive(Debug, Clone)]
pub struct Menu {
    pub id: MenuId,
    pub title: String,
    pub url: String,
    pub parent_id: Option<MenuId>,
    pub position: i32,
    pub is_active: bool,
    pub is_external: bool,
    pub css_class: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMenu {
    pub title: String,
    pub url: String,
    pub parent_id: Option<MenuId>,
    pub position: i32,
    pub is_active: bool,
    pub is_external: bool,
    pub css_class: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewMenu {
    pub fn validate(&self) -> DomainResult<()> {
        validate_menu_fields(&self.title, &self.url)
    }
}

#[derive(Debug, Clone)]
pub struct MenuUpdate {
    pub id: MenuId,
    pub title: String,
    pub url: String,
    pub parent_id: Option<MenuId>,
    pub position: i32,
    pub is_active: bool,
    pub is_external: bool,
    pub css_class: Option<String>,
    pub icon: Option<String>,
}

impl MenuUpdate {
    pub fn validate(&self) -> DomainResult<()> {
        if self.parent_id == Some(self.id) {
            return Err(DomainError::Validation(
                "menu cannot be its own parent".into(),
            ));
        }
        validate_menu_fields(&self.title, &self.url)
    }
}

fn validate_menu_fields(title: &str, url: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("menu title cannot be empty".into()));
    }
    if title.chars().count() > MENU_TITLE_MAX_LEN {
        return Err(DomainError::Validation(format!(
            "menu title cannot exceed {MENU_TITLE_MAX_LEN} characters"
        )));
    }
    if url.trim().is_empty() {
        return Err(DomainError::Validation("menu url cannot be empty".into()));
    }
    Ok(())
}

#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn insert(&self, menu: NewMenu) -> DomainResult<Menu>;
    async fn update(&self, update: MenuUpdate) -> DomainResult<Menu>;
    async fn delete(&self, id: MenuId) -> DomainResult<()>;
    async fn find_by_id(&self, id: MenuId) -> DomainResult<Option<Menu>>;
    async fn list_all(&self) -> DomainResult<Vec<Menu>>;
    async fn list_active(&self) -> DomainResult<Vec<Menu>>;
    async fn has_children(&self, id: MenuId) -> DomainResult<bool>;
}
