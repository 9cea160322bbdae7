use crate::domain::menu::Menu;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDto {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub parent_id: Option<i64>,
    pub position: i32,
    pub is_active: bool,
    pub is_external: bool,
    pub css_class: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Menu> for MenuDto {
    fn from(menu: Menu) -> Self {
        Self {
            id: menu.id.into(),
            title: menu.title,
            url: menu.url,
            parent_id: menu.parent_id.map(Into::into),
            position: menu.position,
            is_active: menu.is_active,
            is_external: menu.is_external,
            css_class: menu.css_class,
            icon: menu.icon,
            created_at: menu.created_at,
        }
    }
}

/// Navigation tree node: a menu entry with its children nested, ordered by
/// position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuNodeDto {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub is_external: bool,
    pub css_class: Option<String>,
    pub icon: Option<String>,
    pub children: Vec<MenuNodeDto>,
}

impl MenuNodeDto {
    pub fn leaf(menu: &Menu) -> Self {
        Self {
            id: menu.id.into(),
            title: menu.title.clone(),
            url: menu.url.clone(),
            is_external: menu.is_external,
            css_class: menu.css_class.clone(),
            icon: menu.icon.clone(),
            children: Vec::new(),
        }
    }
}
