// src/infrastructure/repositories/postgres_menu.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::menu::{Menu, MenuId, MenuRepository, MenuUpdate, NewMenu};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const MENU_COLUMNS: &str = "id, title, url, parent_id, position, is_active, is_external, \
     css_class, icon, created_at";

#[derive(Clone)]
pub struct PostgresMenuRepository {
    pool: PgPool,
}

impl PostgresMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MenuRow {
    id: i64,
    title: String,
    url: String,
    parent_id: Option<i64>,
    position: i32,
    is_active: bool,
    is_external: bool,
    css_class: Option<String>,
    icon: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<MenuRow> for Menu {
    type Error = DomainError;

    fn try_from(row: MenuRow) -> Result<Self, Self::Error> {
        Ok(Menu {
            id: MenuId::new(row.id)?,
            title: row.title,
            url: row.url,
            parent_id: row.parent_id.map(MenuId::new).transpose()?,
            position: row.position,
            is_active: row.is_active,
            is_external: row.is_external,
            css_class: row.css_class,
            icon: row.icon,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl MenuRepository for PostgresMenuRepository {
    async fn insert(&self, menu: NewMenu) -> DomainResult<Menu> {
        let row = sqlx::query_as::<_, MenuRow>(
            "INSERT INTO menus (title, url, parent_id, position, is_active, is_external, css_class, icon, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, title, url, parent_id, position, is_active, is_external, css_class, icon, created_at",
        )
        .bind(&menu.title)
        .bind(&menu.url)
        .bind(menu.parent_id.map(i64::from))
        .bind(menu.position)
        .bind(menu.is_active)
        .bind(menu.is_external)
        .bind(&menu.css_class)
        .bind(&menu.icon)
        .bind(menu.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Menu::try_from(row)
    }

    async fn update(&self, update: MenuUpdate) -> DomainResult<Menu> {
        let row = sqlx::query_as::<_, MenuRow>(
            "UPDATE menus SET title = $2, url = $3, parent_id = $4, position = $5,
                 is_active = $6, is_external = $7, css_class = $8, icon = $9
             WHERE id = $1
             RETURNING id, title, url, parent_id, position, is_active, is_external, css_class, icon, created_at",
        )
        .bind(i64::from(update.id))
        .bind(&update.title)
        .bind(&update.url)
        .bind(update.parent_id.map(i64::from))
        .bind(update.position)
        .bind(update.is_active)
        .bind(update.is_external)
        .bind(&update.css_class)
        .bind(&update.icon)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("menu not found".into()))?;

        Menu::try_from(row)
    }

    async fn delete(&self, id: MenuId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM menus WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("menu not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: MenuId) -> DomainResult<Option<Menu>> {
        let row = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM menus WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Menu::try_from).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Menu>> {
        let rows = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM menus ORDER BY position, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Menu::try_from).collect()
    }

    async fn list_active(&self) -> DomainResult<Vec<Menu>> {
        let rows = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM menus WHERE is_active ORDER BY position, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Menu::try_from).collect()
    }

    async fn has_children(&self, id: MenuId) -> DomainResult<bool> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM menus WHERE parent_id = $1")
                .bind(i64::from(id))
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(count > 0)
    }
}
