// src/infrastructure/repositories/postgres_slider.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slider::{NewSlider, Slider, SliderId, SliderRepository, SliderUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const SLIDER_COLUMNS: &str = "id, title, description, image_path, link, position, is_active, \
     open_in_new_tab, button_text, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresSliderRepository {
    pool: PgPool,
}

impl PostgresSliderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SliderRow {
    id: i64,
    title: String,
    description: Option<String>,
    image_path: String,
    link: Option<String>,
    position: i32,
    is_active: bool,
    open_in_new_tab: bool,
    button_text: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SliderRow> for Slider {
    type Error = DomainError;

    fn try_from(row: SliderRow) -> Result<Self, Self::Error> {
        Ok(Slider {
            id: SliderId::new(row.id)?,
            title: row.title,
            description: row.description,
            image_path: row.image_path,
            link: row.link,
            position: row.position,
            is_active: row.is_active,
            open_in_new_tab: row.open_in_new_tab,
            button_text: row.button_text,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl SliderRepository for PostgresSliderRepository {
    async fn insert(&self, slider: NewSlider) -> DomainResult<Slider> {
        let row = sqlx::query_as::<_, SliderRow>(
            "INSERT INTO sliders (title, description, image_path, link, position, is_active, open_in_new_tab, button_text, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id, title, description, image_path, link, position, is_active, open_in_new_tab, button_text, created_at, updated_at",
        )
        .bind(&slider.title)
        .bind(&slider.description)
        .bind(&slider.image_path)
        .bind(&slider.link)
        .bind(slider.position)
        .bind(slider.is_active)
        .bind(slider.open_in_new_tab)
        .bind(&slider.button_text)
        .bind(slider.created_at)
        .bind(slider.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Slider::try_from(row)
    }

    async fn update(&self, update: SliderUpdate) -> DomainResult<Slider> {
        let row = sqlx::query_as::<_, SliderRow>(
            "UPDATE sliders SET title = $2, description = $3, image_path = $4, link = $5,
                 position = $6, is_active = $7, open_in_new_tab = $8, button_text = $9,
                 updated_at = $10
             WHERE id = $1
             RETURNING id, title, description, image_path, link, position, is_active, open_in_new_tab, button_text, created_at, updated_at",
        )
        .bind(i64::from(update.id))
        .bind(&update.title)
        .bind(&update.description)
        .bind(&update.image_path)
        .bind(&update.link)
        .bind(update.position)
        .bind(update.is_active)
        .bind(update.open_in_new_tab)
        .bind(&update.button_text)
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("slider not found".into()))?;

        Slider::try_from(row)
    }

    async fn delete(&self, id: SliderId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM sliders WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("slider not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: SliderId) -> DomainResult<Option<Slider>> {
        let row = sqlx::query_as::<_, SliderRow>(&format!(
            "SELECT {SLIDER_COLUMNS} FROM sliders WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Slider::try_from).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Slider>> {
        let rows = sqlx::query_as::<_, SliderRow>(&format!(
            "SELECT {SLIDER_COLUMNS} FROM sliders ORDER BY position, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Slider::try_from).collect()
    }

    async fn list_active(&self) -> DomainResult<Vec<Slider>> {
        let rows = sqlx::query_as::<_, SliderRow>(&format!(
            "SELECT {SLIDER_COLUMNS} FROM sliders WHERE is_active ORDER BY position, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Slider::try_from).collect()
    }
}
