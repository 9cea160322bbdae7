// src/infrastructure/repositories/postgres_page.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{
    NewPage, Page, PageBody, PageId, PageReadRepository, PageTitle, PageUpdate,
    PageWriteRepository,
};
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const PAGE_COLUMNS: &str = "id, title, slug, body, meta_description, meta_keywords, \
     is_active, is_homepage, view_count, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPageWriteRepository {
    pool: PgPool,
}

impl PostgresPageWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPageReadRepository {
    pool: PgPool,
}

impl PostgresPageReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    meta_description: Option<String>,
    meta_keywords: Option<String>,
    is_active: bool,
    is_homepage: bool,
    view_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: PageId::new(row.id)?,
            title: PageTitle::new(row.title)?,
            slug: Slug::parse(row.slug)?,
            body: PageBody::new(row.body)?,
            meta_description: row.meta_description,
            meta_keywords: row.meta_keywords,
            is_active: row.is_active,
            is_homepage: row.is_homepage,
            view_count: row.view_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PageWriteRepository for PostgresPageWriteRepository {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let NewPage {
            title,
            slug,
            body,
            meta_description,
            meta_keywords,
            is_active,
            created_at,
            updated_at,
        } = page;

        let row = sqlx::query_as::<_, PageRow>(
            "INSERT INTO pages (title, slug, body, meta_description, meta_keywords, is_active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, title, slug, body, meta_description, meta_keywords, is_active, is_homepage, view_count, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(body.as_str())
        .bind(meta_description)
        .bind(meta_keywords)
        .bind(is_active)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Page::try_from(row)
    }

    async fn update(&self, update: PageUpdate) -> DomainResult<Page> {
        let PageUpdate {
            id,
            title,
            slug,
            body,
            meta_description,
            meta_keywords,
            is_active,
            clear_homepage,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE pages SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(slug) = slug {
            let slug_str: String = slug.into();
            builder.push(", slug = ");
            builder.push_bind(slug_str);
        }

        if let Some(body) = body {
            let body_str: String = body.into();
            builder.push(", body = ");
            builder.push_bind(body_str);
        }

        if let Some(meta_description) = meta_description {
            builder.push(", meta_description = ");
            builder.push_bind(meta_description);
        }

        if let Some(meta_keywords) = meta_keywords {
            builder.push(", meta_keywords = ");
            builder.push_bind(meta_keywords);
        }

        if let Some(is_active) = is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }

        if clear_homepage {
            builder.push(", is_homepage = FALSE");
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(
            " RETURNING id, title, slug, body, meta_description, meta_keywords, is_active, is_homepage, view_count, created_at, updated_at",
        );

        let maybe_row = builder
            .build_query_as::<PageRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("page update conflict, please retry".into()))?;

        Page::try_from(row)
    }

    async fn delete(&self, id: PageId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("page not found".into()));
        }
        Ok(())
    }

    async fn set_homepage(&self, id: PageId) -> DomainResult<()> {
        // Unset-all-then-set-one inside one transaction so concurrent
        // switches serialize instead of racing on pre-read state.
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("UPDATE pages SET is_homepage = FALSE WHERE is_homepage")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("UPDATE pages SET is_homepage = TRUE WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("page not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn increment_view_count(&self, id: PageId) -> DomainResult<()> {
        sqlx::query("UPDATE pages SET view_count = view_count + 1 WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl SlugIndex for PostgresPageReadRepository {
    async fn find_owner(&self, slug: &Slug) -> DomainResult<Option<i64>> {
        let id: Option<(i64,)> = sqlx::query_as("SELECT id FROM pages WHERE slug = $1")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(id.map(|(id,)| id))
    }
}

#[async_trait]
impl PageReadRepository for PostgresPageReadRepository {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn find_homepage(&self) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages WHERE is_homepage LIMIT 1"
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn list_page(
        &self,
        offset: u64,
        limit: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Page>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM pages");
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {PAGE_COLUMNS} FROM pages"));

        if let Some(term) = search {
            let pattern = format!("%{term}%");
            for b in [&mut count_builder, &mut builder] {
                b.push(" WHERE (title ILIKE ");
                b.push_bind(pattern.clone());
                b.push(" OR body ILIKE ");
                b.push_bind(pattern.clone());
                b.push(")");
            }
        }

        let (total,): (i64,) = count_builder
            .build_query_as()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<PageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let pages = rows
            .into_iter()
            .map(Page::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((pages, total.max(0) as u64))
    }

    async fn list_recent_active(&self, limit: u32) -> DomainResult<Vec<Page>> {
        let rows = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {PAGE_COLUMNS} FROM pages
             WHERE is_active AND NOT is_homepage
             ORDER BY created_at DESC, id DESC LIMIT $1"
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Page::try_from).collect()
    }
}
