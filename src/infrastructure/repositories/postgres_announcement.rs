// src/infrastructure/repositories/postgres_announcement.rs
use super::map_sqlx;
use crate::domain::announcement::{
    Announcement, AnnouncementBody, AnnouncementId, AnnouncementReadRepository,
    AnnouncementTitle, AnnouncementUpdate, AnnouncementWriteRepository, NewAnnouncement,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ANNOUNCEMENT_COLUMNS: &str = "id, title, slug, summary, body, is_active, is_pinned, \
     publish_date, tags, view_count, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresAnnouncementWriteRepository {
    pool: PgPool,
}

impl PostgresAnnouncementWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresAnnouncementReadRepository {
    pool: PgPool,
}

impl PostgresAnnouncementReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AnnouncementRow {
    id: i64,
    title: String,
    slug: String,
    summary: Option<String>,
    body: String,
    is_active: bool,
    is_pinned: bool,
    publish_date: Option<DateTime<Utc>>,
    tags: Option<String>,
    view_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AnnouncementRow> for Announcement {
    type Error = DomainError;

    fn try_from(row: AnnouncementRow) -> Result<Self, Self::Error> {
        Ok(Announcement {
            id: AnnouncementId::new(row.id)?,
            title: AnnouncementTitle::new(row.title)?,
            slug: Slug::parse(row.slug)?,
            summary: row.summary,
            body: AnnouncementBody::new(row.body)?,
            is_active: row.is_active,
            is_pinned: row.is_pinned,
            publish_date: row.publish_date,
            tags: row.tags,
            view_count: row.view_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl AnnouncementWriteRepository for PostgresAnnouncementWriteRepository {
    async fn insert(&self, announcement: NewAnnouncement) -> DomainResult<Announcement> {
        let NewAnnouncement {
            title,
            slug,
            summary,
            body,
            is_active,
            is_pinned,
            publish_date,
            tags,
            created_at,
            updated_at,
        } = announcement;

        let row = sqlx::query_as::<_, AnnouncementRow>(
            "INSERT INTO announcements (title, slug, summary, body, is_active, is_pinned, publish_date, tags, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id, title, slug, summary, body, is_active, is_pinned, publish_date, tags, view_count, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(summary)
        .bind(body.as_str())
        .bind(is_active)
        .bind(is_pinned)
        .bind(publish_date)
        .bind(tags)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Announcement::try_from(row)
    }

    async fn update(&self, update: AnnouncementUpdate) -> DomainResult<Announcement> {
        let AnnouncementUpdate {
            id,
            title,
            slug,
            summary,
            body,
            is_active,
            is_pinned,
            publish_date,
            tags,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE announcements SET updated_at = ");
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

        if let Some(summary) = summary {
            builder.push(", summary = ");
            builder.push_bind(summary);
        }

        if let Some(body) = body {
            let body_str: String = body.into();
            builder.push(", body = ");
            builder.push_bind(body_str);
        }

        if let Some(is_active) = is_active {
            builder.push(", is_active = ");
            builder.push_bind(is_active);
        }

        if let Some(is_pinned) = is_pinned {
            builder.push(", is_pinned = ");
            builder.push_bind(is_pinned);
        }

        if let Some(publish_date) = publish_date {
            builder.push(", publish_date = ");
            builder.push_bind(publish_date);
        }

        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tags);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(
            " RETURNING id, title, slug, summary, body, is_active, is_pinned, publish_date, tags, view_count, created_at, updated_at",
        );

        let maybe_row = builder
            .build_query_as::<AnnouncementRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| {
            DomainError::Conflict("announcement update conflict, please retry".into())
        })?;

        Announcement::try_from(row)
    }

    async fn delete(&self, id: AnnouncementId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("announcement not found".into()));
        }
        Ok(())
    }

    async fn increment_view_count(&self, id: AnnouncementId) -> DomainResult<()> {
        sqlx::query("UPDATE announcements SET view_count = view_count + 1 WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

#[async_trait]
impl SlugIndex for PostgresAnnouncementReadRepository {
    async fn find_owner(&self, slug: &Slug) -> DomainResult<Option<i64>> {
        let id: Option<(i64,)> = sqlx::query_as("SELECT id FROM announcements WHERE slug = $1")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(id.map(|(id,)| id))
    }
}

#[async_trait]
impl AnnouncementReadRepository for PostgresAnnouncementReadRepository {
    async fn find_by_id(&self, id: AnnouncementId) -> DomainResult<Option<Announcement>> {
        let row = sqlx::query_as::<_, AnnouncementRow>(&format!(
            "SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Announcement::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Announcement>> {
        let row = sqlx::query_as::<_, AnnouncementRow>(&format!(
            "SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Announcement::try_from).transpose()
    }

    async fn list_page(
        &self,
        offset: u64,
        limit: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Announcement>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM announcements");
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements"));

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

        builder.push(" ORDER BY is_pinned DESC, created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<AnnouncementRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let announcements = rows
            .into_iter()
            .map(Announcement::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((announcements, total.max(0) as u64))
    }

    async fn list_active(&self, limit: u32) -> DomainResult<Vec<Announcement>> {
        let rows = sqlx::query_as::<_, AnnouncementRow>(&format!(
            "SELECT {ANNOUNCEMENT_COLUMNS} FROM announcements
             WHERE is_active
             ORDER BY is_pinned DESC, created_at DESC, id DESC LIMIT $1"
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Announcement::try_from).collect()
    }
}
