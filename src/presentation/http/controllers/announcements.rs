// src/presentation/http/controllers/announcements.rs
use crate::application::{
    commands::announcements::{
        CreateAnnouncementCommand, DeleteAnnouncementCommand, UpdateAnnouncementCommand,
    },
    dto::{AnnouncementDto, OffsetPage},
    queries::announcements::{
        GetAnnouncementByIdQuery, GetPublishedAnnouncementQuery, ListAnnouncementsQuery,
        ListPublishedAnnouncementsQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct AnnouncementListParams {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PublishedListParams {
    #[serde(default = "default_published_limit")]
    pub limit: u32,
}

fn default_published_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    pub body: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub publish_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Option<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct UpdateAnnouncementRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub is_active: Option<bool>,
    pub is_pinned: Option<bool>,
    /// Present-but-null clears the publish date.
    #[serde(default, with = "double_option")]
    pub publish_date: Option<Option<DateTime<Utc>>>,
    pub tags: Option<String>,
}

/// Distinguish an absent field from an explicit null.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

pub async fn list_published(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PublishedListParams>,
) -> HttpResult<Json<Vec<AnnouncementDto>>> {
    state
        .services
        .announcement_queries
        .list_published(ListPublishedAnnouncementsQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_published(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<AnnouncementDto>> {
    state
        .services
        .announcement_queries
        .get_published_by_slug(GetPublishedAnnouncementQuery { slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_announcements(
    Extension(state): Extension<HttpState>,
    Query(params): Query<AnnouncementListParams>,
) -> HttpResult<Json<OffsetPage<AnnouncementDto>>> {
    state
        .services
        .announcement_queries
        .list_announcements(ListAnnouncementsQuery {
            page: params.page,
            per_page: params.per_page,
            search: params.q,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_announcement(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<AnnouncementDto>> {
    state
        .services
        .announcement_queries
        .get_announcement_by_id(GetAnnouncementByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_announcement(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateAnnouncementRequest>,
) -> HttpResult<Json<AnnouncementDto>> {
    let command = CreateAnnouncementCommand {
        title: payload.title,
        slug: payload.slug,
        summary: payload.summary,
        body: payload.body,
        is_active: payload.is_active,
        is_pinned: payload.is_pinned,
        publish_date: payload.publish_date,
        tags: payload.tags,
    };

    state
        .services
        .announcement_commands
        .create_announcement(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_announcement(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAnnouncementRequest>,
) -> HttpResult<Json<AnnouncementDto>> {
    let command = UpdateAnnouncementCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        summary: payload.summary,
        body: payload.body,
        is_active: payload.is_active,
        is_pinned: payload.is_pinned,
        publish_date: payload.publish_date,
        tags: payload.tags,
    };

    state
        .services
        .announcement_commands
        .update_announcement(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_announcement(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .announcement_commands
        .delete_announcement(DeleteAnnouncementCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
