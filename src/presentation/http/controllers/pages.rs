// src/presentation/http/controllers/pages.rs
use crate::application::{
    commands::pages::{
        CreatePageCommand, DeletePageCommand, SetHomepageCommand, UpdatePageCommand,
    },
    dto::{OffsetPage, PageDto},
    queries::pages::{GetPageByIdQuery, ListPagesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct PageListParams {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePageRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub body: String,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_homepage: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct UpdatePageRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub is_active: Option<bool>,
    pub is_homepage: Option<bool>,
}

pub async fn list_pages(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageListParams>,
) -> HttpResult<Json<OffsetPage<PageDto>>> {
    state
        .services
        .page_queries
        .list_pages(ListPagesQuery {
            page: params.page,
            per_page: params.per_page,
            search: params.q,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_page(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .page_queries
        .get_page_by_id(GetPageByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_page(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreatePageRequest>,
) -> HttpResult<Json<PageDto>> {
    let command = CreatePageCommand {
        title: payload.title,
        slug: payload.slug,
        body: payload.body,
        meta_description: payload.meta_description,
        meta_keywords: payload.meta_keywords,
        is_active: payload.is_active,
        is_homepage: payload.is_homepage,
    };

    state
        .services
        .page_commands
        .create_page(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_page(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePageRequest>,
) -> HttpResult<Json<PageDto>> {
    let command = UpdatePageCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        body: payload.body,
        meta_description: payload.meta_description,
        meta_keywords: payload.meta_keywords,
        is_active: payload.is_active,
        is_homepage: payload.is_homepage,
    };

    state
        .services
        .page_commands
        .update_page(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_page(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .page_commands
        .delete_page(DeletePageCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn set_homepage(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .page_commands
        .set_homepage(SetHomepageCommand { id })
        .await
        .into_http()
        .map(Json)
}
