// src/presentation/http/controllers/menus.rs
use crate::application::{
    commands::menus::{CreateMenuCommand, DeleteMenuCommand, UpdateMenuCommand},
    dto::{MenuDto, MenuNodeDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct MenuRequest {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub position: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_external: bool,
    #[serde(default)]
    pub css_class: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Public navigation tree: active entries, children nested.
pub async fn navigation(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<MenuNodeDto>>> {
    state
        .services
        .menu_queries
        .navigation()
        .await
        .into_http()
        .map(Json)
}

pub async fn list_menus(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<MenuDto>>> {
    state
        .services
        .menu_queries
        .list_menus()
        .await
        .into_http()
        .map(Json)
}

pub async fn create_menu(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<MenuRequest>,
) -> HttpResult<Json<MenuDto>> {
    let command = CreateMenuCommand {
        title: payload.title,
        url: payload.url,
        parent_id: payload.parent_id,
        position: payload.position,
        is_active: payload.is_active,
        is_external: payload.is_external,
        css_class: payload.css_class,
        icon: payload.icon,
    };

    state
        .services
        .menu_commands
        .create_menu(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_menu(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuRequest>,
) -> HttpResult<Json<MenuDto>> {
    let command = UpdateMenuCommand {
        id,
        title: payload.title,
        url: payload.url,
        parent_id: payload.parent_id,
        position: payload.position,
        is_active: payload.is_active,
        is_external: payload.is_external,
        css_class: payload.css_class,
        icon: payload.icon,
    };

    state
        .services
        .menu_commands
        .update_menu(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_menu(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .menu_commands
        .delete_menu(DeleteMenuCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
