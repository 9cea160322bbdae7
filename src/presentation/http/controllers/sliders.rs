// src/presentation/http/controllers/sliders.rs
use crate::application::{
    commands::sliders::{CreateSliderCommand, DeleteSliderCommand, UpdateSliderCommand},
    dto::SliderDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct SliderRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_path: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub open_in_new_tab: bool,
    #[serde(default)]
    pub button_text: Option<String>,
}

fn default_active() -> bool {
    true
}

pub async fn list_sliders(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<SliderDto>>> {
    state
        .services
        .slider_queries
        .list_sliders()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_slider(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<SliderDto>> {
    state
        .services
        .slider_queries
        .get_slider_by_id(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_slider(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SliderRequest>,
) -> HttpResult<Json<SliderDto>> {
    let command = CreateSliderCommand {
        title: payload.title,
        description: payload.description,
        image_path: payload.image_path,
        link: payload.link,
        position: payload.position,
        is_active: payload.is_active,
        open_in_new_tab: payload.open_in_new_tab,
        button_text: payload.button_text,
    };

    state
        .services
        .slider_commands
        .create_slider(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_slider(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<SliderRequest>,
) -> HttpResult<Json<SliderDto>> {
    let command = UpdateSliderCommand {
        id,
        title: payload.title,
        description: payload.description,
        image_path: payload.image_path,
        link: payload.link,
        position: payload.position,
        is_active: payload.is_active,
        open_in_new_tab: payload.open_in_new_tab,
        button_text: payload.button_text,
    };

    state
        .services
        .slider_commands
        .update_slider(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_slider(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .slider_commands
        .delete_slider(DeleteSliderCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
