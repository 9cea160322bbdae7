// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{announcements, content, menus, pages, sliders};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method},
    routing::{get, post, put},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Browser clients come from the configured origins; `*` opens the API up
/// entirely. Entries that do not parse as header values are skipped.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "ignoring unparsable allowed origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = cors_layer(allowed_origins);

    Router::new()
        .route("/health", get(health))
        .route("/", get(content::home))
        .route(
            "/announcements",
            get(announcements::list_published),
        )
        .route(
            "/announcements/{slug}",
            get(announcements::get_published),
        )
        .route("/api/navigation", get(menus::navigation))
        .route(
            "/admin/api/pages",
            get(pages::list_pages).post(pages::create_page),
        )
        .route(
            "/admin/api/pages/{id}",
            get(pages::get_page)
                .put(pages::update_page)
                .delete(pages::delete_page),
        )
        .route("/admin/api/pages/{id}/homepage", post(pages::set_homepage))
        .route(
            "/admin/api/announcements",
            get(announcements::list_announcements).post(announcements::create_announcement),
        )
        .route(
            "/admin/api/announcements/{id}",
            get(announcements::get_announcement)
                .put(announcements::update_announcement)
                .delete(announcements::delete_announcement),
        )
        .route(
            "/admin/api/menus",
            get(menus::list_menus).post(menus::create_menu),
        )
        .route(
            "/admin/api/menus/{id}",
            put(menus::update_menu).delete(menus::delete_menu),
        )
        .route(
            "/admin/api/sliders",
            get(sliders::list_sliders).post(sliders::create_slider),
        )
        .route(
            "/admin/api/sliders/{id}",
            get(sliders::get_slider)
                .put(sliders::update_slider)
                .delete(sliders::delete_slider),
        )
        .route("/{slug}", get(content::page_by_slug))
        .fallback(content::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
