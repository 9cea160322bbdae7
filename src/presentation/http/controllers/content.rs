// src/presentation/http/controllers/content.rs
use crate::application::queries::{
    home::HomeDto,
    pages::{PathResolution, ResolvePathQuery},
};
use crate::application::dto::PageDto;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

pub async fn home(Extension(state): Extension<HttpState>) -> HttpResult<Json<HomeDto>> {
    state
        .services
        .home_queries
        .home()
        .await
        .into_http()
        .map(Json)
}

/// `GET /{slug}` — slug resolution with reserved prefixes excluded. Both
/// reserved and unmatched paths come back as a bare 404.
pub async fn page_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PageDto>> {
    let resolution = state
        .services
        .page_queries
        .resolve_path(ResolvePathQuery { path: slug })
        .await
        .into_http()?;

    match resolution {
        PathResolution::Page(page) => Ok(Json(page)),
        PathResolution::Reserved | PathResolution::NotFound => Err(HttpError::not_found()),
    }
}

/// Catch-all for paths no route claims.
pub async fn not_found() -> HttpError {
    HttpError::not_found()
}
