// src/application/queries/pages/resolve.rs
use super::service::PageQueryService;
use crate::{
    application::{dto::PageDto, error::ApplicationResult},
    domain::slug::Slug,
};

/// First path segments that belong to the system and are never handed to
/// slug resolution, even when a page record holds the literal value.
pub const RESERVED_PREFIXES: &[&str] = &[
    "admin", "account", "auth", "error", "api", "health", "static", "uploads",
];

pub struct ResolvePathQuery {
    /// Request path with the application base removed.
    pub path: String,
}

#[derive(Debug)]
pub enum PathResolution {
    /// The path sits under a reserved system prefix.
    Reserved,
    Page(PageDto),
    NotFound,
}

impl PageQueryService {
    /// Resolve an incoming path with fixed precedence: reserved system
    /// prefixes first, then an exact slug match against active pages,
    /// otherwise not found. A hit bumps the page's view counter.
    pub async fn resolve_path(&self, query: ResolvePathQuery) -> ApplicationResult<PathResolution> {
        let path = query.path.trim_matches('/');
        let first_segment = path.split('/').next().unwrap_or("");
        if RESERVED_PREFIXES
            .iter()
            .any(|prefix| first_segment.eq_ignore_ascii_case(prefix))
        {
            return Ok(PathResolution::Reserved);
        }

        // Multi-segment or non-canonical paths cannot be slugs.
        let Ok(slug) = Slug::parse(path) else {
            return Ok(PathResolution::NotFound);
        };

        match self.read_repo.find_by_slug(&slug).await? {
            Some(page) if page.is_active => {
                self.bump_view_count(page.id);
                Ok(PathResolution::Page(page.into()))
            }
            _ => Ok(PathResolution::NotFound),
        }
    }
}
