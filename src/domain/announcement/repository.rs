use crate::domain::announcement::entity::{Announcement, AnnouncementUpdate, NewAnnouncement};
use crate::domain::announcement::value_objects::AnnouncementId;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;

#[async_trait]
pub trait AnnouncementWriteRepository: Send + Sync {
    async fn insert(&self, announcement: NewAnnouncement) -> DomainResult<Announcement>;
    async fn update(&self, update: AnnouncementUpdate) -> DomainResult<Announcement>;
    async fn delete(&self, id: AnnouncementId) -> DomainResult<()>;

    /// Best-effort view counter, same contract as for pages.
    async fn increment_view_count(&self, id: AnnouncementId) -> DomainResult<()>;
}

#[async_trait]
pub trait AnnouncementReadRepository: SlugIndex {
    async fn find_by_id(&self, id: AnnouncementId) -> DomainResult<Option<Announcement>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Announcement>>;
    /// Admin listing: every record, pinned first, then newest.
    async fn list_page(
        &self,
        offset: u64,
        limit: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Announcement>, u64)>;
    /// Public listing: active records only, same ordering.
    async fn list_active(&self, limit: u32) -> DomainResult<Vec<Announcement>>;
}
