use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{NewPage, Page, PageUpdate};
use crate::domain::page::value_objects::PageId;
use crate::domain::slug::{Slug, SlugIndex};
use async_trait::async_trait;

#[async_trait]
pub trait PageWriteRepository: Send + Sync {
    async fn insert(&self, page: NewPage) -> DomainResult<Page>;
    async fn update(&self, update: PageUpdate) -> DomainResult<Page>;
    async fn delete(&self, id: PageId) -> DomainResult<()>;

    /// Switch the homepage flag to the given page: unset every flag and set
    /// the one, in a single transaction (single-writer invariant).
    async fn set_homepage(&self, id: PageId) -> DomainResult<()>;

    /// Best-effort view counter. Non-transactional; lost increments under
    /// concurrent load are accepted.
    async fn increment_view_count(&self, id: PageId) -> DomainResult<()>;
}

#[async_trait]
pub trait PageReadRepository: SlugIndex {
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>>;
    async fn find_homepage(&self) -> DomainResult<Option<Page>>;
    async fn list_page(
        &self,
        offset: u64,
        limit: u32,
        search: Option<&str>,
    ) -> DomainResult<(Vec<Page>, u64)>;
    async fn list_recent_active(&self, limit: u32) -> DomainResult<Vec<Page>>;
}
