// src/application/queries/announcements/list.rs
use super::service::AnnouncementQueryService;
use crate::application::{
    dto::{AnnouncementDto, OffsetPage, pagination},
    error::ApplicationResult,
};

pub struct ListAnnouncementsQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
}

pub struct ListPublishedAnnouncementsQuery {
    pub limit: u32,
}

impl AnnouncementQueryService {
    /// Admin listing: drafts included, pinned first, then newest.
    pub async fn list_announcements(
        &self,
        query: ListAnnouncementsQuery,
    ) -> ApplicationResult<OffsetPage<AnnouncementDto>> {
        let (page, per_page, offset) = pagination::normalize(query.page, query.per_page);
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let (records, total) = self.read_repo.list_page(offset, per_page, search).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(OffsetPage::new(items, total, page, per_page))
    }

    /// Public listing: active records only.
    pub async fn list_published(
        &self,
        query: ListPublishedAnnouncementsQuery,
    ) -> ApplicationResult<Vec<AnnouncementDto>> {
        let limit = query.limit.clamp(1, pagination::MAX_PER_PAGE);
        let records = self.read_repo.list_active(limit).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
